use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Response;

use super::models::{CreateUserRequest, CreateUserResponse, GetUserResponse};
use crate::clients::http::client::{
    build_gateway_http_client, build_gateway_load_test_http_client, decode_response, HttpClient,
};
use crate::config::HttpClientConfig;
use crate::error::{ClientError, TransportError};
use crate::fakers::Faker;
use crate::gateway::UsersGateway;
use crate::load::LoadTestEnvironment;
use crate::models::User;

/// Client for `/api/v1/users` of the HTTP gateway
pub struct UsersGatewayHttpClient {
    client: HttpClient,
    faker: Arc<dyn Faker>,
}

impl UsersGatewayHttpClient {
    pub fn new(client: HttpClient, faker: Arc<dyn Faker>) -> Self {
        Self { client, faker }
    }

    /// GET /api/v1/users/{user_id}
    pub async fn get_user_api(&self, user_id: &str) -> Result<Response, TransportError> {
        self.client
            .get_resource("/api/v1/users", user_id, "/api/v1/users/{user_id}")
            .await
    }

    /// POST /api/v1/users
    pub async fn create_user_api(
        &self,
        request: &CreateUserRequest,
    ) -> Result<Response, TransportError> {
        self.client.post("/api/v1/users", Some(request)).await
    }
}

#[async_trait]
impl UsersGateway for UsersGatewayHttpClient {
    async fn create_user(&self) -> Result<User, ClientError> {
        let request = CreateUserRequest::fake(self.faker.as_ref());
        let response = self.create_user_api(&request).await?;
        let body: CreateUserResponse = decode_response(response).await?;
        Ok(body.user)
    }

    async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        let response = self.get_user_api(user_id).await?;
        let body: GetUserResponse = decode_response(response).await?;
        Ok(body.user)
    }
}

pub fn build_users_gateway_http_client(
    config: &HttpClientConfig,
    faker: Arc<dyn Faker>,
) -> Result<UsersGatewayHttpClient, TransportError> {
    Ok(UsersGatewayHttpClient::new(build_gateway_http_client(config)?, faker))
}

pub fn build_users_gateway_load_test_http_client(
    environment: &LoadTestEnvironment,
    faker: Arc<dyn Faker>,
) -> Result<UsersGatewayHttpClient, TransportError> {
    Ok(UsersGatewayHttpClient::new(
        build_gateway_load_test_http_client(environment)?,
        faker,
    ))
}

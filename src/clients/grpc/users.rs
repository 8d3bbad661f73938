use std::sync::Arc;

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::client::{
    build_gateway_grpc_channel, build_gateway_load_test_grpc_channel, required, GrpcClient,
};
use crate::config::GrpcClientConfig;
use crate::contracts::users::users_gateway_service_client::UsersGatewayServiceClient;
use crate::contracts::users::{
    CreateUserRequest, CreateUserResponse, GetUserRequest, GetUserResponse, User as UserMessage,
};
use crate::error::{ClientError, DecodeError, TransportError};
use crate::fakers::Faker;
use crate::gateway::UsersGateway;
use crate::load::LoadTestEnvironment;
use crate::models::User;

/// RPCs of `UsersGatewayService`
#[async_trait]
pub trait UsersGatewayStub: Send + Sync {
    async fn get_user(&self, request: GetUserRequest) -> Result<GetUserResponse, Status>;
    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, Status>;
}

#[async_trait]
impl UsersGatewayStub for UsersGatewayServiceClient<Channel> {
    async fn get_user(&self, request: GetUserRequest) -> Result<GetUserResponse, Status> {
        let mut client = self.clone();
        UsersGatewayServiceClient::get_user(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<CreateUserResponse, Status> {
        let mut client = self.clone();
        UsersGatewayServiceClient::create_user(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }
}

impl TryFrom<UserMessage> for User {
    type Error = DecodeError;

    fn try_from(message: UserMessage) -> Result<Self, Self::Error> {
        Ok(User {
            id: message.id,
            email: message.email,
            last_name: message.last_name,
            first_name: message.first_name,
            middle_name: message.middle_name,
            phone_number: message.phone_number,
        })
    }
}

/// gRPC client for `UsersGatewayService`
pub struct UsersGatewayGrpcClient {
    client: GrpcClient<dyn UsersGatewayStub>,
    faker: Arc<dyn Faker>,
}

impl UsersGatewayGrpcClient {
    pub fn new(stub: Arc<dyn UsersGatewayStub>, faker: Arc<dyn Faker>) -> Self {
        Self {
            client: GrpcClient::new(stub),
            faker,
        }
    }

    pub fn with_environment(mut self, environment: &LoadTestEnvironment) -> Self {
        self.client = self.client.with_listener(environment.listener.clone());
        self
    }

    pub async fn get_user_api(
        &self,
        request: GetUserRequest,
    ) -> Result<GetUserResponse, TransportError> {
        self.client
            .observe("GetUser", self.client.stub().get_user(request))
            .await
    }

    pub async fn create_user_api(
        &self,
        request: CreateUserRequest,
    ) -> Result<CreateUserResponse, TransportError> {
        self.client
            .observe("CreateUser", self.client.stub().create_user(request))
            .await
    }
}

#[async_trait]
impl UsersGateway for UsersGatewayGrpcClient {
    async fn create_user(&self) -> Result<User, ClientError> {
        let request = CreateUserRequest {
            email: self.faker.email(),
            last_name: self.faker.last_name(),
            first_name: self.faker.first_name(),
            middle_name: self.faker.middle_name(),
            phone_number: self.faker.phone_number(),
        };
        let response = self.create_user_api(request).await?;
        let user = required(response.user, "CreateUserResponse", "user")?;
        Ok(User::try_from(user)?)
    }

    async fn get_user(&self, user_id: &str) -> Result<User, ClientError> {
        let request = GetUserRequest {
            id: user_id.to_string(),
        };
        let response = self.get_user_api(request).await?;
        let user = required(response.user, "GetUserResponse", "user")?;
        Ok(User::try_from(user)?)
    }
}

pub fn build_users_gateway_grpc_client(
    config: &GrpcClientConfig,
    faker: Arc<dyn Faker>,
) -> Result<UsersGatewayGrpcClient, TransportError> {
    let channel = build_gateway_grpc_channel(config)?;
    Ok(UsersGatewayGrpcClient::new(
        Arc::new(UsersGatewayServiceClient::new(channel)),
        faker,
    ))
}

pub fn build_users_gateway_load_test_grpc_client(
    environment: &LoadTestEnvironment,
    faker: Arc<dyn Faker>,
) -> Result<UsersGatewayGrpcClient, TransportError> {
    let channel = build_gateway_load_test_grpc_channel(environment)?;
    Ok(
        UsersGatewayGrpcClient::new(Arc::new(UsersGatewayServiceClient::new(channel)), faker)
            .with_environment(environment),
    )
}

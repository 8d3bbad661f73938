use async_trait::async_trait;
use reqwest::Response;

use super::models::{
    IssueCardRequest, IssueCardResponse, IssuePhysicalCardRequest, IssueVirtualCardRequest,
};
use crate::clients::http::client::{
    build_gateway_http_client, build_gateway_load_test_http_client, decode_response, HttpClient,
};
use crate::config::HttpClientConfig;
use crate::error::{ClientError, TransportError};
use crate::gateway::CardsGateway;
use crate::load::LoadTestEnvironment;
use crate::models::Card;

/// Client for `/api/v1/cards` of the HTTP gateway
pub struct CardsGatewayHttpClient {
    client: HttpClient,
}

impl CardsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// POST /api/v1/cards/issue-virtual-card
    pub async fn issue_virtual_card_api(
        &self,
        request: &IssueVirtualCardRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/cards/issue-virtual-card", Some(request))
            .await
    }

    /// POST /api/v1/cards/issue-physical-card
    pub async fn issue_physical_card_api(
        &self,
        request: &IssuePhysicalCardRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/cards/issue-physical-card", Some(request))
            .await
    }
}

fn issue_request(user_id: &str, account_id: &str) -> IssueCardRequest {
    IssueCardRequest {
        user_id: user_id.to_string(),
        account_id: account_id.to_string(),
    }
}

#[async_trait]
impl CardsGateway for CardsGatewayHttpClient {
    async fn issue_virtual_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        let response = self
            .issue_virtual_card_api(&issue_request(user_id, account_id))
            .await?;
        let body: IssueCardResponse = decode_response(response).await?;
        Ok(body.card)
    }

    async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError> {
        let response = self
            .issue_physical_card_api(&issue_request(user_id, account_id))
            .await?;
        let body: IssueCardResponse = decode_response(response).await?;
        Ok(body.card)
    }
}

pub fn build_cards_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<CardsGatewayHttpClient, TransportError> {
    Ok(CardsGatewayHttpClient::new(build_gateway_http_client(config)?))
}

pub fn build_cards_gateway_load_test_http_client(
    environment: &LoadTestEnvironment,
) -> Result<CardsGatewayHttpClient, TransportError> {
    Ok(CardsGatewayHttpClient::new(
        build_gateway_load_test_http_client(environment)?,
    ))
}

use async_trait::async_trait;
use reqwest::Response;

use super::models::{
    GetAccountsQuery, GetAccountsResponse, OpenAccountRequest, OpenAccountResponse,
    OpenCreditCardAccountRequest, OpenDebitCardAccountRequest, OpenDepositAccountRequest,
    OpenSavingsAccountRequest,
};
use crate::clients::http::client::{
    build_gateway_http_client, build_gateway_load_test_http_client, decode_response, HttpClient,
};
use crate::config::HttpClientConfig;
use crate::error::{ClientError, TransportError};
use crate::gateway::AccountsGateway;
use crate::load::LoadTestEnvironment;
use crate::models::Account;

/// Client for `/api/v1/accounts` of the HTTP gateway
pub struct AccountsGatewayHttpClient {
    client: HttpClient,
}

impl AccountsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// GET /api/v1/accounts?userId=...
    pub async fn get_accounts_api(
        &self,
        query: &GetAccountsQuery,
    ) -> Result<Response, TransportError> {
        self.client.get("/api/v1/accounts", Some(query)).await
    }

    /// POST /api/v1/accounts/open-deposit-account
    pub async fn open_deposit_account_api(
        &self,
        request: &OpenDepositAccountRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/accounts/open-deposit-account", Some(request))
            .await
    }

    /// POST /api/v1/accounts/open-savings-account
    pub async fn open_savings_account_api(
        &self,
        request: &OpenSavingsAccountRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/accounts/open-savings-account", Some(request))
            .await
    }

    /// POST /api/v1/accounts/open-debit-card-account
    pub async fn open_debit_card_account_api(
        &self,
        request: &OpenDebitCardAccountRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/accounts/open-debit-card-account", Some(request))
            .await
    }

    /// POST /api/v1/accounts/open-credit-card-account
    pub async fn open_credit_card_account_api(
        &self,
        request: &OpenCreditCardAccountRequest,
    ) -> Result<Response, TransportError> {
        self.client
            .post("/api/v1/accounts/open-credit-card-account", Some(request))
            .await
    }

    fn open_request(user_id: &str) -> OpenAccountRequest {
        OpenAccountRequest {
            user_id: user_id.to_string(),
        }
    }

    async fn decode_account(response: Response) -> Result<Account, ClientError> {
        let body: OpenAccountResponse = decode_response(response).await?;
        Ok(body.account)
    }
}

#[async_trait]
impl AccountsGateway for AccountsGatewayHttpClient {
    async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, ClientError> {
        let query = GetAccountsQuery {
            user_id: user_id.to_string(),
        };
        let response = self.get_accounts_api(&query).await?;
        let body: GetAccountsResponse = decode_response(response).await?;
        Ok(body.accounts)
    }

    async fn open_deposit_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = self
            .open_deposit_account_api(&Self::open_request(user_id))
            .await?;
        Self::decode_account(response).await
    }

    async fn open_savings_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = self
            .open_savings_account_api(&Self::open_request(user_id))
            .await?;
        Self::decode_account(response).await
    }

    async fn open_debit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = self
            .open_debit_card_account_api(&Self::open_request(user_id))
            .await?;
        Self::decode_account(response).await
    }

    async fn open_credit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let response = self
            .open_credit_card_account_api(&Self::open_request(user_id))
            .await?;
        Self::decode_account(response).await
    }
}

pub fn build_accounts_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<AccountsGatewayHttpClient, TransportError> {
    Ok(AccountsGatewayHttpClient::new(build_gateway_http_client(config)?))
}

pub fn build_accounts_gateway_load_test_http_client(
    environment: &LoadTestEnvironment,
) -> Result<AccountsGatewayHttpClient, TransportError> {
    Ok(AccountsGatewayHttpClient::new(
        build_gateway_load_test_http_client(environment)?,
    ))
}

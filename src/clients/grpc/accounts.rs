use std::sync::Arc;

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;

use super::client::{
    build_gateway_grpc_channel, build_gateway_load_test_grpc_channel, enum_value, required,
    GrpcClient,
};
use crate::config::GrpcClientConfig;
use crate::contracts::accounts::accounts_gateway_service_client::AccountsGatewayServiceClient;
use crate::contracts::accounts::{
    self as proto, GetAccountsRequest, GetAccountsResponse, OpenCreditCardAccountRequest,
    OpenCreditCardAccountResponse, OpenDebitCardAccountRequest, OpenDebitCardAccountResponse,
    OpenDepositAccountRequest, OpenDepositAccountResponse, OpenSavingsAccountRequest,
    OpenSavingsAccountResponse,
};
use crate::error::{ClientError, DecodeError, TransportError};
use crate::gateway::AccountsGateway;
use crate::load::LoadTestEnvironment;
use crate::models::{Account, AccountStatus, AccountType, Card};

/// RPCs of `AccountsGatewayService`
#[async_trait]
pub trait AccountsGatewayStub: Send + Sync {
    async fn get_accounts(
        &self,
        request: GetAccountsRequest,
    ) -> Result<GetAccountsResponse, Status>;

    async fn open_deposit_account(
        &self,
        request: OpenDepositAccountRequest,
    ) -> Result<OpenDepositAccountResponse, Status>;

    async fn open_savings_account(
        &self,
        request: OpenSavingsAccountRequest,
    ) -> Result<OpenSavingsAccountResponse, Status>;

    async fn open_debit_card_account(
        &self,
        request: OpenDebitCardAccountRequest,
    ) -> Result<OpenDebitCardAccountResponse, Status>;

    async fn open_credit_card_account(
        &self,
        request: OpenCreditCardAccountRequest,
    ) -> Result<OpenCreditCardAccountResponse, Status>;
}

#[async_trait]
impl AccountsGatewayStub for AccountsGatewayServiceClient<Channel> {
    async fn get_accounts(
        &self,
        request: GetAccountsRequest,
    ) -> Result<GetAccountsResponse, Status> {
        let mut client = self.clone();
        AccountsGatewayServiceClient::get_accounts(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn open_deposit_account(
        &self,
        request: OpenDepositAccountRequest,
    ) -> Result<OpenDepositAccountResponse, Status> {
        let mut client = self.clone();
        AccountsGatewayServiceClient::open_deposit_account(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn open_savings_account(
        &self,
        request: OpenSavingsAccountRequest,
    ) -> Result<OpenSavingsAccountResponse, Status> {
        let mut client = self.clone();
        AccountsGatewayServiceClient::open_savings_account(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn open_debit_card_account(
        &self,
        request: OpenDebitCardAccountRequest,
    ) -> Result<OpenDebitCardAccountResponse, Status> {
        let mut client = self.clone();
        AccountsGatewayServiceClient::open_debit_card_account(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn open_credit_card_account(
        &self,
        request: OpenCreditCardAccountRequest,
    ) -> Result<OpenCreditCardAccountResponse, Status> {
        let mut client = self.clone();
        AccountsGatewayServiceClient::open_credit_card_account(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }
}

impl TryFrom<proto::Account> for Account {
    type Error = DecodeError;

    fn try_from(message: proto::Account) -> Result<Self, Self::Error> {
        let account_type = match enum_value(message.r#type, "Account", "type")? {
            proto::AccountType::Deposit => AccountType::Deposit,
            proto::AccountType::Savings => AccountType::Savings,
            proto::AccountType::DebitCard => AccountType::DebitCard,
            proto::AccountType::CreditCard => AccountType::CreditCard,
            proto::AccountType::Unspecified => return Err(unspecified("type")),
        };
        let status = match enum_value(message.status, "Account", "status")? {
            proto::AccountStatus::Active => AccountStatus::Active,
            proto::AccountStatus::PendingClosure => AccountStatus::PendingClosure,
            proto::AccountStatus::Closed => AccountStatus::Closed,
            proto::AccountStatus::Unspecified => return Err(unspecified("status")),
        };
        let cards = message
            .cards
            .into_iter()
            .map(Card::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Account {
            id: message.id,
            account_type,
            cards,
            status,
            balance: message.balance,
        })
    }
}

fn unspecified(field: &'static str) -> DecodeError {
    DecodeError::UnknownEnum {
        message: "Account",
        field,
        value: 0,
    }
}

/// gRPC client for `AccountsGatewayService`
pub struct AccountsGatewayGrpcClient {
    client: GrpcClient<dyn AccountsGatewayStub>,
}

impl AccountsGatewayGrpcClient {
    pub fn new(stub: Arc<dyn AccountsGatewayStub>) -> Self {
        Self {
            client: GrpcClient::new(stub),
        }
    }

    pub fn with_environment(mut self, environment: &LoadTestEnvironment) -> Self {
        self.client = self.client.with_listener(environment.listener.clone());
        self
    }

    pub async fn get_accounts_api(
        &self,
        request: GetAccountsRequest,
    ) -> Result<GetAccountsResponse, TransportError> {
        self.client
            .observe("GetAccounts", self.client.stub().get_accounts(request))
            .await
    }

    pub async fn open_deposit_account_api(
        &self,
        request: OpenDepositAccountRequest,
    ) -> Result<OpenDepositAccountResponse, TransportError> {
        self.client
            .observe(
                "OpenDepositAccount",
                self.client.stub().open_deposit_account(request),
            )
            .await
    }

    pub async fn open_savings_account_api(
        &self,
        request: OpenSavingsAccountRequest,
    ) -> Result<OpenSavingsAccountResponse, TransportError> {
        self.client
            .observe(
                "OpenSavingsAccount",
                self.client.stub().open_savings_account(request),
            )
            .await
    }

    pub async fn open_debit_card_account_api(
        &self,
        request: OpenDebitCardAccountRequest,
    ) -> Result<OpenDebitCardAccountResponse, TransportError> {
        self.client
            .observe(
                "OpenDebitCardAccount",
                self.client.stub().open_debit_card_account(request),
            )
            .await
    }

    pub async fn open_credit_card_account_api(
        &self,
        request: OpenCreditCardAccountRequest,
    ) -> Result<OpenCreditCardAccountResponse, TransportError> {
        self.client
            .observe(
                "OpenCreditCardAccount",
                self.client.stub().open_credit_card_account(request),
            )
            .await
    }
}

#[async_trait]
impl AccountsGateway for AccountsGatewayGrpcClient {
    async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, ClientError> {
        let request = GetAccountsRequest {
            user_id: user_id.to_string(),
        };
        let response = self.get_accounts_api(request).await?;
        let accounts = response
            .accounts
            .into_iter()
            .map(Account::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(accounts)
    }

    async fn open_deposit_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let request = OpenDepositAccountRequest {
            user_id: user_id.to_string(),
        };
        let response = self.open_deposit_account_api(request).await?;
        let account = required(response.account, "OpenDepositAccountResponse", "account")?;
        Ok(Account::try_from(account)?)
    }

    async fn open_savings_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let request = OpenSavingsAccountRequest {
            user_id: user_id.to_string(),
        };
        let response = self.open_savings_account_api(request).await?;
        let account = required(response.account, "OpenSavingsAccountResponse", "account")?;
        Ok(Account::try_from(account)?)
    }

    async fn open_debit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let request = OpenDebitCardAccountRequest {
            user_id: user_id.to_string(),
        };
        let response = self.open_debit_card_account_api(request).await?;
        let account = required(response.account, "OpenDebitCardAccountResponse", "account")?;
        Ok(Account::try_from(account)?)
    }

    async fn open_credit_card_account(&self, user_id: &str) -> Result<Account, ClientError> {
        let request = OpenCreditCardAccountRequest {
            user_id: user_id.to_string(),
        };
        let response = self.open_credit_card_account_api(request).await?;
        let account = required(response.account, "OpenCreditCardAccountResponse", "account")?;
        Ok(Account::try_from(account)?)
    }
}

pub fn build_accounts_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<AccountsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_grpc_channel(config)?;
    Ok(AccountsGatewayGrpcClient::new(Arc::new(
        AccountsGatewayServiceClient::new(channel),
    )))
}

pub fn build_accounts_gateway_load_test_grpc_client(
    environment: &LoadTestEnvironment,
) -> Result<AccountsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_load_test_grpc_channel(environment)?;
    Ok(
        AccountsGatewayGrpcClient::new(Arc::new(AccountsGatewayServiceClient::new(channel)))
            .with_environment(environment),
    )
}

//! Linear end-to-end flows over the gateway traits
//!
//! Each scenario runs a fixed sequence of calls, logs every response and
//! returns what it created. They work with any transport, see [`Gateways`].

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::clients::grpc::{
    build_accounts_gateway_grpc_client, build_cards_gateway_grpc_client,
    build_documents_gateway_grpc_client, build_operations_gateway_grpc_client,
    build_users_gateway_grpc_client,
};
use crate::clients::http::accounts::build_accounts_gateway_http_client;
use crate::clients::http::cards::build_cards_gateway_http_client;
use crate::clients::http::documents::build_documents_gateway_http_client;
use crate::clients::http::operations::build_operations_gateway_http_client;
use crate::clients::http::users::build_users_gateway_http_client;
use crate::config::{GrpcClientConfig, HttpClientConfig};
use crate::error::{ClientError, TransportError};
use crate::fakers::Faker;
use crate::gateway::{
    AccountsGateway, CardsGateway, DocumentsGateway, OperationsGateway, UsersGateway,
};
use crate::models::{
    Account, Card, Document, Operation, OperationReceipt, OperationType, OperationsSummary, User,
};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("account {account_id} was opened without a card")]
    MissingCard { account_id: String },

    #[error("expected a {expected} operation, got {actual}")]
    UnexpectedOperationType {
        expected: OperationType,
        actual: OperationType,
    },
}

impl From<TransportError> for ScenarioError {
    fn from(e: TransportError) -> Self {
        ScenarioError::Client(e.into())
    }
}

/// One client per service, all on the same transport
pub struct Gateways {
    pub users: Box<dyn UsersGateway>,
    pub accounts: Box<dyn AccountsGateway>,
    pub cards: Box<dyn CardsGateway>,
    pub documents: Box<dyn DocumentsGateway>,
    pub operations: Box<dyn OperationsGateway>,
}

impl Gateways {
    pub fn http(config: &HttpClientConfig, faker: Arc<dyn Faker>) -> Result<Self, TransportError> {
        Ok(Self {
            users: Box::new(build_users_gateway_http_client(config, faker.clone())?),
            accounts: Box::new(build_accounts_gateway_http_client(config)?),
            cards: Box::new(build_cards_gateway_http_client(config)?),
            documents: Box::new(build_documents_gateway_http_client(config)?),
            operations: Box::new(build_operations_gateway_http_client(config, faker)?),
        })
    }

    /// Must be called inside a tokio runtime
    pub fn grpc(config: &GrpcClientConfig, faker: Arc<dyn Faker>) -> Result<Self, TransportError> {
        Ok(Self {
            users: Box::new(build_users_gateway_grpc_client(config, faker.clone())?),
            accounts: Box::new(build_accounts_gateway_grpc_client(config)?),
            cards: Box::new(build_cards_gateway_grpc_client(config)?),
            documents: Box::new(build_documents_gateway_grpc_client(config)?),
            operations: Box::new(build_operations_gateway_grpc_client(config, faker)?),
        })
    }
}

/// Card id of the card opened together with `account`
fn first_card_id(account: &Account) -> Result<String, ScenarioError> {
    account
        .first_card()
        .map(|card| card.id.clone())
        .ok_or_else(|| ScenarioError::MissingCard {
            account_id: account.id.clone(),
        })
}

async fn create_user(gateways: &Gateways) -> Result<User, ScenarioError> {
    let user = gateways.users.create_user().await?;
    info!("Create user response: {:?}", user);
    Ok(user)
}

async fn open_debit_card_account_for(
    gateways: &Gateways,
    user: &User,
) -> Result<Account, ScenarioError> {
    let account = gateways.accounts.open_debit_card_account(&user.id).await?;
    info!("Open debit card account response: {:?}", account);
    Ok(account)
}

async fn make_top_up(gateways: &Gateways, account: &Account) -> Result<Operation, ScenarioError> {
    let card_id = first_card_id(account)?;
    let operation = gateways
        .operations
        .make_top_up_operation(&card_id, &account.id)
        .await?;
    info!("Make top up operation response: {:?}", operation);

    if operation.operation_type != OperationType::TopUp {
        return Err(ScenarioError::UnexpectedOperationType {
            expected: OperationType::TopUp,
            actual: operation.operation_type,
        });
    }
    Ok(operation)
}

#[derive(Debug, Clone)]
pub struct GetUserOutcome {
    pub created: User,
    pub fetched: User,
}

/// Create a user and read it back
pub async fn get_user(gateways: &Gateways) -> Result<GetUserOutcome, ScenarioError> {
    let created = create_user(gateways).await?;
    let fetched = gateways.users.get_user(&created.id).await?;
    info!("Get user response: {:?}", fetched);
    Ok(GetUserOutcome { created, fetched })
}

#[derive(Debug, Clone)]
pub struct OpenAccountOutcome {
    pub user: User,
    pub account: Account,
}

pub async fn open_deposit_account(
    gateways: &Gateways,
) -> Result<OpenAccountOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = gateways.accounts.open_deposit_account(&user.id).await?;
    info!("Open deposit account response: {:?}", account);
    Ok(OpenAccountOutcome { user, account })
}

pub async fn open_debit_card_account(
    gateways: &Gateways,
) -> Result<OpenAccountOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = open_debit_card_account_for(gateways, &user).await?;
    first_card_id(&account)?;
    Ok(OpenAccountOutcome { user, account })
}

#[derive(Debug, Clone)]
pub struct IssueCardsOutcome {
    pub account: Account,
    pub virtual_card: Card,
    pub physical_card: Card,
}

/// Open a debit card account and issue one card of each kind for it
pub async fn issue_cards(gateways: &Gateways) -> Result<IssueCardsOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = open_debit_card_account_for(gateways, &user).await?;

    let virtual_card = gateways
        .cards
        .issue_virtual_card(&user.id, &account.id)
        .await?;
    info!("Issue virtual card response: {:?}", virtual_card);

    let physical_card = gateways
        .cards
        .issue_physical_card(&user.id, &account.id)
        .await?;
    info!("Issue physical card response: {:?}", physical_card);

    Ok(IssueCardsOutcome {
        account,
        virtual_card,
        physical_card,
    })
}

#[derive(Debug, Clone)]
pub struct TopUpOutcome {
    pub user: User,
    pub account: Account,
    pub operation: Operation,
}

/// Create a user, open a debit card account and top it up with the first card
pub async fn make_top_up_operation(gateways: &Gateways) -> Result<TopUpOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = open_debit_card_account_for(gateways, &user).await?;
    let operation = make_top_up(gateways, &account).await?;
    Ok(TopUpOutcome {
        user,
        account,
        operation,
    })
}

#[derive(Debug, Clone)]
pub struct ReceiptOutcome {
    pub operation: Operation,
    pub receipt: OperationReceipt,
}

pub async fn get_operation_receipt(gateways: &Gateways) -> Result<ReceiptOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = open_debit_card_account_for(gateways, &user).await?;
    let operation = make_top_up(gateways, &account).await?;

    let receipt = gateways
        .operations
        .get_operation_receipt(&operation.id)
        .await?;
    info!("Get operation receipt response: {:?}", receipt);
    Ok(ReceiptOutcome { operation, receipt })
}

#[derive(Debug, Clone)]
pub struct DocumentsOutcome {
    pub account: Account,
    pub tariff: Document,
    pub contract: Document,
}

/// Open a credit card account and fetch its tariff and contract
pub async fn get_documents(gateways: &Gateways) -> Result<DocumentsOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = gateways.accounts.open_credit_card_account(&user.id).await?;
    info!("Open credit card account response: {:?}", account);

    let tariff = gateways.documents.get_tariff_document(&account.id).await?;
    info!("Get tariff document response: {:?}", tariff);

    let contract = gateways.documents.get_contract_document(&account.id).await?;
    info!("Get contract document response: {:?}", contract);

    Ok(DocumentsOutcome {
        account,
        tariff,
        contract,
    })
}

#[derive(Debug, Clone)]
pub struct OperationsOutcome {
    pub account: Account,
    pub operations: Vec<Operation>,
    pub summary: OperationsSummary,
}

/// Top up and spend from a fresh account, then list and summarize its operations
pub async fn get_operations(gateways: &Gateways) -> Result<OperationsOutcome, ScenarioError> {
    let user = create_user(gateways).await?;
    let account = open_debit_card_account_for(gateways, &user).await?;
    let card_id = first_card_id(&account)?;

    make_top_up(gateways, &account).await?;
    let purchase = gateways
        .operations
        .make_purchase_operation(&card_id, &account.id)
        .await?;
    info!("Make purchase operation response: {:?}", purchase);
    let cashback = gateways
        .operations
        .make_cashback_operation(&card_id, &account.id)
        .await?;
    info!("Make cashback operation response: {:?}", cashback);

    let operations = gateways.operations.get_operations(&account.id).await?;
    info!("Get operations response: {:?}", operations);

    let summary = gateways
        .operations
        .get_operations_summary(&account.id)
        .await?;
    info!("Get operations summary response: {:?}", summary);

    Ok(OperationsOutcome {
        account,
        operations,
        summary,
    })
}

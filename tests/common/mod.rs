//! In-memory gateway implementing every gRPC stub trait

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bank_gateway_clients::clients::grpc::{
    AccountsGatewayGrpcClient, AccountsGatewayStub, CardsGatewayGrpcClient, CardsGatewayStub,
    DocumentsGatewayGrpcClient, DocumentsGatewayStub, OperationsGatewayGrpcClient,
    OperationsGatewayStub, UsersGatewayGrpcClient, UsersGatewayStub,
};
use bank_gateway_clients::contracts::{accounts, cards, documents, operations, users};
use bank_gateway_clients::scenarios::Gateways;
use bank_gateway_clients::{Faker, RandomFaker};
use tonic::Status;

/// Make-operation request as the bank received it
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedOperation {
    pub rpc: &'static str,
    pub status: i32,
    pub amount: f64,
    pub card_id: String,
    pub account_id: String,
    pub category: Option<String>,
}

#[derive(Default)]
struct State {
    next_id: u64,
    users: HashMap<String, users::User>,
    accounts: HashMap<String, accounts::Account>,
    owners: HashMap<String, String>,
    operations: HashMap<String, operations::Operation>,
    received: Vec<ReceivedOperation>,
}

impl State {
    fn id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }
}

#[derive(Default)]
pub struct InMemoryBank {
    state: Mutex<State>,
    /// When set, reads of operations omit the envelope message
    pub drop_envelopes: bool,
}

impl InMemoryBank {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn without_envelopes() -> Arc<Self> {
        Arc::new(Self {
            drop_envelopes: true,
            ..Self::default()
        })
    }

    pub fn received(&self) -> Vec<ReceivedOperation> {
        self.state.lock().unwrap().received.clone()
    }

    fn card(state: &mut State, account_id: &str, card_type: cards::CardType) -> cards::Card {
        cards::Card {
            id: state.id("card"),
            pin: "1234".to_string(),
            cvv: "123".to_string(),
            r#type: card_type as i32,
            status: cards::CardStatus::Active as i32,
            account_id: account_id.to_string(),
            card_number: "5555444433331111".to_string(),
            card_holder: "IVAN PETROV".to_string(),
            expiry_date: "2030-12-31".to_string(),
            payment_system: cards::CardPaymentSystem::Mastercard as i32,
        }
    }

    fn open_account(
        &self,
        user_id: &str,
        account_type: accounts::AccountType,
    ) -> Result<Option<accounts::Account>, Status> {
        let mut state = self.state.lock().unwrap();
        if !state.users.contains_key(user_id) {
            return Err(Status::not_found(format!("user {user_id} not found")));
        }

        let id = state.id("account");
        let cards = match account_type {
            accounts::AccountType::DebitCard | accounts::AccountType::CreditCard => vec![
                Self::card(&mut state, &id, cards::CardType::Physical),
                Self::card(&mut state, &id, cards::CardType::Virtual),
            ],
            _ => Vec::new(),
        };
        let account = accounts::Account {
            id: id.clone(),
            r#type: account_type as i32,
            cards,
            status: accounts::AccountStatus::Active as i32,
            balance: 0.0,
        };
        state.owners.insert(id.clone(), user_id.to_string());
        state.accounts.insert(id, account.clone());
        Ok(Some(account))
    }

    #[allow(clippy::too_many_arguments)]
    fn make_operation(
        &self,
        rpc: &'static str,
        operation_type: operations::OperationType,
        status: i32,
        amount: f64,
        card_id: String,
        account_id: String,
        category: Option<String>,
    ) -> Result<Option<operations::Operation>, Status> {
        let mut state = self.state.lock().unwrap();
        if !state.accounts.contains_key(&account_id) {
            return Err(Status::not_found(format!("account {account_id} not found")));
        }
        state.received.push(ReceivedOperation {
            rpc,
            status,
            amount,
            card_id: card_id.clone(),
            account_id: account_id.clone(),
            category: category.clone(),
        });

        let operation = operations::Operation {
            id: state.id("operation"),
            r#type: operation_type as i32,
            status,
            amount,
            card_id,
            category: category.unwrap_or_else(|| "other".to_string()),
            created_at: Some(prost_types::Timestamp {
                seconds: 1_714_557_600,
                nanos: 0,
            }),
            account_id,
        };
        state
            .operations
            .insert(operation.id.clone(), operation.clone());
        Ok(Some(operation))
    }
}

#[async_trait]
impl UsersGatewayStub for InMemoryBank {
    async fn get_user(
        &self,
        request: users::GetUserRequest,
    ) -> Result<users::GetUserResponse, Status> {
        let state = self.state.lock().unwrap();
        let user = state
            .users
            .get(&request.id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("user {} not found", request.id)))?;
        Ok(users::GetUserResponse { user: Some(user) })
    }

    async fn create_user(
        &self,
        request: users::CreateUserRequest,
    ) -> Result<users::CreateUserResponse, Status> {
        let mut state = self.state.lock().unwrap();
        let user = users::User {
            id: state.id("user"),
            email: request.email,
            last_name: request.last_name,
            first_name: request.first_name,
            middle_name: request.middle_name,
            phone_number: request.phone_number,
        };
        state.users.insert(user.id.clone(), user.clone());
        Ok(users::CreateUserResponse { user: Some(user) })
    }
}

#[async_trait]
impl AccountsGatewayStub for InMemoryBank {
    async fn get_accounts(
        &self,
        request: accounts::GetAccountsRequest,
    ) -> Result<accounts::GetAccountsResponse, Status> {
        let state = self.state.lock().unwrap();
        let mut accounts: Vec<_> = state
            .accounts
            .values()
            .filter(|account| state.owners.get(&account.id) == Some(&request.user_id))
            .cloned()
            .collect();
        accounts.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(accounts::GetAccountsResponse { accounts })
    }

    async fn open_deposit_account(
        &self,
        request: accounts::OpenDepositAccountRequest,
    ) -> Result<accounts::OpenDepositAccountResponse, Status> {
        let account = self.open_account(&request.user_id, accounts::AccountType::Deposit)?;
        Ok(accounts::OpenDepositAccountResponse { account })
    }

    async fn open_savings_account(
        &self,
        request: accounts::OpenSavingsAccountRequest,
    ) -> Result<accounts::OpenSavingsAccountResponse, Status> {
        let account = self.open_account(&request.user_id, accounts::AccountType::Savings)?;
        Ok(accounts::OpenSavingsAccountResponse { account })
    }

    async fn open_debit_card_account(
        &self,
        request: accounts::OpenDebitCardAccountRequest,
    ) -> Result<accounts::OpenDebitCardAccountResponse, Status> {
        let account = self.open_account(&request.user_id, accounts::AccountType::DebitCard)?;
        Ok(accounts::OpenDebitCardAccountResponse { account })
    }

    async fn open_credit_card_account(
        &self,
        request: accounts::OpenCreditCardAccountRequest,
    ) -> Result<accounts::OpenCreditCardAccountResponse, Status> {
        let account = self.open_account(&request.user_id, accounts::AccountType::CreditCard)?;
        Ok(accounts::OpenCreditCardAccountResponse { account })
    }
}

#[async_trait]
impl CardsGatewayStub for InMemoryBank {
    async fn issue_virtual_card(
        &self,
        request: cards::IssueVirtualCardRequest,
    ) -> Result<cards::IssueVirtualCardResponse, Status> {
        let mut state = self.state.lock().unwrap();
        let card = Self::card(&mut state, &request.account_id, cards::CardType::Virtual);
        Ok(cards::IssueVirtualCardResponse { card: Some(card) })
    }

    async fn issue_physical_card(
        &self,
        request: cards::IssuePhysicalCardRequest,
    ) -> Result<cards::IssuePhysicalCardResponse, Status> {
        let mut state = self.state.lock().unwrap();
        let card = Self::card(&mut state, &request.account_id, cards::CardType::Physical);
        Ok(cards::IssuePhysicalCardResponse { card: Some(card) })
    }
}

fn document(kind: &str, account_id: &str) -> documents::Document {
    documents::Document {
        url: format!("http://localhost:8003/documents/{kind}/{account_id}.pdf"),
        document: format!("{kind} of {account_id}"),
    }
}

#[async_trait]
impl DocumentsGatewayStub for InMemoryBank {
    async fn get_tariff_document(
        &self,
        request: documents::GetTariffDocumentRequest,
    ) -> Result<documents::GetTariffDocumentResponse, Status> {
        Ok(documents::GetTariffDocumentResponse {
            tariff: Some(document("tariff", &request.account_id)),
        })
    }

    async fn get_contract_document(
        &self,
        request: documents::GetContractDocumentRequest,
    ) -> Result<documents::GetContractDocumentResponse, Status> {
        Ok(documents::GetContractDocumentResponse {
            contract: Some(document("contract", &request.account_id)),
        })
    }
}

#[async_trait]
impl OperationsGatewayStub for InMemoryBank {
    async fn get_operation(
        &self,
        request: operations::GetOperationRequest,
    ) -> Result<operations::GetOperationResponse, Status> {
        if self.drop_envelopes {
            return Ok(operations::GetOperationResponse { operation: None });
        }
        let state = self.state.lock().unwrap();
        let operation = state
            .operations
            .get(&request.operation_id)
            .cloned()
            .ok_or_else(|| Status::not_found(format!("operation {} not found", request.operation_id)))?;
        Ok(operations::GetOperationResponse {
            operation: Some(operation),
        })
    }

    async fn get_operation_receipt(
        &self,
        request: operations::GetOperationReceiptRequest,
    ) -> Result<operations::GetOperationReceiptResponse, Status> {
        let state = self.state.lock().unwrap();
        if !state.operations.contains_key(&request.operation_id) {
            return Err(Status::not_found("operation not found"));
        }
        Ok(operations::GetOperationReceiptResponse {
            receipt: Some(operations::OperationReceipt {
                url: format!(
                    "http://localhost:8003/receipts/{}.pdf",
                    request.operation_id
                ),
                document: "receipt".to_string(),
            }),
        })
    }

    async fn get_operations(
        &self,
        request: operations::GetOperationsRequest,
    ) -> Result<operations::GetOperationsResponse, Status> {
        let state = self.state.lock().unwrap();
        let mut operations: Vec<_> = state
            .operations
            .values()
            .filter(|operation| operation.account_id == request.account_id)
            .cloned()
            .collect();
        operations.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(operations::GetOperationsResponse { operations })
    }

    async fn get_operations_summary(
        &self,
        request: operations::GetOperationsSummaryRequest,
    ) -> Result<operations::GetOperationsSummaryResponse, Status> {
        use operations::OperationType as Kind;

        let state = self.state.lock().unwrap();
        let mut summary = operations::OperationsSummary::default();
        for operation in state
            .operations
            .values()
            .filter(|operation| operation.account_id == request.account_id)
        {
            match Kind::try_from(operation.r#type) {
                Ok(Kind::TopUp) | Ok(Kind::Transfer) => summary.received_amount += operation.amount,
                Ok(Kind::Cashback) => summary.cashback_amount += operation.amount,
                _ => summary.spent_amount += operation.amount,
            }
        }
        Ok(operations::GetOperationsSummaryResponse {
            summary: Some(summary),
        })
    }

    async fn make_fee_operation(
        &self,
        r: operations::MakeFeeOperationRequest,
    ) -> Result<operations::MakeFeeOperationResponse, Status> {
        let operation = self.make_operation(
            "MakeFeeOperation",
            operations::OperationType::Fee,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            None,
        )?;
        Ok(operations::MakeFeeOperationResponse { operation })
    }

    async fn make_top_up_operation(
        &self,
        r: operations::MakeTopUpOperationRequest,
    ) -> Result<operations::MakeTopUpOperationResponse, Status> {
        let operation = self.make_operation(
            "MakeTopUpOperation",
            operations::OperationType::TopUp,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            None,
        )?;
        Ok(operations::MakeTopUpOperationResponse { operation })
    }

    async fn make_cashback_operation(
        &self,
        r: operations::MakeCashbackOperationRequest,
    ) -> Result<operations::MakeCashbackOperationResponse, Status> {
        let operation = self.make_operation(
            "MakeCashbackOperation",
            operations::OperationType::Cashback,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            None,
        )?;
        Ok(operations::MakeCashbackOperationResponse { operation })
    }

    async fn make_transfer_operation(
        &self,
        r: operations::MakeTransferOperationRequest,
    ) -> Result<operations::MakeTransferOperationResponse, Status> {
        let operation = self.make_operation(
            "MakeTransferOperation",
            operations::OperationType::Transfer,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            None,
        )?;
        Ok(operations::MakeTransferOperationResponse { operation })
    }

    async fn make_purchase_operation(
        &self,
        r: operations::MakePurchaseOperationRequest,
    ) -> Result<operations::MakePurchaseOperationResponse, Status> {
        let operation = self.make_operation(
            "MakePurchaseOperation",
            operations::OperationType::Purchase,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            Some(r.category),
        )?;
        Ok(operations::MakePurchaseOperationResponse { operation })
    }

    async fn make_bill_payment_operation(
        &self,
        r: operations::MakeBillPaymentOperationRequest,
    ) -> Result<operations::MakeBillPaymentOperationResponse, Status> {
        let operation = self.make_operation(
            "MakeBillPaymentOperation",
            operations::OperationType::BillPayment,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            None,
        )?;
        Ok(operations::MakeBillPaymentOperationResponse { operation })
    }

    async fn make_cash_withdrawal_operation(
        &self,
        r: operations::MakeCashWithdrawalOperationRequest,
    ) -> Result<operations::MakeCashWithdrawalOperationResponse, Status> {
        let operation = self.make_operation(
            "MakeCashWithdrawalOperation",
            operations::OperationType::CashWithdrawal,
            r.status,
            r.amount,
            r.card_id,
            r.account_id,
            None,
        )?;
        Ok(operations::MakeCashWithdrawalOperationResponse { operation })
    }
}

pub fn faker() -> Arc<dyn Faker> {
    Arc::new(RandomFaker::seeded(7))
}

/// gRPC clients for every service, all backed by `bank`
pub fn grpc_gateways(bank: &Arc<InMemoryBank>) -> Gateways {
    Gateways {
        users: Box::new(UsersGatewayGrpcClient::new(bank.clone(), faker())),
        accounts: Box::new(AccountsGatewayGrpcClient::new(bank.clone())),
        cards: Box::new(CardsGatewayGrpcClient::new(bank.clone())),
        documents: Box::new(DocumentsGatewayGrpcClient::new(bank.clone())),
        operations: Box::new(OperationsGatewayGrpcClient::new(bank.clone(), faker())),
    }
}

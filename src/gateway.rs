//! High-level gateway operations
//!
//! Both the HTTP and the gRPC clients implement these traits, so scenarios
//! and tests can be written once and run over either transport. Methods take
//! identifiers, fill the remaining request fields from the client's
//! [`Faker`](crate::fakers::Faker) and return decoded domain values.

use async_trait::async_trait;

use crate::error::ClientError;
use crate::fakers::Faker;
use crate::models::{
    Account, Card, Document, Operation, OperationReceipt, OperationStatus, OperationType,
    OperationsSummary, User,
};

#[async_trait]
pub trait UsersGateway: Send + Sync {
    /// Create a user with generated email, names and phone number
    async fn create_user(&self) -> Result<User, ClientError>;

    async fn get_user(&self, user_id: &str) -> Result<User, ClientError>;
}

#[async_trait]
pub trait AccountsGateway: Send + Sync {
    async fn get_accounts(&self, user_id: &str) -> Result<Vec<Account>, ClientError>;

    async fn open_deposit_account(&self, user_id: &str) -> Result<Account, ClientError>;

    async fn open_savings_account(&self, user_id: &str) -> Result<Account, ClientError>;

    async fn open_debit_card_account(&self, user_id: &str) -> Result<Account, ClientError>;

    async fn open_credit_card_account(&self, user_id: &str) -> Result<Account, ClientError>;
}

#[async_trait]
pub trait CardsGateway: Send + Sync {
    async fn issue_virtual_card(&self, user_id: &str, account_id: &str)
        -> Result<Card, ClientError>;

    async fn issue_physical_card(
        &self,
        user_id: &str,
        account_id: &str,
    ) -> Result<Card, ClientError>;
}

#[async_trait]
pub trait DocumentsGateway: Send + Sync {
    async fn get_tariff_document(&self, account_id: &str) -> Result<Document, ClientError>;

    async fn get_contract_document(&self, account_id: &str) -> Result<Document, ClientError>;
}

#[async_trait]
pub trait OperationsGateway: Send + Sync {
    async fn get_operation(&self, operation_id: &str) -> Result<Operation, ClientError>;

    async fn get_operation_receipt(
        &self,
        operation_id: &str,
    ) -> Result<OperationReceipt, ClientError>;

    async fn get_operations(&self, account_id: &str) -> Result<Vec<Operation>, ClientError>;

    async fn get_operations_summary(
        &self,
        account_id: &str,
    ) -> Result<OperationsSummary, ClientError>;

    /// Create an operation of the given kind, generating omitted fields
    async fn make_operation(
        &self,
        kind: OperationType,
        input: OperationInput,
    ) -> Result<Operation, ClientError>;

    async fn make_fee_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(OperationType::Fee, OperationInput::new(card_id, account_id))
            .await
    }

    async fn make_top_up_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(OperationType::TopUp, OperationInput::new(card_id, account_id))
            .await
    }

    async fn make_cashback_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(OperationType::Cashback, OperationInput::new(card_id, account_id))
            .await
    }

    async fn make_transfer_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(OperationType::Transfer, OperationInput::new(card_id, account_id))
            .await
    }

    async fn make_purchase_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(OperationType::Purchase, OperationInput::new(card_id, account_id))
            .await
    }

    async fn make_bill_payment_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(OperationType::BillPayment, OperationInput::new(card_id, account_id))
            .await
    }

    async fn make_cash_withdrawal_operation(
        &self,
        card_id: &str,
        account_id: &str,
    ) -> Result<Operation, ClientError> {
        self.make_operation(
            OperationType::CashWithdrawal,
            OperationInput::new(card_id, account_id),
        )
        .await
    }
}

/// Caller-supplied fields of a make-operation request
///
/// Anything left as `None` is generated when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationInput {
    pub card_id: String,
    pub account_id: String,
    pub status: Option<OperationStatus>,
    pub amount: Option<f64>,
    /// Only sent for purchases
    pub category: Option<String>,
}

impl OperationInput {
    pub fn new(card_id: impl Into<String>, account_id: impl Into<String>) -> Self {
        Self {
            card_id: card_id.into(),
            account_id: account_id.into(),
            status: None,
            amount: None,
            category: None,
        }
    }

    pub fn with_status(mut self, status: OperationStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Fill every omitted field from `faker`
    pub fn fill(self, faker: &dyn Faker) -> OperationFields {
        OperationFields {
            status: self.status.unwrap_or_else(|| faker.operation_status()),
            amount: self.amount.unwrap_or_else(|| faker.amount()),
            category: self.category.unwrap_or_else(|| faker.category()),
            card_id: self.card_id,
            account_id: self.account_id,
        }
    }
}

/// Fully populated make-operation fields
#[derive(Debug, Clone, PartialEq)]
pub struct OperationFields {
    pub card_id: String,
    pub account_id: String,
    pub status: OperationStatus,
    pub amount: f64,
    pub category: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakers::RandomFaker;

    #[test]
    fn test_fill_keeps_supplied_values() {
        let faker = RandomFaker::seeded(9);
        let fields = OperationInput::new("card-1", "acc-1")
            .with_status(OperationStatus::Failed)
            .with_amount(12.5)
            .with_category("taxi")
            .fill(&faker);

        assert_eq!(fields.card_id, "card-1");
        assert_eq!(fields.account_id, "acc-1");
        assert_eq!(fields.status, OperationStatus::Failed);
        assert_eq!(fields.amount, 12.5);
        assert_eq!(fields.category, "taxi");
    }

    #[test]
    fn test_fill_generates_omitted_values() {
        let faker = RandomFaker::seeded(10);
        for _ in 0..100 {
            let fields = OperationInput::new("card-1", "acc-1").fill(&faker);
            assert!(fields.amount > 0.0);
            assert!(OperationStatus::REQUESTABLE.contains(&fields.status));
            assert!(!fields.category.is_empty());
        }
    }
}

//! Operation models

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Kind of a financial operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Fee,
    TopUp,
    Cashback,
    Transfer,
    Purchase,
    BillPayment,
    CashWithdrawal,
}

impl OperationType {
    pub const ALL: [OperationType; 7] = [
        OperationType::Fee,
        OperationType::TopUp,
        OperationType::Cashback,
        OperationType::Transfer,
        OperationType::Purchase,
        OperationType::BillPayment,
        OperationType::CashWithdrawal,
    ];

    /// Wire name, e.g. `TOP_UP`
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Fee => "FEE",
            OperationType::TopUp => "TOP_UP",
            OperationType::Cashback => "CASHBACK",
            OperationType::Transfer => "TRANSFER",
            OperationType::Purchase => "PURCHASE",
            OperationType::BillPayment => "BILL_PAYMENT",
            OperationType::CashWithdrawal => "CASH_WITHDRAWAL",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationStatus {
    Failed,
    Completed,
    InProgress,
    Unspecified,
}

impl OperationStatus {
    /// Statuses a client may request when creating an operation
    pub const REQUESTABLE: [OperationStatus; 3] = [
        OperationStatus::Failed,
        OperationStatus::Completed,
        OperationStatus::InProgress,
    ];
}

/// A financial operation performed with a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub id: String,
    #[serde(rename = "type")]
    pub operation_type: OperationType,
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub account_id: String,
}

/// Receipt document generated for an operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationReceipt {
    pub url: Url,
    pub document: String,
}

/// Aggregated amounts over all operations of an account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsSummary {
    pub spent_amount: f64,
    pub received_amount: f64,
    pub cashback_amount: f64,
}

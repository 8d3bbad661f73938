use serde::{Deserialize, Serialize};

use crate::gateway::OperationFields;
use crate::models::{Operation, OperationReceipt, OperationStatus, OperationsSummary};

/// Query of `GET /api/v1/operations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsQuery {
    pub account_id: String,
}

/// Query of `GET /api/v1/operations/operations-summary`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOperationsSummaryQuery {
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationResponse {
    pub operation: Operation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationsResponse {
    pub operations: Vec<Operation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationsSummaryResponse {
    pub summary: OperationsSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetOperationReceiptResponse {
    pub receipt: OperationReceipt,
}

/// Body of every `make-*-operation` endpoint except purchases
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakeOperationRequest {
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    pub account_id: String,
}

impl From<OperationFields> for MakeOperationRequest {
    fn from(fields: OperationFields) -> Self {
        Self {
            status: fields.status,
            amount: fields.amount,
            card_id: fields.card_id,
            account_id: fields.account_id,
        }
    }
}

/// Body of `make-purchase-operation`, which also carries a category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MakePurchaseOperationRequest {
    pub status: OperationStatus,
    pub amount: f64,
    pub card_id: String,
    pub account_id: String,
    pub category: String,
}

impl From<OperationFields> for MakePurchaseOperationRequest {
    fn from(fields: OperationFields) -> Self {
        Self {
            status: fields.status,
            amount: fields.amount,
            card_id: fields.card_id,
            account_id: fields.account_id,
            category: fields.category,
        }
    }
}

/// Response of every `make-*-operation` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MakeOperationResponse {
    pub operation: Operation,
}

pub type MakeFeeOperationRequest = MakeOperationRequest;
pub type MakeTopUpOperationRequest = MakeOperationRequest;
pub type MakeCashbackOperationRequest = MakeOperationRequest;
pub type MakeTransferOperationRequest = MakeOperationRequest;
pub type MakeBillPaymentOperationRequest = MakeOperationRequest;
pub type MakeCashWithdrawalOperationRequest = MakeOperationRequest;

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> OperationFields {
        OperationFields {
            card_id: "card-1".to_string(),
            account_id: "acc-1".to_string(),
            status: OperationStatus::InProgress,
            amount: 77.99,
            category: "taxi".to_string(),
        }
    }

    #[test]
    fn test_category_only_sent_for_purchases() {
        let plain = serde_json::to_value(MakeOperationRequest::from(fields())).unwrap();
        assert!(plain.get("category").is_none());
        assert_eq!(plain["status"], "IN_PROGRESS");
        assert_eq!(plain["cardId"], "card-1");

        let purchase = serde_json::to_value(MakePurchaseOperationRequest::from(fields())).unwrap();
        assert_eq!(purchase["category"], "taxi");
        assert_eq!(purchase["accountId"], "acc-1");
    }
}

use serde::{Deserialize, Serialize};

use crate::models::Card;

/// Body of both card issuing endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCardRequest {
    pub user_id: String,
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCardResponse {
    pub card: Card,
}

pub type IssueVirtualCardRequest = IssueCardRequest;
pub type IssuePhysicalCardRequest = IssueCardRequest;
pub type IssueVirtualCardResponse = IssueCardResponse;
pub type IssuePhysicalCardResponse = IssueCardResponse;

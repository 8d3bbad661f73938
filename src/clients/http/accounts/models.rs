use serde::{Deserialize, Serialize};

use crate::models::Account;

/// Query of `GET /api/v1/accounts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountsQuery {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetAccountsResponse {
    pub accounts: Vec<Account>,
}

/// Body shared by all `open-*-account` endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenAccountRequest {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenAccountResponse {
    pub account: Account,
}

pub type OpenDepositAccountRequest = OpenAccountRequest;
pub type OpenSavingsAccountRequest = OpenAccountRequest;
pub type OpenDebitCardAccountRequest = OpenAccountRequest;
pub type OpenCreditCardAccountRequest = OpenAccountRequest;

pub type OpenDepositAccountResponse = OpenAccountResponse;
pub type OpenSavingsAccountResponse = OpenAccountResponse;
pub type OpenDebitCardAccountResponse = OpenAccountResponse;
pub type OpenCreditCardAccountResponse = OpenAccountResponse;

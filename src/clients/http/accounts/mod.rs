pub mod client;
pub mod models;

pub use client::{
    build_accounts_gateway_http_client, build_accounts_gateway_load_test_http_client,
    AccountsGatewayHttpClient,
};
pub use models::{GetAccountsQuery, GetAccountsResponse, OpenAccountRequest, OpenAccountResponse};

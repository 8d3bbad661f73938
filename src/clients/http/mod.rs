//! Clients for the HTTP gateway (`/api/v1/...`, JSON bodies)

pub mod accounts;
pub mod cards;
pub mod client;
pub mod documents;
pub mod operations;
pub mod users;

pub use accounts::AccountsGatewayHttpClient;
pub use cards::CardsGatewayHttpClient;
pub use client::{
    build_gateway_http_client, build_gateway_load_test_http_client, HttpClient, RequestExtensions,
};
pub use documents::DocumentsGatewayHttpClient;
pub use operations::OperationsGatewayHttpClient;
pub use users::UsersGatewayHttpClient;

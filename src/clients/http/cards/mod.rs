pub mod client;
pub mod models;

pub use client::{
    build_cards_gateway_http_client, build_cards_gateway_load_test_http_client,
    CardsGatewayHttpClient,
};
pub use models::{IssueCardRequest, IssueCardResponse};

pub mod client;
pub mod models;

pub use client::{
    build_users_gateway_http_client, build_users_gateway_load_test_http_client,
    UsersGatewayHttpClient,
};
pub use models::{CreateUserRequest, CreateUserResponse, GetUserResponse};

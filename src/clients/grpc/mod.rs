//! Clients for the gRPC gateway (`contracts.services.gateway.*`)
//!
//! Each service client wraps a stub trait object. Production stubs are the
//! generated tonic clients over a lazily connected [`tonic::transport::Channel`];
//! tests substitute in-memory implementations.

pub mod accounts;
pub mod cards;
pub mod client;
pub mod documents;
pub mod operations;
pub mod users;

pub use accounts::{
    build_accounts_gateway_grpc_client, build_accounts_gateway_load_test_grpc_client,
    AccountsGatewayGrpcClient, AccountsGatewayStub,
};
pub use cards::{
    build_cards_gateway_grpc_client, build_cards_gateway_load_test_grpc_client,
    CardsGatewayGrpcClient, CardsGatewayStub,
};
pub use client::{build_gateway_grpc_channel, build_gateway_load_test_grpc_channel, GrpcClient};
pub use documents::{
    build_documents_gateway_grpc_client, build_documents_gateway_load_test_grpc_client,
    DocumentsGatewayGrpcClient, DocumentsGatewayStub,
};
pub use operations::{
    build_operations_gateway_grpc_client, build_operations_gateway_load_test_grpc_client,
    OperationsGatewayGrpcClient, OperationsGatewayStub,
};
pub use users::{
    build_users_gateway_grpc_client, build_users_gateway_load_test_grpc_client,
    UsersGatewayGrpcClient, UsersGatewayStub,
};

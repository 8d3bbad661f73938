pub mod client;
pub mod models;

pub use client::{
    build_operations_gateway_http_client, build_operations_gateway_load_test_http_client,
    OperationsGatewayHttpClient,
};
pub use models::{
    GetOperationReceiptResponse, GetOperationResponse, GetOperationsQuery, GetOperationsResponse,
    GetOperationsSummaryQuery, GetOperationsSummaryResponse, MakeOperationRequest,
    MakeOperationResponse, MakePurchaseOperationRequest,
};

pub mod client;
pub mod models;

pub use client::{
    build_documents_gateway_http_client, build_documents_gateway_load_test_http_client,
    DocumentsGatewayHttpClient,
};
pub use models::{GetContractDocumentResponse, GetTariffDocumentResponse};

use async_trait::async_trait;
use reqwest::Response;

use super::models::{GetContractDocumentResponse, GetTariffDocumentResponse};
use crate::clients::http::client::{
    build_gateway_http_client, build_gateway_load_test_http_client, decode_response, HttpClient,
};
use crate::config::HttpClientConfig;
use crate::error::{ClientError, TransportError};
use crate::gateway::DocumentsGateway;
use crate::load::LoadTestEnvironment;
use crate::models::Document;

/// Client for `/api/v1/documents` of the HTTP gateway
pub struct DocumentsGatewayHttpClient {
    client: HttpClient,
}

impl DocumentsGatewayHttpClient {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// GET /api/v1/documents/tariff-document/{account_id}
    pub async fn get_tariff_document_api(
        &self,
        account_id: &str,
    ) -> Result<Response, TransportError> {
        self.client
            .get_resource(
                "/api/v1/documents/tariff-document",
                account_id,
                "/api/v1/documents/tariff-document/{account_id}",
            )
            .await
    }

    /// GET /api/v1/documents/contract-document/{account_id}
    pub async fn get_contract_document_api(
        &self,
        account_id: &str,
    ) -> Result<Response, TransportError> {
        self.client
            .get_resource(
                "/api/v1/documents/contract-document",
                account_id,
                "/api/v1/documents/contract-document/{account_id}",
            )
            .await
    }
}

#[async_trait]
impl DocumentsGateway for DocumentsGatewayHttpClient {
    async fn get_tariff_document(&self, account_id: &str) -> Result<Document, ClientError> {
        let response = self.get_tariff_document_api(account_id).await?;
        let body: GetTariffDocumentResponse = decode_response(response).await?;
        Ok(body.tariff)
    }

    async fn get_contract_document(&self, account_id: &str) -> Result<Document, ClientError> {
        let response = self.get_contract_document_api(account_id).await?;
        let body: GetContractDocumentResponse = decode_response(response).await?;
        Ok(body.contract)
    }
}

pub fn build_documents_gateway_http_client(
    config: &HttpClientConfig,
) -> Result<DocumentsGatewayHttpClient, TransportError> {
    Ok(DocumentsGatewayHttpClient::new(build_gateway_http_client(config)?))
}

pub fn build_documents_gateway_load_test_http_client(
    environment: &LoadTestEnvironment,
) -> Result<DocumentsGatewayHttpClient, TransportError> {
    Ok(DocumentsGatewayHttpClient::new(
        build_gateway_load_test_http_client(environment)?,
    ))
}

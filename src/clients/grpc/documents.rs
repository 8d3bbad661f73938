use std::sync::Arc;

use async_trait::async_trait;
use tonic::transport::Channel;
use tonic::Status;
use url::Url;

use super::client::{
    build_gateway_grpc_channel, build_gateway_load_test_grpc_channel, required, GrpcClient,
};
use crate::config::GrpcClientConfig;
use crate::contracts::documents::documents_gateway_service_client::DocumentsGatewayServiceClient;
use crate::contracts::documents::{
    self as proto, GetContractDocumentRequest, GetContractDocumentResponse,
    GetTariffDocumentRequest, GetTariffDocumentResponse,
};
use crate::error::{ClientError, DecodeError, TransportError};
use crate::gateway::DocumentsGateway;
use crate::load::LoadTestEnvironment;
use crate::models::Document;

#[async_trait]
pub trait DocumentsGatewayStub: Send + Sync {
    async fn get_tariff_document(
        &self,
        request: GetTariffDocumentRequest,
    ) -> Result<GetTariffDocumentResponse, Status>;

    async fn get_contract_document(
        &self,
        request: GetContractDocumentRequest,
    ) -> Result<GetContractDocumentResponse, Status>;
}

#[async_trait]
impl DocumentsGatewayStub for DocumentsGatewayServiceClient<Channel> {
    async fn get_tariff_document(
        &self,
        request: GetTariffDocumentRequest,
    ) -> Result<GetTariffDocumentResponse, Status> {
        let mut client = self.clone();
        DocumentsGatewayServiceClient::get_tariff_document(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }

    async fn get_contract_document(
        &self,
        request: GetContractDocumentRequest,
    ) -> Result<GetContractDocumentResponse, Status> {
        let mut client = self.clone();
        DocumentsGatewayServiceClient::get_contract_document(&mut client, request)
            .await
            .map(tonic::Response::into_inner)
    }
}

impl TryFrom<proto::Document> for Document {
    type Error = DecodeError;

    fn try_from(message: proto::Document) -> Result<Self, Self::Error> {
        let url = Url::parse(&message.url)
            .map_err(|source| DecodeError::InvalidUrl { field: "url", source })?;
        Ok(Document {
            url,
            document: message.document,
        })
    }
}

/// gRPC client for `DocumentsGatewayService`
pub struct DocumentsGatewayGrpcClient {
    client: GrpcClient<dyn DocumentsGatewayStub>,
}

impl DocumentsGatewayGrpcClient {
    pub fn new(stub: Arc<dyn DocumentsGatewayStub>) -> Self {
        Self {
            client: GrpcClient::new(stub),
        }
    }

    pub fn with_environment(mut self, environment: &LoadTestEnvironment) -> Self {
        self.client = self.client.with_listener(environment.listener.clone());
        self
    }

    pub async fn get_tariff_document_api(
        &self,
        request: GetTariffDocumentRequest,
    ) -> Result<GetTariffDocumentResponse, TransportError> {
        self.client
            .observe(
                "GetTariffDocument",
                self.client.stub().get_tariff_document(request),
            )
            .await
    }

    pub async fn get_contract_document_api(
        &self,
        request: GetContractDocumentRequest,
    ) -> Result<GetContractDocumentResponse, TransportError> {
        self.client
            .observe(
                "GetContractDocument",
                self.client.stub().get_contract_document(request),
            )
            .await
    }
}

#[async_trait]
impl DocumentsGateway for DocumentsGatewayGrpcClient {
    async fn get_tariff_document(&self, account_id: &str) -> Result<Document, ClientError> {
        let request = GetTariffDocumentRequest {
            account_id: account_id.to_string(),
        };
        let response = self.get_tariff_document_api(request).await?;
        let tariff = required(response.tariff, "GetTariffDocumentResponse", "tariff")?;
        Ok(Document::try_from(tariff)?)
    }

    async fn get_contract_document(&self, account_id: &str) -> Result<Document, ClientError> {
        let request = GetContractDocumentRequest {
            account_id: account_id.to_string(),
        };
        let response = self.get_contract_document_api(request).await?;
        let contract = required(response.contract, "GetContractDocumentResponse", "contract")?;
        Ok(Document::try_from(contract)?)
    }
}

pub fn build_documents_gateway_grpc_client(
    config: &GrpcClientConfig,
) -> Result<DocumentsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_grpc_channel(config)?;
    Ok(DocumentsGatewayGrpcClient::new(Arc::new(
        DocumentsGatewayServiceClient::new(channel),
    )))
}

pub fn build_documents_gateway_load_test_grpc_client(
    environment: &LoadTestEnvironment,
) -> Result<DocumentsGatewayGrpcClient, TransportError> {
    let channel = build_gateway_load_test_grpc_channel(environment)?;
    Ok(
        DocumentsGatewayGrpcClient::new(Arc::new(DocumentsGatewayServiceClient::new(channel)))
            .with_environment(environment),
    )
}

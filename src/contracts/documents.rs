// @generated
// Generated from: proto/contracts/services/gateway/documents/documents_gateway_service.proto
// Manual check-in for offline builds.

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Document {
    #[prost(string, tag = "1")]
    pub url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub document: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTariffDocumentRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetTariffDocumentResponse {
    #[prost(message, optional, tag = "1")]
    pub tariff: ::core::option::Option<Document>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContractDocumentRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetContractDocumentResponse {
    #[prost(message, optional, tag = "1")]
    pub contract: ::core::option::Option<Document>,
}

pub mod documents_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct DocumentsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl DocumentsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> DocumentsGatewayServiceClient<T>
    where
        T: tonic::client::GrpcService<tonic::body::BoxBody>,
        T::ResponseBody: Body + Send + 'static,
        T::Error: Into<StdError>,
        <T::ResponseBody as Body>::Error: Into<StdError> + Send,
        <T::ResponseBody as Body>::Data: Into<Bytes> + Send,
    {
        pub fn new(inner: T) -> Self {
            let inner = tonic::client::Grpc::new(inner);
            Self { inner }
        }

        pub async fn get_tariff_document(
            &mut self,
            request: impl tonic::IntoRequest<super::GetTariffDocumentRequest>,
        ) -> Result<tonic::Response<super::GetTariffDocumentResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.documents.DocumentsGatewayService/GetTariffDocument",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_contract_document(
            &mut self,
            request: impl tonic::IntoRequest<super::GetContractDocumentRequest>,
        ) -> Result<tonic::Response<super::GetContractDocumentResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.documents.DocumentsGatewayService/GetContractDocument",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

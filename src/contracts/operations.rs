// @generated
// Generated from: proto/contracts/services/gateway/operations/operations_gateway_service.proto
// Manual check-in for offline builds.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationType {
    Unspecified = 0,
    Fee = 1,
    TopUp = 2,
    Cashback = 3,
    Transfer = 4,
    Purchase = 5,
    BillPayment = 6,
    CashWithdrawal = 7,
}

impl OperationType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "OPERATION_TYPE_UNSPECIFIED",
            Self::Fee => "OPERATION_TYPE_FEE",
            Self::TopUp => "OPERATION_TYPE_TOP_UP",
            Self::Cashback => "OPERATION_TYPE_CASHBACK",
            Self::Transfer => "OPERATION_TYPE_TRANSFER",
            Self::Purchase => "OPERATION_TYPE_PURCHASE",
            Self::BillPayment => "OPERATION_TYPE_BILL_PAYMENT",
            Self::CashWithdrawal => "OPERATION_TYPE_CASH_WITHDRAWAL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum OperationStatus {
    Unspecified = 0,
    Failed = 1,
    Completed = 2,
    InProgress = 3,
}

impl OperationStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "OPERATION_STATUS_UNSPECIFIED",
            Self::Failed => "OPERATION_STATUS_FAILED",
            Self::Completed => "OPERATION_STATUS_COMPLETED",
            Self::InProgress => "OPERATION_STATUS_IN_PROGRESS",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Operation {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "OperationType", tag = "2")]
    pub r#type: i32,
    #[prost(enumeration = "OperationStatus", tag = "3")]
    pub status: i32,
    #[prost(double, tag = "4")]
    pub amount: f64,
    #[prost(string, tag = "5")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "6")]
    pub category: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "7")]
    pub created_at: ::core::option::Option<::prost_types::Timestamp>,
    #[prost(string, tag = "8")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationReceipt {
    #[prost(string, tag = "1")]
    pub url: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub document: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OperationsSummary {
    #[prost(double, tag = "1")]
    pub spent_amount: f64,
    #[prost(double, tag = "2")]
    pub received_amount: f64,
    #[prost(double, tag = "3")]
    pub cashback_amount: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationRequest {
    #[prost(string, tag = "1")]
    pub operation_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationReceiptRequest {
    #[prost(string, tag = "1")]
    pub operation_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationReceiptResponse {
    #[prost(message, optional, tag = "1")]
    pub receipt: ::core::option::Option<OperationReceipt>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsResponse {
    #[prost(message, repeated, tag = "1")]
    pub operations: ::prost::alloc::vec::Vec<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsSummaryRequest {
    #[prost(string, tag = "1")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetOperationsSummaryResponse {
    #[prost(message, optional, tag = "1")]
    pub summary: ::core::option::Option<OperationsSummary>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeFeeOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeFeeOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTopUpOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTopUpOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashbackOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashbackOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTransferOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeTransferOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakePurchaseOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "5")]
    pub category: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakePurchaseOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeBillPaymentOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeBillPaymentOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashWithdrawalOperationRequest {
    #[prost(enumeration = "OperationStatus", tag = "1")]
    pub status: i32,
    #[prost(double, tag = "2")]
    pub amount: f64,
    #[prost(string, tag = "3")]
    pub card_id: ::prost::alloc::string::String,
    #[prost(string, tag = "4")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct MakeCashWithdrawalOperationResponse {
    #[prost(message, optional, tag = "1")]
    pub operation: ::core::option::Option<Operation>,
}

pub mod operations_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct OperationsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl OperationsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> OperationsGatewayServiceClient<T>
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

        pub async fn get_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationRequest>,
        ) -> Result<tonic::Response<super::GetOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/GetOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_operation_receipt(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationReceiptRequest>,
        ) -> Result<tonic::Response<super::GetOperationReceiptResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/GetOperationReceipt",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_operations(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationsRequest>,
        ) -> Result<tonic::Response<super::GetOperationsResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/GetOperations",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn get_operations_summary(
            &mut self,
            request: impl tonic::IntoRequest<super::GetOperationsSummaryRequest>,
        ) -> Result<tonic::Response<super::GetOperationsSummaryResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/GetOperationsSummary",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_fee_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeFeeOperationRequest>,
        ) -> Result<tonic::Response<super::MakeFeeOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakeFeeOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_top_up_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeTopUpOperationRequest>,
        ) -> Result<tonic::Response<super::MakeTopUpOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakeTopUpOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_cashback_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeCashbackOperationRequest>,
        ) -> Result<tonic::Response<super::MakeCashbackOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakeCashbackOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_transfer_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeTransferOperationRequest>,
        ) -> Result<tonic::Response<super::MakeTransferOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakeTransferOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_purchase_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakePurchaseOperationRequest>,
        ) -> Result<tonic::Response<super::MakePurchaseOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakePurchaseOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_bill_payment_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeBillPaymentOperationRequest>,
        ) -> Result<tonic::Response<super::MakeBillPaymentOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakeBillPaymentOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn make_cash_withdrawal_operation(
            &mut self,
            request: impl tonic::IntoRequest<super::MakeCashWithdrawalOperationRequest>,
        ) -> Result<tonic::Response<super::MakeCashWithdrawalOperationResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.operations.OperationsGatewayService/MakeCashWithdrawalOperation",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

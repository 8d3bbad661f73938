// @generated
// Generated from: proto/contracts/services/gateway/cards/cards_gateway_service.proto
// Manual check-in for offline builds.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardType {
    Unspecified = 0,
    Virtual = 1,
    Physical = 2,
}

impl CardType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CARD_TYPE_UNSPECIFIED",
            Self::Virtual => "CARD_TYPE_VIRTUAL",
            Self::Physical => "CARD_TYPE_PHYSICAL",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardStatus {
    Unspecified = 0,
    Active = 1,
    Frozen = 2,
    Closed = 3,
    Blocked = 4,
}

impl CardStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CARD_STATUS_UNSPECIFIED",
            Self::Active => "CARD_STATUS_ACTIVE",
            Self::Frozen => "CARD_STATUS_FROZEN",
            Self::Closed => "CARD_STATUS_CLOSED",
            Self::Blocked => "CARD_STATUS_BLOCKED",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum CardPaymentSystem {
    Unspecified = 0,
    Visa = 1,
    Mastercard = 2,
}

impl CardPaymentSystem {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "CARD_PAYMENT_SYSTEM_UNSPECIFIED",
            Self::Visa => "CARD_PAYMENT_SYSTEM_VISA",
            Self::Mastercard => "CARD_PAYMENT_SYSTEM_MASTERCARD",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Card {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub pin: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub cvv: ::prost::alloc::string::String,
    #[prost(enumeration = "CardType", tag = "4")]
    pub r#type: i32,
    #[prost(enumeration = "CardStatus", tag = "5")]
    pub status: i32,
    #[prost(string, tag = "6")]
    pub account_id: ::prost::alloc::string::String,
    #[prost(string, tag = "7")]
    pub card_number: ::prost::alloc::string::String,
    #[prost(string, tag = "8")]
    pub card_holder: ::prost::alloc::string::String,
    #[prost(string, tag = "9")]
    pub expiry_date: ::prost::alloc::string::String,
    #[prost(enumeration = "CardPaymentSystem", tag = "10")]
    pub payment_system: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssueVirtualCardRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssueVirtualCardResponse {
    #[prost(message, optional, tag = "1")]
    pub card: ::core::option::Option<Card>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssuePhysicalCardRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub account_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IssuePhysicalCardResponse {
    #[prost(message, optional, tag = "1")]
    pub card: ::core::option::Option<Card>,
}

pub mod cards_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct CardsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl CardsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> CardsGatewayServiceClient<T>
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

        pub async fn issue_virtual_card(
            &mut self,
            request: impl tonic::IntoRequest<super::IssueVirtualCardRequest>,
        ) -> Result<tonic::Response<super::IssueVirtualCardResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.cards.CardsGatewayService/IssueVirtualCard",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn issue_physical_card(
            &mut self,
            request: impl tonic::IntoRequest<super::IssuePhysicalCardRequest>,
        ) -> Result<tonic::Response<super::IssuePhysicalCardResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.cards.CardsGatewayService/IssuePhysicalCard",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

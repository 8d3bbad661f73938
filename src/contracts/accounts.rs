// @generated
// Generated from: proto/contracts/services/gateway/accounts/accounts_gateway_service.proto
// Manual check-in for offline builds.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountType {
    Unspecified = 0,
    Deposit = 1,
    Savings = 2,
    DebitCard = 3,
    CreditCard = 4,
}

impl AccountType {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "ACCOUNT_TYPE_UNSPECIFIED",
            Self::Deposit => "ACCOUNT_TYPE_DEPOSIT",
            Self::Savings => "ACCOUNT_TYPE_SAVINGS",
            Self::DebitCard => "ACCOUNT_TYPE_DEBIT_CARD",
            Self::CreditCard => "ACCOUNT_TYPE_CREDIT_CARD",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum AccountStatus {
    Unspecified = 0,
    Active = 1,
    PendingClosure = 2,
    Closed = 3,
}

impl AccountStatus {
    /// String value of the enum field names used in the ProtoBuf definition.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Unspecified => "ACCOUNT_STATUS_UNSPECIFIED",
            Self::Active => "ACCOUNT_STATUS_ACTIVE",
            Self::PendingClosure => "ACCOUNT_STATUS_PENDING_CLOSURE",
            Self::Closed => "ACCOUNT_STATUS_CLOSED",
        }
    }
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Account {
    #[prost(string, tag = "1")]
    pub id: ::prost::alloc::string::String,
    #[prost(enumeration = "AccountType", tag = "2")]
    pub r#type: i32,
    #[prost(message, repeated, tag = "3")]
    pub cards: ::prost::alloc::vec::Vec<super::cards::Card>,
    #[prost(enumeration = "AccountStatus", tag = "4")]
    pub status: i32,
    #[prost(double, tag = "5")]
    pub balance: f64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetAccountsResponse {
    #[prost(message, repeated, tag = "1")]
    pub accounts: ::prost::alloc::vec::Vec<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDepositAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDepositAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenSavingsAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenSavingsAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDebitCardAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenDebitCardAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenCreditCardAccountRequest {
    #[prost(string, tag = "1")]
    pub user_id: ::prost::alloc::string::String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct OpenCreditCardAccountResponse {
    #[prost(message, optional, tag = "1")]
    pub account: ::core::option::Option<Account>,
}

pub mod accounts_gateway_service_client {
    #![allow(clippy::derive_partial_eq_without_eq)]
    use tonic::codegen::*;

    #[derive(Debug, Clone)]
    pub struct AccountsGatewayServiceClient<T> {
        inner: tonic::client::Grpc<T>,
    }

    impl AccountsGatewayServiceClient<tonic::transport::Channel> {
        pub async fn connect<D>(dst: D) -> Result<Self, tonic::transport::Error>
        where
            D: TryInto<tonic::transport::Endpoint>,
            D::Error: Into<StdError>,
        {
            let conn = tonic::transport::Endpoint::new(dst)?.connect().await?;
            Ok(Self::new(conn))
        }
    }

    impl<T> AccountsGatewayServiceClient<T>
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

        pub async fn get_accounts(
            &mut self,
            request: impl tonic::IntoRequest<super::GetAccountsRequest>,
        ) -> Result<tonic::Response<super::GetAccountsResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.accounts.AccountsGatewayService/GetAccounts",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_deposit_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenDepositAccountRequest>,
        ) -> Result<tonic::Response<super::OpenDepositAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.accounts.AccountsGatewayService/OpenDepositAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_savings_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenSavingsAccountRequest>,
        ) -> Result<tonic::Response<super::OpenSavingsAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.accounts.AccountsGatewayService/OpenSavingsAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_debit_card_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenDebitCardAccountRequest>,
        ) -> Result<tonic::Response<super::OpenDebitCardAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.accounts.AccountsGatewayService/OpenDebitCardAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }

        pub async fn open_credit_card_account(
            &mut self,
            request: impl tonic::IntoRequest<super::OpenCreditCardAccountRequest>,
        ) -> Result<tonic::Response<super::OpenCreditCardAccountResponse>, tonic::Status> {
            self.inner.ready().await.map_err(|e| {
                tonic::Status::new(
                    tonic::Code::Unknown,
                    format!("Service was not ready: {}", e.into()),
                )
            })?;
            let codec = tonic::codec::ProstCodec::default();
            let path = tonic::codegen::http::uri::PathAndQuery::from_static(
                "/contracts.services.gateway.accounts.AccountsGatewayService/OpenCreditCardAccount",
            );
            self.inner.unary(request.into_request(), path, codec).await
        }
    }
}

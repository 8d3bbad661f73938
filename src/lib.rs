//! Typed clients for the banking-demo gateway
//!
//! Every service (users, accounts, cards, documents, operations) is reachable
//! over HTTP (`clients::http`) and gRPC (`clients::grpc`). Each client exposes
//! raw `*_api` methods, one per endpoint, and implements the matching trait
//! from [`gateway`], which fills request fields from a [`fakers::Faker`] and
//! decodes responses into [`models`].

pub mod clients;
pub mod config;
pub mod contracts;
pub mod error;
pub mod fakers;
pub mod gateway;
pub mod load;
pub mod models;
pub mod scenarios;

pub use config::{GrpcClientConfig, HttpClientConfig, Settings};
pub use error::{ClientError, ConfigError, DecodeError, TransportError};
pub use fakers::{Faker, RandomFaker};
pub use gateway::{
    AccountsGateway, CardsGateway, DocumentsGateway, OperationInput, OperationsGateway,
    UsersGateway,
};
pub use load::{LoadTestEnvironment, RequestEvent, RequestListener, RequestStats};

//! gRPC contracts of the gateway services
//!
//! Generated from `proto/contracts/services/gateway/**` and checked in, so the
//! crate builds without `protoc`. Regenerate with tonic-build when a contract
//! changes; do not edit the generated files by hand.

#![allow(clippy::all)]

pub mod accounts;
pub mod cards;
pub mod documents;
pub mod operations;
pub mod users;

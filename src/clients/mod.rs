//! Per-service gateway clients over HTTP and gRPC

pub mod grpc;
pub mod http;

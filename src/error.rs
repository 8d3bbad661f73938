//! Error taxonomy for the gateway clients
//!
//! Transport failures and decode failures are kept apart so callers can tell
//! "the gateway did not answer properly" from "the gateway answered with a
//! shape we do not understand". Neither is retried or translated.

use thiserror::Error;

/// The request never produced a usable response
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection refused, timeout, or any other reqwest failure
    #[error("request {method} {route} failed: {source}")]
    Request {
        method: &'static str,
        route: String,
        #[source]
        source: reqwest::Error,
    },

    /// The gateway answered with a non-2xx status
    #[error("{method} {route} returned HTTP {status}: {body}")]
    Status {
        method: &'static str,
        route: String,
        status: u16,
        body: String,
    },

    /// A gRPC call ended with a non-OK status
    #[error("rpc {method} failed: {status}")]
    Rpc {
        method: &'static str,
        #[source]
        status: tonic::Status,
    },

    /// The configured address cannot be turned into an endpoint
    #[error("invalid gateway address {address}: {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("invalid value for header {name}: {reason}")]
    InvalidHeader { name: &'static str, reason: String },

    /// The underlying HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
}

impl TransportError {
    /// HTTP status code for [`TransportError::Status`], `None` otherwise
    pub fn status_code(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The gateway answered but the payload does not match the contract
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid JSON body for {route}: {source}")]
    Json {
        route: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{message} is missing required field `{field}`")]
    MissingField {
        message: &'static str,
        field: &'static str,
    },

    #[error("{message}.{field} has unknown enum value {value}")]
    UnknownEnum {
        message: &'static str,
        field: &'static str,
        value: i32,
    },

    #[error("{field} is not a valid URL: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{field} is not a valid timestamp")]
    InvalidTimestamp { field: &'static str },

    #[error("{field} is not a valid date: {value}")]
    InvalidDate { field: &'static str, value: String },
}

/// Error returned by the high-level client methods
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// An environment variable holds a value that cannot be parsed
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{name} must be {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_only_for_http_status() {
        let err = TransportError::Status {
            method: "GET",
            route: "/api/v1/users/{user_id}".to_string(),
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.status_code(), Some(404));
        assert!(err.to_string().contains("HTTP 404"));

        let rpc = TransportError::Rpc {
            method: "GetUser",
            status: tonic::Status::not_found("user"),
        };
        assert_eq!(rpc.status_code(), None);
    }

    #[test]
    fn test_client_error_is_transparent() {
        let err: ClientError = DecodeError::MissingField {
            message: "GetUserResponse",
            field: "user",
        }
        .into();
        assert_eq!(err.to_string(), "GetUserResponse is missing required field `user`");
    }
}

use std::future::Future;
use std::sync::Arc;
use std::time::Instant;

use tonic::transport::{Channel, Endpoint};
use tracing::{debug, warn};

use crate::config::GrpcClientConfig;
use crate::error::{DecodeError, TransportError};
use crate::load::{LoadTestEnvironment, RequestEvent, RequestListener};

/// Shared part of every gRPC gateway client: the service stub and an
/// optional load-test listener
pub struct GrpcClient<S: ?Sized> {
    stub: Arc<S>,
    listener: Option<Arc<dyn RequestListener>>,
}

impl<S: ?Sized> GrpcClient<S> {
    pub fn new(stub: Arc<S>) -> Self {
        Self {
            stub,
            listener: None,
        }
    }

    pub fn with_listener(mut self, listener: Arc<dyn RequestListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn stub(&self) -> &S {
        &self.stub
    }

    /// Await one RPC, report it to the listener and map a failed status
    pub async fn observe<F, R>(&self, method: &'static str, call: F) -> Result<R, TransportError>
    where
        F: Future<Output = Result<R, tonic::Status>>,
        R: prost::Message,
    {
        debug!("rpc {}", method);
        let started = Instant::now();
        let result = call.await;

        if let Some(listener) = &self.listener {
            let (response_length, error) = match &result {
                Ok(message) => (message.encoded_len(), None),
                Err(status) => (0, Some(status.to_string())),
            };
            listener.on_request(&RequestEvent {
                request_type: "gRPC",
                name: method.to_string(),
                response_time: started.elapsed(),
                response_length,
                error,
            });
        }

        result.map_err(|status| {
            warn!("rpc {} failed: {}", method, status);
            TransportError::Rpc { method, status }
        })
    }
}

/// Build a channel to the gRPC gateway
///
/// The connection is established on the first call, so this must run inside
/// a tokio runtime but never blocks.
pub fn build_gateway_grpc_channel(config: &GrpcClientConfig) -> Result<Channel, TransportError> {
    let address = config.endpoint();
    let endpoint = Endpoint::from_shared(address.clone())
        .map_err(|e| TransportError::InvalidAddress {
            address,
            reason: e.to_string(),
        })?
        .timeout(config.timeout)
        .connect_timeout(config.timeout);

    Ok(endpoint.connect_lazy())
}

/// Build a channel to the load-test environment host
///
/// A bare `host:port` is treated as plaintext `http://host:port`.
pub fn build_gateway_load_test_grpc_channel(
    environment: &LoadTestEnvironment,
) -> Result<Channel, TransportError> {
    let address = if environment.host.contains("://") {
        environment.host.clone()
    } else {
        format!("http://{}", environment.host)
    };

    let endpoint = Endpoint::from_shared(address.clone())
        .map_err(|e| TransportError::InvalidAddress {
            address,
            reason: e.to_string(),
        })?
        .timeout(GrpcClientConfig::default().timeout);

    Ok(endpoint.connect_lazy())
}

/// Unwrap a singular message field that the contract always sets
pub(crate) fn required<T>(
    value: Option<T>,
    message: &'static str,
    field: &'static str,
) -> Result<T, DecodeError> {
    value.ok_or(DecodeError::MissingField { message, field })
}

/// Map a raw enum value, rejecting unknown values
pub(crate) fn enum_value<E>(value: i32, message: &'static str, field: &'static str) -> Result<E, DecodeError>
where
    E: TryFrom<i32>,
{
    E::try_from(value).map_err(|_| DecodeError::UnknownEnum {
        message,
        field,
        value,
    })
}

//! Gateway connection settings read from the environment
//!
//! `.env` is loaded by the binary with `dotenv`; library users can build the
//! structs directly.

use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

const DEFAULT_HTTP_URL: &str = "http://localhost:8003";
const DEFAULT_GRPC_HOST: &str = "localhost";
const DEFAULT_GRPC_PORT: u16 = 9003;
const DEFAULT_TIMEOUT_SECS: u64 = 100;

/// HTTP gateway settings
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    pub url: Url,
    pub timeout: Duration,
    /// Sent as `Authorization: Bearer <token>` when set
    pub auth_token: Option<String>,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_HTTP_URL).expect("default HTTP URL is valid"),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            auth_token: None,
        }
    }
}

/// gRPC gateway settings
#[derive(Debug, Clone)]
pub struct GrpcClientConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
}

impl GrpcClientConfig {
    /// Endpoint URI understood by tonic, e.g. `http://localhost:9003`
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for GrpcClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_GRPC_HOST.to_string(),
            port: DEFAULT_GRPC_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// All gateway settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub http_client: HttpClientConfig,
    pub grpc_client: GrpcClientConfig,
}

impl Settings {
    /// Read settings from process environment variables
    ///
    /// Unset variables fall back to the local docker-compose defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_url = lookup("GATEWAY_HTTP_URL").unwrap_or_else(|| DEFAULT_HTTP_URL.to_string());
        let url = Url::parse(&http_url).map_err(|source| ConfigError::InvalidUrl {
            name: "GATEWAY_HTTP_URL",
            value: http_url.clone(),
            source,
        })?;

        let http_client = HttpClientConfig {
            url,
            timeout: parse_secs(&lookup, "GATEWAY_HTTP_TIMEOUT_SECS")?,
            auth_token: lookup("GATEWAY_AUTH_TOKEN").filter(|t| !t.trim().is_empty()),
        };

        let port = match lookup("GATEWAY_GRPC_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "GATEWAY_GRPC_PORT",
                expected: "a port number",
                value: raw,
            })?,
            None => DEFAULT_GRPC_PORT,
        };

        let grpc_client = GrpcClientConfig {
            host: lookup("GATEWAY_GRPC_HOST").unwrap_or_else(|| DEFAULT_GRPC_HOST.to_string()),
            port,
            timeout: parse_secs(&lookup, "GATEWAY_GRPC_TIMEOUT_SECS")?,
        };

        Ok(Self {
            http_client,
            grpc_client,
        })
    }
}

fn parse_secs<F>(lookup: &F, name: &'static str) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidValue {
                name,
                expected: "a whole number of seconds",
                value: raw,
            }),
        None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(settings.http_client.url.as_str(), "http://localhost:8003/");
        assert_eq!(settings.http_client.timeout, Duration::from_secs(100));
        assert!(settings.http_client.auth_token.is_none());
        assert_eq!(settings.grpc_client.endpoint(), "http://localhost:9003");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("GATEWAY_HTTP_URL", "http://gateway:8080"),
            ("GATEWAY_HTTP_TIMEOUT_SECS", "5"),
            ("GATEWAY_AUTH_TOKEN", "secret"),
            ("GATEWAY_GRPC_HOST", "grpc-gateway"),
            ("GATEWAY_GRPC_PORT", "50051"),
        ]))
        .unwrap();

        assert_eq!(settings.http_client.url.host_str(), Some("gateway"));
        assert_eq!(settings.http_client.timeout, Duration::from_secs(5));
        assert_eq!(settings.http_client.auth_token.as_deref(), Some("secret"));
        assert_eq!(settings.grpc_client.endpoint(), "http://grpc-gateway:50051");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[("GATEWAY_GRPC_PORT", "ninety")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "GATEWAY_GRPC_PORT", .. }));
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        let err = Settings::from_lookup(lookup_from(&[("GATEWAY_HTTP_URL", "::nope")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }
}

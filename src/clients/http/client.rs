use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::HttpClientConfig;
use crate::error::{ClientError, DecodeError, TransportError};
use crate::load::{LoadTestEnvironment, RequestEvent, RequestListener};

/// Use as the `query` argument of [`HttpClient::get`] when there is none
pub const NO_QUERY: Option<&'static ()> = None;

/// Per-request options that do not go on the wire
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestExtensions {
    /// Logical route name used for load statistics, e.g.
    /// `/api/v1/operations/{operation_id}`. Defaults to the concrete path.
    pub route: Option<&'static str>,
}

impl RequestExtensions {
    pub fn route(route: &'static str) -> Self {
        Self { route: Some(route) }
    }
}

/// Thin wrapper over one `reqwest::Client` bound to a gateway base URL
///
/// Every call is a single attempt. Connection failures, timeouts and non-2xx
/// statuses all come back as [`TransportError`].
#[derive(Clone)]
pub struct HttpClient {
    http_client: Client,
    base_url: Url,
    listener: Option<Arc<dyn RequestListener>>,
}

impl HttpClient {
    /// Wrap an already configured reqwest client
    pub fn new(http_client: Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
            listener: None,
        }
    }

    /// Report every request to `listener`
    pub fn with_listener(mut self, listener: Arc<dyn RequestListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// GET `path` with optional query parameters
    pub async fn get<Q>(&self, path: &str, query: Option<&Q>) -> Result<Response, TransportError>
    where
        Q: Serialize + ?Sized,
    {
        self.get_with(path, query, RequestExtensions::default()).await
    }

    pub async fn get_with<Q>(
        &self,
        path: &str,
        query: Option<&Q>,
        extensions: RequestExtensions,
    ) -> Result<Response, TransportError>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        let mut request = self.http_client.get(url);
        if let Some(query) = query {
            request = request.query(query);
        }
        self.send("GET", path, request, extensions).await
    }

    /// POST `path` with an optional JSON body
    pub async fn post<B>(&self, path: &str, body: Option<&B>) -> Result<Response, TransportError>
    where
        B: Serialize + ?Sized,
    {
        self.post_with(path, body, RequestExtensions::default()).await
    }

    pub async fn post_with<B>(
        &self,
        path: &str,
        body: Option<&B>,
        extensions: RequestExtensions,
    ) -> Result<Response, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path)?;
        let mut request = self.http_client.post(url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send("POST", path, request, extensions).await
    }

    /// GET `collection/{id}`, sending `id` as a single path segment
    ///
    /// `route` names the request in load statistics, e.g.
    /// `/api/v1/users/{user_id}`.
    pub async fn get_resource(
        &self,
        collection: &str,
        id: &str,
        route: &'static str,
    ) -> Result<Response, TransportError> {
        let url = self.url_with_segments(collection, &[id])?;
        let path = format!("{}/{}", collection.trim_end_matches('/'), id);
        let request = self.http_client.get(url);
        self.send("GET", &path, request, RequestExtensions::route(route)).await
    }

    fn url_for(&self, path: &str) -> Result<Url, TransportError> {
        self.url_with_segments(path, &[])
    }

    /// Append `path` to the base URL path, then push each of `segments`
    /// percent-encoded
    fn url_with_segments(&self, path: &str, segments: &[&str]) -> Result<Url, TransportError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| TransportError::InvalidAddress {
                address: self.base_url.to_string(),
                reason: "base URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()))
            .extend(segments);
        Ok(url)
    }

    async fn send(
        &self,
        method: &'static str,
        path: &str,
        request: RequestBuilder,
        extensions: RequestExtensions,
    ) -> Result<Response, TransportError> {
        debug!("{} {}", method, path);
        let started = Instant::now();

        let result = match request.send().await {
            Ok(response) if response.status().is_success() => Ok(response),
            Ok(response) => Err(Self::handle_error_response(method, path, response).await),
            Err(source) => {
                warn!("{} {} failed: {}", method, path, source);
                Err(TransportError::Request {
                    method,
                    route: path.to_string(),
                    source,
                })
            }
        };

        // Content-Length only; chunked bodies are counted as 0 bytes
        if let Some(listener) = &self.listener {
            let (response_length, error) = match &result {
                Ok(response) => (response.content_length().unwrap_or(0) as usize, None),
                Err(e) => (0, Some(e.to_string())),
            };
            listener.on_request(&RequestEvent {
                request_type: method,
                name: extensions
                    .route
                    .map(str::to_string)
                    .unwrap_or_else(|| path.to_string()),
                response_time: started.elapsed(),
                response_length,
                error,
            });
        }

        result
    }

    /// Turn a non-2xx response into a transport error, keeping the body text
    async fn handle_error_response(
        method: &'static str,
        path: &str,
        response: Response,
    ) -> TransportError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        warn!("{} {} returned {}: {}", method, path, status, body);

        TransportError::Status {
            method,
            route: path.to_string(),
            status,
            body,
        }
    }
}

/// Read a successful response body and validate it against `T`
pub async fn decode_response<T>(response: Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let route = response.url().path().to_string();
    let text = response
        .text()
        .await
        .map_err(|source| TransportError::Request {
            method: "READ",
            route: route.clone(),
            source,
        })?;

    serde_json::from_str(&text)
        .map_err(|source| DecodeError::Json { route, source }.into())
}

/// Build an [`HttpClient`] for the HTTP gateway from settings
pub fn build_gateway_http_client(config: &HttpClientConfig) -> Result<HttpClient, TransportError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = &config.auth_token {
        let auth_value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
            TransportError::InvalidHeader {
                name: "Authorization",
                reason: e.to_string(),
            }
        })?;
        headers.insert(AUTHORIZATION, auth_value);
    }

    let http_client = Client::builder()
        .timeout(config.timeout)
        .default_headers(headers)
        .build()
        .map_err(TransportError::Build)?;

    Ok(HttpClient::new(http_client, config.url.clone()))
}

/// Build an [`HttpClient`] bound to a load-test environment
///
/// Requests go to the environment host and are reported to its listener.
pub fn build_gateway_load_test_http_client(
    environment: &LoadTestEnvironment,
) -> Result<HttpClient, TransportError> {
    let url = Url::parse(&environment.host).map_err(|e| TransportError::InvalidAddress {
        address: environment.host.clone(),
        reason: e.to_string(),
    })?;

    let config = HttpClientConfig {
        url,
        ..HttpClientConfig::default()
    };

    Ok(build_gateway_http_client(&config)?.with_listener(environment.listener.clone()))
}

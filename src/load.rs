//! Load-test environment binding
//!
//! A [`LoadTestEnvironment`] carries the target host and a
//! [`RequestListener`]. Clients built from it report one [`RequestEvent`] per
//! call, named by route template rather than concrete path so that
//! `/api/v1/users/{user_id}` aggregates across users.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One finished request, successful or not
#[derive(Debug, Clone, PartialEq)]
pub struct RequestEvent {
    /// `GET`, `POST` or `gRPC`
    pub request_type: &'static str,
    /// Route template or RPC name
    pub name: String,
    pub response_time: Duration,
    /// Body size from `Content-Length`, 0 when the header is absent
    pub response_length: usize,
    pub error: Option<String>,
}

/// Receives request events from clients bound to a load-test environment
pub trait RequestListener: Send + Sync {
    fn on_request(&self, event: &RequestEvent);
}

/// Target host plus the listener collecting request events
#[derive(Clone)]
pub struct LoadTestEnvironment {
    pub host: String,
    pub listener: Arc<dyn RequestListener>,
}

impl LoadTestEnvironment {
    pub fn new(host: impl Into<String>, listener: Arc<dyn RequestListener>) -> Self {
        Self {
            host: host.into(),
            listener,
        }
    }
}

impl fmt::Debug for LoadTestEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadTestEnvironment")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

/// Per-route counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteStats {
    pub requests: u64,
    pub failures: u64,
    pub total_time: Duration,
    pub max_time: Duration,
    pub total_bytes: u64,
}

impl RouteStats {
    pub fn average_time(&self) -> Duration {
        if self.requests == 0 {
            return Duration::ZERO;
        }
        let average = self.total_time.as_nanos() / u128::from(self.requests);
        Duration::from_nanos(u64::try_from(average).unwrap_or(u64::MAX))
    }
}

/// In-memory [`RequestListener`] aggregating events by request type and name
#[derive(Debug, Default)]
pub struct RequestStats {
    routes: Mutex<BTreeMap<(String, String), RouteStats>>,
}

impl RequestStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the counters keyed by `(request_type, name)`
    pub fn snapshot(&self) -> BTreeMap<(String, String), RouteStats> {
        self.routes.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Counters for one route, if it has been hit
    pub fn get(&self, request_type: &str, name: &str) -> Option<RouteStats> {
        self.routes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&(request_type.to_string(), name.to_string()))
            .cloned()
    }

    /// Total number of recorded requests
    pub fn total_requests(&self) -> u64 {
        self.routes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .values()
            .map(|s| s.requests)
            .sum()
    }
}

impl RequestListener for RequestStats {
    fn on_request(&self, event: &RequestEvent) {
        let mut routes = self.routes.lock().unwrap_or_else(|e| e.into_inner());
        let entry = routes
            .entry((event.request_type.to_string(), event.name.clone()))
            .or_default();

        entry.requests += 1;
        if event.error.is_some() {
            entry.failures += 1;
        }
        entry.total_time += event.response_time;
        entry.max_time = entry.max_time.max(event.response_time);
        entry.total_bytes += event.response_length as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(name: &str, millis: u64, error: Option<&str>) -> RequestEvent {
        RequestEvent {
            request_type: "GET",
            name: name.to_string(),
            response_time: Duration::from_millis(millis),
            response_length: 10,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_stats_aggregate_by_route() {
        let stats = RequestStats::new();
        stats.on_request(&event("/api/v1/operations/{operation_id}", 10, None));
        stats.on_request(&event("/api/v1/operations/{operation_id}", 30, Some("HTTP 500")));
        stats.on_request(&event("/api/v1/operations", 5, None));

        let route = stats.get("GET", "/api/v1/operations/{operation_id}").unwrap();
        assert_eq!(route.requests, 2);
        assert_eq!(route.failures, 1);
        assert_eq!(route.max_time, Duration::from_millis(30));
        assert_eq!(route.average_time(), Duration::from_millis(20));
        assert_eq!(route.total_bytes, 20);

        assert_eq!(stats.total_requests(), 3);
        assert_eq!(stats.snapshot().len(), 2);
    }

    #[test]
    fn test_average_of_empty_route() {
        assert_eq!(RouteStats::default().average_time(), Duration::ZERO);
    }

    #[test]
    fn test_average_beyond_u32_requests() {
        let route = RouteStats {
            requests: 1 << 32,
            total_time: Duration::from_secs(1 << 33),
            ..RouteStats::default()
        };
        assert_eq!(route.average_time(), Duration::from_secs(2));

        let route = RouteStats {
            requests: 3,
            total_time: Duration::from_nanos(10),
            ..RouteStats::default()
        };
        assert_eq!(route.average_time(), Duration::from_nanos(3));
    }
}

//! Optional pre-shorten reachability probe.
//!
//! A bounded TCP connect to the URL's host and port. Any failure (DNS,
//! refused connection, timeout) reads as "unreachable", never as an
//! internal error. Disabled by default; see [`crate::config::Config`].

use async_trait::async_trait;
use std::time::Duration;
use tokio::net::TcpStream;
use url::Url;

/// Default probe timeout.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Probe deciding whether a target URL looks alive before shortening it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReachabilityChecker: Send + Sync {
    /// Returns true if the URL's host accepts a connection within the
    /// configured timeout.
    async fn is_reachable(&self, url: &str) -> bool;
}

/// TCP-connect implementation of [`ReachabilityChecker`].
pub struct TcpProbe {
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for TcpProbe {
    fn default() -> Self {
        Self::new(DEFAULT_PROBE_TIMEOUT)
    }
}

#[async_trait]
impl ReachabilityChecker for TcpProbe {
    async fn is_reachable(&self, url: &str) -> bool {
        let Ok(parsed) = Url::parse(url) else {
            return false;
        };
        let Some(host) = parsed.host_str() else {
            return false;
        };
        let Some(port) = parsed.port_or_known_default() else {
            return false;
        };

        matches!(
            tokio::time::timeout(self.timeout, TcpStream::connect((host, port))).await,
            Ok(Ok(_))
        )
    }
}

//! HTTP/HTTPS reachability probing.
//!
//! Issues a HEAD request per protocol so no response body is downloaded.
//! The underlying `reqwest::Client` is built once at startup with the
//! per-request timeout baked in and is shared read-only across all jobs
//! (cloning it is cheap; it is Arc-backed internally).

use crate::error::DomainLookupError;
use crate::types::{ProbeOutcome, ProbeResult, Protocol, ScanConfig};

/// Prober holding the process-wide HTTP client.
#[derive(Clone)]
pub struct HttpProber {
    /// Shared HTTP client with the probe timeout configured
    http_client: reqwest::Client,
}

impl HttpProber {
    /// Build the shared client with the configured per-request timeout.
    pub fn new(config: &ScanConfig) -> Result<Self, DomainLookupError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.probe_timeout)
            .build()
            .map_err(|e| {
                DomainLookupError::network_with_source(
                    "Failed to create probe HTTP client",
                    e.to_string(),
                )
            })?;

        Ok(Self { http_client })
    }

    /// Probe one protocol against one hostname.
    ///
    /// Any response, regardless of status code, counts as reachable and
    /// yields `Status(code)`. Any request failure (DNS, connect, TLS,
    /// timeout) yields `Unreachable`; the distinction is deliberately not
    /// surfaced.
    pub async fn probe(&self, hostname: &str, protocol: Protocol) -> ProbeResult {
        let url = format!("{}://{}", protocol, hostname);

        let outcome = match self.http_client.head(&url).send().await {
            Ok(response) => ProbeOutcome::Status(response.status().as_u16()),
            Err(_) => ProbeOutcome::Unreachable,
        };

        ProbeResult { protocol, outcome }
    }

    /// Probe both protocols, concurrently and independently.
    ///
    /// The two probes write to disjoint results, so one failing or hanging
    /// never prevents the other from completing. Results come back in
    /// reporting order: http, then https.
    pub async fn probe_both(&self, hostname: &str) -> [ProbeResult; 2] {
        let (http, https) = tokio::join!(
            self.probe(hostname, Protocol::Http),
            self.probe(hostname, Protocol::Https),
        );
        [http, https]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fast_prober() -> HttpProber {
        let config = ScanConfig::default().with_probe_timeout(Duration::from_secs(2));
        HttpProber::new(&config).expect("client should build")
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_unreachable_on_both_protocols() {
        let prober = fast_prober();
        let [http, https] = prober.probe_both("nonexistent-domain-xyz.invalid").await;

        assert_eq!(http.protocol, Protocol::Http);
        assert_eq!(http.outcome, ProbeOutcome::Unreachable);
        assert_eq!(https.protocol, Protocol::Https);
        assert_eq!(https.outcome, ProbeOutcome::Unreachable);
    }

    #[tokio::test]
    async fn test_empty_hostname_is_unreachable() {
        let prober = fast_prober();
        let result = prober.probe("", Protocol::Http).await;
        assert_eq!(result.outcome, ProbeOutcome::Unreachable);
    }

    #[tokio::test]
    async fn test_refused_port_does_not_block_other_protocol() {
        // 127.0.0.1 refuses connections fast on both default ports in the
        // test environment; both probes must come back independently.
        let prober = fast_prober();
        let [http, https] = prober.probe_both("127.0.0.1").await;
        assert_eq!(http.protocol, Protocol::Http);
        assert_eq!(https.protocol, Protocol::Https);
    }
}

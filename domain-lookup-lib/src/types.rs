//! Core data types for domain resolution and reachability scanning.
//!
//! This module defines all the main data structures used throughout the library,
//! including per-domain records, probe outcomes, and configuration options.

use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Protocol used for a reachability probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Protocol {
    /// Plain HTTP on the default port
    #[serde(rename = "http")]
    Http,

    /// HTTP over TLS on the default port
    #[serde(rename = "https")]
    Https,
}

impl Protocol {
    /// Both probed protocols, in reporting order.
    pub const ALL: [Protocol; 2] = [Protocol::Http, Protocol::Https];
}

/// Outcome of a single reachability probe.
///
/// A probe either produced an HTTP response (any status code counts as
/// reachable) or failed at some network layer. DNS, TCP connect, and TLS
/// failures are deliberately collapsed into a single `Unreachable` marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The server responded; carries the numeric HTTP status code
    Status(u16),

    /// The request failed before a response arrived (timeout, refused, TLS, ...)
    Unreachable,
}

/// Result of probing one protocol against one hostname.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProbeResult {
    /// Which protocol was probed
    pub protocol: Protocol,

    /// What happened
    pub outcome: ProbeOutcome,
}

/// Result of scanning a single input line.
///
/// One record is produced per non-empty input line, whether the scan
/// succeeded, partially succeeded, or failed. Records are immutable once
/// created and are consumed by the reporter and the IP aggregator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainRecord {
    /// Report sequence number, assigned in completion order (1-based).
    /// Zero until the dispatcher numbers the record.
    pub seq: usize,

    /// The normalized hostname that was scanned (e.g., "example.com")
    pub domain: String,

    /// Resolved IPv4 addresses.
    /// - `Some(addrs)`: resolution succeeded (non-empty)
    /// - `None`: the "IP Not Found" sentinel
    pub ips: Option<Vec<Ipv4Addr>>,

    /// Exactly two probe results, http then https
    pub probes: Vec<ProbeResult>,

    /// Any error message if the job failed outside the adapters' contracts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// How long the whole job took to complete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_duration: Option<Duration>,
}

impl DomainRecord {
    /// Whether DNS resolution produced at least one address.
    pub fn resolved(&self) -> bool {
        self.ips.as_ref().is_some_and(|ips| !ips.is_empty())
    }

    /// Whether at least one protocol answered with an HTTP status.
    pub fn reachable(&self) -> bool {
        self.probes
            .iter()
            .any(|p| matches!(p.outcome, ProbeOutcome::Status(_)))
    }
}

/// One entry of the IP frequency summary.
///
/// Counts how many scanned domains resolved to this address. A domain that
/// resolves to three addresses contributes one to each of the three counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IpFrequencyEntry {
    /// The resolved IPv4 address
    pub ip: Ipv4Addr,

    /// Number of domains whose IP set contains this address
    pub count: usize,
}

/// Configuration options for scanning operations.
///
/// This struct allows fine-tuning of the scanning behavior,
/// including concurrency and per-request timeouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum number of concurrent domain jobs
    /// Default: 10, Range: 1-100
    pub concurrency: usize,

    /// Timeout for each DNS resolution attempt
    /// Default: 5 seconds
    #[serde(skip)] // Don't serialize Duration directly
    pub dns_timeout: Duration,

    /// Timeout for each HTTP/HTTPS probe request
    /// Default: 5 seconds
    #[serde(skip)] // Don't serialize Duration directly
    pub probe_timeout: Duration,
}

impl Default for ScanConfig {
    /// Create a sensible default configuration.
    ///
    /// These defaults are chosen to work well for most use cases
    /// while being conservative about resource usage.
    fn default() -> Self {
        Self {
            concurrency: 10,
            dns_timeout: Duration::from_secs(5),
            probe_timeout: Duration::from_secs(5),
        }
    }
}

impl ScanConfig {
    /// Create a new configuration with custom concurrency.
    ///
    /// Automatically caps concurrency at 100 to prevent resource exhaustion.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.clamp(1, 100);
        self
    }

    /// Set custom timeout for DNS resolution attempts.
    pub fn with_dns_timeout(mut self, timeout: Duration) -> Self {
        self.dns_timeout = timeout;
        self
    }

    /// Set custom timeout for HTTP/HTTPS probes.
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
}

impl std::fmt::Display for Protocol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Protocol::Http => write!(f, "http"),
            Protocol::Https => write!(f, "https"),
        }
    }
}

impl std::fmt::Display for ProbeResult {
    /// Renders as a table cell: `http 200` or `http Not Reachable`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.outcome {
            ProbeOutcome::Status(code) => write!(f, "{} {}", self.protocol, code),
            ProbeOutcome::Unreachable => write!(f, "{} Not Reachable", self.protocol),
        }
    }
}

//! DNS resolution adapter.
//!
//! Wraps a `hickory_resolver::TokioResolver` built from the system
//! configuration. Resolution failure is an expected, reportable outcome for
//! this tool, so the adapter maps every failure mode (NXDOMAIN, no A records,
//! timeout, malformed name) to the `None` sentinel instead of an error.

use crate::error::DomainLookupError;
use crate::types::ScanConfig;
use hickory_resolver::{Resolver, TokioResolver};
use std::net::Ipv4Addr;
use std::time::Duration;

/// Resolver adapter performing single-attempt IPv4 (A record) lookups.
#[derive(Clone)]
pub struct DnsResolver {
    /// System-configured async resolver, shared across jobs
    inner: TokioResolver,
    /// Upper bound on a single resolution attempt
    timeout: Duration,
}

impl DnsResolver {
    /// Create a resolver from the system configuration (/etc/resolv.conf on
    /// Unix) with the configured per-attempt timeout.
    pub fn new(config: &ScanConfig) -> Result<Self, DomainLookupError> {
        let inner = Resolver::builder_tokio()
            .map_err(|e| {
                DomainLookupError::config(format!(
                    "Failed to read system resolver configuration: {}",
                    e
                ))
            })?
            .build();

        Ok(Self {
            inner,
            timeout: config.dns_timeout,
        })
    }

    /// Resolve a hostname to its IPv4 address set.
    ///
    /// Returns `Some` with a non-empty, deduplicated address list on success,
    /// or `None` (the "IP Not Found" sentinel) on any failure. Never errors:
    /// a failed lookup is data, not an exception.
    pub async fn lookup_ipv4(&self, hostname: &str) -> Option<Vec<Ipv4Addr>> {
        if hostname.is_empty() {
            return None;
        }

        let lookup = tokio::time::timeout(self.timeout, self.inner.ipv4_lookup(hostname)).await;

        match lookup {
            Ok(Ok(records)) => {
                let ips = unique_in_order(records.iter().map(|a| a.0));
                if ips.is_empty() {
                    None
                } else {
                    Some(ips)
                }
            }
            // NXDOMAIN, no records, servfail, malformed name: all sentinel
            Ok(Err(_)) => None,
            // Attempt exceeded its budget
            Err(_) => None,
        }
    }
}

/// Keep the first occurrence of each address, preserving answer order.
///
/// DNS answers can repeat an address non-adjacently (round-robin sets,
/// multiple identical A records), so a plain `Vec::dedup` is not enough.
fn unique_in_order(addrs: impl Iterator<Item = Ipv4Addr>) -> Vec<Ipv4Addr> {
    let mut ips: Vec<Ipv4Addr> = Vec::new();
    for addr in addrs {
        if !ips.contains(&addr) {
            ips.push(addr);
        }
    }
    ips
}

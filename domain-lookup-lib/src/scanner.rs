//! Main domain scanner implementation.
//!
//! This module provides the primary `DomainScanner` struct that orchestrates
//! one job per input line: normalize the hostname, resolve its IPv4 addresses,
//! and probe HTTP/HTTPS reachability. Jobs fan out over a bounded pool and
//! fan back in as they complete.

use crate::error::DomainLookupError;
use crate::normalize::clean_domain;
use crate::prober::HttpProber;
use crate::resolver::DnsResolver;
use crate::types::{DomainRecord, ProbeOutcome, ProbeResult, Protocol, ScanConfig};
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::time::Instant;

/// Main scanner that coordinates resolution and probing for a domain list.
///
/// The `DomainScanner` handles all aspects of a scan:
/// - Hostname normalization
/// - Concurrent dispatch with bounded parallelism
/// - Completion-order sequence numbering
/// - Absorbing per-domain failures into records
///
/// # Example
///
/// ```rust,no_run
/// use domain_lookup_lib::DomainScanner;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let scanner = DomainScanner::new()?;
///     let record = scanner.scan_domain("http://example.com").await;
///     println!("{}: {:?}", record.domain, record.ips);
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct DomainScanner {
    /// Configuration settings for this scanner instance
    config: ScanConfig,
    /// DNS adapter for A-record lookups
    resolver: DnsResolver,
    /// HTTP prober holding the shared client
    prober: HttpProber,
}

impl DomainScanner {
    /// Create a new scanner with default configuration.
    ///
    /// Default settings:
    /// - Concurrency: 10
    /// - DNS timeout: 5 seconds
    /// - Probe timeout: 5 seconds
    pub fn new() -> Result<Self, DomainLookupError> {
        Self::with_config(ScanConfig::default())
    }

    /// Create a new scanner with custom configuration.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use domain_lookup_lib::{DomainScanner, ScanConfig};
    /// use std::time::Duration;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = ScanConfig::default()
    ///     .with_concurrency(20)
    ///     .with_probe_timeout(Duration::from_secs(10));
    ///
    /// let scanner = DomainScanner::with_config(config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_config(config: ScanConfig) -> Result<Self, DomainLookupError> {
        let resolver = DnsResolver::new(&config)?;
        let prober = HttpProber::new(&config)?;

        Ok(Self {
            config,
            resolver,
            prober,
        })
    }

    /// Run one scan job for a single raw input line.
    ///
    /// Normalizes the line, then runs resolution and probing concurrently
    /// (they fill disjoint fields of the record). This never fails: every
    /// failure mode lands in the record as sentinel data. The returned
    /// record carries `seq = 0`; the dispatcher assigns real sequence
    /// numbers in completion order.
    pub async fn scan_domain(&self, raw_line: &str) -> DomainRecord {
        let domain = clean_domain(raw_line);
        let start_time = Instant::now();

        let (ips, probes) = tokio::join!(
            self.resolver.lookup_ipv4(&domain),
            self.prober.probe_both(&domain),
        );

        DomainRecord {
            seq: 0,
            domain,
            ips,
            probes: probes.to_vec(),
            error_message: None,
            scan_duration: Some(start_time.elapsed()),
        }
    }

    /// Scan input lines and return records as a stream, in completion order.
    ///
    /// Jobs run with bounded parallelism (`config.concurrency`); each record
    /// is numbered 1..N as it leaves the stream, so the visible sequence
    /// reflects the order jobs finished, not the order they were submitted.
    /// Every input line yields exactly one record: jobs run on their own
    /// tasks, and a panicking job is converted into an error record rather
    /// than aborting the run.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use domain_lookup_lib::DomainScanner;
    /// use futures::StreamExt;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let scanner = DomainScanner::new()?;
    ///     let lines = vec!["example.com".to_string(), "example.org".to_string()];
    ///
    ///     let mut stream = scanner.scan_stream(&lines);
    ///     while let Some(record) = stream.next().await {
    ///         println!("[{}] {}", record.seq, record.domain);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn scan_stream(
        &self,
        lines: &[String],
    ) -> Pin<Box<dyn Stream<Item = DomainRecord> + Send + 'static>> {
        let jobs: Vec<_> = lines
            .iter()
            .map(|line| {
                let line = line.clone();
                let scanner = self.clone();
                async move {
                    let raw_line = line.clone();
                    let handle =
                        tokio::spawn(async move { scanner.scan_domain(&raw_line).await });
                    match handle.await {
                        Ok(record) => record,
                        // A panicked job must not take the run down with it
                        Err(join_err) => failed_job_record(&line, join_err.to_string()),
                    }
                }
            })
            .collect();

        let concurrency = self.config.concurrency.max(1);

        Box::pin(
            futures::stream::iter(jobs)
                .buffer_unordered(concurrency)
                .enumerate()
                .map(|(idx, mut record)| {
                    record.seq = idx + 1;
                    record
                }),
        )
    }

    /// Scan input lines and collect all records, in completion order.
    pub async fn scan_all(&self, lines: &[String]) -> Vec<DomainRecord> {
        self.scan_stream(lines).collect().await
    }

    /// Read a domain list file and scan every non-empty line.
    ///
    /// # Errors
    ///
    /// Returns `DomainLookupError::FileNotFound` if the file does not exist,
    /// or `DomainLookupError::FileError` for any other read failure.
    pub async fn scan_file(&self, file_path: &str) -> Result<Vec<DomainRecord>, DomainLookupError> {
        let lines = read_domain_lines(file_path)?;
        Ok(self.scan_all(&lines).await)
    }

    /// Get the current configuration for this scanner.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }
}

/// Build the error record for a job that died outside the adapters' contracts.
fn failed_job_record(raw_line: &str, message: String) -> DomainRecord {
    DomainRecord {
        seq: 0,
        domain: clean_domain(raw_line),
        ips: None,
        probes: Protocol::ALL
            .iter()
            .map(|&protocol| ProbeResult {
                protocol,
                outcome: ProbeOutcome::Unreachable,
            })
            .collect(),
        error_message: Some(message),
        scan_duration: None,
    }
}

/// Read an input file into its non-empty, trimmed lines.
///
/// Blank lines are filtered out before job creation; original line numbers
/// are not preserved. The file must be UTF-8, one entry per line, with no
/// comment syntax.
pub fn read_domain_lines(file_path: &str) -> Result<Vec<String>, DomainLookupError> {
    let content = std::fs::read_to_string(file_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DomainLookupError::file_not_found(file_path)
        } else {
            DomainLookupError::file_error(file_path, e.to_string())
        }
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

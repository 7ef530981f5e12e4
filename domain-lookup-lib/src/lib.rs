//! # Domain Lookup Library
//!
//! Resolves lists of domain names to their IPv4 addresses, probes HTTP and
//! HTTPS reachability, and aggregates how many domains share each resolved IP.
//!
//! The library runs one job per input line over a bounded concurrent pool and
//! reports results in completion order. Per-domain failures are data, not
//! errors: a domain that does not resolve gets the "IP Not Found" sentinel and
//! a protocol that does not answer is marked unreachable, while the run keeps
//! going.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_lookup_lib::{tally_ips, DomainScanner};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let scanner = DomainScanner::new()?;
//!     let records = scanner.scan_file("domains.txt").await?;
//!
//!     for record in &records {
//!         println!("{} -> {:?}", record.domain, record.ips);
//!     }
//!     for entry in tally_ips(&records) {
//!         println!("{} seen {} time(s)", entry.ip, entry.count);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Concurrent scanning**: bounded fan-out with as-completed results
//! - **IPv4 resolution**: single A-record lookup per domain, sentinel on failure
//! - **Reachability probing**: HEAD-equivalent HTTP and HTTPS probes
//! - **IP aggregation**: first-seen-ordered frequency tally

// Re-export main public API types and functions
// This makes them available as domain_lookup_lib::TypeName
pub use aggregate::tally_ips;
pub use config::{load_env_config, parse_timeout_string, EnvConfig};
pub use error::DomainLookupError;
pub use normalize::clean_domain;
pub use scanner::{read_domain_lines, DomainScanner};
pub use types::{
    DomainRecord, IpFrequencyEntry, ProbeOutcome, ProbeResult, Protocol, ScanConfig,
};

// Internal modules - these are not part of the public API
mod aggregate;
mod config;
mod error;
mod normalize;
mod prober;
mod resolver;
mod scanner;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainLookupError>;

// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//! Domain Lookup CLI Application
//!
//! Reads a list of domain names from a file, resolves each domain's IPv4
//! addresses, probes HTTP and HTTPS reachability, and prints a per-domain
//! report table plus a count of how many domains share each resolved IP.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use domain_lookup_lib::{
    load_env_config, read_domain_lines, tally_ips, DomainLookupError, DomainRecord,
    DomainScanner, IpFrequencyEntry, ScanConfig,
};
use futures::StreamExt;
use std::process;
use std::time::{Duration, Instant};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domain-lookup
#[derive(Parser, Debug)]
#[command(name = "domain-lookup")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Resolve a domain list to IPv4 addresses and probe HTTP/HTTPS reachability")]
#[command(
    long_about = "Resolve a domain list to IPv4 addresses and probe HTTP/HTTPS reachability.\n\nScans run concurrently and results are numbered in completion order. The report shows per-domain IPs and reachability plus how many domains share each resolved IP."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Input file with domains (one per line, optionally URL-prefixed)
    #[arg(value_name = "FILE")]
    pub file: String,

    /// Max concurrent domain scans (default: 20, max: 100)
    #[arg(
        short = 'c',
        long = "concurrency",
        value_name = "N",
        help_heading = "Performance"
    )]
    pub concurrency: Option<usize>,

    /// Per-request timeout in seconds for DNS lookups and HTTP probes (default: 5)
    #[arg(long = "timeout", value_name = "SECONDS", help_heading = "Performance")]
    pub timeout: Option<u64>,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Show per-domain progress lines as scans complete
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,

    /// Show per-domain timing details after the report
    #[arg(short = 'd', long = "debug", help_heading = "Configuration")]
    pub debug: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Validate arguments
    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Run the scan
    if let Err(e) = run_scan(args).await {
        eprintln!("{}", e);
        // Exit code 2 is reserved for the missing-input-file condition
        if e.is_file_not_found() {
            process::exit(2);
        }
        process::exit(1);
    }
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    if let Some(concurrency) = args.concurrency {
        if concurrency == 0 || concurrency > 100 {
            return Err("Concurrency must be between 1 and 100".to_string());
        }
    }

    if args.timeout == Some(0) {
        return Err("Timeout must be at least 1 second".to_string());
    }

    Ok(())
}

/// Resolved output settings after CLI/env/default precedence.
struct OutputOptions {
    json: bool,
}

/// Build ScanConfig and output settings from CLI arguments and environment.
///
/// Precedence order (highest to lowest):
/// 1. CLI arguments (explicit user input)
/// 2. Environment variables (DL_*)
/// 3. Built-in defaults
fn build_config(args: &Args) -> (ScanConfig, OutputOptions) {
    let env_config = load_env_config(args.verbose);

    let concurrency = args
        .concurrency
        .or(env_config.concurrency)
        .unwrap_or(20);

    let timeout_secs = args.timeout.or(env_config.timeout).unwrap_or(5);
    let timeout = Duration::from_secs(timeout_secs);

    let config = ScanConfig::default()
        .with_concurrency(concurrency)
        .with_dns_timeout(timeout)
        .with_probe_timeout(timeout);

    let output = OutputOptions {
        json: args.json || env_config.json.unwrap_or(false),
    };

    (config, output)
}

/// Main scanning logic
async fn run_scan(args: Args) -> Result<(), DomainLookupError> {
    let (config, output) = build_config(&args);

    // Read input lines up front so the fatal file errors surface before
    // any scanning output
    let lines = read_domain_lines(&args.file)?;

    let scanner = DomainScanner::with_config(config)?;

    if args.verbose && !output.json {
        println!(
            "Scanning {} domains with concurrency: {}",
            lines.len(),
            scanner.config().concurrency
        );
        println!();
    }

    let start_time = Instant::now();
    let records = collect_records(&scanner, &lines, &args, &output).await;
    let duration = start_time.elapsed();

    let ip_counts = tally_ips(&records);

    if output.json {
        print_json_report(&records, &ip_counts)?;
    } else {
        print_text_report(&records, &ip_counts, duration, &args);
    }

    Ok(())
}

/// Dispatch all jobs and collect records in completion order.
///
/// Verbose mode streams a progress line per completion; otherwise a stderr
/// spinner runs while the pool drains (and stdout stays clean for the report).
async fn collect_records(
    scanner: &DomainScanner,
    lines: &[String],
    args: &Args,
    output: &OutputOptions,
) -> Vec<DomainRecord> {
    if args.verbose && !output.json {
        let total = lines.len();
        let mut stream = scanner.scan_stream(lines);
        let mut records = Vec::with_capacity(total);
        while let Some(record) = stream.next().await {
            ui::print_progress_line(&record, record.seq, total);
            records.push(record);
        }
        println!();
        records
    } else {
        let spinner = if !output.json && !lines.is_empty() {
            ui::Spinner::start(format!("Scanning {} domains...", lines.len()))
        } else {
            None
        };

        let records = scanner.scan_all(lines).await;

        if let Some(s) = spinner {
            s.stop().await;
        }
        records
    }
}

/// Print the two report tables and the summary line.
fn print_text_report(
    records: &[DomainRecord],
    ip_counts: &[IpFrequencyEntry],
    duration: Duration,
    args: &Args,
) {
    ui::print_domain_table(records);
    println!();
    ui::print_ip_table(ip_counts);
    println!();
    ui::print_summary(records, duration);

    if args.debug {
        println!();
        for record in records {
            if let Some(scan_duration) = record.scan_duration {
                println!(
                    "  {} scanned in {}ms",
                    record.domain,
                    scan_duration.as_millis()
                );
            }
        }
    }
}

/// Machine-readable report for --json mode.
#[derive(serde::Serialize)]
struct JsonReport<'a> {
    records: &'a [DomainRecord],
    ip_counts: &'a [IpFrequencyEntry],
}

fn print_json_report(
    records: &[DomainRecord],
    ip_counts: &[IpFrequencyEntry],
) -> Result<(), DomainLookupError> {
    let report = JsonReport { records, ip_counts };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            file: "domains.txt".to_string(),
            concurrency: None,
            timeout: None,
            json: false,
            verbose: false,
            debug: false,
        }
    }

    #[test]
    fn test_validate_args_accepts_defaults() {
        assert!(validate_args(&base_args()).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_bad_concurrency() {
        let mut args = base_args();
        args.concurrency = Some(0);
        assert!(validate_args(&args).is_err());

        args.concurrency = Some(101);
        assert!(validate_args(&args).is_err());

        args.concurrency = Some(100);
        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_rejects_zero_timeout() {
        let mut args = base_args();
        args.timeout = Some(0);
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_build_config_cli_overrides_defaults() {
        let mut args = base_args();
        args.concurrency = Some(7);
        args.timeout = Some(9);

        let (config, output) = build_config(&args);
        assert_eq!(config.concurrency, 7);
        assert_eq!(config.probe_timeout, Duration::from_secs(9));
        assert_eq!(config.dns_timeout, Duration::from_secs(9));
        assert!(!output.json);
    }
}

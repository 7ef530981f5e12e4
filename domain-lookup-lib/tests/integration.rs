// domain-lookup-lib/tests/integration.rs

//! Integration tests for domain-lookup-lib exports and core pipeline behavior.
//!
//! Network-facing tests stick to RFC 2606 reserved names (.invalid) so they
//! fail fast and deterministically without depending on external hosts.

use domain_lookup_lib::{
    clean_domain, read_domain_lines, tally_ips, DomainScanner, ProbeOutcome, ScanConfig,
};
use std::io::Write;

#[test]
fn test_library_exports_work() {
    // Normalizer is pure and always callable
    assert_eq!(clean_domain("https://example.com:"), "example.com");
    assert_eq!(clean_domain("example.com"), "example.com");

    // Aggregator handles the empty case
    assert!(tally_ips(&[]).is_empty());

    // Config builder is accessible with clamping behavior
    let config = ScanConfig::default().with_concurrency(42);
    assert_eq!(config.concurrency, 42);
}

/// End-to-end scenario from the reference behavior: a file with a real-looking
/// URL line, a blank line, and a non-resolving domain yields exactly two
/// records, and the non-resolving one carries the sentinel everywhere.
#[tokio::test]
async fn test_end_to_end_file_scan_with_blank_and_invalid_lines() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "http://example.invalid").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "nonexistent-domain-xyz.invalid").unwrap();

    let scanner = DomainScanner::new().unwrap();
    let records = scanner
        .scan_file(file.path().to_str().unwrap())
        .await
        .unwrap();

    // Blank line filtered: 2 records, not 3
    assert_eq!(records.len(), 2);

    // Sequence numbers are contiguous completion-order 1..=2
    let mut seqs: Vec<usize> = records.iter().map(|r| r.seq).collect();
    seqs.sort_unstable();
    assert_eq!(seqs, vec![1, 2]);

    let invalid = records
        .iter()
        .find(|r| r.domain == "nonexistent-domain-xyz.invalid")
        .expect("record for the invalid domain must exist");
    assert_eq!(invalid.ips, None);
    assert_eq!(invalid.probes.len(), 2);
    assert!(invalid
        .probes
        .iter()
        .all(|p| p.outcome == ProbeOutcome::Unreachable));
}

#[tokio::test]
async fn test_scan_file_missing_input_is_the_reserved_error() {
    let scanner = DomainScanner::new().unwrap();
    let err = scanner.scan_file("/no/such/list.txt").await.unwrap_err();
    assert!(err.is_file_not_found());
    assert_eq!(err.to_string(), "File /no/such/list.txt not found.");
}

/// Aggregator invariant: the sum over all counts equals the number of
/// (domain, resolved-IP) pairs across all records, sentinels excluded.
#[tokio::test]
async fn test_aggregate_invariant_over_scanned_records() {
    let lines = vec![
        "a.invalid".to_string(),
        "b.invalid".to_string(),
        "c.invalid".to_string(),
    ];
    let scanner = DomainScanner::new().unwrap();
    let records = scanner.scan_all(&lines).await;

    let pair_total: usize = records
        .iter()
        .filter_map(|r| r.ips.as_ref().map(|ips| ips.len()))
        .sum();
    let tally_total: usize = tally_ips(&records).iter().map(|e| e.count).sum();
    assert_eq!(pair_total, tally_total);
}

/// Records serialize to JSON without panicking and with lowercase protocol
/// names, so the CLI's --json mode has a stable shape.
#[tokio::test]
async fn test_record_json_shape() {
    let scanner = DomainScanner::new().unwrap();
    let record = scanner.scan_domain("https://a.invalid").await;

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"domain\":\"a.invalid\""));
    assert!(json.contains("\"http\""));
    assert!(json.contains("\"https\""));
    assert!(json.contains("unreachable"));
}

#[test]
fn test_read_domain_lines_roundtrip() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "one.test\n\ntwo.test\n   \nthree.test").unwrap();

    let lines = read_domain_lines(file.path().to_str().unwrap()).unwrap();
    assert_eq!(lines, vec!["one.test", "two.test", "three.test"]);
}

//! IP frequency aggregation over completed scan records.
//!
//! Built once after the dispatch phase fully drains; the records are only
//! read, never mutated.

use crate::types::{DomainRecord, IpFrequencyEntry};
use std::collections::HashMap;
use std::net::Ipv4Addr;

/// Tally how many domains resolved to each observed IP address.
///
/// Counts once per (domain, IP) pair: a domain resolving to three addresses
/// increments three counts by one, and N domains sharing an address give it
/// a count of N. Sentinel ("IP Not Found") records contribute nothing.
/// Entries come back in first-seen order, which keeps the summary table
/// stable for a given record order.
pub fn tally_ips(records: &[DomainRecord]) -> Vec<IpFrequencyEntry> {
    let mut entries: Vec<IpFrequencyEntry> = Vec::new();
    let mut index: HashMap<Ipv4Addr, usize> = HashMap::new();

    for record in records {
        let Some(ips) = &record.ips else {
            continue;
        };
        for &ip in ips {
            match index.get(&ip) {
                Some(&pos) => entries[pos].count += 1,
                None => {
                    index.insert(ip, entries.len());
                    entries.push(IpFrequencyEntry { ip, count: 1 });
                }
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProbeOutcome, ProbeResult, Protocol};

    fn record(domain: &str, ips: Option<Vec<&str>>) -> DomainRecord {
        DomainRecord {
            seq: 0,
            domain: domain.to_string(),
            ips: ips.map(|addrs| addrs.iter().map(|s| s.parse().unwrap()).collect()),
            probes: vec![ProbeResult {
                protocol: Protocol::Http,
                outcome: ProbeOutcome::Unreachable,
            }],
            error_message: None,
            scan_duration: None,
        }
    }

    #[test]
    fn test_shared_ip_counted_once_per_domain() {
        let records = vec![
            record("a.com", Some(vec!["93.184.216.34"])),
            record("b.com", Some(vec!["93.184.216.34"])),
        ];
        let tally = tally_ips(&records);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].ip, "93.184.216.34".parse::<Ipv4Addr>().unwrap());
        assert_eq!(tally[0].count, 2);
    }

    #[test]
    fn test_multi_ip_domain_increments_each_address() {
        let records = vec![record("a.com", Some(vec!["1.1.1.1", "2.2.2.2", "3.3.3.3"]))];
        let tally = tally_ips(&records);
        assert_eq!(tally.len(), 3);
        assert!(tally.iter().all(|e| e.count == 1));
    }

    #[test]
    fn test_sentinel_records_not_counted() {
        let records = vec![
            record("a.com", Some(vec!["1.1.1.1"])),
            record("gone.invalid", None),
        ];
        let tally = tally_ips(&records);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].count, 1);
    }

    #[test]
    fn test_counts_sum_to_total_domain_ip_pairs() {
        let records = vec![
            record("a.com", Some(vec!["1.1.1.1", "2.2.2.2"])),
            record("b.com", Some(vec!["1.1.1.1"])),
            record("c.com", None),
        ];
        let tally = tally_ips(&records);
        let sum: usize = tally.iter().map(|e| e.count).sum();
        assert_eq!(sum, 3); // (a,1.1.1.1), (a,2.2.2.2), (b,1.1.1.1)
    }

    #[test]
    fn test_entries_in_first_seen_order() {
        let records = vec![
            record("a.com", Some(vec!["9.9.9.9"])),
            record("b.com", Some(vec!["1.1.1.1", "9.9.9.9"])),
        ];
        let tally = tally_ips(&records);
        let ips: Vec<String> = tally.iter().map(|e| e.ip.to_string()).collect();
        assert_eq!(ips, vec!["9.9.9.9", "1.1.1.1"]);
    }

    #[test]
    fn test_empty_input_yields_empty_tally() {
        assert!(tally_ips(&[]).is_empty());
    }
}

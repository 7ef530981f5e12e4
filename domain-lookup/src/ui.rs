//! Display logic for the domain-lookup CLI.
//!
//! This module handles all terminal output: the two report tables, the
//! stderr spinner shown while a scan drains, per-completion progress lines
//! in verbose mode, and the final summary. Uses only the `console` crate.

use console::{measure_text_width, pad_str, style, Alignment, Term};
use domain_lookup_lib::{DomainRecord, IpFrequencyEntry};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ── Spinner ──────────────────────────────────────────────────────────────────

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// An async braille-dot spinner that writes to stderr so stdout stays clean.
pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    /// Start a new spinner with the given message, or return `None` when
    /// stderr is not a terminal (piped/redirected runs stay quiet).
    pub fn start(message: String) -> Option<Self> {
        let term = Term::stderr();
        if !term.is_term() {
            return None;
        }

        let running = Arc::new(AtomicBool::new(true));
        let running_clone = running.clone();

        let handle = tokio::spawn(async move {
            let mut idx = 0usize;
            while running_clone.load(Ordering::Relaxed) {
                let frame = SPINNER_FRAMES[idx % SPINNER_FRAMES.len()];
                let _ = term.clear_line();
                let _ = term.write_str(&format!("{} {}", style(frame).cyan(), message));
                idx += 1;
                tokio::time::sleep(Duration::from_millis(80)).await;
            }
            let _ = term.clear_line();
        });

        Some(Self {
            running,
            handle: Some(handle),
        })
    }

    /// Stop the spinner and clear the line.
    pub async fn stop(mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(h) = self.handle.take() {
            let _ = h.await;
        }
    }
}

// ── Tables ───────────────────────────────────────────────────────────────────

/// Render a bordered plain-text table.
///
/// The first column is right-aligned (sequence numbers), the rest are
/// left-aligned. Column widths adapt to the widest cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| measure_text_width(h)).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(columns) {
            widths[i] = widths[i].max(measure_text_width(cell));
        }
    }

    let border = {
        let mut line = String::from("+");
        for width in &widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |cells: &[String]| -> String {
        let mut line = String::from("|");
        for (i, width) in widths.iter().enumerate() {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            let alignment = if i == 0 {
                Alignment::Right
            } else {
                Alignment::Left
            };
            line.push(' ');
            line.push_str(&pad_str(cell, *width, alignment, None));
            line.push_str(" |");
        }
        line
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in rows {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out.push_str(&border);
    out
}

/// Format the IP cell of a domain row: comma-joined addresses or the sentinel.
pub fn format_ip_cell(record: &DomainRecord) -> String {
    match &record.ips {
        Some(ips) => ips
            .iter()
            .map(|ip| ip.to_string())
            .collect::<Vec<_>>()
            .join(", "),
        None => "IP Not Found".to_string(),
    }
}

/// Format the reachability cell: `http 200, https 403` style.
pub fn format_probe_cell(record: &DomainRecord) -> String {
    record
        .probes
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the per-domain report table to stdout.
pub fn print_domain_table(records: &[DomainRecord]) {
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|record| {
            vec![
                record.seq.to_string(),
                record.domain.clone(),
                format_ip_cell(record),
                format_probe_cell(record),
            ]
        })
        .collect();

    println!(
        "{}",
        render_table(&["No.", "Domain", "IP Addresses", "Reachability"], &rows)
    );
}

/// Print the IP frequency summary table to stdout.
pub fn print_ip_table(entries: &[IpFrequencyEntry]) {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            vec![
                (idx + 1).to_string(),
                entry.ip.to_string(),
                entry.count.to_string(),
            ]
        })
        .collect();

    println!("{}", render_table(&["No.", "IP Address", "Count"], &rows));
}

// ── Progress and summary ─────────────────────────────────────────────────────

/// Print one completion line in verbose mode, as jobs finish.
pub fn print_progress_line(record: &DomainRecord, current: usize, total: usize) {
    let domain_width = 30;
    let padded = pad_str(&record.domain, domain_width, Alignment::Left, Some(".."));

    let status = if record.resolved() {
        style(format_ip_cell(record)).green()
    } else {
        style("IP Not Found".to_string()).yellow()
    };

    println!(
        "  {} {}  {}",
        style(format!("[{}/{}]", current, total)).dim(),
        style(&padded).white(),
        status,
    );

    if let Some(error) = &record.error_message {
        println!("    {} {}", style("└─").dim(), style(error).red());
    }
}

/// Print the final summary bar with colored counts.
pub fn print_summary(records: &[DomainRecord], duration: Duration) {
    let total = records.len();
    let resolved = records.iter().filter(|r| r.resolved()).count();
    let reachable = records.iter().filter(|r| r.reachable()).count();

    println!(
        "{} domain{} in {:.1}s  {}  {}  {}  {}",
        style(total).bold(),
        if total == 1 { "" } else { "s" },
        duration.as_secs_f64(),
        style("|").dim(),
        style(format!("{} resolved", resolved)).green(),
        style("|").dim(),
        style(format!("{} reachable", reachable)).cyan(),
    );
}

// ── Tests ────────────────────────────────────────────────────────────────────

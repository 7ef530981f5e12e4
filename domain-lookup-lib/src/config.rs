//! Environment variable configuration.
//!
//! Supports `DL_*` environment variables as a middle layer between built-in
//! defaults and explicit CLI arguments. Precedence (highest to lowest):
//! CLI arguments, environment variables, defaults.

use std::env;

/// Configuration values read from `DL_*` environment variables.
///
/// Every field is optional; `None` means the variable was unset or invalid
/// and the next layer down decides the value.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    /// DL_CONCURRENCY - max concurrent domain jobs (1-100)
    pub concurrency: Option<usize>,

    /// DL_TIMEOUT - per-request timeout in seconds (e.g. "5" or "5s")
    pub timeout: Option<u64>,

    /// DL_JSON - enable JSON output
    pub json: Option<bool>,
}

/// Load configuration from `DL_*` environment variables.
///
/// Invalid values are skipped (with a warning in verbose mode) rather than
/// failing the run; a bad environment never blocks a scan.
pub fn load_env_config(verbose: bool) -> EnvConfig {
    let mut env_config = EnvConfig::default();

    // DL_CONCURRENCY - concurrency level
    if let Ok(val) = env::var("DL_CONCURRENCY") {
        match val.parse::<usize>() {
            Ok(n) if (1..=100).contains(&n) => {
                env_config.concurrency = Some(n);
                if verbose {
                    eprintln!("Using DL_CONCURRENCY={}", n);
                }
            }
            _ => {
                if verbose {
                    eprintln!("Invalid DL_CONCURRENCY='{}', expected 1-100", val);
                }
            }
        }
    }

    // DL_TIMEOUT - seconds, with an optional trailing "s"
    if let Ok(val) = env::var("DL_TIMEOUT") {
        match parse_timeout_string(&val) {
            Ok(secs) => {
                env_config.timeout = Some(secs);
                if verbose {
                    eprintln!("Using DL_TIMEOUT={}s", secs);
                }
            }
            Err(_) => {
                if verbose {
                    eprintln!("Invalid DL_TIMEOUT='{}', expected seconds like '5' or '5s'", val);
                }
            }
        }
    }

    // DL_JSON - enable JSON output
    if let Ok(val) = env::var("DL_JSON") {
        match val.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => {
                env_config.json = Some(true);
                if verbose {
                    eprintln!("Using DL_JSON=true");
                }
            }
            "false" | "0" | "no" | "off" => {
                env_config.json = Some(false);
                if verbose {
                    eprintln!("Using DL_JSON=false");
                }
            }
            _ => {
                if verbose {
                    eprintln!("Invalid DL_JSON='{}', use true/false", val);
                }
            }
        }
    }

    env_config
}

/// Parse a timeout string like "5" or "5s" into whole seconds.
pub fn parse_timeout_string(value: &str) -> Result<u64, ()> {
    let trimmed = value.trim().trim_end_matches(['s', 'S']);
    match trimmed.parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(()),
    }
}

//! Mailguard Demo Binary
//!
//! Reads one JSON `MessageRecord` per stdin line, scans it, and prints
//! one JSON `ScanReport` per stdout line. Stands in for the presentation
//! collaborator; no network, no storage.

use std::io::{self, BufRead, Write};

use mailguard_core::constants::{get_scan_rules, APP_NAME, APP_VERSION};
use mailguard_core::scan::{scan_with_rules, MessageRecord, ScanReport};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}...", APP_NAME, APP_VERSION);

    let rules = get_scan_rules();
    if let Err(e) = rules.validate() {
        log::error!("Invalid scan rules: {}", e);
        std::process::exit(1);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut scanned = 0usize;

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                log::error!("stdin read failed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let record: MessageRecord = match serde_json::from_str(&line) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("line {}: skipping unparsable record: {}", line_no + 1, e);
                continue;
            }
        };

        let verdict = scan_with_rules(&record, &rules);
        let report = ScanReport::new(&record, &verdict);

        match serde_json::to_string(&report) {
            Ok(json) => {
                if writeln!(out, "{}", json).is_err() {
                    // Downstream closed the pipe; nothing left to do
                    break;
                }
                scanned += 1;
            }
            Err(e) => log::error!("line {}: report serialization failed: {}", line_no + 1, e),
        }
    }

    log::info!("Scan complete. Processed {} messages.", scanned);
}

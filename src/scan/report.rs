//! Scan Reports
//!
//! Per-message outcome record handed to the presentation collaborator.
//! The timestamp is attached here, outside the scorer, so the scoring
//! pass itself stays deterministic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{Likelihood, MessageRecord, ScanVerdict};

/// Fallback when the record carries no Subject header
const NO_SUBJECT: &str = "No Subject";

/// Fallback when the record carries no From header
const NO_SENDER: &str = "No Sender";

/// One scanned message, ready for display or serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Provider message id, if the record carried one
    pub id: Option<String>,
    /// Subject header, verbatim
    pub subject: String,
    /// From header, verbatim
    pub sender: String,
    pub snippet: String,
    pub score: u8,
    pub likelihood: Likelihood,
    pub reasons: Vec<String>,
    pub scanned_at: DateTime<Utc>,
}

impl ScanReport {
    /// Combine a record with its verdict, stamping the current time
    pub fn new(record: &MessageRecord, verdict: &ScanVerdict) -> Self {
        Self {
            id: record.id.clone(),
            subject: record
                .first_header("subject")
                .unwrap_or(NO_SUBJECT)
                .to_string(),
            sender: record
                .first_header("from")
                .unwrap_or(NO_SENDER)
                .to_string(),
            snippet: record.snippet.clone(),
            score: verdict.score,
            likelihood: verdict.likelihood,
            reasons: verdict.reasons.clone(),
            scanned_at: Utc::now(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

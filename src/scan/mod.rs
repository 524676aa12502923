//! Scan Module
//!
//! Heuristic spam/phishing scoring for one decoded message at a time.
//! This is the CORE STEP - the only place a score is decided.
//!
//! ## Structure
//! - `types`: Core types (MessageRecord, ScanVerdict, Likelihood, etc.)
//! - `rules`: Weights, keyword list, configurable ScanRules
//! - `scorer`: The scoring pass
//! - `report`: Timestamped per-message outcome record
//!
//! ## Usage
//! ```
//! use mailguard_core::scan::{scan, MessageRecord, Likelihood};
//!
//! let record = MessageRecord::new()
//!     .with_header("Subject", "You WIN a FREE prize")
//!     .with_header("Authentication-Results", "spf=fail");
//!
//! let verdict = scan(&record);
//! assert_eq!(verdict.score, 4);
//! assert_eq!(verdict.likelihood, Likelihood::Likely);
//! ```

pub mod report;
pub mod rules;
pub mod scorer;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export the public scan surface
pub use report::ScanReport;
pub use rules::{
    ScanRules, AUTH_FAIL_WEIGHT, AUTH_SOFTFAIL_WEIGHT, BASE_SCORE, KEYWORD_WEIGHT, MAX_SCORE,
    SPAM_KEYWORDS,
};
pub use scorer::{scan, scan_with_rules};
pub use types::{Header, Likelihood, MessageRecord, ScanVerdict, ScoreBreakdown};

//! Mailguard Core - Heuristic Mail Threat Scoring
//!
//! Scores one decoded email at a time for spam/phishing likelihood using
//! header and keyword heuristics. The scorer is a pure function: no state
//! survives a call, identical input yields identical output, and callers
//! may scan messages from any number of threads.
//!
//! Fetching mail, authenticating users and storing results belong to
//! external collaborators; this crate only turns a [`scan::MessageRecord`]
//! into a [`scan::ScanVerdict`].

pub mod constants;
pub mod scan;

pub use scan::{
    scan, scan_with_rules, Header, Likelihood, MessageRecord, ScanReport, ScanRules, ScanVerdict,
    ScoreBreakdown,
};

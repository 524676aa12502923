//! Scan Types
//!
//! Core types for heuristic mail scanning.
//! No logic beyond header lookup - data structures only.

use serde::{Deserialize, Serialize};

// ============================================================================
// MESSAGE RECORD (input)
// ============================================================================

/// One decoded message header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// Decoded representation of one email, as handed over by the
/// mail-retrieval collaborator. Read-only to the scorer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Provider-assigned message id, if any
    #[serde(default)]
    pub id: Option<String>,
    /// Ordered header list; names are case-insensitive, duplicates possible
    #[serde(default)]
    pub headers: Vec<Header>,
    /// Plain-text excerpt of the body (possibly empty)
    #[serde(default)]
    pub snippet: String,
}

impl MessageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the provider message id
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Append a header (order is preserved)
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Set the body snippet
    pub fn with_snippet(mut self, snippet: &str) -> Self {
        self.snippet = snippet.to_string();
        self
    }

    /// First header whose name matches case-insensitively.
    /// Duplicate names: the first occurrence wins.
    pub fn first_header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|h| h.name.eq_ignore_ascii_case(name))
            .map(|h| h.value.as_str())
    }

    /// Subject, lower-cased; empty string if absent
    pub fn subject_lower(&self) -> String {
        self.first_header("subject")
            .map(|v| v.to_lowercase())
            .unwrap_or_default()
    }

    /// From header, verbatim; empty string if absent
    pub fn sender_raw(&self) -> &str {
        self.first_header("from").unwrap_or("")
    }

    /// Authentication-Results header, lower-cased; empty string if absent
    pub fn auth_results_lower(&self) -> String {
        self.first_header("authentication-results")
            .map(|v| v.to_lowercase())
            .unwrap_or_default()
    }
}

// ============================================================================
// LIKELIHOOD
// ============================================================================

/// Categorical banding of the numeric score, for presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Likelihood {
    /// Score 1-2: innocuous mail
    Unlikely,
    /// Score 3: worth a second look
    Suspicious,
    /// Score 4-5: likely spam or phishing
    Likely,
}

impl Likelihood {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=2 => Likelihood::Unlikely,
            3 => Likelihood::Suspicious,
            _ => Likelihood::Likely,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Likelihood::Unlikely => "unlikely",
            Likelihood::Suspicious => "suspicious",
            Likelihood::Likely => "likely",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            Likelihood::Unlikely => 0,
            Likelihood::Suspicious => 1,
            Likelihood::Likely => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Likelihood::Unlikely => "#10b981",   // Green
            Likelihood::Suspicious => "#f59e0b", // Yellow
            Likelihood::Likely => "#ef4444",     // Red
        }
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// SCORE BREAKDOWN
// ============================================================================

/// Breakdown of how the final score was accumulated
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub auth_contribution: u8,
    pub subject_contribution: u8,
    pub snippet_contribution: u8,
    pub final_score: u8,
}

// ============================================================================
// SCAN VERDICT (output)
// ============================================================================

/// Result of one scoring pass. Newly constructed per call, owned by
/// the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanVerdict {
    /// Severity score; higher means more suspicious
    pub score: u8,
    pub likelihood: Likelihood,
    /// One entry per triggered rule, in evaluation order
    pub reasons: Vec<String>,
    pub breakdown: ScoreBreakdown,
}

// ============================================================================
// TESTS
// ============================================================================

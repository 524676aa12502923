//! Scoring Rules & Weights
//!
//! Defines the weights and keyword list for the heuristic scan.
//! No scoring logic here - constants and config only.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// WEIGHTS (Constants - fixed at compile time)
// ============================================================================

/// Every message starts at this score
pub const BASE_SCORE: u8 = 1;

/// Scores are capped here; the reachable range is [BASE_SCORE, MAX_SCORE]
pub const MAX_SCORE: u8 = 5;

/// Added when Authentication-Results reports spf=fail or dkim=fail
pub const AUTH_FAIL_WEIGHT: u8 = 2;

/// Added when Authentication-Results reports spf=softfail (and no hard fail)
pub const AUTH_SOFTFAIL_WEIGHT: u8 = 1;

/// Added per field (subject, snippet) on the first keyword hit
pub const KEYWORD_WEIGHT: u8 = 1;

/// Sender local-parts shorter than this are flagged by the (currently
/// unweighted) short-sender rule
pub const MIN_LOCAL_PART_LEN: usize = 4;

// ============================================================================
// KEYWORD LIST
// ============================================================================

/// Spam keywords, scanned in declaration order. All lower-case; matching
/// is plain substring containment against lower-cased input.
pub const SPAM_KEYWORDS: [&str; 11] = [
    "win",
    "free",
    "prize",
    "lottery",
    "viagra",
    "urgent",
    "action required",
    "limited time",
    "password",
    "verify",
    "account",
];

/// Shared owned copy of the default keyword list
static DEFAULT_KEYWORDS: Lazy<Vec<String>> =
    Lazy::new(|| SPAM_KEYWORDS.iter().map(|k| k.to_string()).collect());

// ============================================================================
// CONFIGURABLE RULES (for runtime adjustment)
// ============================================================================

/// Scoring rules (configurable). `Default` reproduces the stock behavior;
/// presets only shift weights, never the rule order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanRules {
    /// Starting score for every message
    pub base_score: u8,
    /// Upper clamp on the final score
    pub max_score: u8,
    /// Weight for spf=fail / dkim=fail
    pub auth_fail_weight: u8,
    /// Weight for spf=softfail
    pub auth_softfail_weight: u8,
    /// Weight per keyword field hit
    pub keyword_weight: u8,
    /// Keywords in scan order, lower-case
    pub keywords: Vec<String>,
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            base_score: BASE_SCORE,
            max_score: MAX_SCORE,
            auth_fail_weight: AUTH_FAIL_WEIGHT,
            auth_softfail_weight: AUTH_SOFTFAIL_WEIGHT,
            keyword_weight: KEYWORD_WEIGHT,
            keywords: DEFAULT_KEYWORDS.clone(),
        }
    }
}

impl ScanRules {
    /// High sensitivity - wider score range, keyword hits weigh double
    pub fn high_sensitivity() -> Self {
        Self {
            max_score: 10,
            keyword_weight: 2,
            ..Default::default()
        }
    }

    /// Low sensitivity - soft failures and snippet noise score nothing extra
    pub fn low_sensitivity() -> Self {
        Self {
            auth_softfail_weight: 0,
            ..Default::default()
        }
    }

    /// Replace the keyword list. Keywords are stored lower-cased so
    /// containment checks stay case-insensitive.
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords = keywords.iter().map(|k| k.to_lowercase()).collect();
        self
    }

    /// Sanity-check the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_score < self.base_score {
            return Err(format!(
                "max_score {} is below base_score {}",
                self.max_score, self.base_score
            ));
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            // An empty keyword is a substring of everything
            return Err("keyword list contains an empty string".to_string());
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

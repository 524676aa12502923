//! Heuristic Scorer
//!
//! The scoring pass itself - no types, no config.
//! Input: MessageRecord. Output: ScanVerdict.
//!
//! Stateless and deterministic: identical input always yields the
//! identical verdict. Safe to call from any number of threads.

use super::rules::{ScanRules, MIN_LOCAL_PART_LEN};
use super::types::{Likelihood, MessageRecord, ScanVerdict, ScoreBreakdown};

// ============================================================================
// MAIN SCAN FUNCTION
// ============================================================================

/// Score one message with the stock rules.
///
/// Never fails: missing headers and snippet degrade to empty strings.
/// The only side effect is a diagnostic log line.
pub fn scan(record: &MessageRecord) -> ScanVerdict {
    scan_with_rules(record, &ScanRules::default())
}

/// Score one message with custom rules.
///
/// Rule order is fixed regardless of configuration:
/// 1. Authentication-Results check (hard fail, else soft fail)
/// 2. First keyword hit in the subject
/// 3. First keyword hit in the snippet
/// 4. Short-sender hook (detected, currently unweighted)
/// 5. Clamp to `rules.max_score`
pub fn scan_with_rules(record: &MessageRecord, rules: &ScanRules) -> ScanVerdict {
    let subject = record.subject_lower();
    let sender = record.sender_raw();
    let auth_results = record.auth_results_lower();
    let snippet = record.snippet.to_lowercase();

    let mut score = rules.base_score;
    let mut reasons = Vec::new();
    let mut breakdown = ScoreBreakdown::default();

    // Authentication check: hard fail and soft fail are mutually
    // exclusive, hard fail wins.
    if auth_results.contains("spf=fail") || auth_results.contains("dkim=fail") {
        score = score.saturating_add(rules.auth_fail_weight);
        breakdown.auth_contribution = rules.auth_fail_weight;
        reasons.push("SPF or DKIM Failed".to_string());
    } else if auth_results.contains("spf=softfail") {
        score = score.saturating_add(rules.auth_softfail_weight);
        breakdown.auth_contribution = rules.auth_softfail_weight;
        reasons.push("SPF Softfail".to_string());
    }

    // At most one keyword hit per field, first keyword in list order wins
    if let Some(keyword) = first_keyword_hit(&subject, &rules.keywords) {
        score = score.saturating_add(rules.keyword_weight);
        breakdown.subject_contribution = rules.keyword_weight;
        reasons.push(format!("Keyword '{}' in subject", keyword));
    }

    if let Some(keyword) = first_keyword_hit(&snippet, &rules.keywords) {
        score = score.saturating_add(rules.keyword_weight);
        breakdown.snippet_contribution = rules.keyword_weight;
        reasons.push(format!("Keyword '{}' in snippet", keyword));
    }

    // Short-sender rule: local parts under MIN_LOCAL_PART_LEN are a weak
    // throwaway-address signal. Detected and traced, but not weighted yet.
    if has_short_local_part(sender) {
        log::trace!("short sender local-part in '{}' (unweighted)", sender);
    }

    let final_score = score.min(rules.max_score);
    breakdown.final_score = final_score;

    log::debug!(
        "scan '{}': score={}, reasons={}",
        subject.chars().take(30).collect::<String>(),
        final_score,
        reasons.len()
    );

    ScanVerdict {
        score: final_score,
        likelihood: Likelihood::from_score(final_score),
        reasons,
        breakdown,
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// First keyword (in list order) contained in `text`, if any
fn first_keyword_hit<'a>(text: &str, keywords: &'a [String]) -> Option<&'a str> {
    if text.is_empty() {
        return None;
    }
    keywords
        .iter()
        .find(|k| text.contains(k.as_str()))
        .map(|k| k.as_str())
}

/// True when the sender has an @ and the part before it is short
fn has_short_local_part(sender: &str) -> bool {
    match sender.split_once('@') {
        Some((local, _)) => local.len() < MIN_LOCAL_PART_LEN,
        None => false,
    }
}

// ============================================================================
// TESTS
// ============================================================================

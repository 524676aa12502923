//! Integration Tests for the Scan Module
//!
//! Exercises the record builder, custom rules, scorer and report together.

use crate::scan::report::ScanReport;
use crate::scan::rules::ScanRules;
use crate::scan::scorer::{scan, scan_with_rules};
use crate::scan::types::{Likelihood, MessageRecord};

/// Full pipeline: build a record, scan it, wrap it into a report
#[test]
fn test_record_to_report_pipeline() {
    let record = MessageRecord::new()
        .with_id("inbox-42")
        .with_header("From", "promo@deals.example")
        .with_header("Subject", "Limited Time: claim your prize")
        .with_header("Authentication-Results", "spf=softfail")
        .with_snippet("verify your identity to proceed");

    let verdict = scan(&record);

    // softfail (+1), 'prize' in subject (+1), 'verify' in snippet (+1)
    assert_eq!(verdict.score, 4);
    assert_eq!(verdict.likelihood, Likelihood::Likely);
    assert_eq!(
        verdict.reasons,
        vec![
            "SPF Softfail".to_string(),
            "Keyword 'prize' in subject".to_string(),
            "Keyword 'verify' in snippet".to_string(),
        ]
    );

    let report = ScanReport::new(&record, &verdict);
    assert_eq!(report.id.as_deref(), Some("inbox-42"));
    assert_eq!(report.subject, "Limited Time: claim your prize");
    assert_eq!(report.score, 4);
    assert_eq!(report.reasons.len(), 3);
}

/// Deserialized records behave identically to built ones
#[test]
fn test_json_record_round() {
    let json = r#"{
        "id": "m-7",
        "headers": [
            {"name": "Subject", "value": "Action Required: password expiry"},
            {"name": "From", "value": "it@corp.example"}
        ],
        "snippet": "your account will be locked"
    }"#;
    let record: MessageRecord = serde_json::from_str(json).unwrap();
    let verdict = scan(&record);

    // 'urgent' not present; 'action required' matches in the subject,
    // 'account' matches in the snippet
    assert_eq!(verdict.score, 3);
    assert_eq!(verdict.reasons[0], "Keyword 'action required' in subject");
    assert_eq!(verdict.reasons[1], "Keyword 'account' in snippet");
}

/// Custom keyword lists flow through end to end
#[test]
fn test_custom_keyword_list() {
    let rules = ScanRules::default().with_keywords(&["wire transfer", "Bitcoin"]);
    rules.validate().unwrap();

    let record = MessageRecord::new()
        .with_header("Subject", "Pending BITCOIN payout")
        .with_snippet("complete the wire transfer today");

    let verdict = scan_with_rules(&record, &rules);
    assert_eq!(verdict.score, 3);
    assert_eq!(
        verdict.reasons,
        vec![
            "Keyword 'bitcoin' in subject".to_string(),
            "Keyword 'wire transfer' in snippet".to_string(),
        ]
    );

    // Stock keywords no longer match under the custom list
    let stock = MessageRecord::new().with_header("Subject", "win free prizes");
    assert_eq!(scan_with_rules(&stock, &rules).score, 1);
}

/// Verdicts are plain data: scanning many records needs no shared state
#[test]
fn test_batch_of_records_is_independent() {
    let records: Vec<MessageRecord> = (0..20)
        .map(|i| {
            MessageRecord::new()
                .with_id(&format!("m-{i}"))
                .with_header("Subject", if i % 2 == 0 { "hello" } else { "free stuff" })
        })
        .collect();

    let verdicts: Vec<_> = records.iter().map(scan).collect();
    for (i, verdict) in verdicts.iter().enumerate() {
        let expected = if i % 2 == 0 { 1 } else { 2 };
        assert_eq!(verdict.score, expected, "record {i}");
    }
}

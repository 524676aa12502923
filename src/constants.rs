//! Central Configuration Constants
//!
//! Single source of truth for runtime defaults.

use crate::scan::ScanRules;

/// App name
pub const APP_NAME: &str = "Mailguard";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Pick the scan rules from the environment.
///
/// `MAILGUARD_SENSITIVITY=high|low` selects a preset; anything else
/// (or unset) yields the stock rules.
pub fn get_scan_rules() -> ScanRules {
    match std::env::var("MAILGUARD_SENSITIVITY").as_deref() {
        Ok("high") => ScanRules::high_sensitivity(),
        Ok("low") => ScanRules::low_sensitivity(),
        _ => ScanRules::default(),
    }
}

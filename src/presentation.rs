//! Text views of the session for terminal front ends.

use crate::types::{CandidateKey, ValidationResult};

pub const KEYS_HEADING: &str = "Keys to Check";
pub const RESULTS_HEADING: &str = "Validation Results";

/// Label for the validation trigger
pub fn trigger_label(busy: bool) -> &'static str {
    if busy {
        "Checking..."
    } else {
        "Check Keys"
    }
}

pub fn render_keys(keys: &[CandidateKey]) -> String {
    let mut out = String::from(KEYS_HEADING);
    out.push('\n');
    for key in keys {
        out.push_str("  ");
        out.push_str(key.expose());
        out.push('\n');
    }
    out
}

/// Result list, or an empty string when there is nothing to show
pub fn render_results(results: &[ValidationResult]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let mut out = String::from(RESULTS_HEADING);
    out.push('\n');
    for result in results {
        out.push_str(&format!("  {}\n", result));
    }
    out
}

//! The public entry point: normalize, validate, fix, re-validate.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::fix::fix;
use crate::validate::{validate, Report};

/// Everything [`process`] produces for one input text.
///
/// Issue offsets in `initial_report` refer to the NFC-normalized input;
/// offsets in `final_report` refer to `fixed_text`. The two must not be
/// mixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    /// The text after all repair passes.
    pub fixed_text: String,
    /// Validation of the normalized input, before any fix.
    pub initial_report: Report,
    /// Validation of `fixed_text`.
    pub final_report: Report,
}

/// Normalizes `raw_text` to NFC, validates it, applies the repair passes,
/// and validates the result.
///
/// Never panics for well-formed Unicode input; invalid byte sequences are
/// an I/O concern that must be rejected before text reaches this function.
pub fn process(raw_text: &str) -> ProcessOutcome {
    let nfc_text: String = raw_text.nfc().collect();
    let initial_report = validate(&nfc_text);
    let fixed_text = fix(&nfc_text);
    let final_report = validate(&fixed_text);
    ProcessOutcome {
        fixed_text,
        initial_report,
        final_report,
    }
}

//! Read-only validation scans and the diagnostic report model.
//!
//! [`validate`] expects text already in composed (NFC) form — composing is
//! the orchestrator's job — and runs five independent scans in a fixed
//! order. The scan order is part of the contract: it determines issue
//! ordering when spans coincide.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::decompose::decompose;
use crate::tables;
use crate::token::tokenize;
use crate::tone::expected_tone_index;

/// The closed set of problems the validator reports.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Zero-width / non-breaking character present.
    Invisible,
    /// Alphabetic character from a non-Latin script block.
    Confusable,
    /// Malformed combining sequence on a letter.
    Combining,
    /// Suspected forged Vietnamese letter (đ or ơ/ư built from wrong marks).
    FakeLetter,
    /// Tone mark sits on the wrong vowel of a syllable.
    TonePlacement,
}

/// A single validation finding.
///
/// `start`/`end` are character offsets (half-open) into the exact string
/// that was validated; they are meaningless against any other version of
/// the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// What kind of problem this is.
    pub kind: IssueKind,
    /// Character offset of the first affected character.
    pub start: usize,
    /// Character offset one past the last affected character.
    pub end: usize,
    /// Human-readable explanation.
    pub message: String,
    /// Minimal hint or fix, when one is safe to suggest.
    pub suggestion: Option<String>,
    /// Local excerpt around the span, extended to grapheme boundaries.
    pub context: String,
}

/// An ordered list of findings for one version of the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Issues in scan order (all invisibles, then all confusables, ...).
    pub issues: Vec<Issue>,
}

impl Report {
    /// Counts issues per kind. `BTreeMap` keeps the iteration order stable.
    pub fn summary(&self) -> BTreeMap<IssueKind, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.kind).or_insert(0) += 1;
        }
        counts
    }

    /// Returns whether no issues were found.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Excerpt radius, in characters, on each side of a span.
const SNIPPET_RADIUS: usize = 10;

/// Cuts a local excerpt around a character span, walking grapheme clusters
/// so the excerpt never separates a base letter from its combining marks.
fn snippet(text: &str, start: usize, end: usize) -> String {
    let lo = start.saturating_sub(SNIPPET_RADIUS);
    let hi = end.saturating_add(SNIPPET_RADIUS);
    let mut out = String::new();
    let mut pos = 0usize;
    for grapheme in text.graphemes(true) {
        let width = grapheme.chars().count();
        if pos + width > lo && pos < hi {
            out.push_str(grapheme);
        }
        pos += width;
    }
    out
}

/// Validates NFC text and reports every problem found, in scan order.
pub fn validate(text: &str) -> Report {
    let chars: Vec<char> = text.chars().collect();
    let mut issues = Vec::new();
    scan_invisible_chars(text, &chars, &mut issues);
    scan_non_latin_confusables(text, &chars, &mut issues);
    scan_combining_sequences(text, &chars, &mut issues);
    scan_fake_letters(text, &chars, &mut issues);
    scan_tone_placement(text, &mut issues);
    Report { issues }
}

fn scan_invisible_chars(text: &str, chars: &[char], issues: &mut Vec<Issue>) {
    for (i, &ch) in chars.iter().enumerate() {
        if tables::is_invisible(ch) {
            issues.push(Issue {
                kind: IssueKind::Invisible,
                start: i,
                end: i + 1,
                message: format!(
                    "zero-width or non-breaking character U+{:04X} detected",
                    ch as u32
                ),
                suggestion: Some("remove this character".to_string()),
                context: snippet(text, i, i + 1),
            });
        }
    }
}

fn scan_non_latin_confusables(text: &str, chars: &[char], issues: &mut Vec<Issue>) {
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphabetic() {
            continue;
        }
        if let Some(script) = tables::non_latin_script(ch) {
            issues.push(Issue {
                kind: IssueKind::Confusable,
                start: i,
                end: i + 1,
                message: format!("{script} letter '{ch}' (likely confusable) found"),
                suggestion: Some("replace with the correct Latin letter".to_string()),
                context: snippet(text, i, i + 1),
            });
        }
    }
}

fn scan_combining_sequences(text: &str, chars: &[char], issues: &mut Vec<Issue>) {
    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_alphabetic() {
            continue;
        }
        let d = decompose(ch);

        if d.tone_count() > 1 {
            issues.push(Issue {
                kind: IssueKind::Combining,
                start: i,
                end: i + 1,
                message: "a letter carries more than one tone mark".to_string(),
                suggestion: Some(
                    "keep only one tone mark (acute/grave/hook/tilde/dot-below)".to_string(),
                ),
                context: snippet(text, i, i + 1),
            });
        }

        if !d.marks.is_empty() && !d.is_vowel() {
            issues.push(Issue {
                kind: IssueKind::Combining,
                start: i,
                end: i + 1,
                message: "combining mark(s) applied on a non-vowel letter".to_string(),
                suggestion: Some("move the mark to the correct vowel".to_string()),
                context: snippet(text, i, i + 1),
            });
        }

        for &mark in &d.marks {
            if !tables::is_allowed_mark(mark) {
                issues.push(Issue {
                    kind: IssueKind::Combining,
                    start: i,
                    end: i + 1,
                    message: format!(
                        "unsupported combining mark U+{:04X} for Vietnamese",
                        mark as u32
                    ),
                    suggestion: Some("use Vietnamese tone/diacritic marks only".to_string()),
                    context: snippet(text, i, i + 1),
                });
            }
        }
    }
}

fn scan_fake_letters(text: &str, chars: &[char], issues: &mut Vec<Issue>) {
    for (i, &ch) in chars.iter().enumerate() {
        let d = decompose(ch);
        if d.marks.is_empty() {
            continue;
        }

        // đ must be the atomic U+0111/U+0110; a decorated plain d is a forgery.
        if matches!(d.base, 'd' | 'D') && d.marks.iter().any(|&m| !tables::is_allowed_mark(m)) {
            issues.push(Issue {
                kind: IssueKind::FakeLetter,
                start: i,
                end: i + 1,
                message: "possible fake 'đ' constructed by overlays".to_string(),
                suggestion: Some(
                    "use the precomposed 'đ' (U+0111) or 'Đ' (U+0110)".to_string(),
                ),
                context: snippet(text, i, i + 1),
            });
        }

        // ơ/ư need the horn; marks that bend o/u some other way are suspect.
        if matches!(d.base, 'o' | 'O' | 'u' | 'U') && !d.has_mark(tables::HORN) {
            let non_viet = d
                .marks
                .iter()
                .any(|&m| !tables::is_tone_mark(m) && m != tables::CIRCUMFLEX && m != tables::BREVE);
            if non_viet {
                issues.push(Issue {
                    kind: IssueKind::FakeLetter,
                    start: i,
                    end: i + 1,
                    message: "suspicious attempt to mimic 'ơ/ư' without using horn (U+031B)"
                        .to_string(),
                    suggestion: Some(
                        "use precomposed 'ơ/ư' or add COMBINING HORN".to_string(),
                    ),
                    context: snippet(text, i, i + 1),
                });
            }
        }
    }
}

fn scan_tone_placement(text: &str, issues: &mut Vec<Issue>) {
    for token in tokenize(text) {
        let tone_positions: Vec<usize> = token
            .text
            .chars()
            .enumerate()
            .filter(|&(_, ch)| decompose(ch).tone().is_some())
            .map(|(i, _)| i)
            .collect();
        // Zero tones: nothing to check. Multiple tones: the combining scan
        // already covers the letter-level case; the token-level case is
        // ambiguous, so skip.
        let &[actual] = &tone_positions[..] else {
            continue;
        };

        let Some(expected) = expected_tone_index(&token.text) else {
            continue;
        };
        if expected != actual {
            let start = token.start + actual;
            issues.push(Issue {
                kind: IssueKind::TonePlacement,
                start,
                end: start + 1,
                message: format!("tone mark appears on the wrong vowel in '{}'", token.text),
                suggestion: Some(
                    "move the tone to the main vowel per Vietnamese orthography".to_string(),
                ),
                context: snippet(text, start, start + 1),
            });
        }
    }
}

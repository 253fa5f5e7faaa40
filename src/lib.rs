#![deny(warnings, missing_docs, missing_debug_implementations)]
//! Detection and conservative repair of malformed Vietnamese Unicode text.
//!
//! Text that reaches a pipeline from the web or from OCR often carries
//! defects that are invisible in most renderings: zero-width characters,
//! Cyrillic or Greek lookalikes pasted into Latin words, letters stacked
//! with marks no Vietnamese word uses, and tone marks sitting on the wrong
//! vowel of a cluster. This crate finds those defects and repairs the
//! subset that can be repaired without guessing.
//!
//! The [`validate`] function scans a text and produces a [`Report`] of
//! issues with character offsets, messages, and suggestions. The [`fix`]
//! function applies four ordered repair passes:
//!
//! * strip invisible and zero-width characters;
//! * replace a small, fixed set of non-Latin homoglyphs with their Latin
//!   equivalents;
//! * clamp each letter to at most one tone mark, dropping combining marks
//!   Vietnamese never uses;
//! * move a word's single tone mark to the vowel the orthography expects.
//!
//! Every pass is conservative: when the right repair is ambiguous, the
//! text passes through unchanged. [`process`] wires it all together,
//! normalizing to NFC, validating, fixing, and validating again so callers
//! can see what was found and what remains.
//!
//! ```
//! use viettext::process;
//!
//! let outcome = process("xin chào hoà bình");
//! assert_eq!("xin chào hòa bình", outcome.fixed_text);
//! assert!(outcome.final_report.is_clean());
//! ```

pub(crate) mod tables;

pub(crate) mod decompose;

pub(crate) mod token;

pub(crate) mod tone;

pub(crate) mod validate;

pub(crate) mod fix;

pub(crate) mod pipeline;

pub use decompose::{decompose, Decomposed, MarkVec};

pub use fix::{clamp_tone_marks, fix, relocate_tone_marks, replace_safe_homoglyphs, strip_invisibles};

pub use pipeline::{process, ProcessOutcome};

pub use tables::{
    classify, homoglyph_latin, is_allowed_mark, is_invisible, is_quality_mark, is_tone_mark,
    non_latin_script, CharClass,
};

pub use token::{tokenize, Token};

pub use tone::expected_tone_index;

pub use validate::{validate, Issue, IssueKind, Report};

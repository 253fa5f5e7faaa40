//! Per-character canonical decomposition.
//!
//! [`decompose`] splits one precomposed character into its base letter and
//! ordered combining marks (NFD); [`Decomposed::recompose`] round-trips back
//! to composed form. Both are total, pure functions.

use std::iter;

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

use crate::tables;

/// Inline vector of combining marks. Vietnamese letters carry at most two
/// (one quality diacritic and one tone mark), so four slots never spill.
pub type MarkVec = SmallVec<[char; 4]>;

/// A single character split into its canonical base letter and marks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposed {
    /// Canonical base letter; the character itself when it has no
    /// decomposition.
    pub base: char,
    /// Combining marks in canonical order. Empty for undecorated characters.
    pub marks: MarkVec,
}

impl Decomposed {
    /// Returns the first tone mark, if the character carries one.
    pub fn tone(&self) -> Option<char> {
        self.marks.iter().copied().find(|&m| tables::is_tone_mark(m))
    }

    /// Number of tone marks present (a well-formed letter has at most one).
    pub fn tone_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|&&m| tables::is_tone_mark(m))
            .count()
    }

    /// Returns whether any quality diacritic (circumflex/breve/horn) is
    /// present.
    pub fn has_quality(&self) -> bool {
        self.marks.iter().any(|&m| tables::is_quality_mark(m))
    }

    /// Returns whether a specific combining mark is present.
    pub fn has_mark(&self, mark: char) -> bool {
        self.marks.contains(&mark)
    }

    /// Returns whether the base letter is a vowel (a/e/i/o/u/y,
    /// case-insensitive).
    pub fn is_vowel(&self) -> bool {
        tables::is_vowel_base(self.base)
    }

    /// Recomposes base + marks back into composed (NFC) form.
    ///
    /// For all supported Vietnamese letters this yields the original single
    /// character; sequences with no precomposed form stay as base + marks.
    pub fn recompose(&self) -> String {
        iter::once(self.base)
            .chain(self.marks.iter().copied())
            .nfc()
            .collect()
    }
}

/// Canonically decomposes one character into base + ordered marks.
///
/// Total over all Unicode scalar values: characters without a decomposition
/// come back unchanged with an empty mark list.
pub fn decompose(ch: char) -> Decomposed {
    let mut nfd = iter::once(ch).nfd();
    let base = nfd.next().expect("canonical decomposition is never empty");
    let marks = nfd.collect::<MarkVec>();
    Decomposed { base, marks }
}

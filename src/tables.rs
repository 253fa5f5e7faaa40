//! Static classification tables for Vietnamese text analysis.
//!
//! Everything here is read-only data initialized at compile time: the
//! invisible-codepoint set, the Vietnamese combining-mark sets, a small
//! conservative homoglyph map, and the non-Latin block ranges used by the
//! confusable scan. Nothing in this module allocates or mutates.

use std::cmp::Ordering;

/// Classification of a single Unicode scalar value.
///
/// Every codepoint falls into exactly one class; see [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Zero-width, word-joining or non-breaking characters that render as
    /// nothing (or as an ordinary space) and are a common smuggling vector.
    Invisible,
    /// An alphabetic character from one of the known non-Latin script blocks.
    NonLatinLetter,
    /// A vowel letter, plain or precomposed Vietnamese.
    Vowel,
    /// Any other alphabetic character.
    Consonant,
    /// One of the five Vietnamese tone marks.
    ToneMark,
    /// Circumflex, breve or horn.
    QualityMark,
    /// Everything else: digits, punctuation, whitespace, symbols.
    Other,
}

/// Invisible / zero-width / spacing specials worth flagging.
pub(crate) const INVISIBLE_CODEPOINTS: &[char] = &[
    '\u{200B}', // ZERO WIDTH SPACE
    '\u{200C}', // ZERO WIDTH NON-JOINER
    '\u{200D}', // ZERO WIDTH JOINER
    '\u{2060}', // WORD JOINER
    '\u{00A0}', // NO-BREAK SPACE
    '\u{FEFF}', // ZERO WIDTH NO-BREAK SPACE / BOM
];

/// The five Vietnamese tone marks, as combining characters.
pub(crate) const TONE_MARKS: &[char] = &[
    '\u{0300}', // COMBINING GRAVE ACCENT
    '\u{0301}', // COMBINING ACUTE ACCENT
    '\u{0303}', // COMBINING TILDE
    '\u{0309}', // COMBINING HOOK ABOVE
    '\u{0323}', // COMBINING DOT BELOW
];

pub(crate) const CIRCUMFLEX: char = '\u{0302}';
pub(crate) const BREVE: char = '\u{0306}';
pub(crate) const HORN: char = '\u{031B}';

/// Combining marks that change vowel identity rather than tone.
pub(crate) const QUALITY_MARKS: &[char] = &[CIRCUMFLEX, BREVE, HORN];

/// Minimal homoglyph mapping from common non-Latin lookalikes to Latin.
///
/// Intentionally tiny (cf. UTS #39 confusables): characters outside this
/// table are never rewritten, even when the confusable scan flags them.
pub(crate) const HOMOGLYPH_SAFE_MAP: &[(char, char)] = &[
    ('\u{0430}', 'a'), // CYRILLIC SMALL LETTER A
    ('\u{0435}', 'e'), // CYRILLIC SMALL LETTER IE
    ('\u{0440}', 'p'), // CYRILLIC SMALL LETTER ER
    ('\u{0441}', 'c'), // CYRILLIC SMALL LETTER ES
    ('\u{0456}', 'i'), // CYRILLIC SMALL LETTER BYELORUSSIAN-UKRAINIAN I
    ('\u{03B1}', 'a'), // GREEK SMALL LETTER ALPHA
    ('\u{03BF}', 'o'), // GREEK SMALL LETTER OMICRON
    ('\u{03B5}', 'e'), // GREEK SMALL LETTER EPSILON
];

/// Script blocks whose letters are clearly not Latin. Sorted by start for
/// binary search. Heuristic block coverage, not the Unicode Script property;
/// scripts outside this table are not flagged.
const NON_LATIN_BLOCKS: &[(u32, u32, &str)] = &[
    (0x0370, 0x03FF, "Greek"),
    (0x0400, 0x04FF, "Cyrillic"),
    (0x0500, 0x052F, "Cyrillic"),
    (0x0590, 0x05FF, "Hebrew"),
    (0x0600, 0x06FF, "Arabic"),
    (0x0750, 0x077F, "Arabic"),
    (0x08A0, 0x08FF, "Arabic"),
    (0x0900, 0x097F, "Devanagari"),
    (0x1C80, 0x1C8F, "Cyrillic"),
    (0x1F00, 0x1FFF, "Greek"),
    (0x2DE0, 0x2DFF, "Cyrillic"),
    (0x3040, 0x309F, "Hiragana"),
    (0x30A0, 0x30FF, "Katakana"),
    (0x31F0, 0x31FF, "Katakana"),
    (0x3400, 0x4DBF, "CJK"),
    (0x4E00, 0x9FFF, "CJK"),
    (0xA640, 0xA69F, "Cyrillic"),
    (0xA8E0, 0xA8FF, "Devanagari"),
    (0xF900, 0xFAFF, "CJK"),
    (0xFB1D, 0xFB4F, "Hebrew"),
    (0xFB50, 0xFDFF, "Arabic"),
    (0xFE70, 0xFEFF, "Arabic"),
    (0x20000, 0x2A6DF, "CJK"),
];

/// Precomposed Vietnamese vowels (NFC), every tone/quality combination of
/// a ă â e ê i o ô ơ u ư y in both cases, plus the plain ASCII vowels.
const VIET_VOWELS_PRECOMPOSED: &str = "\
aàáảãạăằắẳẵặâầấẩẫậeèéẻẽẹêềếểễệiìíỉĩịoòóỏõọôồốổỗộơờớởỡợuùúủũụưừứửữựyỳýỷỹỵ\
AÀÁẢÃẠĂẰẮẲẴẶÂẦẤẨẪẬEÈÉẺẼẸÊỀẾỂỄỆIÌÍỈĨỊOÒÓỎÕỌÔỒỐỔỖỘƠỜỚỞỠỢUÙÚỦŨỤƯỪỨỬỮỰYỲÝỶỸỴ";

/// Returns whether `ch` belongs to the invisible/zero-width set.
pub fn is_invisible(ch: char) -> bool {
    INVISIBLE_CODEPOINTS.contains(&ch)
}

/// Returns whether `ch` is one of the five Vietnamese combining tone marks.
pub fn is_tone_mark(ch: char) -> bool {
    TONE_MARKS.contains(&ch)
}

/// Returns whether `ch` is a combining circumflex, breve or horn.
pub fn is_quality_mark(ch: char) -> bool {
    QUALITY_MARKS.contains(&ch)
}

/// Returns whether `ch` is a combining mark permitted in Vietnamese text.
pub fn is_allowed_mark(ch: char) -> bool {
    is_tone_mark(ch) || is_quality_mark(ch)
}

/// Looks up the Latin replacement for a mapped homoglyph, if any.
pub fn homoglyph_latin(ch: char) -> Option<char> {
    HOMOGLYPH_SAFE_MAP
        .iter()
        .find(|&&(from, _)| from == ch)
        .map(|&(_, to)| to)
}

/// Returns the script label of the non-Latin block containing `ch`, if any.
///
/// This does not check that `ch` is a letter; callers interested in
/// confusables should gate on `char::is_alphabetic` first.
pub fn non_latin_script(ch: char) -> Option<&'static str> {
    let c = ch as u32;
    NON_LATIN_BLOCKS
        .binary_search_by(|&(lo, hi, _)| {
            if hi < c {
                Ordering::Less
            } else if lo > c {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|idx| NON_LATIN_BLOCKS[idx].2)
}

/// Returns whether a decomposed base letter is a Vietnamese vowel base
/// (a/e/i/o/u/y, case-insensitive).
pub(crate) fn is_vowel_base(ch: char) -> bool {
    matches!(
        ch.to_ascii_lowercase(),
        'a' | 'e' | 'i' | 'o' | 'u' | 'y'
    )
}

/// Classifies a codepoint into exactly one [`CharClass`].
pub fn classify(ch: char) -> CharClass {
    if is_invisible(ch) {
        CharClass::Invisible
    } else if is_tone_mark(ch) {
        CharClass::ToneMark
    } else if is_quality_mark(ch) {
        CharClass::QualityMark
    } else if ch.is_alphabetic() {
        if non_latin_script(ch).is_some() {
            CharClass::NonLatinLetter
        } else if is_vowel_base(ch) || VIET_VOWELS_PRECOMPOSED.contains(ch) {
            CharClass::Vowel
        } else {
            CharClass::Consonant
        }
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_exhaustive_examples() {
        assert_eq!(CharClass::Invisible, classify('\u{200B}'));
        assert_eq!(CharClass::Invisible, classify('\u{00A0}'));
        assert_eq!(CharClass::ToneMark, classify('\u{0301}'));
        assert_eq!(CharClass::QualityMark, classify('\u{031B}'));
        assert_eq!(CharClass::NonLatinLetter, classify('Ω'));
        assert_eq!(CharClass::NonLatinLetter, classify('я'));
        assert_eq!(CharClass::Vowel, classify('ặ'));
        assert_eq!(CharClass::Vowel, classify('Ư'));
        assert_eq!(CharClass::Vowel, classify('y'));
        assert_eq!(CharClass::Consonant, classify('đ'));
        assert_eq!(CharClass::Consonant, classify('b'));
        assert_eq!(CharClass::Other, classify('7'));
        assert_eq!(CharClass::Other, classify(' '));
        assert_eq!(CharClass::Other, classify('“'));
    }

    #[test]
    fn test_non_latin_block_lookup() {
        assert_eq!(Some("Greek"), non_latin_script('α'));
        assert_eq!(Some("Cyrillic"), non_latin_script('д'));
        assert_eq!(Some("Hebrew"), non_latin_script('א'));
        assert_eq!(Some("Arabic"), non_latin_script('ب'));
        assert_eq!(Some("Devanagari"), non_latin_script('क'));
        assert_eq!(Some("CJK"), non_latin_script('漢'));
        assert_eq!(Some("Hiragana"), non_latin_script('ひ'));
        assert_eq!(Some("Katakana"), non_latin_script('カ'));
        assert_eq!(None, non_latin_script('a'));
        assert_eq!(None, non_latin_script('ế'));
        // Scripts outside the table are deliberately not flagged.
        assert_eq!(None, non_latin_script('한'));
    }

    #[test]
    fn test_block_table_is_sorted_and_disjoint() {
        for pair in NON_LATIN_BLOCKS.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
        for &(lo, hi, _) in NON_LATIN_BLOCKS {
            assert!(lo <= hi);
        }
    }

    #[test]
    fn test_homoglyph_map_is_latin_only() {
        for &(from, to) in HOMOGLYPH_SAFE_MAP {
            assert!(non_latin_script(from).is_some());
            assert!(to.is_ascii_lowercase());
        }
        assert_eq!(Some('e'), homoglyph_latin('\u{0435}'));
        assert_eq!(None, homoglyph_latin('e'));
        assert_eq!(None, homoglyph_latin('д'));
    }

    #[test]
    fn test_tone_and_quality_sets_are_disjoint() {
        for &m in TONE_MARKS {
            assert!(!is_quality_mark(m));
            assert!(is_allowed_mark(m));
        }
        for &m in QUALITY_MARKS {
            assert!(!is_tone_mark(m));
            assert!(is_allowed_mark(m));
        }
        assert!(!is_allowed_mark('\u{0327}')); // cedilla
    }
}

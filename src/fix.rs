//! Conservative, ordered repair passes.
//!
//! [`fix`] composes four passes, each safe on its own and idempotent once
//! the text has converged:
//!
//! 1. strip invisible characters;
//! 2. reduce mapped homoglyphs to their Latin equivalent;
//! 3. clamp every letter to at most one tone mark, dropping non-Vietnamese
//!    marks;
//! 4. relocate a token's single tone mark to the vowel the resolver picks.
//!
//! Each pass consumes the previous pass's output and never revisits it.
//! Anything the resolver or the homoglyph map cannot decide is left
//! untouched.

use crate::decompose::{decompose, Decomposed, MarkVec};
use crate::tables;
use crate::token::is_token_char;
use crate::tone::expected_tone_index;

/// Removes every character from the invisible/zero-width set.
pub fn strip_invisibles(text: &str) -> String {
    text.chars().filter(|&ch| !tables::is_invisible(ch)).collect()
}

/// Replaces the few mapped homoglyphs with their Latin equivalents.
///
/// Characters outside the map pass through even when the validator flags
/// them as confusable; the map is deliberately narrow so legitimate
/// non-Latin content is never rewritten.
pub fn replace_safe_homoglyphs(text: &str) -> String {
    text.chars()
        .map(|ch| tables::homoglyph_latin(ch).unwrap_or(ch))
        .collect()
}

/// Clamps every letter to one tone mark at most.
///
/// Per alphabetic character: keep the base, keep the first tone mark, keep
/// all quality diacritics, drop everything else, recompose to NFC.
pub fn clamp_tone_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if !ch.is_alphabetic() {
            out.push(ch);
            continue;
        }
        let d = decompose(ch);
        let mut kept = MarkVec::new();
        let mut seen_tone = false;
        for &mark in &d.marks {
            if tables::is_tone_mark(mark) {
                if !seen_tone {
                    kept.push(mark);
                    seen_tone = true;
                }
            } else if tables::is_quality_mark(mark) {
                kept.push(mark);
            }
            // Anything else is not Vietnamese; dropping it on a letter is
            // the safe direction.
        }
        out.push_str(
            &Decomposed {
                base: d.base,
                marks: kept,
            }
            .recompose(),
        );
    }
    out
}

/// Moves each token's single tone mark to the resolver's expected vowel.
///
/// Tokens with zero or several tone-bearing letters, and tokens the
/// resolver finds ambiguous, pass through unchanged.
pub fn relocate_tone_marks(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut token = String::new();
    for ch in text.chars() {
        if is_token_char(ch) {
            token.push(ch);
        } else {
            if !token.is_empty() {
                out.push_str(&relocate_in_token(&token));
                token.clear();
            }
            out.push(ch);
        }
    }
    if !token.is_empty() {
        out.push_str(&relocate_in_token(&token));
    }
    out
}

fn relocate_in_token(token: &str) -> String {
    let decomp: Vec<Decomposed> = token.chars().map(decompose).collect();
    let tone_positions: Vec<usize> = decomp
        .iter()
        .enumerate()
        .filter(|(_, d)| d.tone().is_some())
        .map(|(i, _)| i)
        .collect();
    let &[actual] = &tone_positions[..] else {
        return token.to_string();
    };
    let Some(expected) = expected_tone_index(token) else {
        return token.to_string();
    };
    if expected == actual {
        return token.to_string();
    }
    let Some(tone) = decomp[actual].tone() else {
        return token.to_string();
    };

    let mut pieces: Vec<String> = decomp.iter().map(Decomposed::recompose).collect();
    let stripped: MarkVec = decomp[actual]
        .marks
        .iter()
        .copied()
        .filter(|&m| !tables::is_tone_mark(m))
        .collect();
    pieces[actual] = Decomposed {
        base: decomp[actual].base,
        marks: stripped,
    }
    .recompose();

    // The clamp pass guarantees the target has no tone of its own when the
    // token-level count is one, but guard anyway.
    if decomp[expected].tone().is_none() {
        let mut marks = decomp[expected].marks.clone();
        marks.push(tone);
        pieces[expected] = Decomposed {
            base: decomp[expected].base,
            marks,
        }
        .recompose();
    }

    pieces.concat()
}

/// Runs all four repair passes in order.
pub fn fix(text: &str) -> String {
    let text = strip_invisibles(text);
    let text = replace_safe_homoglyphs(&text);
    let text = clamp_tone_marks(&text);
    relocate_tone_marks(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::{is_invisible, HOMOGLYPH_SAFE_MAP};

    #[test]
    fn test_strip_invisibles_is_complete() {
        let input = "\u{FEFF}xin\u{200B} chào\u{00A0}bạn\u{2060}";
        let out = strip_invisibles(input);
        assert_eq!("xin chàobạn", out);
        assert!(!out.chars().any(is_invisible));
    }

    #[test]
    fn test_homoglyph_reduction_is_narrow() {
        // Mapped lookalikes are reduced; everything else survives.
        assert_eq!("bao", replace_safe_homoglyphs("b\u{0430}o"));
        assert_eq!("дом", replace_safe_homoglyphs("дом"));
        assert_eq!("β", replace_safe_homoglyphs("β"));
    }

    #[test]
    fn test_fix_introduces_only_mapped_replacements() {
        let input = "сафе β漢 đúng";
        let fixed = fix(input);
        let replacements: Vec<char> = HOMOGLYPH_SAFE_MAP.iter().map(|&(_, to)| to).collect();
        for ch in fixed.chars() {
            assert!(input.contains(ch) || replacements.contains(&ch), "{ch:?}");
        }
    }

    #[test]
    fn test_clamp_keeps_tone_and_drops_foreign_company() {
        // ǘ = u + diaeresis + acute: the diaeresis goes, the tone stays.
        assert_eq!("ú", clamp_tone_marks("\u{01D8}"));
        // ṩ = s + dot-below + dot-above: the dot-above goes; the clamp does
        // not second-guess which letters may bear a tone.
        assert_eq!("\u{1E63}", clamp_tone_marks("\u{1E69}"));
    }

    #[test]
    fn test_clamp_drops_foreign_marks_on_letters() {
        // ḑ -> d, ǫ -> o; quality diacritics and real tones survive.
        assert_eq!("d", clamp_tone_marks("\u{1E11}"));
        assert_eq!("o", clamp_tone_marks("\u{01EB}"));
        assert_eq!("tiếng ở", clamp_tone_marks("tiếng ở"));
    }

    #[test]
    fn test_relocation_moves_tone_to_expected_vowel() {
        assert_eq!("hòa", relocate_tone_marks("hoà"));
        assert_eq!("tùy", relocate_tone_marks("tuỳ"));
        assert_eq!("khỏe", relocate_tone_marks("khoẻ"));
        // Quality marks on both characters survive the move.
        assert_eq!("uyến", relocate_tone_marks("úyên"));
    }

    #[test]
    fn test_relocation_leaves_correct_and_ambiguous_tokens() {
        for text in ["hòa", "mà", "tiếng", "chùa", "khuỷu", "toàn", "bôê"] {
            assert_eq!(text, relocate_tone_marks(text));
        }
    }

    #[test]
    fn test_qu_words_pass_through_untouched() {
        // thúy exercises a non-q uy ending whose tone is already placed.
        for text in ["quý", "quỳ", "quỹ", "quỷ", "quỵ", "thúy quỳnh"] {
            assert_eq!(text, fix(text));
        }
    }

    #[test]
    fn test_fix_scenarios() {
        assert_eq!("ab", fix("a\u{200B}b"));
        assert_eq!("hòa", fix("hoà"));
        assert_eq!("mà", fix("mà"));
    }

    #[test]
    fn test_fix_is_idempotent() {
        for text in [
            "a\u{200B}b",
            "hoà bình \u{0430}nh",
            "tuỳ tiện \u{1E11}ại",
            "chùa khuỷu bôê",
            "Việt Nam: ngày 20\u{00A0}tháng 7",
        ] {
            let once = fix(text);
            assert_eq!(once, fix(&once));
        }
    }

    #[test]
    fn test_fix_enforces_single_tone_per_letter() {
        let fixed = fix("\u{01D8} tiếng \u{1E11}ại chào");
        for ch in fixed.chars() {
            assert!(crate::decompose::decompose(ch).tone_count() <= 1);
        }
    }

    #[test]
    fn test_non_worsening_on_correct_tokens() {
        // Tokens whose tone already sits at the expected index are returned
        // byte-for-byte.
        for token in ["hòa", "tiếng", "nguyễn", "mương", "ủy"] {
            assert_eq!(token, relocate_in_token(token));
        }
    }
}

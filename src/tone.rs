//! Tone-placement resolution for Vietnamese syllables.
//!
//! [`expected_tone_index`] answers one question: for a given token, which
//! character should carry the tone mark? The answer comes from a
//! first-match-wins chain of orthographic rules over vowel clusters. When no
//! rule applies the resolver returns `None` and callers must neither flag
//! nor rewrite — the heuristic favors false negatives over corrupting text
//! that may already be correct.

use crate::decompose::{decompose, Decomposed, MarkVec};
use crate::tables::{self, CIRCUMFLEX, HORN};

/// Syllable codas that close a Vietnamese syllable, as (lowercase) suffixes.
const CODA_DIGRAPHS: &[&[char]] = &[&['n', 'g'], &['n', 'h'], &['c', 'h']];
const CODA_SINGLE: &[char] = &[
    'b', 'c', 'd', 'đ', 'g', 'h', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'x',
];

/// Precomputed per-token views the placement rules match against.
struct Shape {
    decomp: Vec<Decomposed>,
    /// Lowercased characters, tone marks intact. Literal cluster matches on
    /// this view stay dormant whenever the tone sits inside the cluster.
    folded: Vec<char>,
    /// Lowercased characters with tone marks stripped and quality diacritics
    /// kept, one per input character.
    skeleton: Vec<char>,
    /// Indices of vowel-base characters.
    vowels: Vec<usize>,
    has_coda: bool,
}

impl Shape {
    fn new(token: &str) -> Self {
        let decomp: Vec<Decomposed> = token.chars().map(decompose).collect();
        let folded: Vec<char> = token.chars().map(fold).collect();
        let skeleton: Vec<char> = decomp
            .iter()
            .map(|d| {
                let kept: MarkVec = d
                    .marks
                    .iter()
                    .copied()
                    .filter(|&m| !tables::is_tone_mark(m))
                    .collect();
                let stripped = Decomposed {
                    base: d.base,
                    marks: kept,
                };
                fold(stripped.recompose().chars().next().unwrap_or(d.base))
            })
            .collect();
        let vowels: Vec<usize> = decomp
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_vowel())
            .map(|(i, _)| i)
            .collect();
        let has_coda = CODA_DIGRAPHS.iter().any(|s| skeleton.ends_with(s))
            || skeleton.last().is_some_and(|c| CODA_SINGLE.contains(c));
        Shape {
            decomp,
            folded,
            skeleton,
            vowels,
            has_coda,
        }
    }

    fn base_fold(&self, idx: usize) -> char {
        self.decomp[idx].base.to_ascii_lowercase()
    }

    /// First character whose decomposed base is `base` and which carries
    /// `mark`, scanning left to right.
    fn find_base_with_mark(&self, base: char, mark: char) -> Option<usize> {
        (0..self.decomp.len())
            .find(|&i| self.base_fold(i) == base && self.decomp[i].has_mark(mark))
    }

    fn skeleton_contains(&self, needle: &[char]) -> bool {
        self.skeleton.windows(needle.len()).any(|w| w == needle)
    }
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

type Rule = fn(&Shape) -> Option<usize>;

/// The placement policy, evaluated top to bottom; the first rule that
/// produces an index wins.
const RULES: &[Rule] = &[
    rule_lone_vowel,
    rule_lone_quality_vowel,
    rule_uye_cluster,
    rule_closed_triphthong,
    rule_open_diphthong,
    rule_final_glide_cluster,
];

/// A single vowel leaves no choice.
fn rule_lone_vowel(shape: &Shape) -> Option<usize> {
    match shape.vowels[..] {
        [only] => Some(only),
        _ => None,
    }
}

/// Exactly one vowel already bearing circumflex/breve/horn marks the main
/// vowel. Several quality-bearing vowels are ambiguous here; the cluster
/// rules below may still decide.
fn rule_lone_quality_vowel(shape: &Shape) -> Option<usize> {
    let mut carriers = shape
        .vowels
        .iter()
        .copied()
        .filter(|&i| shape.decomp[i].has_quality());
    match (carriers.next(), carriers.next()) {
        (Some(only), None) => Some(only),
        _ => None,
    }
}

/// uyê: the tone belongs on the ê.
fn rule_uye_cluster(shape: &Shape) -> Option<usize> {
    if shape.skeleton_contains(&['u', 'y', 'ê']) {
        shape.find_base_with_mark('e', CIRCUMFLEX)
    } else {
        None
    }
}

/// iê/uô/ươ before a coda: the tone belongs on the middle vowel (ê, ô, ơ —
/// checked in that preference order).
fn rule_closed_triphthong(shape: &Shape) -> Option<usize> {
    if !shape.has_coda {
        return None;
    }
    [('e', CIRCUMFLEX), ('o', CIRCUMFLEX), ('o', HORN)]
        .into_iter()
        .find_map(|(base, mark)| shape.find_base_with_mark(base, mark))
}

/// ia/ua/ưa with no coda: the tone belongs on the final a. Matched on the
/// tone-bearing view, so a cluster that already carries its tone is left
/// alone.
fn rule_open_diphthong(shape: &Shape) -> Option<usize> {
    if shape.has_coda {
        return None;
    }
    let ends_open = [&['i', 'a'][..], &['u', 'a'][..], &['ư', 'a'][..]]
        .iter()
        .any(|s| shape.folded.ends_with(s));
    if !ends_open {
        return None;
    }
    (0..shape.decomp.len()).rev().find(|&i| shape.base_fold(i) == 'a')
}

/// A token-final oa/oe/uy cluster takes the tone on its first vowel. Only
/// the final position counts: mid-token clusters are followed by a coda or
/// another vowel and are governed by other conventions. In a qu- onset the
/// u is part of the onset, not the cluster, so uy after q never matches.
fn rule_final_glide_cluster(shape: &Shape) -> Option<usize> {
    let len = shape.skeleton.len();
    for pat in [&['o', 'a'][..], &['o', 'e'][..], &['u', 'y'][..]] {
        if !shape.skeleton.ends_with(pat) || !shape.vowels.contains(&(len - 2)) {
            continue;
        }
        if pat == &['u', 'y'][..] && len >= 3 && shape.skeleton[len - 3] == 'q' {
            continue;
        }
        return Some(len - 2);
    }
    None
}

/// Computes the character index within `token` that should carry the tone
/// mark, or `None` when the rules do not converge.
///
/// Deterministic and total over any letter/hyphen token. `None` means
/// "cannot decide": callers must not flag and must not fix.
pub fn expected_tone_index(token: &str) -> Option<usize> {
    let shape = Shape::new(token);
    if shape.vowels.is_empty() {
        return None;
    }
    RULES.iter().find_map(|&rule| rule(&shape))
}

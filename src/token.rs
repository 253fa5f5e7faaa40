//! Word-level tokenization for tone-placement analysis.
//!
//! A token is a maximal run of letter/hyphen characters; the letter class
//! covers ASCII plus the `À`..=`ỹ` range that holds every precomposed
//! Vietnamese letter. Tokens and the text between them partition the input.

use serde::{Deserialize, Serialize};

/// A maximal letter/hyphen run, with its character offset in the analyzed
/// text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Character offset (not bytes) of the first letter.
    pub start: usize,
    /// The token text.
    pub text: String,
}

/// Returns whether `ch` can be part of a token.
pub(crate) fn is_token_char(ch: char) -> bool {
    ch == '-' || ch.is_ascii_alphabetic() || ('\u{00C0}'..='\u{1EF9}').contains(&ch)
}

/// Splits `text` into letter/hyphen tokens with character offsets.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut start = 0usize;

    for (pos, ch) in text.chars().enumerate() {
        if is_token_char(ch) {
            if current.is_empty() {
                start = pos;
            }
            current.push(ch);
        } else if !current.is_empty() {
            tokens.push(Token {
                start,
                text: std::mem::take(&mut current),
            });
        }
    }
    if !current.is_empty() {
        tokens.push(Token {
            start,
            text: current,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_letter_hyphen_runs() {
        assert_eq!(vec!["xin", "chào", "thế-giới"], texts("xin chào, thế-giới!"));
    }

    #[test]
    fn test_offsets_are_char_offsets() {
        let tokens = tokenize("đi học");
        assert_eq!(2, tokens.len());
        assert_eq!(0, tokens[0].start);
        assert_eq!(3, tokens[1].start);
        assert_eq!("học", tokens[1].text);
    }

    #[test]
    fn test_digits_and_punctuation_delimit() {
        assert_eq!(vec!["ngày", "tháng"], texts("ngày 20 tháng 7."));
        assert!(tokenize("2024 ... !!").is_empty());
    }

    #[test]
    fn test_letter_range_is_a_plain_codepoint_interval() {
        // À..=ỹ covers Greek and Cyrillic too, so a confusable smuggled
        // into a word stays inside its token; CJK sits past the range and
        // splits.
        assert_eq!(vec!["bяo"], texts("bяo"));
        assert_eq!(vec!["xe", "đạp"], texts("xe漢đạp"));
    }

    #[test]
    fn test_token_partition_is_lossless() {
        let input = "một, hai\u{200B}ba";
        let tokens = tokenize(input);
        let chars: Vec<char> = input.chars().collect();
        for t in &tokens {
            let span: String = chars[t.start..t.start + t.text.chars().count()]
                .iter()
                .collect();
            assert_eq!(t.text, span);
        }
    }
}

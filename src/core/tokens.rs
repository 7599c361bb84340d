//! Word extraction for lexical frequency.
//!
//! A body is split on whitespace, and each piece is lower-cased and stripped
//! of every character that is not a word character. What remains is a
//! token; empty tokens are dropped. Counting rules (length, stop words) are
//! applied by [`is_countable`].
//!
//! Word characters are ASCII letters, digits and `_` unless
//! [`WordChars::Unicode`] is selected, so `"café"` becomes `"caf"` by
//! default.

use serde::{Deserialize, Serialize};

use crate::stopwords::StopWords;

/// Which characters survive token normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordChars {
    /// `[A-Za-z0-9_]`
    #[default]
    Ascii,
    /// Any Unicode alphanumeric character or `_`
    Unicode,
}

impl WordChars {
    fn keeps(self, c: char) -> bool {
        match self {
            WordChars::Ascii => c.is_ascii_alphanumeric() || c == '_',
            WordChars::Unicode => c.is_alphanumeric() || c == '_',
        }
    }
}

/// Splits a message body into normalized tokens using ASCII word characters.
///
/// ```
/// use chatlens::core::tokens::tokenize;
///
/// let tokens: Vec<String> = tokenize("Good MORNING, world!! :) it's 9am").collect();
/// assert_eq!(tokens, vec!["good", "morning", "world", "its", "9am"]);
/// ```
pub fn tokenize(body: &str) -> impl Iterator<Item = String> + '_ {
    tokenize_with(body, WordChars::Ascii)
}

/// Splits a message body into normalized tokens.
///
/// ```
/// use chatlens::core::tokens::{WordChars, tokenize_with};
///
/// let tokens: Vec<String> = tokenize_with("Привет, мир", WordChars::Unicode).collect();
/// assert_eq!(tokens, vec!["привет", "мир"]);
/// ```
pub fn tokenize_with(body: &str, word_chars: WordChars) -> impl Iterator<Item = String> + '_ {
    body.split_whitespace().filter_map(move |piece| {
        let token: String = piece
            .chars()
            .flat_map(char::to_lowercase)
            .filter(|c| word_chars.keeps(*c))
            .collect();
        (!token.is_empty()).then_some(token)
    })
}

/// Returns `true` if a token should be counted: longer than `min_len`
/// characters and not a stop word.
pub fn is_countable(token: &str, min_len: usize, stop_words: &StopWords) -> bool {
    token.chars().count() > min_len && !stop_words.contains(token)
}

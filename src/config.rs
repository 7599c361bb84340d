//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. The stop-word source lives in
//! [`stopwords`](crate::stopwords) next to its loader.
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, ParserConfig};
//!
//! let parser_config = ParserConfig::new().with_skip_system_notices(true);
//!
//! let analysis_config = AnalysisConfig::new()
//!     .with_top_authors(5)
//!     .with_top_tokens(50);
//! assert_eq!(analysis_config.top_emojis, 10);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::tokens::WordChars;

/// Default number of authors in the ranked author table.
pub const DEFAULT_TOP_AUTHORS: usize = 10;
/// Default number of tokens in the ranked word table.
pub const DEFAULT_TOP_TOKENS: usize = 20;
/// Default number of emojis in the ranked emoji table.
pub const DEFAULT_TOP_EMOJIS: usize = 10;
/// Tokens must be strictly longer than this many characters to be counted.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 2;
/// Default number of messages sampled for insight context.
pub const DEFAULT_SAMPLE_SIZE: usize = 100;

/// Configuration for log parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::ParserConfig;
///
/// let config = ParserConfig::new()
///     .with_warn_on_malformed(false);
/// assert!(!config.skip_system_notices);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Log a warning for each header-shaped line that fails timestamp
    /// construction (default: true). Such lines are counted either way.
    pub warn_on_malformed: bool,

    /// Drop header-shaped lines that look like app notices (default: false)
    pub skip_system_notices: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            warn_on_malformed: true,
            skip_system_notices: false,
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables warnings for malformed lines.
    #[must_use]
    pub fn with_warn_on_malformed(mut self, warn: bool) -> Self {
        self.warn_on_malformed = warn;
        self
    }

    /// Sets whether to skip system notices.
    #[must_use]
    pub fn with_skip_system_notices(mut self, skip: bool) -> Self {
        self.skip_system_notices = skip;
        self
    }
}

/// Configuration for aggregation.
///
/// Limits only affect the `top_*` tables of the summary; counting always
/// covers every event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Size of the ranked author table (default: 10)
    pub top_authors: usize,

    /// Size of the ranked word table (default: 20)
    pub top_tokens: usize,

    /// Size of the ranked emoji table (default: 10)
    pub top_emojis: usize,

    /// Tokens of this many characters or fewer are ignored (default: 2)
    pub min_token_len: usize,

    /// Characters kept in tokens (default: ASCII word characters)
    #[serde(default)]
    pub word_chars: WordChars,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_authors: DEFAULT_TOP_AUTHORS,
            top_tokens: DEFAULT_TOP_TOKENS,
            top_emojis: DEFAULT_TOP_EMOJIS,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            word_chars: WordChars::default(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ranked author table size.
    #[must_use]
    pub fn with_top_authors(mut self, n: usize) -> Self {
        self.top_authors = n;
        self
    }

    /// Sets the ranked word table size.
    #[must_use]
    pub fn with_top_tokens(mut self, n: usize) -> Self {
        self.top_tokens = n;
        self
    }

    /// Sets the ranked emoji table size.
    #[must_use]
    pub fn with_top_emojis(mut self, n: usize) -> Self {
        self.top_emojis = n;
        self
    }

    /// Sets the exclusive minimum token length.
    #[must_use]
    pub fn with_min_token_len(mut self, len: usize) -> Self {
        self.min_token_len = len;
        self
    }

    /// Sets which characters count as word characters.
    #[must_use]
    pub fn with_word_chars(mut self, word_chars: WordChars) -> Self {
        self.word_chars = word_chars;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parser_config_defaults() {
        let config = ParserConfig::default();
        assert!(config.warn_on_malformed);
        assert!(!config.skip_system_notices);
    }

    #[test]
    fn test_parser_config_builder() {
        let config = ParserConfig::new()
            .with_warn_on_malformed(false)
            .with_skip_system_notices(true);
        assert!(!config.warn_on_malformed);
        assert!(config.skip_system_notices);
    }

    #[test]
    fn test_analysis_config_defaults() {
        let config = AnalysisConfig::new();
        assert_eq!(config.top_authors, 10);
        assert_eq!(config.top_tokens, 20);
        assert_eq!(config.top_emojis, 10);
        assert_eq!(config.min_token_len, 2);
        assert_eq!(config.word_chars, WordChars::Ascii);
    }

    #[test]
    fn test_analysis_config_builder() {
        let config = AnalysisConfig::new()
            .with_top_authors(3)
            .with_top_tokens(5)
            .with_top_emojis(1)
            .with_min_token_len(3)
            .with_word_chars(WordChars::Unicode);
        assert_eq!(config.top_authors, 3);
        assert_eq!(config.top_tokens, 5);
        assert_eq!(config.top_emojis, 1);
        assert_eq!(config.min_token_len, 3);
        assert_eq!(config.word_chars, WordChars::Unicode);
    }

    #[test]
    fn test_config_serde() {
        let config = AnalysisConfig::new().with_top_tokens(7);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"top_tokens\":7"));

        let parsed: AnalysisConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);

        // older configs without the field read as ASCII
        let parsed: AnalysisConfig = serde_json::from_str(
            r#"{"top_authors":1,"top_tokens":2,"top_emojis":3,"min_token_len":2}"#,
        )
        .unwrap();
        assert_eq!(parsed.word_chars, WordChars::Ascii);
    }
}

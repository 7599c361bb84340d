//! Stop-word lists and their one-time loading.
//!
//! A stop-word list is a newline-delimited file of lower-case words. It is
//! the only state allowed to outlive a single analysis run, so it sits
//! behind [`StopWordCache`]: the first caller loads it, concurrent callers
//! wait for that load, and everyone shares the same immutable
//! [`StopWords`] afterwards.
//!
//! # Example
//!
//! ```rust
//! use chatlens::stopwords::{StopWordCache, StopWordSource};
//!
//! let cache = StopWordCache::new(StopWordSource::inline("the\nand\nfor\n"));
//! let words = cache.get();
//! assert!(words.contains("the"));
//! assert!(!words.contains("cat"));
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use log::{debug, warn};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::error::{ChatlensError, Result};

/// Minimal list used when no external list can be loaded.
pub const BUILTIN_STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "is", "are", "was", "were",
];

/// Where a stop-word list comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWordSource {
    /// The built-in minimal list
    #[default]
    Builtin,
    /// A local file
    File(PathBuf),
    /// A list already in memory
    Inline(String),
    /// An HTTP(S) URL, fetched with the `remote-stopwords` feature
    Url(String),
}

impl StopWordSource {
    /// Creates a file source.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        StopWordSource::File(path.into())
    }

    /// Creates an in-memory source.
    pub fn inline(list: impl Into<String>) -> Self {
        StopWordSource::Inline(list.into())
    }

    /// Interprets a location string: `http://`/`https://` become URLs,
    /// `builtin` selects the built-in list, anything else is a path.
    pub fn from_location(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            StopWordSource::Url(location.to_string())
        } else if lower == "builtin" {
            StopWordSource::Builtin
        } else {
            StopWordSource::File(PathBuf::from(location))
        }
    }

    /// Human-readable location, used in logs and errors.
    pub fn location(&self) -> String {
        match self {
            StopWordSource::Builtin => "builtin".to_string(),
            StopWordSource::File(path) => path.display().to_string(),
            StopWordSource::Inline(_) => "inline list".to_string(),
            StopWordSource::Url(url) => url.clone(),
        }
    }
}

impl std::str::FromStr for StopWordSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(StopWordSource::from_location(s))
    }
}

/// An immutable set of case-folded stop words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// An empty set; nothing is filtered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in minimal set.
    pub fn builtin() -> Self {
        Self::from_words(BUILTIN_STOP_WORDS.iter().copied())
    }

    /// Builds a set from individual words, trimming and lower-casing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parses a newline-delimited list.
    pub fn from_list(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Loads a list from its source.
    ///
    /// An external list that is unreadable or contains no words yields
    /// [`ChatlensError::StopWordSourceUnavailable`].
    pub fn load(source: &StopWordSource) -> Result<Self> {
        let text = match source {
            StopWordSource::Builtin => return Ok(Self::builtin()),
            StopWordSource::Inline(text) => text.clone(),
            StopWordSource::File(path) => fs::read_to_string(path).map_err(|e| {
                ChatlensError::stop_words_unavailable(path.display().to_string(), e.to_string())
            })?,
            StopWordSource::Url(url) => fetch_list(url)?,
        };

        let words = Self::from_list(&text);
        if words.is_empty() {
            return Err(ChatlensError::stop_words_unavailable(
                source.location(),
                "list contains no words",
            ));
        }
        Ok(words)
    }

    /// Returns `true` if `word` (already lower-case) is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(feature = "remote-stopwords")]
fn fetch_list(url: &str) -> Result<String> {
    reqwest::blocking::get(url)
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .map_err(|e| ChatlensError::stop_words_unavailable(url, e.to_string()))
}

#[cfg(not(feature = "remote-stopwords"))]
fn fetch_list(url: &str) -> Result<String> {
    Err(ChatlensError::stop_words_unavailable(
        url,
        "fetching over HTTP requires the 'remote-stopwords' feature",
    ))
}

/// Lazily loads a stop-word list exactly once.
///
/// Failed loads fall back to [`StopWords::builtin`] with a warning; the
/// fallback is cached too, so a missing file is reported once.
#[derive(Debug)]
pub struct StopWordCache {
    source: StopWordSource,
    words: OnceCell<Arc<StopWords>>,
}

impl StopWordCache {
    /// Creates a cache that will load from `source` on first use.
    pub fn new(source: StopWordSource) -> Self {
        Self {
            source,
            words: OnceCell::new(),
        }
    }

    /// Creates a cache that is already populated.
    pub fn preloaded(words: StopWords) -> Self {
        Self {
            source: StopWordSource::Builtin,
            words: OnceCell::with_value(Arc::new(words)),
        }
    }

    /// Returns the stop words, loading them on first call.
    pub fn get(&self) -> Arc<StopWords> {
        Arc::clone(self.words.get_or_init(|| {
            let words = StopWords::load(&self.source).unwrap_or_else(|e| {
                warn!("{e}; falling back to the built-in stop-word list");
                StopWords::builtin()
            });
            debug!(
                "Loaded {} stop words from {}",
                words.len(),
                self.source.location()
            );
            Arc::new(words)
        }))
    }

    /// Returns `true` once the list has been loaded.
    pub fn is_loaded(&self) -> bool {
        self.words.get().is_some()
    }

    /// The configured source.
    pub fn source(&self) -> &StopWordSource {
        &self.source
    }
}

impl Default for StopWordCache {
    fn default() -> Self {
        Self::new(StopWordSource::Builtin)
    }
}

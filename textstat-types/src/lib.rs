//! Core types for the textstat analyzer.
//!
//! This crate holds the values that cross crate boundaries:
//!
//! - **RankedWord**: a token and how often it occurred
//! - **AnalysisReport**: the single output of one analysis
//! - **AnalysisConfig**: knobs for ranking and token filtering
//!
//! It has no required dependencies. Enable the `serde` feature to derive
//! `Serialize` for the report types.

#![warn(missing_docs)]

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Number of ranked words a report carries by default.
pub const DEFAULT_TOP_N: usize = 5;

/// Shortest token (in characters) that takes part in frequency analysis.
pub const DEFAULT_MIN_TOKEN_CHARS: usize = 2;

/// Error message used when there is no text at all.
pub const NO_TEXT_MESSAGE: &str = "No text to analyze";

/// A normalized word together with its occurrence count.
///
/// Ranked lists are ordered by count (descending). Words with equal counts
/// keep the order in which they first appeared in the text, so two
/// `RankedWord`s with the same count are never reordered against each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct RankedWord {
    /// The normalized token.
    pub word: String,
    /// Number of occurrences in the token stream.
    pub count: u32,
}

impl RankedWord {
    /// Creates a new ranked word.
    #[inline]
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

impl fmt::Display for RankedWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' - {} occurrence(s)", self.word, self.count)
    }
}

/// Result of analyzing one piece of text.
///
/// A report is either a success, carrying line/word/character counts and
/// the ranked word list, or a failure carrying only an error message.
/// Failed reports always have zero counts and no ranked words; build them
/// with [`AnalysisReport::failed`] to keep that invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct AnalysisReport {
    /// Number of non-blank lines.
    pub line_count: usize,
    /// Number of whitespace-separated words in the raw text.
    pub word_count: usize,
    /// Number of characters excluding spaces, `\n` and `\r`.
    pub character_count: usize,
    /// Most frequent normalized words, best first.
    pub top_words: Vec<RankedWord>,
    /// Error message, set only for failed analyses.
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Creates a failed report carrying only `message`.
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Returns `true` if this report describes a failure.
    #[inline]
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Returns the error message, if any.
    #[inline]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(error) = &self.error {
            return write!(f, "error: {}", error);
        }

        write!(
            f,
            "{} lines, {} words, {} characters",
            self.line_count, self.word_count, self.character_count
        )?;

        if let Some(top) = self.top_words.first() {
            write!(f, ", top word {}", top)?;
        }

        Ok(())
    }
}

/// Analysis configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Maximum number of ranked words kept in a report.
    /// Default: 5
    pub top_n: usize,
    /// Tokens with fewer characters than this are left out of the ranking.
    /// Default: 2 (single characters are dropped)
    pub min_token_chars: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
        }
    }
}

impl AnalysisConfig {
    /// Creates a configuration keeping the `top_n` most frequent words.
    pub const fn with_top_n(top_n: usize) -> Self {
        Self {
            top_n,
            min_token_chars: DEFAULT_MIN_TOKEN_CHARS,
        }
    }
}

//! Analyzer type and constants.

use crate::analyzer::normalizer::TextNormalizer;

use textstat_types::AnalysisConfig;

/// Prefixes that mark a raw string as a failure message rather than text.
pub const SENTINEL_PREFIXES: [&str; 2] = ["Unable to read", "Error"];

/// Text statistics engine.
///
/// Holds its configuration and a reusable normalization buffer. Every call
/// builds and discards its own frequency table, so one `Analyzer` can serve
/// any number of unrelated texts.
#[derive(Debug, Clone)]
pub struct Analyzer {
    pub(crate) normalizer: TextNormalizer,
    pub(crate) config: AnalysisConfig,
    pub(crate) norm_buf: String,
    /// Total number of analyses run
    pub(crate) analyses: u64,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Creates an analyzer with the default configuration.
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::default(),
            config: AnalysisConfig::default(),
            norm_buf: String::with_capacity(256),
            analyses: 0,
        }
    }

    /// Creates an analyzer with custom configuration.
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    /// Returns the active configuration.
    #[inline(always)]
    #[must_use]
    pub fn config(&self) -> AnalysisConfig {
        self.config
    }

    /// Number of analyses this instance has run.
    #[inline(always)]
    #[must_use]
    pub fn analyses(&self) -> u64 {
        self.analyses
    }
}

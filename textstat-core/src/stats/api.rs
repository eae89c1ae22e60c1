//! Public API for analyzing raw text.

use tracing::debug;

use crate::analyzer::frequency::FrequencyTable;
use crate::stats::metrics::RawMetrics;
use crate::stats::types::{Analyzer, SENTINEL_PREFIXES};
use textstat_types::{AnalysisReport, NO_TEXT_MESSAGE};

/// Returns the sentinel prefix `raw` starts with, if any.
#[inline]
pub fn sentinel_prefix(raw: &str) -> Option<&'static str> {
    SENTINEL_PREFIXES
        .iter()
        .copied()
        .find(|prefix| raw.starts_with(prefix))
}

impl Analyzer {
    /// Analyzes raw text that may carry a failure message instead of text.
    ///
    /// Empty input, or input starting with `"Unable to read"` or `"Error"`,
    /// produces a failed report. Callers holding a typed extraction result
    /// should use [`run`](Self::run) instead.
    pub fn analyze(&mut self, raw: &str) -> AnalysisReport {
        if let Some(prefix) = sentinel_prefix(raw) {
            debug!(prefix, "raw text is a failure message");
            return AnalysisReport::failed(raw);
        }
        self.analyze_text(raw)
    }

    /// Analyzes raw text without looking at its content for failure markers.
    ///
    /// Only empty input fails.
    pub fn analyze_text(&mut self, raw: &str) -> AnalysisReport {
        self.analyses += 1;

        if raw.is_empty() {
            return AnalysisReport::failed(NO_TEXT_MESSAGE);
        }

        let metrics = RawMetrics::measure(raw);

        self.normalizer.normalize_into(raw, &mut self.norm_buf);
        let table = FrequencyTable::from_normalized(&self.norm_buf, self.config.min_token_chars);
        let top_words = table.top_n(self.config.top_n);

        debug!(
            %metrics,
            tokens = table.total(),
            distinct = table.len(),
            "analyzed text"
        );

        AnalysisReport {
            line_count: metrics.line_count,
            word_count: metrics.word_count,
            character_count: metrics.character_count,
            top_words,
            error: None,
        }
    }
}

/// Analyzes `raw` with the default configuration.
///
/// # Example
///
/// ```
/// use textstat_core::analyze;
///
/// let report = analyze("Hello hello WORLD! 123 test test test.");
/// assert_eq!(report.word_count, 7);
/// assert_eq!(report.top_words[0].word, "test");
/// assert_eq!(report.top_words[0].count, 3);
/// ```
pub fn analyze(raw: &str) -> AnalysisReport {
    Analyzer::new().analyze(raw)
}

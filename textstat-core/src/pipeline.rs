//! Pipeline driver: extraction result in, report out.
//!
//! Extraction failures arrive as typed [`ExtractionError`]s and become the
//! report's error message. Successful text goes through the aggregator
//! without any guessing based on its content.

use std::path::Path;

use tracing::debug;

use crate::extract::{ExtractionError, ExtractorRegistry};
use crate::stats::Analyzer;
use textstat_types::AnalysisReport;

impl Analyzer {
    /// Turns one extraction result into one report.
    pub fn run(&mut self, extracted: Result<String, ExtractionError>) -> AnalysisReport {
        match extracted {
            Ok(text) => self.analyze_text(&text),
            Err(e) => {
                debug!(error = %e, "extraction failed");
                AnalysisReport::failed(e.to_string())
            }
        }
    }

    /// Extracts the document at `path` with `registry` and analyzes it.
    pub fn analyze_path(
        &mut self,
        registry: &ExtractorRegistry,
        path: impl AsRef<Path>,
    ) -> AnalysisReport {
        self.run(registry.extract(path))
    }
}

/// Runs the analysis on an extraction result with the default configuration.
pub fn run_analysis(extracted: Result<String, ExtractionError>) -> AnalysisReport {
    Analyzer::new().run(extracted)
}

/// Extracts and analyzes the document at `path` with the default configuration.
pub fn analyze_path(registry: &ExtractorRegistry, path: impl AsRef<Path>) -> AnalysisReport {
    Analyzer::new().analyze_path(registry, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use textstat_types::{RankedWord, NO_TEXT_MESSAGE};

    #[test]
    fn error_forwarded_verbatim() {
        let report = run_analysis(Err(ExtractionError::NotFound(PathBuf::from("gone.txt"))));
        assert_eq!(report.error(), Some("File not found: gone.txt"));
        assert_eq!(report.line_count, 0);
        assert!(report.top_words.is_empty());
    }

    #[test]
    fn unsupported_format_forwarded() {
        let report = run_analysis(Err(ExtractionError::Unsupported("odt".into())));
        assert_eq!(report.error(), Some("Unsupported file format: odt"));
    }

    #[test]
    fn text_analyzed() {
        let report = run_analysis(Ok("Hello hello WORLD! 123 test test test.".into()));
        assert!(!report.is_error());
        assert_eq!(
            report.top_words,
            vec![
                RankedWord::new("test", 3),
                RankedWord::new("hello", 2),
                RankedWord::new("world", 1),
            ]
        );
    }

    #[test]
    fn text_content_never_treated_as_error() {
        let report = run_analysis(Ok("Unable to read the room, she left.".into()));
        assert!(!report.is_error());
        assert_eq!(report.word_count, 7);
    }

    #[test]
    fn empty_text_fails() {
        let report = run_analysis(Ok(String::new()));
        assert_eq!(report.error(), Some(NO_TEXT_MESSAGE));
    }
}

//! Statistics aggregation.
//!
//! Combines raw-text metrics (lines, words, characters) with the ranked word
//! frequencies of the normalized text into one [`AnalysisReport`].
//!
//! Word counts come from the raw text while the ranking comes from the
//! normalized text, so `"42 apples"` counts two words but ranks only
//! `apples`.
//!
//! [`AnalysisReport`]: textstat_types::AnalysisReport

mod api;
mod metrics;
mod types;

pub use api::{analyze, sentinel_prefix};
pub use metrics::{count_characters, count_lines, RawMetrics};
pub use types::{Analyzer, SENTINEL_PREFIXES};

#[cfg(test)]
mod tests {
    use super::*;
    use textstat_types::{AnalysisConfig, RankedWord, NO_TEXT_MESSAGE};

    fn pairs(report: &textstat_types::AnalysisReport) -> Vec<(&str, u32)> {
        report
            .top_words
            .iter()
            .map(|w| (w.word.as_str(), w.count))
            .collect()
    }

    #[test]
    fn mixed_sentence() {
        let report = analyze("Hello hello WORLD! 123 test test test.");
        assert!(!report.is_error());
        assert_eq!(report.line_count, 1);
        assert_eq!(report.word_count, 7);
        assert_eq!(
            pairs(&report),
            vec![("test", 3), ("hello", 2), ("world", 1)]
        );
    }

    #[test]
    fn empty_text_fails() {
        let report = analyze("");
        assert_eq!(report.error(), Some(NO_TEXT_MESSAGE));
        assert_eq!(report.line_count, 0);
        assert_eq!(report.word_count, 0);
        assert_eq!(report.character_count, 0);
        assert!(report.top_words.is_empty());
    }

    #[test]
    fn sentinel_text_fails_verbatim() {
        let msg = "Unable to read .doc file. Please install antiword or convert to .docx format.";
        let report = analyze(msg);
        assert_eq!(report.error(), Some(msg));
        assert_eq!(report.word_count, 0);
        assert!(report.top_words.is_empty());

        let report = analyze("Error: disk on fire");
        assert_eq!(report.error(), Some("Error: disk on fire"));
    }

    #[test]
    fn sentinel_prefix_is_case_sensitive() {
        assert_eq!(sentinel_prefix("error in line 3"), None);
        assert!(!analyze("error in line 3").is_error());
        assert_eq!(sentinel_prefix("Errors happen"), Some("Error"));
    }

    #[test]
    fn analyze_text_ignores_sentinels() {
        let mut analyzer = Analyzer::new();
        let report = analyzer.analyze_text("Error handling matters. Error handling wins.");
        assert!(!report.is_error());
        assert_eq!(report.word_count, 6);
        assert_eq!(report.top_words[0], RankedWord::new("error", 2));
        assert_eq!(report.top_words[1], RankedWord::new("handling", 2));
    }

    #[test]
    fn blank_lines_and_characters() {
        let raw = "line one\n\nline two\n";
        let report = analyze(raw);
        assert_eq!(report.line_count, 2);
        assert_eq!(report.word_count, 4);
        assert_eq!(report.character_count, "lineonelinetwo".chars().count());
        assert_eq!(pairs(&report), vec![("line", 2), ("one", 1), ("two", 1)]);
    }

    #[test]
    fn whitespace_only_text_is_not_an_error() {
        let report = analyze("   \n\t\n");
        assert!(!report.is_error());
        assert_eq!(report.line_count, 0);
        assert_eq!(report.word_count, 0);
        assert_eq!(report.character_count, 1);
        assert!(report.top_words.is_empty());
    }

    #[test]
    fn digit_only_words_vanish_from_ranking() {
        let report = analyze("2024 2025 2026 year");
        assert_eq!(report.word_count, 4);
        assert_eq!(pairs(&report), vec![("year", 1)]);
    }

    #[test]
    fn top_words_capped_at_five() {
        let report = analyze("aa bb cc dd ee ff gg hh aa");
        assert_eq!(report.top_words.len(), 5);
        assert_eq!(report.top_words[0], RankedWord::new("aa", 2));
        assert_eq!(report.top_words[4], RankedWord::new("ee", 1));
    }

    #[test]
    fn word_count_bounds_ranked_tokens() {
        let samples = [
            "The cat sat on the mat.",
            "one-two three,four five",
            "A b c d e f g",
            "It's 5 o'clock somewhere!",
        ];
        for raw in samples {
            let report = analyze(raw);
            let ranked: u32 = report.top_words.iter().map(|w| w.count).sum();
            assert!(report.word_count >= ranked as usize, "{raw:?}");
        }
    }

    #[test]
    fn custom_top_n() {
        let mut analyzer = Analyzer::with_config(AnalysisConfig::with_top_n(2));
        let report = analyzer.analyze("aa aa bb bb cc cc dd");
        assert_eq!(pairs(&report), vec![("aa", 2), ("bb", 2)]);
    }

    #[test]
    fn analyzer_is_reusable_and_stateless() {
        let mut analyzer = Analyzer::new();
        let first = analyzer.analyze("alpha alpha beta");
        let second = analyzer.analyze("gamma");
        assert_eq!(pairs(&first), vec![("alpha", 2), ("beta", 1)]);
        assert_eq!(pairs(&second), vec![("gamma", 1)]);
        assert_eq!(analyzer.analyses(), 2);

        let again = analyzer.analyze("alpha alpha beta");
        assert_eq!(first, again);
    }
}

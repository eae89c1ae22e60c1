//! Text extraction and word-frequency statistics.
//!
//! The pipeline runs in four stages:
//!
//! 1. [`extract`] turns a document into raw text (or a typed error)
//! 2. [`analyzer::normalizer`] lower-cases the text and strips punctuation
//!    and digits
//! 3. [`analyzer::frequency`] counts tokens and ranks the most frequent ones
//! 4. [`stats`] combines raw counts and the ranking into an
//!    [`AnalysisReport`]
//!
//! ```
//! use textstat_core::run_analysis;
//!
//! let report = run_analysis(Ok("line one\n\nline two\n".to_string()));
//! assert_eq!(report.line_count, 2);
//! assert_eq!(report.word_count, 4);
//! assert_eq!(report.top_words[0].word, "line");
//! ```
//!
//! Everything here is synchronous and single-threaded. Only the `extract`
//! handlers touch the filesystem or spawn processes.

pub mod analyzer;
pub mod extract;
pub mod pipeline;
pub mod stats;

pub use analyzer::{count_frequencies, normalize, top_n, FrequencyTable, TextNormalizer};
pub use extract::{ExtractConfig, ExtractionError, ExtractorRegistry};
pub use pipeline::{analyze_path, run_analysis};
pub use stats::{analyze, Analyzer};
pub use textstat_types::{AnalysisConfig, AnalysisReport, RankedWord};

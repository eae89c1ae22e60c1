//! Text analysis pipeline.
//!
//! This module provides the text processing components:
//! - **Normalizer**: Lower-cases raw text and strips punctuation and digits
//! - **Tokenizer**: Splits normalized text into tokens
//! - **Frequency**: Counts tokens and ranks the most frequent ones

pub mod frequency;
pub mod normalizer;
pub mod tokenizer;

pub use frequency::{count_frequencies, top_n, FrequencyTable};
pub use normalizer::{normalize, NormalizerConfig, TextNormalizer};
pub use tokenizer::Tokenizer;

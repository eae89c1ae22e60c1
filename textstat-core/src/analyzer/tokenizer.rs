//! Streaming Tokenizer Module
//!
//! Splits normalized text into tokens for frequency counting. It's the second
//! stage of the analysis pipeline: it takes the output of the normalizer and
//! breaks it into words, dropping the ones that are too short to be
//! interesting.
//!
//! ## What It Does
//!
//! Given normalized input like `"a cat and a dog"`, a tokenizer with the
//! default minimum of two characters emits:
//!
//! ```ignore
//! ("cat", 1)
//! ("and", 2)
//! ("dog", 4)
//! ```
//!
//! The number is the word's position in the full word stream, so skipped
//! words still advance it.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: Tokens are slices of the original string
//! - **Streaming**: Tokens go to a callback, no intermediate collection
//! - **Fast**: `memchr` scan for ASCII space (0x20)
//!
//! ## Usage
//!
//! ```rust
//! use textstat_core::analyzer::Tokenizer;
//!
//! let tokenizer = Tokenizer::default();
//! let mut words = Vec::new();
//! tokenizer.tokenize("a cat and a dog", |text, _pos| words.push(text));
//! assert_eq!(words, ["cat", "and", "dog"]);
//! ```
//!
//! ## The Input Contract
//!
//! The tokenizer expects **normalized** input:
//! - No leading or trailing whitespace
//! - No consecutive spaces between words
//!
//! Violations panic in debug builds with a message naming the broken rule.
//!
//! ## Token Length
//!
//! Length is measured in characters, not bytes: `"é"` is one character and is
//! dropped by the default tokenizer even though it takes two bytes.

use memchr::memchr_iter;
use textstat_types::DEFAULT_MIN_TOKEN_CHARS;

/// Streaming tokenizer - splits normalized text into tokens.
///
/// Emits every space-separated word of at least `min_chars` characters,
/// together with its position in the word stream.
///
/// ## Example
///
/// ```
/// use textstat_core::analyzer::Tokenizer;
///
/// let tokenizer = Tokenizer::new(1);
/// let mut count = 0;
///
/// tokenizer.tokenize("hello world x", |_text, _pos| {
///     count += 1;
/// });
///
/// assert_eq!(count, 3);
/// ```
#[derive(Debug, Copy, Clone)]
#[repr(transparent)]
pub struct Tokenizer {
    min_chars: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOKEN_CHARS)
    }
}

impl Tokenizer {
    /// Creates a tokenizer that skips words shorter than `min_chars` characters.
    #[inline]
    pub const fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    /// Tokenizes normalized input and emits `(text, position)`.
    ///
    /// Position is `u32`. After a word at position `u32::MAX`, further
    /// emissions stop (overflow protection).
    #[inline(always)]
    #[allow(clippy::needless_lifetimes)]
    pub fn tokenize<'n, F>(&self, normalized: &'n str, mut emit: F)
    where
        F: FnMut(&'n str, u32),
    {
        let bytes = normalized.as_bytes();

        debug_assert!(
            bytes.first().is_none_or(|&b| b != b' '),
            "tokenizer: leading whitespace: normalizer contract violated"
        );

        debug_assert!(
            bytes.last().is_none_or(|&b| b != b' '),
            "tokenizer: trailing whitespace: normalizer contract violated"
        );

        debug_assert!(
            !normalized.contains("  "),
            "tokenizer: consecutive spaces: normalizer contract violated"
        );

        if bytes.is_empty() {
            return;
        }

        let mut start = 0usize;
        let mut pos = 0u32;

        for i in memchr_iter(b' ', bytes) {
            if start < i {
                // Splitting on ASCII space never lands inside a multi-byte
                // sequence, so both bounds are char boundaries.
                let text = &normalized[start..i];
                if self.accepts(text) {
                    emit(text, pos);
                }
                if pos == u32::MAX {
                    return;
                }
                pos += 1;
            }
            start = i + 1;
        }

        if start < bytes.len() {
            let text = &normalized[start..];
            if self.accepts(text) {
                emit(text, pos);
            }
        }
    }

    #[inline(always)]
    fn accepts(&self, text: &str) -> bool {
        // Byte length bounds char length from above.
        text.len() >= self.min_chars
            && text.chars().nth(self.min_chars.saturating_sub(1)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str, min_chars: usize) -> Vec<(&str, u32)> {
        let mut out = Vec::new();
        Tokenizer::new(min_chars).tokenize(input, |text, pos| {
            out.push((text, pos));
        });
        out
    }

    #[test]
    fn single_word() {
        let out = collect("hello", 2);
        assert_eq!(out, vec![("hello", 0)]);
    }

    #[test]
    fn two_words() {
        let out = collect("hello world", 2);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].0, "hello");
        assert_eq!(out[1].0, "world");
    }

    #[test]
    fn positions_are_sequential() {
        let out = collect("the quick brown fox", 1);
        assert_eq!(out.len(), 4);
        for (i, (_, pos)) in out.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(collect("", 2).is_empty());
        assert!(collect("", 0).is_empty());
    }

    #[test]
    fn single_char_tokens_dropped_by_default() {
        let mut out = Vec::new();
        Tokenizer::default().tokenize("a cat and a dog", |text, pos| out.push((text, pos)));
        assert_eq!(out, vec![("cat", 1), ("and", 2), ("dog", 4)]);
    }

    #[test]
    fn single_char_token_kept_with_min_one() {
        let out = collect("a", 1);
        assert_eq!(out, vec![("a", 0)]);
    }

    #[test]
    fn length_is_counted_in_chars() {
        // "é" is two bytes but one character.
        assert!(collect("é", 2).is_empty());
        assert_eq!(collect("éé", 2), vec![("éé", 0)]);
        assert!(collect("日本", 3).is_empty());
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::default().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn emit_order_is_left_to_right() {
        let words = ["one", "two", "three", "four"];
        let input = words.join(" ");
        let mut i = 0usize;

        Tokenizer::default().tokenize(&input, |text, pos| {
            assert_eq!(text, words[i]);
            assert_eq!(pos, i as u32);
            i += 1;
        });

        assert_eq!(i, words.len());
    }

    #[test]
    fn tokenizer_is_reusable() {
        let t = Tokenizer::default();

        let mut n = 0usize;
        t.tokenize("hello world", |_, _| n += 1);
        assert_eq!(n, 2);

        n = 0;
        t.tokenize("one two three", |_, _| n += 1);
        assert_eq!(n, 3);
    }
}

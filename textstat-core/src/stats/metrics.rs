//! Raw-text metrics.

use memchr::memchr_iter;

/// Counts taken from the raw, unnormalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawMetrics {
    /// Lines (split on `\n`) that are not blank after trimming.
    pub line_count: usize,
    /// Whitespace-separated words.
    pub word_count: usize,
    /// Characters other than space, `\n` and `\r`.
    pub character_count: usize,
}

impl RawMetrics {
    /// Measures `raw`.
    pub fn measure(raw: &str) -> Self {
        Self {
            line_count: count_lines(raw),
            word_count: raw.split_whitespace().count(),
            character_count: count_characters(raw),
        }
    }
}

/// Counts non-blank lines. Only `\n` separates lines; a `\r` before it is
/// whitespace and trimmed away with the rest.
pub fn count_lines(raw: &str) -> usize {
    let bytes = raw.as_bytes();
    let mut start = 0usize;
    let mut lines = 0usize;

    for i in memchr_iter(b'\n', bytes) {
        if !raw[start..i].trim().is_empty() {
            lines += 1;
        }
        start = i + 1;
    }

    if !raw[start..].trim().is_empty() {
        lines += 1;
    }

    lines
}

/// Counts characters, leaving out spaces, newlines and carriage returns.
/// Tabs and other whitespace are counted.
pub fn count_characters(raw: &str) -> usize {
    raw.chars()
        .filter(|&c| !matches!(c, ' ' | '\n' | '\r'))
        .count()
}

impl core::fmt::Display for RawMetrics {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} lines, {} words, {} characters",
            self.line_count, self.word_count, self.character_count
        )
    }
}

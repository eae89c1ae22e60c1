//! Word frequency counting and ranking.
//!
//! A [`FrequencyTable`] counts the tokens of one normalized text. Keys borrow
//! from that text, so building a table allocates only the map and the entry
//! list. Entries remember the order in which each token was first seen; that
//! order is the tie-breaker when two tokens have the same count.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use textstat_types::{RankedWord, DEFAULT_MIN_TOKEN_CHARS};

use crate::analyzer::tokenizer::Tokenizer;

/// Token occurrence counts, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable<'a> {
    /// Token -> slot in `entries`.
    index: FxHashMap<&'a str, u32>,
    entries: Vec<(&'a str, u32)>,
    total: usize,
}

impl<'a> FrequencyTable<'a> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts the tokens of `normalized` that have at least `min_token_chars`
    /// characters.
    pub fn from_normalized(normalized: &'a str, min_token_chars: usize) -> Self {
        let mut table = Self::new();
        Tokenizer::new(min_token_chars).tokenize(normalized, |token, _| table.record(token));
        table
    }

    /// Records one occurrence of `token`.
    #[inline]
    pub fn record(&mut self, token: &'a str) {
        self.total += 1;
        match self.index.get(token) {
            Some(&slot) => self.entries[slot as usize].1 += 1,
            None => {
                self.index.insert(token, self.entries.len() as u32);
                self.entries.push((token, 1));
            }
        }
    }

    /// Number of distinct tokens.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no token was recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of recorded tokens, duplicates included.
    #[inline]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Count for `token`, if it was seen.
    #[inline]
    pub fn get(&self, token: &str) -> Option<u32> {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot as usize].1)
    }

    /// Iterates `(token, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&'a str, u32)> + '_ {
        self.entries.iter().copied()
    }

    /// Returns every token ranked by descending count.
    ///
    /// The sort is stable, so equal counts stay in first-seen order.
    pub fn ranked(&self) -> Vec<RankedWord> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.1.cmp(&a.1));
        sorted
            .into_iter()
            .map(|(word, count)| RankedWord::new(word, count))
            .collect()
    }

    /// Returns the `n` most frequent tokens, best first.
    ///
    /// Same order as the first `n` entries of [`ranked`](Self::ranked), but
    /// keeps only `n` candidates while scanning instead of sorting everything.
    pub fn top_n(&self, n: usize) -> Vec<RankedWord> {
        if n == 0 {
            return Vec::new();
        }

        let mut best: SmallVec<[u32; 8]> = SmallVec::new();

        for (slot, &(_, count)) in self.entries.iter().enumerate() {
            if best.len() == n && self.count_at(best[n - 1]) >= count {
                continue;
            }

            // Insert after every candidate with an equal or higher count so
            // ties keep first-seen order.
            let at = best
                .iter()
                .position(|&s| self.count_at(s) < count)
                .unwrap_or(best.len());
            best.insert(at, slot as u32);
            best.truncate(n);
        }

        best.iter()
            .map(|&slot| {
                let (word, count) = self.entries[slot as usize];
                RankedWord::new(word, count)
            })
            .collect()
    }

    #[inline(always)]
    fn count_at(&self, slot: u32) -> u32 {
        self.entries[slot as usize].1
    }
}

/// Counts tokens of two or more characters in `normalized`.
pub fn count_frequencies(normalized: &str) -> FrequencyTable<'_> {
    FrequencyTable::from_normalized(normalized, DEFAULT_MIN_TOKEN_CHARS)
}

/// Returns the `n` most frequent tokens of `table`.
pub fn top_n(table: &FrequencyTable<'_>, n: usize) -> Vec<RankedWord> {
    table.top_n(n)
}

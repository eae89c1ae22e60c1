#[derive(Clone, Copy, PartialEq, Eq)]
enum ByteClass {
    Keep,
    Space,
    Punct,
    Digit,
}

/// Class of every ASCII byte. Whitespace matches `char::is_whitespace`
/// restricted to ASCII so the fast path agrees with `split_whitespace`.
const ASCII_CLASS: [ByteClass; 128] = build_class_table();

const fn build_class_table() -> [ByteClass; 128] {
    let mut table = [ByteClass::Keep; 128];
    let mut i = 0;
    while i < 128 {
        let b = i as u8;
        table[i] = if matches!(b, b'\t' | b'\n' | 0x0b | 0x0c | b'\r' | b' ') {
            ByteClass::Space
        } else if b.is_ascii_punctuation() {
            ByteClass::Punct
        } else if b.is_ascii_digit() {
            ByteClass::Digit
        } else {
            ByteClass::Keep
        };
        i += 1;
    }
    table
}

/// Configuration options for text normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerConfig {
    /// Remove ASCII punctuation (``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``).
    pub strip_punctuation: bool,
    /// Remove ASCII digits `0-9`. Non-ASCII digits are always kept.
    pub strip_digits: bool,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            strip_punctuation: true,
            strip_digits: true,
        }
    }
}

/// Text normalizer applied before frequency analysis.
///
/// Performs the following operations in a single pass:
/// - Converts all characters to lowercase (Unicode-aware)
/// - Removes ASCII punctuation and ASCII digits
/// - Collapses whitespace runs (including newlines) into single spaces
/// - Removes leading/trailing whitespace
///
/// Removed characters do not separate words: `"don't"` becomes `"dont"`.
/// Punctuation outside the ASCII range is kept as-is.
///
/// # Examples
///
/// ```
/// use textstat_core::analyzer::TextNormalizer;
///
/// let normalizer = TextNormalizer::default();
/// assert_eq!(normalizer.normalize("  Hello, WORLD! 42 "), "hello world");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    config: NormalizerConfig,
}

impl TextNormalizer {
    /// Creates a new normalizer with the specified configuration.
    pub const fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[inline]
    pub const fn config(&self) -> NormalizerConfig {
        self.config
    }

    /// Normalizes text into an existing String buffer.
    ///
    /// Reuses the buffer's capacity if sufficient, growing only when necessary.
    /// Clears the buffer before writing.
    #[inline]
    pub fn normalize_into(&self, input: &str, out: &mut String) {
        out.clear();
        out.reserve(input.len());

        // Capital sigma lowercases by context (word-final ς); only the
        // whole-string mapping sees that context.
        let lowered;
        let input = if input.contains('Σ') {
            lowered = input.to_lowercase();
            lowered.as_str()
        } else {
            input
        };

        let bytes = input.as_bytes();
        let mut i = 0usize;
        let mut pending_space = false;

        while i < bytes.len() {
            let b = bytes[i];
            if b < 128 {
                self.push_ascii(b, out, &mut pending_space);
                i += 1;
                continue;
            }

            let Some(ch) = input[i..].chars().next() else {
                break;
            };
            i += ch.len_utf8();

            if ch.is_whitespace() {
                pending_space = true;
                continue;
            }

            for lowered in ch.to_lowercase() {
                if lowered.is_ascii() {
                    self.push_ascii(lowered as u8, out, &mut pending_space);
                } else {
                    push_kept(lowered, out, &mut pending_space);
                }
            }
        }
    }

    /// Normalizes text and returns a new String.
    #[inline]
    pub fn normalize(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.normalize_into(input, &mut out);
        out
    }

    #[inline(always)]
    fn push_ascii(&self, b: u8, out: &mut String, pending_space: &mut bool) {
        match ASCII_CLASS[b as usize] {
            ByteClass::Space => *pending_space = true,
            ByteClass::Punct if self.config.strip_punctuation => {}
            ByteClass::Digit if self.config.strip_digits => {}
            _ => push_kept(b.to_ascii_lowercase() as char, out, pending_space),
        }
    }
}

#[inline(always)]
fn push_kept(ch: char, out: &mut String, pending_space: &mut bool) {
    if *pending_space && !out.is_empty() {
        out.push(' ');
    }
    *pending_space = false;
    out.push(ch);
}

/// Normalizes `text` with the default configuration.
pub fn normalize(text: &str) -> String {
    TextNormalizer::default().normalize(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str;

    fn norm(input: &str) -> String {
        TextNormalizer::default().normalize(input)
    }

    #[test]
    fn ascii_basic_lowercase() {
        assert_eq!(norm("HELLO"), "hello");
        assert_eq!(norm("HeLlO"), "hello");
        assert_eq!(norm("123 ABC!"), "abc");
    }

    #[test]
    fn ascii_full_alphabet() {
        let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
        let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
        assert_eq!(norm(&upper), lower);
    }

    #[test]
    fn punctuation_removed_without_splitting() {
        assert_eq!(norm("don't"), "dont");
        assert_eq!(norm("foo-bar_baz"), "foobarbaz");
        assert_eq!(norm("e-mail, (please)!"), "email please");
    }

    #[test]
    fn every_ascii_punctuation_char_removed() {
        let punct = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
        assert_eq!(norm(punct), "");
        assert_eq!(norm(&format!("a{}b", punct)), "ab");
    }

    #[test]
    fn digits_removed_without_splitting() {
        assert_eq!(norm("abc123def"), "abcdef");
        assert_eq!(norm("room 101"), "room");
        assert_eq!(norm("2024"), "");
    }

    #[test]
    fn non_ascii_digits_kept() {
        assert_eq!(norm("٣ items"), "٣ items");
    }

    #[test]
    fn unicode_punctuation_kept() {
        assert_eq!(norm("«Bonjour»"), "«bonjour»");
        assert_eq!(norm("wait…"), "wait…");
    }

    #[test]
    fn whitespace_collapse() {
        assert_eq!(norm("hello   world"), "hello world");
        assert_eq!(norm("hello\t\nworld"), "hello world");
        assert_eq!(norm("hello \r\n world"), "hello world");
        assert_eq!(norm("hello\u{00A0}world"), "hello world");
    }

    #[test]
    fn leading_and_trailing_whitespace_removed() {
        assert_eq!(norm("   hello"), "hello");
        assert_eq!(norm("hello   "), "hello");
        assert_eq!(norm("\n\n hello world \n"), "hello world");
    }

    #[test]
    fn removed_chars_between_spaces_collapse() {
        assert_eq!(norm("a - b"), "a b");
        assert_eq!(norm("one 42 two"), "one two");
        assert_eq!(norm("!!! word"), "word");
        assert_eq!(norm("word ..."), "word");
    }

    #[test]
    fn only_whitespace() {
        assert_eq!(norm("   "), "");
        assert_eq!(norm("\n\t\r"), "");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn mixed_sentence_with_numbers() {
        assert_eq!(
            norm("Hello hello WORLD! 123 test test test."),
            "hello hello world test test test"
        );
    }

    #[test]
    fn unicode_basic_lowercase() {
        assert_eq!(norm("ПРИВЕТ"), "привет");
        assert_eq!(norm("ÜNITED"), "ünited");
        assert_eq!(norm("STRAßE"), "straße");
    }

    #[test]
    fn expanding_lowercase_stays_valid_utf8() {
        let result = norm("İstanbul");
        assert!(str::from_utf8(result.as_bytes()).is_ok());
        assert!(result.starts_with('i'));
    }

    #[test]
    fn output_has_no_forbidden_chars() {
        let inputs = [
            "The Quick, Brown FOX -- jumped 3 times!!",
            "  MIXED\tcase\n\nLines 1, 2 and 3.  ",
            "C'est l'été à Paris: 25°C",
        ];

        for input in inputs {
            let out = norm(input);
            assert!(!out.bytes().any(|b| b.is_ascii_uppercase()), "{out:?}");
            assert!(!out.bytes().any(|b| b.is_ascii_punctuation()), "{out:?}");
            assert!(!out.bytes().any(|b| b.is_ascii_digit()), "{out:?}");
            assert!(!out.contains("  "), "{out:?}");
            assert!(!out.starts_with(' ') && !out.ends_with(' '), "{out:?}");
        }
    }

    #[test]
    fn idempotent() {
        let n = TextNormalizer::default();
        let samples = [
            "hello world",
            "foo   bar",
            "ÜBER Café, 99 Luftballons!",
            "İstanbul\u{2003}Ankara",
        ];

        for s in samples {
            let once = n.normalize(s);
            let twice = n.normalize(&once);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn greek_final_sigma() {
        assert_eq!(norm("ΟΔΟΣ"), "οδος");
        assert_eq!(norm("ΟΔΟΣ ΣΟΦΙΑ."), "οδος σοφια");
        assert_eq!(norm("Σ"), "σ");
    }

    #[test]
    fn config_keeps_punctuation_and_digits() {
        let n = TextNormalizer::new(NormalizerConfig {
            strip_punctuation: false,
            strip_digits: false,
        });
        assert_eq!(n.normalize("Room 101, please!"), "room 101, please!");

        let digits_only = TextNormalizer::new(NormalizerConfig {
            strip_punctuation: true,
            strip_digits: false,
        });
        assert_eq!(digits_only.normalize("Room 101, please!"), "room 101 please");
    }

    #[test]
    fn normalize_into_reuses_capacity() {
        let normalizer = TextNormalizer::default();
        let mut buf = String::with_capacity(64);
        let cap = buf.capacity();

        normalizer.normalize_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        assert_eq!(buf.capacity(), cap);

        normalizer.normalize_into("WORLD!", &mut buf);
        assert_eq!(buf, "world");
        assert_eq!(buf.capacity(), cap);
    }

    #[test]
    fn free_function_matches_default() {
        assert_eq!(normalize("A, B; Cc"), norm("A, B; Cc"));
    }

    #[test]
    fn very_long_ascii() {
        let input = "Ab1. ".repeat(2000);
        let out = norm(&input);
        assert_eq!(out.len(), 2000 * 3 - 1);
    }
}

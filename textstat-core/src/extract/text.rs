use std::fs;
use std::path::Path;

use tracing::warn;

use crate::extract::{DocumentFormat, Extractor, Result};

/// Plain text reader. Decodes UTF-8 and falls back to Latin-1, which maps
/// every byte to the code point of the same value and so never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TextExtractor;

impl Extractor for TextExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Text
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        Ok(decode_text(bytes))
    }
}

/// Decodes `bytes` as UTF-8, or as Latin-1 when they are not valid UTF-8.
pub(crate) fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                valid_up_to = err.utf8_error().valid_up_to(),
                "input is not UTF-8, decoding as Latin-1"
            );
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::debug;

use crate::extract::{DocumentFormat, ExtractionError, Extractor, Result};

/// PDF reader backed by `pdf-extract`.
///
/// Text of each non-empty page is followed by a newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PdfExtractor;

impl Extractor for PdfExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract(&self, path: &Path) -> Result<String> {
        // pdf-extract panics on some malformed documents.
        let pages =
            panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_by_pages(path)))
                .map_err(|_| ExtractionError::Pdf("malformed PDF document".into()))?
                .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

        Ok(join_pages(&pages))
    }
}

/// Concatenates page texts, ending each non-empty page with `\n`.
pub(crate) fn join_pages<S: AsRef<str>>(pages: &[S]) -> String {
    let mut text = String::with_capacity(pages.iter().map(|p| p.as_ref().len() + 1).sum());
    let mut kept = 0usize;

    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        text.push_str(page);
        text.push('\n');
        kept += 1;
    }

    debug!(pages = pages.len(), kept, "joined PDF pages");
    text
}

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::extract::{DocumentFormat, ExtractionError, Extractor, Result};

const DOCUMENT_PART: &str = "word/document.xml";

/// Word (`.docx`) reader.
///
/// Returns the body paragraphs of `word/document.xml`, one per line. Blank
/// paragraphs and paragraphs inside tables are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxExtractor;

impl Extractor for DocxExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(BufReader::new(file))?;

        let mut xml = String::new();
        archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

        paragraphs_from_xml(&xml)
    }
}

/// Collects paragraph text from a WordprocessingML document part.
///
/// Only paragraphs that are direct children of `w:body` are read, and only
/// the text, tabs and breaks of their own runs. Tables, text boxes and
/// paragraph properties contribute nothing.
pub(crate) fn paragraphs_from_xml(xml: &str) -> Result<String> {
    let mut reader = Reader::from_str(xml);

    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut stack: Vec<Vec<u8>> = Vec::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let name = e.name().as_ref().to_vec();
                if name == b"w:p" && is_body(&stack) {
                    current.clear();
                }
                stack.push(name);
            }
            Event::Empty(e) if in_body_run(&stack) => match e.name().as_ref() {
                b"w:tab" => current.push('\t'),
                b"w:br" | b"w:cr" => current.push('\n'),
                _ => {}
            },
            Event::Text(e) if in_body_text(&stack) => {
                current.push_str(&String::from_utf8_lossy(&e));
            }
            Event::GeneralRef(r) if in_body_text(&stack) => {
                let name: &[u8] = &r;
                let ch = resolve_entity(name).ok_or_else(|| {
                    ExtractionError::Docx(format!(
                        "unknown entity &{};",
                        String::from_utf8_lossy(name)
                    ))
                })?;
                current.push(ch);
            }
            Event::End(_) => {
                let closed = stack.pop();
                if closed.as_deref() == Some(b"w:p".as_slice()) && is_body(&stack) {
                    if !current.trim().is_empty() {
                        paragraphs.push(std::mem::take(&mut current));
                    }
                    current.clear();
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs.join("\n"))
}

/// `stack` ends at `w:body`.
fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().map(Vec::as_slice) == Some(b"w:body".as_slice())
}

/// `stack` ends at a run of a top-level body paragraph, possibly wrapped in
/// hyperlinks or fields, with no nested paragraph in between.
fn in_body_run(stack: &[Vec<u8>]) -> bool {
    match stack {
        [_, body, para, inner @ .., run] => {
            body.as_slice() == b"w:body"
                && para.as_slice() == b"w:p"
                && run.as_slice() == b"w:r"
                && inner.iter().all(|n| n.as_slice() != b"w:p")
        }
        _ => false,
    }
}

/// `stack` ends at a `w:t` inside a body run.
fn in_body_text(stack: &[Vec<u8>]) -> bool {
    match stack.split_last() {
        Some((last, parents)) => last.as_slice() == b"w:t" && in_body_run(parents),
        None => false,
    }
}

/// Resolves the body of an entity reference (`amp`, `#233`, `#xE9`).
fn resolve_entity(name: &[u8]) -> Option<char> {
    match name {
        b"amp" => Some('&'),
        b"lt" => Some('<'),
        b"gt" => Some('>'),
        b"quot" => Some('"'),
        b"apos" => Some('\''),
        [b'#', b'x' | b'X', hex @ ..] => {
            u32::from_str_radix(std::str::from_utf8(hex).ok()?, 16)
                .ok()
                .and_then(char::from_u32)
        }
        [b'#', dec @ ..] => std::str::from_utf8(dec)
            .ok()?
            .parse::<u32>()
            .ok()
            .and_then(char::from_u32),
        _ => None,
    }
}

//! Document text extraction.
//!
//! Each supported format has a handler implementing [`Extractor`]. Handlers
//! live in an [`ExtractorRegistry`], which records whether each one can run
//! at the moment it is registered. Nothing is installed or probed lazily:
//! a handler that is unavailable at startup fails every extraction with a
//! clear [`ExtractionError`].
//!
//! ```no_run
//! use textstat_core::extract::{ExtractConfig, ExtractorRegistry};
//!
//! let registry = ExtractorRegistry::with_defaults(&ExtractConfig::default());
//! match registry.extract("notes.txt") {
//!     Ok(text) => println!("{} bytes of text", text.len()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod docx;
mod error;
mod legacy_doc;
mod pdf;
mod text;

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

pub use docx::DocxExtractor;
pub use error::{ExtractionError, Result};
pub use legacy_doc::LegacyDocExtractor;
pub use pdf::PdfExtractor;
pub use text::TextExtractor;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// Plain text (`.txt`)
    Text,
    /// Office Open XML word processing document (`.docx`)
    Docx,
    /// Portable Document Format (`.pdf`)
    Pdf,
    /// Legacy binary Word document (`.doc`), read through an external converter
    LegacyDoc,
}

impl DocumentFormat {
    /// All formats, in registration order.
    pub const ALL: [DocumentFormat; 4] = [
        DocumentFormat::Text,
        DocumentFormat::Docx,
        DocumentFormat::Pdf,
        DocumentFormat::LegacyDoc,
    ];

    /// Looks up a format by file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_lowercase().as_str() {
            "txt" => Some(DocumentFormat::Text),
            "docx" => Some(DocumentFormat::Docx),
            "pdf" => Some(DocumentFormat::Pdf),
            "doc" => Some(DocumentFormat::LegacyDoc),
            _ => None,
        }
    }

    /// Canonical file extension, without the dot.
    pub const fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Text => "txt",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::LegacyDoc => "doc",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Whether a handler can run in this environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The handler is ready.
    Available,
    /// The handler cannot run; the string says why.
    Unavailable(String),
}

impl Availability {
    /// Returns `true` for [`Availability::Available`].
    #[inline]
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Availability::Available => f.write_str("available"),
            Availability::Unavailable(reason) => write!(f, "unavailable ({})", reason),
        }
    }
}

/// A format-specific text extractor.
pub trait Extractor {
    /// The format this handler reads.
    fn format(&self) -> DocumentFormat;

    /// Checks whether the handler can run. Called once, at registration.
    fn availability(&self) -> Availability {
        Availability::Available
    }

    /// Reads the document at `path` and returns its text.
    fn extract(&self, path: &Path) -> Result<String>;
}

/// Extraction settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractConfig {
    /// Program used to convert legacy `.doc` files to text.
    /// Default: `antiword`, looked up on `PATH`
    pub antiword: PathBuf,
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            antiword: PathBuf::from("antiword"),
        }
    }
}

struct Registered {
    handler: Box<dyn Extractor>,
    availability: Availability,
}

/// Format handlers, keyed by [`DocumentFormat`].
#[derive(Default)]
pub struct ExtractorRegistry {
    handlers: Vec<Registered>,
}

impl ExtractorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the four built-in handlers.
    pub fn with_defaults(config: &ExtractConfig) -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TextExtractor));
        registry.register(Box::new(DocxExtractor));
        registry.register(Box::new(PdfExtractor));
        registry.register(Box::new(LegacyDocExtractor::new(config.antiword.clone())));
        registry
    }

    /// Adds a handler, replacing any earlier handler for the same format.
    ///
    /// Availability is checked here and never again.
    pub fn register(&mut self, handler: Box<dyn Extractor>) {
        let format = handler.format();
        let availability = handler.availability();

        match &availability {
            Availability::Available => debug!(%format, "registered extractor"),
            Availability::Unavailable(reason) => {
                warn!(%format, reason = reason.as_str(), "extractor unavailable")
            }
        }

        self.handlers.retain(|r| r.handler.format() != format);
        self.handlers.push(Registered {
            handler,
            availability,
        });
    }

    /// Returns the handler for `format`, if one is registered.
    pub fn get(&self, format: DocumentFormat) -> Option<&dyn Extractor> {
        self.find(format).map(|r| r.handler.as_ref())
    }

    /// Availability recorded for `format`, if a handler is registered.
    pub fn availability(&self, format: DocumentFormat) -> Option<&Availability> {
        self.find(format).map(|r| &r.availability)
    }

    /// Lists registered formats with their availability.
    pub fn handlers(&self) -> impl Iterator<Item = (DocumentFormat, &Availability)> + '_ {
        self.handlers
            .iter()
            .map(|r| (r.handler.format(), &r.availability))
    }

    /// Extracts text from the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::NotFound` if `path` does not exist,
    /// `ExtractionError::Unsupported` if no handler matches its extension,
    /// `ExtractionError::HandlerUnavailable` if the handler could not run at
    /// startup, and the handler's own error otherwise.
    pub fn extract(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ExtractionError::NotFound(path.to_path_buf()));
        }

        let extension = extension_of(path);
        let registered = DocumentFormat::from_extension(&extension)
            .and_then(|format| self.find(format))
            .ok_or_else(|| ExtractionError::Unsupported(extension.clone()))?;

        let format = registered.handler.format();
        if let Availability::Unavailable(reason) = &registered.availability {
            return Err(ExtractionError::HandlerUnavailable {
                format,
                reason: reason.clone(),
            });
        }

        info!("Processing {} file...", extension.to_uppercase());
        let text = registered.handler.extract(path)?;
        debug!(%format, bytes = text.len(), "extracted text");
        Ok(text)
    }

    fn find(&self, format: DocumentFormat) -> Option<&Registered> {
        self.handlers.iter().find(|r| r.handler.format() == format)
    }
}

/// Lower-cased extension of `path`, or its lower-cased file name when it
/// has none.
fn extension_of(path: &Path) -> String {
    path.extension()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

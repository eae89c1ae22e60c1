use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use crate::extract::text::decode_text;
use crate::extract::{Availability, DocumentFormat, ExtractionError, Extractor, Result};

/// Legacy Word (`.doc`) reader that shells out to `antiword`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyDocExtractor {
    program: PathBuf,
}

impl Default for LegacyDocExtractor {
    fn default() -> Self {
        Self::new("antiword")
    }
}

impl LegacyDocExtractor {
    /// Creates a reader that runs `program` to convert documents.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// The converter program.
    pub fn program(&self) -> &Path {
        &self.program
    }

    fn unavailable_reason(&self) -> String {
        format!(
            "{} not available. Please convert to .docx format.",
            self.program_name()
        )
    }

    fn program_name(&self) -> String {
        self.program
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.program.display().to_string())
    }
}

impl Extractor for LegacyDocExtractor {
    fn format(&self) -> DocumentFormat {
        DocumentFormat::LegacyDoc
    }

    /// The converter is present when it can be started at all; its exit
    /// status for a bare invocation is irrelevant.
    fn availability(&self) -> Availability {
        let probe = Command::new(&self.program)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match probe {
            Ok(_) => Availability::Available,
            Err(e) => {
                debug!(program = %self.program.display(), error = %e, "converter probe failed");
                Availability::Unavailable(self.unavailable_reason())
            }
        }
    }

    fn extract(&self, path: &Path) -> Result<String> {
        let output = match Command::new(&self.program).arg(path).output() {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ExtractionError::HandlerUnavailable {
                    format: DocumentFormat::LegacyDoc,
                    reason: self.unavailable_reason(),
                });
            }
            Err(e) => return Err(e.into()),
        };

        if !output.status.success() {
            debug!(status = %output.status, "converter failed");
            return Err(ExtractionError::ConverterFailed);
        }

        Ok(decode_text(output.stdout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISSING: &str = "/nonexistent/bin/antiword-textstat-test";

    #[test]
    fn missing_converter_is_unavailable() {
        let handler = LegacyDocExtractor::new(MISSING);
        assert_eq!(
            handler.availability(),
            Availability::Unavailable(
                "antiword-textstat-test not available. Please convert to .docx format.".into()
            )
        );
    }

    #[test]
    fn missing_converter_extract_fails_cleanly() {
        let handler = LegacyDocExtractor::new(MISSING);
        let err = handler
            .extract(Path::new("whatever.doc"))
            .expect_err("converter missing");
        assert!(matches!(err, ExtractionError::HandlerUnavailable { .. }));
        assert!(err.to_string().starts_with("Unable to read .doc file."));
    }

    #[test]
    fn default_program_is_antiword() {
        assert_eq!(LegacyDocExtractor::default().program(), Path::new("antiword"));
        assert_eq!(
            LegacyDocExtractor::default().unavailable_reason(),
            "antiword not available. Please convert to .docx format."
        );
    }

    #[cfg(unix)]
    #[test]
    fn failing_converter_reports_converter_failed() {
        let handler = LegacyDocExtractor::new("false");
        assert!(handler.availability().is_available());
        let err = handler
            .extract(Path::new("whatever.doc"))
            .expect_err("false exits non-zero");
        assert!(matches!(err, ExtractionError::ConverterFailed));
        assert_eq!(
            err.to_string(),
            "Unable to read .doc file. Please install antiword or convert to .docx format."
        );
    }

    #[cfg(unix)]
    #[test]
    fn converter_stdout_is_returned() {
        let handler = LegacyDocExtractor::new("cat");
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plain.doc");
        std::fs::write(&path, "converted text\n").unwrap();

        assert_eq!(handler.extract(&path).unwrap(), "converted text\n");
    }
}

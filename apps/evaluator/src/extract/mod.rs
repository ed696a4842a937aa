//! Text extraction for uploaded resume files.
//!
//! Supported formats are plain text, PDF, and Word (DOCX). The format is
//! taken from the declared media type or, failing that, the file extension.

mod docx;
mod pdf;
mod text;

use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

pub const MIME_TEXT: &str = "text/plain";
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unsupported file format: {0}. Please upload PDF, DOCX, or TXT files.")]
    UnsupportedFormat(String),

    #[error("Failed to parse file: {0}. Please check if the file is valid and try again.")]
    ExtractionFailed(String),
}

impl ExtractError {
    pub fn code(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedFormat(_) => "UNSUPPORTED_FORMAT",
            ExtractError::ExtractionFailed(_) => "EXTRACTION_FAILED",
        }
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// The three file formats the extractor understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    PlainText,
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves the format from a declared media type and the file name.
    ///
    /// Formats are tried in the order text, PDF, DOCX; each accepts either its
    /// media type or its extension.
    pub fn detect(declared_media_type: Option<&str>, file_name: &str) -> ExtractResult<Self> {
        let media_type = declared_media_type
            .map(|m| m.trim().to_ascii_lowercase())
            .unwrap_or_default();
        let name = file_name.to_lowercase();

        [
            (DocumentFormat::PlainText, MIME_TEXT, ".txt"),
            (DocumentFormat::Pdf, MIME_PDF, ".pdf"),
            (DocumentFormat::Docx, MIME_DOCX, ".docx"),
        ]
        .into_iter()
        .find(|(_, mime, ext)| media_type == *mime || name.ends_with(ext))
        .map(|(format, _, _)| format)
        .ok_or_else(|| {
            let described = if media_type.is_empty() {
                file_name.to_string()
            } else {
                format!("{file_name} ({media_type})")
            };
            ExtractError::UnsupportedFormat(described)
        })
    }

    pub fn media_type(self) -> &'static str {
        match self {
            DocumentFormat::PlainText => MIME_TEXT,
            DocumentFormat::Pdf => MIME_PDF,
            DocumentFormat::Docx => MIME_DOCX,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DocumentFormat::PlainText => "TXT",
            DocumentFormat::Pdf => "PDF",
            DocumentFormat::Docx => "DOCX",
        })
    }
}

/// Extracts plain text from an uploaded file.
///
/// Structurally valid but content-sparse files (an image-only PDF, an almost
/// empty DOCX) yield a short placeholder rather than an error.
pub fn extract_text(
    bytes: &[u8],
    declared_media_type: Option<&str>,
    file_name: &str,
) -> ExtractResult<String> {
    let format = DocumentFormat::detect(declared_media_type, file_name)?;
    debug!(%format, file_name, size = bytes.len(), "extracting resume text");

    let text = match format {
        DocumentFormat::PlainText => text::extract(bytes)?,
        DocumentFormat::Pdf => pdf::extract(bytes)?,
        DocumentFormat::Docx => docx::extract(bytes)?,
    };

    if text.trim().is_empty() {
        warn!(file_name, "no text content found");
        return Err(ExtractError::ExtractionFailed(
            "no text content found in the file".to_string(),
        ));
    }
    Ok(text)
}

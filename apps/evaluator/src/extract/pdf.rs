use std::panic;

use tracing::{debug, warn};

use super::{ExtractError, ExtractResult};

/// Returned for PDFs that parse but carry no text layer (scanned pages).
pub const PDF_PLACEHOLDER: &str = "PDF content detected but text extraction limited. For best results, please use a text-based PDF or convert to DOCX/TXT format.";

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<String> {
    // pdf-extract panics on some malformed inputs instead of returning an error.
    let outcome = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(bytes));

    let raw = match outcome {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            return Err(ExtractError::ExtractionFailed(format!("invalid PDF: {e}")));
        }
        Err(_) => {
            warn!("PDF parser panicked on malformed input");
            return Err(ExtractError::ExtractionFailed(
                "malformed PDF structure".to_string(),
            ));
        }
    };

    let text = collapse_whitespace(&raw);
    if text.is_empty() {
        debug!("PDF has no text layer, using placeholder");
        return Ok(PDF_PLACEHOLDER.to_string());
    }
    Ok(text)
}

/// Joins whitespace-separated words with single spaces, keeping line breaks.
fn collapse_whitespace(raw: &str) -> String {
    raw.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

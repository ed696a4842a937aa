use std::io::{Cursor, Read};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::{ExtractError, ExtractResult};

/// Returned when a DOCX opens but yields almost no text.
pub const DOCX_PLACEHOLDER: &str = "DOCX content detected but text extraction limited. For best results, please save as TXT format or copy-paste the content.";

const DOCUMENT_PART: &str = "word/document.xml";
/// Anything shorter than this is treated as a failed extraction.
const MIN_DOCUMENT_CHARS: usize = 50;

static BLOCK_END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"</w:p>|<w:br\s*/>|<w:cr\s*/>").expect("block pattern is valid")
});
static TAB_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<w:tab\s*/>").expect("tab pattern is valid"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

pub(super) fn extract(bytes: &[u8]) -> ExtractResult<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::ExtractionFailed(format!("not a DOCX archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractError::ExtractionFailed(format!("unreadable {DOCUMENT_PART}: {e}")))?;

    let text = document_text(&xml);
    if text.chars().count() < MIN_DOCUMENT_CHARS {
        debug!(chars = text.chars().count(), "DOCX text too short, using placeholder");
        return Ok(DOCX_PLACEHOLDER.to_string());
    }
    Ok(text)
}

/// Flattens WordprocessingML into plain text, one paragraph per line.
fn document_text(xml: &str) -> String {
    let with_breaks = BLOCK_END_RE.replace_all(xml, "\n");
    let with_tabs = TAB_RE.replace_all(&with_breaks, " ");
    let stripped = TAG_RE.replace_all(&with_tabs, "");

    decode_entities(&stripped)
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn decode_entities(text: &str) -> String {
    // &amp; last so "&amp;lt;" decodes to "&lt;", not "<".
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}

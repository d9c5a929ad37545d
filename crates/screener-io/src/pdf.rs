//! Text extraction from resume files

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

/// Extracted text plus the reason extraction fell back to empty text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    pub text: String,
    pub failure: Option<String>,
}

impl ExtractedText {
    fn ok(text: String) -> Self {
        Self {
            text,
            failure: None,
        }
    }

    fn failed(reason: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            failure: Some(reason.into()),
        }
    }
}

/// Extract text from a PDF (or plain `.txt`) file.
///
/// Never fails: unreadable, malformed or image-only files degrade to empty
/// text with the reason recorded.
pub fn extract_text(path: &Path) -> ExtractedText {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => return ExtractedText::failed(e.to_string()),
    };

    if is_plain_text(path) {
        return ExtractedText::ok(String::from_utf8_lossy(&bytes).into_owned());
    }

    // pdf-extract panics on some malformed inputs instead of returning an error
    match panic::catch_unwind(AssertUnwindSafe(|| pdf_extract::extract_text_from_mem(&bytes))) {
        Ok(Ok(text)) if text.trim().is_empty() => ExtractedText::failed("no extractable text layer"),
        Ok(Ok(text)) => ExtractedText::ok(text),
        Ok(Err(e)) => ExtractedText::failed(e.to_string()),
        Err(_) => ExtractedText::failed("pdf parser aborted"),
    }
}

fn is_plain_text(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("txt"))
}

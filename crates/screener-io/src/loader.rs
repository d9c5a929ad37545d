//! Batch loading of resume files

use crate::pdf::extract_text;
use screener_core::{Document, Result, ScreenError};
use std::path::{Path, PathBuf};

/// A file whose text could not be extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub id: String,
    pub reason: String,
}

/// Documents in input order, plus the files that degraded to empty text
#[derive(Debug, Clone, Default)]
pub struct Batch {
    pub documents: Vec<Document>,
    pub failures: Vec<ExtractionFailure>,
}

/// `*.pdf` files directly inside `dir`, sorted by file name
pub fn discover_pdfs(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| ScreenError::io(dir, e))?;

    let mut pdfs = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ScreenError::io(dir, e))?.path();
        let is_pdf = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("pdf"));
        if is_pdf && path.is_file() {
            pdfs.push(path);
        }
    }

    pdfs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(pdfs)
}

/// Extract every file in turn; one failure never stops the rest
pub fn load_documents(paths: &[PathBuf]) -> Batch {
    let mut batch = Batch::default();

    for path in paths {
        let id = display_name(path);
        let extracted = extract_text(path);
        if let Some(reason) = extracted.failure {
            tracing::warn!(file = %path.display(), %reason, "text extraction failed, using empty text");
            batch.failures.push(ExtractionFailure {
                id: id.clone(),
                reason,
            });
        } else {
            tracing::debug!(file = %path.display(), chars = extracted.text.len(), "extracted text");
        }
        batch.documents.push(Document::new(id, extracted.text));
    }

    batch
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

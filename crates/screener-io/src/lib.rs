//! Resume loading, report export and config discovery

mod export;
mod io;
mod loader;
mod paths;
mod pdf;

pub use export::{export_csv, write_csv, ExportError, CSV_HEADER};
pub use io::atomic_write;
pub use loader::{discover_pdfs, load_documents, Batch, ExtractionFailure};
pub use paths::{load_config, resolve_config_path, CONFIG_ENV};
pub use pdf::{extract_text, ExtractedText};

//! CSV export of a ranking

use crate::io::atomic_write;
use screener_core::RankedResult;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const CSV_HEADER: [&str; 7] = [
    "Candidate Name",
    "Match %",
    "Experience",
    "Missing Skills",
    "Email",
    "Phone",
    "Status",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("csv encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Write the header and one line per result, in ranking order
pub fn write_csv<W: Write>(writer: W, results: &[RankedResult]) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;

    for r in results {
        let missing = r
            .skills_missing
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        wtr.write_record([
            r.name.clone(),
            format!("{:?}", r.match_percent()),
            format!("{:?}", r.experience_years),
            missing,
            r.email.clone(),
            r.phone.clone(),
            r.status.to_string(),
        ])?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Encode the ranking and write it atomically to `path`
pub fn export_csv(path: &Path, results: &[RankedResult]) -> Result<(), ExportError> {
    let mut buf = Vec::new();
    write_csv(&mut buf, results)?;
    atomic_write(path, &buf).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), rows = results.len(), "exported csv report");
    Ok(())
}

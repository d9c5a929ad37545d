use crate::cli::JobDescription;
use anyhow::Context;

/// Job description text from `--jd`, `--jd-file` or the fallback
pub fn read(job: &JobDescription, fallback: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = &job.jd {
        return Ok(text.clone());
    }
    if let Some(path) = &job.jd_file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("reading job description {}", path.display()));
    }
    Ok(fallback.unwrap_or_default().to_string())
}

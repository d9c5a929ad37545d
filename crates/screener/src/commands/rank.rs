use super::{job, report};
use crate::cli::RankArgs;
use anyhow::Context;
use screener_core::{round_to, Document, ScreenError};
use screener_index::RankOptions;

pub const DEFAULT_JOB_DESCRIPTION: &str =
    "We need a Python developer who knows Data Science and SQL.";

pub fn run(args: &RankArgs) -> anyhow::Result<()> {
    let jd = job::read(&args.job, Some(DEFAULT_JOB_DESCRIPTION))?;
    if jd.trim().is_empty() {
        return Err(ScreenError::EmptyQuery).context("pass one with --jd or --jd-file");
    }

    let pdfs = screener_io::discover_pdfs(&args.dir)
        .with_context(|| format!("scanning {}", args.dir.display()))?;
    if pdfs.is_empty() {
        println!("Error: no PDF files found in {}", args.dir.display());
        return Ok(());
    }

    let options = rank_options(args)?;
    let batch = screener_io::load_documents(&pdfs);
    let scores = screener_index::rank(&Document::new("job description", jd), &batch.documents, &options);

    println!("{}", format_ranking(&batch.documents, &scores));
    for failure in &batch.failures {
        eprintln!(
            "Warning: could not extract text from {}: {}",
            failure.id, failure.reason
        );
    }
    Ok(())
}

/// `--stop-words` turns filtering on; otherwise the config file decides
fn rank_options(args: &RankArgs) -> anyhow::Result<RankOptions> {
    let config = screener_io::load_config(args.config.as_deref())?;
    Ok(RankOptions {
        stop_words_enabled: args.stop_words || config.stop_words_enabled,
    })
}

/// One `File: <name> | Match Score: <pct>%` line per resume, in discovery order
fn format_ranking(documents: &[Document], scores: &[f64]) -> String {
    let mut lines = vec!["\n--- RESUME RANKING RESULTS ---".to_string()];
    lines.extend(documents.iter().zip(scores).map(|(doc, score)| {
        format!(
            "File: {} | Match Score: {}%",
            doc.id,
            report::format_number(round_to(score * 100.0, 2))
        )
    }));
    lines.join("\n")
}

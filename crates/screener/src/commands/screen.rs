use super::{job, report};
use crate::cli::ScreenArgs;
use anyhow::Context;
use screener_core::{Config, Document, RankedResult, ScreenError, SkillVocabulary, Summary};
use screener_io::{Batch, ExtractionFailure};
use std::path::PathBuf;

pub fn run(args: &ScreenArgs) -> anyhow::Result<()> {
    let config = build_config(args)?;

    let jd = job::read(&args.job, None)?;
    if jd.trim().is_empty() {
        return Err(ScreenError::EmptyQuery).context("pass one with --jd or --jd-file");
    }

    let paths = collect_paths(args)?;
    if paths.is_empty() {
        return Err(ScreenError::NoCandidates).context("pass resume files or --dir");
    }

    tracing::info!(resumes = paths.len(), "starting screening run");
    let Batch {
        documents,
        failures,
    } = screener_io::load_documents(&paths);

    let query = Document::new("job description", jd);
    let results = screener_index::screen_batch(&query, documents, &config)?;
    let summary = Summary::from_ranking(&results);

    if args.json {
        println!("{}", json_report(&results, &summary, &failures)?);
    } else {
        println!(
            "{}",
            report::build_report(&results, &summary, &failures, args.chart)
        );
    }

    if let Some(path) = &args.csv {
        screener_io::export_csv(path, &results)
            .with_context(|| format!("exporting report to {}", path.display()))?;
        if !args.json {
            println!("\nReport written to {}", path.display());
        }
    }

    Ok(())
}

/// Defaults, then the config file, then command-line overrides
fn build_config(args: &ScreenArgs) -> anyhow::Result<Config> {
    let mut config = screener_io::load_config(args.config.as_deref())?;

    if let Some(min) = args.min_experience {
        config.min_experience_years = min;
    }
    if let Some(threshold) = args.threshold {
        config.match_threshold = threshold;
    }
    if args.stop_words {
        config.stop_words_enabled = true;
    }
    if let Some(list) = &args.skills {
        config.skills = SkillVocabulary::parse_list(list);
    }

    config.validate()?;
    Ok(config)
}

fn collect_paths(args: &ScreenArgs) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = args.resumes.clone();
    if let Some(dir) = &args.dir {
        let found = screener_io::discover_pdfs(dir)
            .with_context(|| format!("scanning {}", dir.display()))?;
        paths.extend(found);
    }
    Ok(paths)
}

fn json_report(
    results: &[RankedResult],
    summary: &Summary,
    failures: &[ExtractionFailure],
) -> anyhow::Result<String> {
    let failures: Vec<_> = failures
        .iter()
        .map(|f| serde_json::json!({ "id": f.id, "reason": f.reason }))
        .collect();
    let output = serde_json::json!({
        "summary": summary,
        "results": results,
        "failures": failures,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

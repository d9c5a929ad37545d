//! Full screening run: attributes, joint ranking, shortlist gates

use crate::ranker::{rank, sort_ranking, RankOptions};
use screener_core::{
    extract_attributes, Config, Document, RankedResult, Result, ScreenError, SkillMatcher, Status,
};

/// Screen every candidate against the job description.
///
/// Refuses to run on a blank job description or an empty candidate set.
/// Results come back sorted by match score, ties in input order.
pub fn screen_batch(
    query: &Document,
    candidates: Vec<Document>,
    config: &Config,
) -> Result<Vec<RankedResult>> {
    if query.is_blank() {
        return Err(ScreenError::EmptyQuery);
    }
    if candidates.is_empty() {
        return Err(ScreenError::NoCandidates);
    }
    config.validate()?;

    let options = RankOptions {
        stop_words_enabled: config.stop_words_enabled,
    };
    let scores = rank(query, &candidates, &options);
    let skills = SkillMatcher::new(&config.skills);
    let required_skills = skills.find(&query.text);
    let min_experience = f64::from(config.min_experience_years);

    let mut results: Vec<RankedResult> = candidates
        .into_iter()
        .zip(scores)
        .map(|(doc, score)| {
            let candidate = extract_attributes(doc, &required_skills, &skills);
            let status = Status::from_gates(
                candidate.experience_years,
                score,
                min_experience,
                config.match_threshold,
            );
            RankedResult::new(candidate, score, status)
        })
        .collect();

    sort_ranking(&mut results);
    tracing::info!(
        candidates = results.len(),
        shortlisted = results.iter().filter(|r| r.status == Status::Shortlisted).count(),
        "screening complete"
    );
    Ok(results)
}

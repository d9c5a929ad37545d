mod common;

use common::{sample_resumes, JOB_DESCRIPTION};
use screener_core::{Config, Document, Status, Summary};
use screener_index::{rank, screen_batch, RankOptions};

#[test]
fn test_full_screening_run() {
    let query = Document::new("jd", JOB_DESCRIPTION);
    let results = screen_batch(&query, sample_resumes(), &Config::default()).unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].name, "asha.pdf");
    assert_eq!(results[0].status, Status::Shortlisted);
    assert_eq!(results[0].email, "asha.rao@example.com");
    assert_eq!(results[0].phone, "+91 98765 43210");
    assert_eq!(results[0].experience_years, 5.0);
    assert!(results[0].skills_missing.is_empty());

    // Scores descend and stay within [0, 1]
    for pair in results.windows(2) {
        assert!(pair[0].match_score >= pair[1].match_score);
    }
    assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.match_score)));

    let scan = results.iter().find(|r| r.name == "scan.pdf").unwrap();
    assert_eq!(scan.match_score, 0.0);
    assert_eq!(scan.status, Status::Rejected);
    assert_eq!(scan.email, "N/A");

    let chen = results.iter().find(|r| r.name == "chen.pdf").unwrap();
    assert_eq!(chen.experience_years, 1.5);
    assert_eq!(chen.status, Status::Rejected, "fails the experience gate");
}

#[test]
fn test_summary_over_run() {
    let query = Document::new("jd", JOB_DESCRIPTION);
    let results = screen_batch(&query, sample_resumes(), &Config::default()).unwrap();
    let summary = Summary::from_ranking(&results);

    assert_eq!(summary.total, 4);
    assert_eq!(summary.shortlisted + summary.rejected, 4);
    let mean: f64 =
        results.iter().map(|r| r.match_percent()).sum::<f64>() / results.len() as f64;
    assert_eq!(summary.average_match_percent, (mean * 10.0).round() / 10.0);
}

#[test]
fn test_removing_a_candidate_changes_scores() {
    let query = Document::new("jd", JOB_DESCRIPTION);
    let all = sample_resumes();
    let options = RankOptions::default();

    let full = rank(&query, &all, &options);
    let reduced = rank(&query, &all[..2], &options);
    assert!((full[0] - reduced[0]).abs() > 1e-9);
}

#[test]
fn test_custom_vocabulary() {
    let mut config = Config::default();
    config.skills = screener_core::SkillVocabulary::new(["kubernetes", "python"]);

    let query = Document::new("jd", "Python and Kubernetes");
    let results = screen_batch(&query, sample_resumes(), &config).unwrap();
    let asha = results.iter().find(|r| r.name == "asha.pdf").unwrap();
    assert_eq!(
        asha.skills_missing.iter().collect::<Vec<_>>(),
        vec!["Kubernetes"]
    );
}

#[test]
fn test_stop_words_change_scores() {
    let query = Document::new("jd", JOB_DESCRIPTION);
    let plain = rank(&query, &sample_resumes(), &RankOptions::default());
    let filtered = rank(
        &query,
        &sample_resumes(),
        &RankOptions {
            stop_words_enabled: true,
        },
    );
    assert_eq!(plain.len(), filtered.len());
    assert!(plain.iter().zip(&filtered).any(|(a, b)| (a - b).abs() > 1e-9));
}

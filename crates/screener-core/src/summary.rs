//! Summary statistics over a ranking

use crate::shortlist::Status;
use crate::types::RankedResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Round to `places` decimals, ties to even (`12.25` -> `12.2`)
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub shortlisted: usize,
    pub rejected: usize,
    /// Mean of the per-row match percentages, one decimal
    pub average_match_percent: f64,
    pub generated_at: DateTime<Utc>,
}

impl Summary {
    pub fn from_ranking(results: &[RankedResult]) -> Self {
        let shortlisted = results
            .iter()
            .filter(|r| r.status == Status::Shortlisted)
            .count();

        let average_match_percent = if results.is_empty() {
            0.0
        } else {
            let sum: f64 = results.iter().map(RankedResult::match_percent).sum();
            round_to(sum / results.len() as f64, 1)
        };

        Self {
            total: results.len(),
            shortlisted,
            rejected: results.len() - shortlisted,
            average_match_percent,
            generated_at: Utc::now(),
        }
    }
}

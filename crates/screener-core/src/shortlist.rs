//! Shortlist gates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screening outcome for a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Shortlisted,
    Rejected,
}

impl Status {
    /// Shortlisted only when both the experience and match gates pass.
    /// The experience gate is inclusive, the match gate strict.
    pub fn from_gates(
        experience_years: f64,
        match_score: f64,
        min_experience: f64,
        threshold: f64,
    ) -> Self {
        if experience_years >= min_experience && match_score > threshold {
            Status::Shortlisted
        } else {
            Status::Rejected
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Shortlisted => "Shortlisted",
            Status::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Core types for resume screening

use crate::shortlist::Status;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named piece of text: a job description or an extracted resume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Filename or label shown in reports
    pub id: String,
    /// Raw text, possibly empty when extraction found nothing
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    /// True when the text holds nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// A resume plus the attributes derived from its text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub document: Document,
    pub experience_years: f64,
    pub email: String,
    pub phone: String,
    pub skills_found: BTreeSet<String>,
    /// Skills named in the job description but absent from the resume
    pub skills_missing: BTreeSet<String>,
}

/// One row of a ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub name: String,
    /// Cosine similarity against the job description, in [0, 1]
    pub match_score: f64,
    pub experience_years: f64,
    pub email: String,
    pub phone: String,
    pub skills_found: BTreeSet<String>,
    pub skills_missing: BTreeSet<String>,
    pub status: Status,
}

impl RankedResult {
    pub fn new(candidate: Candidate, match_score: f64, status: Status) -> Self {
        Self {
            name: candidate.document.id,
            match_score,
            experience_years: candidate.experience_years,
            email: candidate.email,
            phone: candidate.phone,
            skills_found: candidate.skills_found,
            skills_missing: candidate.skills_missing,
            status,
        }
    }

    /// Match score as a percentage rounded to two decimals
    pub fn match_percent(&self) -> f64 {
        crate::summary::round_to(self.match_score * 100.0, 2)
    }
}

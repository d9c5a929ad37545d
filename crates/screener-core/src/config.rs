//! Configuration for a screening run

use crate::error::{Result, ScreenError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Skill keywords recognised when no vocabulary is configured
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "sql",
    "react",
    "node",
    "html",
    "css",
    "machine learning",
    "git",
    "aws",
    "docker",
];

/// Lower-cased, de-duplicated skill keywords in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SkillVocabulary {
    skills: Vec<String>,
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out: Vec<String> = Vec::new();
        for skill in skills {
            // Collapse inner whitespace so "machine  learning" and "machine learning" coincide
            let normalized = skill
                .as_ref()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase();
            if !normalized.is_empty() && !out.contains(&normalized) {
                out.push(normalized);
            }
        }
        Self { skills: out }
    }

    /// Parse a comma separated list such as `rust,go,machine learning`
    pub fn parse_list(list: &str) -> Self {
        Self::new(list.split(','))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter())
    }
}

impl From<Vec<String>> for SkillVocabulary {
    fn from(skills: Vec<String>) -> Self {
        Self::new(skills)
    }
}

impl From<SkillVocabulary> for Vec<String> {
    fn from(vocabulary: SkillVocabulary) -> Self {
        vocabulary.skills
    }
}

/// Screening configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum years of experience for a shortlist
    pub min_experience_years: u32,

    /// Match score a candidate must exceed for a shortlist
    pub match_threshold: f64,

    /// Drop English stop words before vectorizing
    pub stop_words_enabled: bool,

    /// Skill keywords searched in every document
    pub skills: SkillVocabulary,
}

impl Config {
    pub fn new() -> Self {
        Self {
            min_experience_years: 2,
            match_threshold: 0.3,
            stop_words_enabled: false,
            skills: SkillVocabulary::default(),
        }
    }

    /// Parse a JSON config; absent fields keep their defaults
    pub fn from_json_str(json: &str, path: &Path) -> Result<Self> {
        let config: Config = serde_json::from_str(json).map_err(|source| ScreenError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(ScreenError::InvalidThreshold(self.match_threshold));
        }
        if self.skills.is_empty() {
            return Err(ScreenError::EmptyVocabulary);
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

//! Regex-derived resume attributes: contact details, experience and skills

use crate::config::SkillVocabulary;
use crate::types::{Candidate, Document};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Placeholder for contact fields that were not found
pub const NOT_AVAILABLE: &str = "N/A";

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static EXPERIENCE_RE: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

/// First email address in the text, or `N/A`
pub fn find_email(text: &str) -> String {
    let re = EMAIL_RE
        .get_or_init(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());
    re.find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// First phone-like run of digits, separators and parentheses, or `N/A`
pub fn find_phone(text: &str) -> String {
    let re = PHONE_RE.get_or_init(|| Regex::new(r"[+\d]?[\d\-\s()]{10,15}\d").unwrap());
    re.find(text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn find_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: find_email(text),
        phone: find_phone(text),
    }
}

/// Largest "<n> years" figure mentioned in the text, 0.0 when there is none.
///
/// Resumes usually state several figures (one per role), so the maximum is
/// taken as an upper bound of total experience. Unrelated mentions such as
/// "10 years old" are counted too.
pub fn find_max_experience(text: &str) -> f64 {
    let re = EXPERIENCE_RE.get_or_init(|| {
        Regex::new(r"(?i)(\d+\.?\d*)\s*\+?\s*(?:years?|yrs?)(?:\s*(?:of\s+)?(?:experience|exp))?")
            .unwrap()
    });
    re.captures_iter(text)
        .filter_map(|caps| caps.get(1)?.as_str().parse::<f64>().ok())
        .fold(0.0, f64::max)
}

/// Vocabulary skills present in the text as whole words, title-cased.
///
/// Multi-word skills must appear as a contiguous phrase; any run of
/// whitespace (including line breaks from PDF extraction) separates words.
pub fn find_skills(text: &str, vocabulary: &SkillVocabulary) -> BTreeSet<String> {
    SkillMatcher::new(vocabulary).find(text)
}

/// Skill patterns compiled once per vocabulary and reused for every document
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    patterns: Vec<(String, Regex)>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &SkillVocabulary) -> Self {
        let patterns = vocabulary
            .iter()
            .filter_map(|skill| Some((title_case(skill), skill_pattern(skill)?)))
            .collect();
        Self { patterns }
    }

    /// Title-cased skills present in the text as whole words
    pub fn find(&self, text: &str) -> BTreeSet<String> {
        self.patterns
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(name, _)| name.clone())
            .collect()
    }
}

/// Skills the job description asks for that the resume lacks
pub fn missing_skills(
    required: &BTreeSet<String>,
    present: &BTreeSet<String>,
) -> BTreeSet<String> {
    required.difference(present).cloned().collect()
}

/// Derive every attribute of a resume in one pass
pub fn extract_attributes(
    document: Document,
    required_skills: &BTreeSet<String>,
    skills: &SkillMatcher,
) -> Candidate {
    let ContactInfo { email, phone } = find_contact_info(&document.text);
    let experience_years = find_max_experience(&document.text.to_lowercase());
    let skills_found = skills.find(&document.text);
    let skills_missing = missing_skills(required_skills, &skills_found);

    tracing::debug!(
        id = %document.id,
        experience_years,
        skills = skills_found.len(),
        "extracted attributes"
    );

    Candidate {
        document,
        experience_years,
        email,
        phone,
        skills_found,
        skills_missing,
    }
}

/// Upper-case the first letter of every alphabetic run, lower-case the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

fn skill_pattern(skill: &str) -> Option<Regex> {
    let body = skill
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+");
    // \b only holds next to word characters; "c++" needs no trailing boundary
    let is_word = |c: Option<char>| c.is_some_and(|c| c.is_alphanumeric() || c == '_');
    let start = if is_word(skill.chars().next()) { r"\b" } else { "" };
    let end = if is_word(skill.chars().last()) { r"\b" } else { "" };
    Regex::new(&format!("(?i){start}{body}{end}")).ok()
}

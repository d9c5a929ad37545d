//! Core resume screening types, attribute extraction and shortlist logic

mod config;
mod error;
mod extract;
mod shortlist;
mod summary;
mod types;

pub use config::{Config, SkillVocabulary, DEFAULT_SKILLS};
pub use error::{Result, ScreenError};
pub use extract::{
    extract_attributes, find_contact_info, find_email, find_max_experience, find_phone,
    find_skills, missing_skills, title_case, ContactInfo, SkillMatcher, NOT_AVAILABLE,
};
pub use shortlist::Status;
pub use summary::{round_to, Summary};
pub use types::{Candidate, Document, RankedResult};

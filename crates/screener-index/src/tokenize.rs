//! Word tokenizer

use crate::stopwords::is_stop_word;
use regex::Regex;
use std::sync::OnceLock;

static TOKENIZE_RE: OnceLock<Regex> = OnceLock::new();

/// Lower-cased tokens of two or more word characters
pub fn tokenize(text: &str, drop_stop_words: bool) -> Vec<String> {
    let re = TOKENIZE_RE.get_or_init(|| Regex::new(r"\b\w\w+\b").unwrap());
    re.find_iter(&text.to_lowercase())
        .map(|m| m.as_str())
        .filter(|t| !drop_stop_words || !is_stop_word(t))
        .map(str::to_string)
        .collect()
}

//! Query-versus-candidates ranking

use crate::tfidf::TfidfVectorizer;
use crate::tokenize::tokenize;
use screener_core::{Document, RankedResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankOptions {
    pub stop_words_enabled: bool,
}

/// Similarity of every candidate to the query, in input order.
///
/// Query and candidates are vectorized as one batch, so the vocabulary and
/// IDF weights (and therefore every score) depend on the whole candidate set.
pub fn rank(query: &Document, candidates: &[Document], options: &RankOptions) -> Vec<f64> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let batch: Vec<Vec<String>> = std::iter::once(query)
        .chain(candidates.iter())
        .map(|doc| tokenize(&doc.text, options.stop_words_enabled))
        .collect();

    let mut tfidf = TfidfVectorizer::new();
    tfidf.fit_transform(&batch);
    tracing::debug!(
        documents = batch.len(),
        vocabulary = tfidf.vocabulary_len(),
        "fitted tf-idf batch"
    );

    let (query_vec, candidate_vecs) = match tfidf.vectors().split_first() {
        Some(split) => split,
        None => return vec![0.0; candidates.len()],
    };

    // Vectors are unit length (or empty), so the dot product is the cosine
    candidate_vecs
        .iter()
        .zip(candidates)
        .map(|(vec, doc)| {
            let score = query_vec.dot(vec).clamp(0.0, 1.0);
            tracing::debug!(id = %doc.id, score, "scored candidate");
            score
        })
        .collect()
}

/// Stable sort by match score, highest first; ties keep input order
pub fn sort_ranking(results: &mut [RankedResult]) {
    results.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

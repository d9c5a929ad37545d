//! TF-IDF vector space fitted over a whole batch

use std::collections::{BTreeMap, HashMap, HashSet};

/// Sparse vector as `(term index, weight)` pairs sorted by index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(idx, _)| idx);
        entries.retain(|&(_, w)| w != 0.0);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scale to unit length; a zero vector stays zero
    pub fn normalized(&self) -> Self {
        let norm = self.norm();
        if norm == 0.0 {
            return Self::default();
        }
        Self {
            entries: self.entries.iter().map(|&(i, w)| (i, w / norm)).collect(),
        }
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}

/// Vocabulary, smoothed IDF and L2-normalized document vectors.
///
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, term frequency is the raw count.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    vocab: HashMap<String, usize>,
    idf: Vec<f64>,
    doc_vecs: Vec<SparseVector>,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit vocabulary and IDF on every document together, then vectorize each
    pub fn fit_transform(&mut self, documents: &[Vec<String>]) {
        self.vocab.clear();
        self.idf.clear();
        self.doc_vecs.clear();
        if documents.is_empty() {
            return;
        }

        // Build vocabulary
        let mut vocab_set = HashSet::new();
        for tokens in documents {
            vocab_set.extend(tokens.iter().map(String::as_str));
        }
        let mut vocab_vec: Vec<_> = vocab_set.into_iter().collect();
        vocab_vec.sort_unstable();
        self.vocab = vocab_vec
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        // Compute IDF
        let doc_count = documents.len();
        let mut doc_freq = vec![0usize; self.vocab.len()];
        for tokens in documents {
            let unique: HashSet<_> = tokens.iter().filter_map(|t| self.vocab.get(t)).collect();
            for &idx in unique {
                doc_freq[idx] += 1;
            }
        }
        self.idf = doc_freq
            .iter()
            .map(|&df| ((doc_count + 1) as f64 / (df + 1) as f64).ln() + 1.0)
            .collect();

        // Build TF-IDF vectors
        for tokens in documents {
            let mut tf: BTreeMap<usize, usize> = BTreeMap::new();
            for token in tokens {
                if let Some(&idx) = self.vocab.get(token) {
                    *tf.entry(idx).or_insert(0) += 1;
                }
            }
            let vec = SparseVector::from_entries(
                tf.into_iter()
                    .map(|(idx, count)| (idx, count as f64 * self.idf[idx]))
                    .collect(),
            );
            self.doc_vecs.push(vec.normalized());
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocab.len()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocab.get(term).map(|&idx| self.idf[idx])
    }

    pub fn vectors(&self) -> &[SparseVector] {
        &self.doc_vecs
    }
}

//! Joint TF-IDF vectorization and cosine ranking

mod pipeline;
mod ranker;
mod stopwords;
mod tfidf;
mod tokenize;

pub use pipeline::screen_batch;
pub use ranker::{rank, sort_ranking, RankOptions};
pub use stopwords::is_stop_word;
pub use tfidf::{SparseVector, TfidfVectorizer};
pub use tokenize::tokenize;

//! Content-based movie recommendations over TF-IDF vectors.
//!
//! The pipeline is `tokenize -> build_index -> build_vectors -> recommend`.
//! [`prepare`] runs the first three stages once per corpus and returns an
//! immutable [`IndexSnapshot`] that answers queries.

pub mod corpus;
pub mod error;
pub mod index;
pub mod load;
pub mod recommend;
pub mod similarity;
pub mod tokenizer;
pub mod vectorize;

pub use corpus::{Corpus, Document};
pub use error::RecommendError;
pub use index::{build_index, InvertedIndex};
pub use recommend::{prepare, recommend, IndexSnapshot, Recommendation, DEFAULT_TOP_N};
pub use similarity::cosine_similarity;
pub use vectorize::{build_vectors, DocVectors, TermVector, Vocabulary};

pub type TermId = u32;
pub type DocId = u32;

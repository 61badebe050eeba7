use crate::corpus::Corpus;
use crate::error::RecommendError;
use crate::index::{build_index, InvertedIndex};
use crate::tokenizer::tokenize;
use crate::vectorize::{build_vectors, DocVectors, Vocabulary};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub score: f64,
}

/// Rank every other document of `corpus` by cosine similarity to `target`.
///
/// Sorting is stable: documents with equal scores keep their corpus order.
/// At most `top_n` entries are returned and `target` itself never appears.
pub fn recommend(
    target: &str,
    corpus: &Corpus,
    vectors: &DocVectors,
    top_n: usize,
) -> Result<Vec<Recommendation>, RecommendError> {
    let not_found = || RecommendError::NotFound { title: target.to_string() };
    let target_id = corpus.id_of(target).ok_or_else(not_found)?;
    let target_vec = vectors.get(target_id).ok_or_else(not_found)?;

    let mut scored: Vec<Recommendation> = vectors
        .iter()
        .filter(|(doc_id, _)| *doc_id != target_id)
        .filter_map(|(doc_id, v)| {
            corpus.get(doc_id).map(|doc| Recommendation {
                title: doc.title.clone(),
                score: target_vec.cosine(v),
            })
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(top_n);
    Ok(scored)
}

/// Everything derived from one corpus load. Immutable once built.
#[derive(Debug, Clone)]
pub struct IndexSnapshot {
    corpus: Corpus,
    index: InvertedIndex,
    vectors: DocVectors,
    vocabulary: Vocabulary,
}

/// Build the index and vectors for `corpus`.
pub fn prepare(corpus: Corpus) -> IndexSnapshot {
    let index = build_index(&corpus);
    let (vectors, vocabulary) = build_vectors(&corpus, &index);
    tracing::info!(num_docs = corpus.len(), vocab_size = vocabulary.len(), "index snapshot ready");
    IndexSnapshot { corpus, index, vectors, vocabulary }
}

impl IndexSnapshot {
    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn vectors(&self) -> &DocVectors { &self.vectors }

    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn recommend(&self, title: &str, top_n: usize) -> Result<Vec<Recommendation>, RecommendError> {
        recommend(title, &self.corpus, &self.vectors, top_n)
    }

    /// Number of documents without a single token.
    pub fn empty_documents(&self) -> usize {
        self.corpus.iter().filter(|(_, doc)| tokenize(&doc.text).is_empty()).count()
    }
}

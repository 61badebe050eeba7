//! TF-IDF term weighting.
//!
//! `idf(t) = ln(N / (df(t) + 1))` and `tf(t, d) = count(t, d) / |d|`. The +1
//! smoothing makes terms present in more than `N / e` documents weigh
//! negatively; those weights are kept as-is.

use crate::corpus::Corpus;
use crate::index::InvertedIndex;
use crate::similarity::magnitude;
use crate::tokenizer::tokenize;
use crate::{DocId, TermId};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ordered terms defining vector dimensions, with their idf.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    idf: Vec<f64>,
}

impl Vocabulary {
    pub fn terms(&self) -> &[String] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn term(&self, term_id: TermId) -> Option<&str> {
        self.terms.get(term_id as usize).map(String::as_str)
    }

    pub fn idf(&self, term_id: TermId) -> Option<f64> { self.idf.get(term_id as usize).copied() }
}

/// A document's weights over the vocabulary.
///
/// Only non-zero dimensions are stored, ascending by term id. [`to_dense`]
/// expands to the full `dim()`-length vector.
///
/// [`to_dense`]: TermVector::to_dense
#[derive(Debug, Clone, PartialEq)]
pub struct TermVector {
    dim: usize,
    entries: Vec<(TermId, f64)>,
    norm: f64,
}

impl TermVector {
    pub fn from_entries(dim: usize, mut entries: Vec<(TermId, f64)>) -> Self {
        entries.retain(|&(tid, w)| w != 0.0 && (tid as usize) < dim);
        entries.sort_by_key(|&(tid, _)| tid);
        let norm = magnitude(entries.iter().map(|&(_, w)| w));
        Self { dim, entries, norm }
    }

    pub fn dim(&self) -> usize { self.dim }

    pub fn norm(&self) -> f64 { self.norm }

    pub fn entries(&self) -> &[(TermId, f64)] { &self.entries }

    pub fn get(&self, term_id: TermId) -> f64 {
        self.entries
            .binary_search_by_key(&term_id, |&(tid, _)| tid)
            .map_or(0.0, |i| self.entries[i].1)
    }

    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim];
        for &(tid, w) in &self.entries {
            dense[tid as usize] = w;
        }
        dense
    }

    /// Cosine similarity against another vector of the same vocabulary.
    /// Agrees exactly with [`crate::cosine_similarity`] on the dense forms.
    pub fn cosine(&self, other: &TermVector) -> f64 {
        if self.norm == 0.0 || other.norm == 0.0 {
            return 0.0;
        }
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    dot += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot / (self.norm * other.norm)
    }
}

/// One vector per document, indexed by [`DocId`].
#[derive(Debug, Clone, Default)]
pub struct DocVectors {
    dim: usize,
    vectors: Vec<TermVector>,
}

impl DocVectors {
    pub fn dim(&self) -> usize { self.dim }

    pub fn len(&self) -> usize { self.vectors.len() }

    pub fn is_empty(&self) -> bool { self.vectors.is_empty() }

    pub fn get(&self, doc_id: DocId) -> Option<&TermVector> { self.vectors.get(doc_id as usize) }

    pub fn iter(&self) -> impl Iterator<Item = (DocId, &TermVector)> + '_ {
        self.vectors.iter().enumerate().map(|(i, v)| (i as DocId, v))
    }
}

fn smoothed_idf(num_docs: usize, df: u32) -> f64 {
    (num_docs as f64 / (df as f64 + 1.0)).ln()
}

/// Weight every document of `corpus` over the vocabulary of `index`.
///
/// `index` must have been built from the same corpus; tokens it does not know
/// still count toward a document's length but get no dimension.
pub fn build_vectors(corpus: &Corpus, index: &InvertedIndex) -> (DocVectors, Vocabulary) {
    let num_docs = corpus.len();
    let dim = index.len();
    let idf: Vec<f64> = (0..dim as TermId).map(|tid| smoothed_idf(num_docs, index.df(tid))).collect();

    let mut vectors = Vec::with_capacity(num_docs);
    for (_, doc) in corpus.iter() {
        let tokens = tokenize(&doc.text);
        let total = tokens.len();
        let mut counts: HashMap<TermId, u32> = HashMap::new();
        for token in &tokens {
            if let Some(tid) = index.term_id(token) {
                *counts.entry(tid).or_insert(0) += 1;
            }
        }
        let entries = counts
            .into_iter()
            .map(|(tid, count)| {
                let tf = if total == 0 { 0.0 } else { count as f64 / total as f64 };
                (tid, tf * idf[tid as usize])
            })
            .collect();
        vectors.push(TermVector::from_entries(dim, entries));
    }

    tracing::debug!(num_docs, dim, "computed tf-idf vectors");
    let vocabulary = Vocabulary { terms: index.vocabulary().to_vec(), idf };
    (DocVectors { dim, vectors }, vocabulary)
}

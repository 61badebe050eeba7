use crate::corpus::Corpus;
use crate::tokenizer::tokenize;
use crate::{DocId, TermId};
use std::collections::{HashMap, HashSet};

/// Term -> documents containing it.
///
/// Term ids are handed out on first sight, so `vocabulary()[id]` is the
/// corpus-wide first-occurrence order. Postings are sorted by doc id and hold
/// each document at most once.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    dictionary: HashMap<String, TermId>,
    terms: Vec<String>,
    postings: Vec<Vec<DocId>>,
    num_docs: u32,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Distinct terms in insertion order.
    pub fn vocabulary(&self) -> &[String] { &self.terms }

    pub fn len(&self) -> usize { self.terms.len() }

    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    pub fn num_docs(&self) -> u32 { self.num_docs }

    pub fn term_id(&self, term: &str) -> Option<TermId> { self.dictionary.get(term).copied() }

    pub fn postings(&self, term: &str) -> Option<&[DocId]> {
        self.term_id(term).map(|tid| self.postings[tid as usize].as_slice())
    }

    /// Document frequency of a term id; 0 for ids outside the vocabulary.
    pub fn df(&self, term_id: TermId) -> u32 {
        self.postings.get(term_id as usize).map_or(0, |p| p.len() as u32)
    }

    pub fn contains(&self, term: &str, doc_id: DocId) -> bool {
        self.postings(term).is_some_and(|p| p.binary_search(&doc_id).is_ok())
    }

    /// `(term, postings)` pairs in vocabulary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DocId])> + '_ {
        self.terms.iter().zip(&self.postings).map(|(t, p)| (t.as_str(), p.as_slice()))
    }

    fn add_document(&mut self, doc_id: DocId, text: &str) {
        let mut seen_in_doc: HashSet<TermId> = HashSet::new();
        for term in tokenize(text) {
            let tid = match self.dictionary.get(&term) {
                Some(&tid) => tid,
                None => {
                    let tid = self.terms.len() as TermId;
                    self.dictionary.insert(term.clone(), tid);
                    self.terms.push(term);
                    self.postings.push(Vec::new());
                    tid
                }
            };
            if seen_in_doc.insert(tid) {
                self.postings[tid as usize].push(doc_id);
            }
        }
        self.num_docs += 1;
    }
}

/// Index every document of `corpus` in corpus order.
pub fn build_index(corpus: &Corpus) -> InvertedIndex {
    let mut index = InvertedIndex::new();
    for (doc_id, doc) in corpus.iter() {
        index.add_document(doc_id, &doc.text);
    }
    tracing::debug!(num_docs = index.num_docs, num_terms = index.len(), "built inverted index");
    index
}

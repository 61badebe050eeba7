use crate::DocId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One movie: its title and the concatenated metadata text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub title: String,
    pub text: String,
}

/// Ordered mapping from title to text.
///
/// Iteration follows insertion order, which fixes both the vocabulary order and
/// the tie-break order of recommendations. Re-inserting a title keeps its
/// original slot and replaces the text.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    docs: Vec<Document>,
    by_title: HashMap<String, DocId>,
}

impl Corpus {
    pub fn new() -> Self { Self::default() }

    /// Insert or replace a document. Returns `true` if the title was new.
    pub fn insert(&mut self, title: impl Into<String>, text: impl Into<String>) -> bool {
        let title = title.into();
        let text = text.into();
        if let Some(&id) = self.by_title.get(&title) {
            self.docs[id as usize].text = text;
            return false;
        }
        let id = self.docs.len() as DocId;
        self.by_title.insert(title.clone(), id);
        self.docs.push(Document { title, text });
        true
    }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }

    pub fn id_of(&self, title: &str) -> Option<DocId> { self.by_title.get(title).copied() }

    pub fn contains(&self, title: &str) -> bool { self.by_title.contains_key(title) }

    pub fn get(&self, id: DocId) -> Option<&Document> { self.docs.get(id as usize) }

    pub fn text(&self, title: &str) -> Option<&str> {
        self.id_of(title).map(|id| self.docs[id as usize].text.as_str())
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> + '_ {
        self.docs.iter().map(|d| d.title.as_str())
    }

    /// Documents with their ids, in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (DocId, &Document)> + '_ {
        self.docs.iter().enumerate().map(|(i, d)| (i as DocId, d))
    }
}

impl<T: Into<String>, X: Into<String>> FromIterator<(T, X)> for Corpus {
    fn from_iter<I: IntoIterator<Item = (T, X)>>(iter: I) -> Self {
        let mut corpus = Corpus::new();
        corpus.extend(iter);
        corpus
    }
}

impl<T: Into<String>, X: Into<String>> Extend<(T, X)> for Corpus {
    fn extend<I: IntoIterator<Item = (T, X)>>(&mut self, iter: I) {
        for (title, text) in iter {
            self.insert(title, text);
        }
    }
}

use thiserror::Error;

/// Errors returned by recommendation queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecommendError {
    /// The query title is not part of the corpus.
    #[error("Movie '{title}' not found in the dataset.")]
    NotFound { title: String },
}

//! Error types for classification and document lookup

use thiserror::Error;

/// Classification failure
///
/// Empty input is the only input the classifier rejects; everything else
/// produces a best-effort descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("No segments provided")]
    EmptyInput,
}

/// Failure reported by a [`DocumentLookup`](crate::DocumentLookup) backend
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("malformed document data: {0}")]
    Malformed(String),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failure of [`ResourceClassifier::resolve`](crate::ResourceClassifier::resolve)
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

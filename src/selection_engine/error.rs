use thiserror::Error;

/// Failures reported by the selection engine.
///
/// All variants are returned synchronously to the immediate caller and
/// none are retried internally; the engine holds no state a failed call
/// could corrupt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// The category id is not a syntactically valid object id.
    #[error("invalid category id {0:?}: expected a 24-character hex object id")]
    InvalidCategoryId(String),

    /// The requested question count is not a positive integer.
    #[error("question count must be at least 1 (got {0})")]
    InvalidCount(usize),

    /// The category has no questions.
    #[error("no questions found for category {0}")]
    CategoryNotFound(String),

    /// More questions were requested than the category holds. The engine
    /// never clamps; the caller decides whether to retry with a smaller
    /// count.
    #[error("requested {requested} questions but category only has {available}")]
    PoolExhausted { requested: usize, available: usize },
}

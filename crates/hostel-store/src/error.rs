//! Store error types.

/// Errors raised by the persistence layer.
///
/// A storage failure is fatal for the request that hit it: it is logged
/// and surfaced as a server error, never retried.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Query or connection failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

//! Error types for gql-tag

use thiserror::Error;

/// Result type alias for gql-tag operations
pub type TagResult<T> = Result<T, TagError>;

/// Errors raised by the configurable render entry points.
///
/// [`gql`](crate::gql) itself never fails.
#[derive(Debug, Error)]
pub enum TagError {
    /// Segments and values violate `segments.len() == values.len() + 1`
    #[error("Arity mismatch: {segments} segment(s) cannot interleave {values} value(s)")]
    ArityMismatch { segments: usize, values: usize },

    /// The output sink rejected a write
    #[error("Format error: {0}")]
    Format(#[from] std::fmt::Error),
}

impl TagError {
    /// Create an arity mismatch error
    pub fn arity_mismatch(segments: usize, values: usize) -> Self {
        Self::ArityMismatch { segments, values }
    }

    /// Check if this is an arity mismatch error
    pub fn is_arity_mismatch(&self) -> bool {
        matches!(self, Self::ArityMismatch { .. })
    }
}

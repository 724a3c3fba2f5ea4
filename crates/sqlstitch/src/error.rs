//! Error types for sqlstitch

use thiserror::Error;

/// Result type alias for builder validation.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors surfaced when a statement is validated.
///
/// Builder methods themselves never fail: no-op inputs (empty maps, null
/// values, empty lists) degrade to a silent retraction instead. Validation
/// only reports inconsistencies that would corrupt execution downstream.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The number of `?` placeholders in the text no longer matches the
    /// number of bound values.
    #[error("placeholder/parameter mismatch: {placeholders} '?' in text, {params} bound values")]
    PlaceholderMismatch { placeholders: usize, params: usize },
}

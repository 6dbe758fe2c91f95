//! Error types for the generation core.
//!
//! Provider failures are fatal and propagate to the caller of
//! [`crate::pipeline::IconPipeline::generate`]. A failed structural
//! validation is *not* an error. It is the control-flow signal that
//! triggers the single retry, so no error variant exists for it.

use thiserror::Error;

/// Failure of the inference backend to produce a result.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backend could not be reached at all (DNS, connect, timeout).
    #[error("inference backend unreachable: {0}")]
    Unreachable(String),

    /// The backend answered but refused the request (bad key, quota, safety block).
    #[error("inference backend rejected the request: {0}")]
    Rejected(String),

    /// The backend answered but the response carried no generated text.
    #[error("inference backend returned no usable content")]
    EmptyContent,
}

/// Failure of a whole `generate` invocation.
///
/// The pipeline performs no local recovery: the only failures it can
/// surface are provider failures, passed through unchanged.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("icon generation failed: {0}")]
    Provider(#[from] ProviderError),
}

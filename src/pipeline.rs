//! The icon generation pipeline.
//!
//! Composes the prompt builder, the injected inference provider and the
//! structural validator into one linear flow: build prompt, infer,
//! validate, retry once on invalid markup.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::GenerationError;
use crate::inference::InferenceProvider;
use crate::prompt::build_prompt;
use crate::validation::is_structurally_valid;

/// Stateless generation pipeline over an injected [`InferenceProvider`].
///
/// Holds nothing but the provider reference, so a single instance can be
/// reused across concurrent calls as long as the provider itself tolerates
/// concurrent invocation.
pub struct IconPipeline {
    provider: Arc<dyn InferenceProvider>,
}

impl IconPipeline {
    /// Creates a pipeline over `provider`.
    ///
    /// Provider lifecycle (credential loading, client teardown) belongs to
    /// the caller; the pipeline only borrows the capability.
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self { provider }
    }

    /// Generates icon markup for a natural-language `description`.
    ///
    /// Renders the instruction template, asks the provider for markup and
    /// checks the result for a matching `<svg>`/`</svg>` pair. When that
    /// check fails, the provider is asked once more with the *same* prompt
    /// and the second artifact is returned without re-validation, so callers
    /// can still receive structurally invalid markup after the exhausted
    /// retry. Exactly one retry, never a loop.
    ///
    /// Provider failures on either attempt are not retried; they propagate
    /// as [`GenerationError`].
    pub async fn generate(&self, description: &str) -> Result<String, GenerationError> {
        let prompt = build_prompt(description);

        info!("Generating icon for description: {}", description);
        let artifact = self.provider.infer(&prompt).await?;

        if is_structurally_valid(&artifact) {
            return Ok(artifact);
        }

        warn!("Generated markup failed structural validation, retrying once");
        let artifact = self.provider.infer(&prompt).await?;
        Ok(artifact)
    }
}

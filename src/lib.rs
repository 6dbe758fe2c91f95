//! IcoGen - AI-powered SVG icon generation library.
//!
//! This library turns natural-language descriptions into SVG icon markup
//! by delegating content creation to a generative model. It provides:
//!
//! - **Prompt construction** from a fixed instruction template
//! - **Pluggable inference backends** behind a single-method trait
//! - **Structural validation** of the generated markup
//! - **A bounded retry policy**: one extra inference attempt when the first
//!   result is not well-formed markup
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - [`config`] - Configuration management (API key, model, mock mode)
//! - [`error`] - Provider and generation error types
//! - [`http_client`] - HTTP client abstraction
//! - [`inference`] - The `InferenceProvider` trait and its Gemini and mock backends
//! - [`pipeline`] - The generate/validate/retry orchestration
//! - [`prompt`] - Instruction template rendering
//! - [`validation`] - Shallow structural markup check
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use icogen::inference::GeminiProvider;
//! use icogen::pipeline::IconPipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let provider = Arc::new(GeminiProvider::new(
//!         std::env::var("GEMINI_API_KEY")?,
//!         "gemini-pro".to_string(),
//!     ));
//!     let pipeline = IconPipeline::new(provider);
//!
//!     let svg = pipeline.generate("a minimalist paper plane").await?;
//!     println!("{svg}");
//!
//!     Ok(())
//! }
//! ```
//!
//! # Retry policy
//!
//! The pipeline validates only the first artifact. When validation fails it
//! asks the provider once more with the same prompt and returns the second
//! artifact as produced, valid or not. Provider failures (unreachable
//! backend, rejected request, empty response) are never retried and
//! propagate to the caller.

pub mod config;
pub mod error;
pub mod http_client;
pub mod inference;
pub mod pipeline;
pub mod prompt;
pub mod validation;

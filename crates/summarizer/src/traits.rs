//! Core traits for the summarisation pipeline.
//!
//! This module defines the two seams of the generator: the extraction
//! strategy (prompt shape + parsing rule) and the text-generation handle.

use async_trait::async_trait;
use schema::Result;

use crate::types::{Draft, SamplingParams};

/// One way of asking the model for a summary and reading its answer.
///
/// A strategy couples a prompt template with the extraction rule that
/// understands the output that template elicits; the two only make sense
/// together. Strategies are selected by configuration, so new ones can be
/// added without touching the request plumbing.
///
/// ## Design Note
/// - `Send + Sync` allows one boxed strategy to serve concurrent requests
/// - `extract` works on borrowed text and owns nothing of the model call
pub trait Strategy: Send + Sync {
    /// Returns the name of this strategy (for logging and error messages).
    fn name(&self) -> &'static str;

    /// Render the review text into the full prompt sent to the model.
    fn build_prompt(&self, review: &str) -> String;

    /// Recover a draft summary from raw generated text.
    ///
    /// # Returns
    /// * `Ok(Draft)` - whatever fields the output actually contained
    /// * `Err` - the output lacks the structure this strategy expects
    fn extract(&self, generated: &str) -> Result<Draft>;
}

/// An opaque handle to a loaded generative model.
///
/// The handle is created once at startup, shared read-only across
/// requests, and injected into [`crate::SummaryGenerator`] explicitly so
/// initialization and testing stay visible at the call site.
#[async_trait]
pub trait TextGeneration: Send + Sync {
    /// Run one generation pass over a prompt.
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String>;
}

//! The summary generator: prompt, generate, extract, validate.
//!
//! One instance serves the whole process. It holds the injected model
//! handle, the configured strategy, and the sampling parameters; each
//! call is stateless beyond those.

use std::sync::Arc;
use std::time::Instant;

use schema::Result;
use tracing::{debug, info};

use crate::traits::{Strategy, TextGeneration};
use crate::types::{ReviewDigest, SamplingParams};
use crate::validate::validate;

/// Turns one review into a validated `{title, summary, grade}` record.
pub struct SummaryGenerator {
    generation: Arc<dyn TextGeneration>,
    strategy: Box<dyn Strategy>,
    params: SamplingParams,
}

impl SummaryGenerator {
    /// Assemble a generator from its three parts.
    ///
    /// # Arguments
    /// * `generation` - The shared model handle, created once at startup
    /// * `strategy` - The prompt/extraction pair to run every request with
    /// * `params` - Sampling parameters forwarded to every generation call
    pub fn new(
        generation: Arc<dyn TextGeneration>,
        strategy: Box<dyn Strategy>,
        params: SamplingParams,
    ) -> Self {
        Self {
            generation,
            strategy,
            params,
        }
    }

    /// Name of the active strategy (for logging and health reporting).
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Generate a summary for one review.
    ///
    /// Blocks (asynchronously) for the duration of model inference. Each
    /// failure mode maps onto the [`schema::SummaryError`] taxonomy; the
    /// caller decides how to surface it.
    pub async fn generate(&self, review: &str) -> Result<ReviewDigest> {
        let start = Instant::now();
        info!(
            "Generating title, summary, and grade ({} strategy)",
            self.strategy.name()
        );

        let prompt = self.strategy.build_prompt(review);
        debug!("Built prompt of {} chars", prompt.len());

        let generated = self.generation.generate(&prompt, &self.params).await?;
        debug!("Model produced {} chars", generated.len());

        let draft = self.strategy.extract(&generated)?;
        let digest = validate(draft)?;

        info!(
            "Summary ready (grade {}) in {:.2?}",
            digest.grade,
            start.elapsed()
        );
        Ok(digest)
    }
}

//! Adapter from the summarizer's model seam to the gRPC runtime client.
//!
//! The summarizer speaks [`TextGeneration`] and [`SamplingParams`]; the
//! wire speaks protobuf. The conversion between the two lives here, at
//! the boundary, so neither side has to know about the other.

use async_trait::async_trait;
use gen_client::GenClient;
use gen_client::generation::GenerateRequest;
use schema::{Result, SummaryError};
use summarizer::{SamplingParams, TextGeneration};

/// [`TextGeneration`] implementation backed by the gRPC runtime client.
pub struct GrpcGenerator {
    client: GenClient,
}

impl GrpcGenerator {
    pub fn new(client: GenClient) -> Self {
        Self { client }
    }

    /// The model identifier the underlying handle was initialized with.
    pub fn model_id(&self) -> &str {
        self.client.model_id()
    }

    fn to_request(prompt: &str, params: &SamplingParams) -> GenerateRequest {
        GenerateRequest {
            prompt: prompt.to_string(),
            temperature: params.temperature,
            top_p: params.top_p,
            top_k: params.top_k,
            repetition_penalty: params.repetition_penalty,
            max_new_tokens: params.max_new_tokens,
        }
    }
}

#[async_trait]
impl TextGeneration for GrpcGenerator {
    async fn generate(&self, prompt: &str, params: &SamplingParams) -> Result<String> {
        self.client
            .generate(Self::to_request(prompt, params))
            .await
            .map_err(|e| SummaryError::Generation(e.to_string()))
    }
}

//! Client for the out-of-process text-generation runtime.
//!
//! The model weights and the inference loop live in a separate service;
//! this crate provides the typed boundary to it. It handles:
//! - Connection management to the generation runtime
//! - The one-time model load at process startup
//! - Sending prompts with sampling parameters and receiving generated text
//! - Distinguishing fatal initialization faults from per-request faults

use thiserror::Error;
use tonic::transport::Channel;
use tracing::{debug, error, info};

// Include the generated protobuf code
pub mod generation {
    tonic::include_proto!("generation");
}

use generation::text_gen_client::TextGenClient;
use generation::{GenerateRequest, LoadModelRequest};

/// Errors that can occur when interacting with the generation runtime.
///
/// `Connection` and `ModelLoad` happen during startup and are fatal: the
/// process has no working model handle and must not serve. The remaining
/// variants are per-request faults.
#[derive(Error, Debug)]
pub enum GenError {
    #[error("failed to connect to generation runtime: {0}")]
    Connection(String),

    #[error("runtime could not load model `{model_id}`: {detail}")]
    ModelLoad { model_id: String, detail: String },

    #[error("generation call failed: {0}")]
    Generation(String),

    #[error("invalid response from generation runtime: {0}")]
    InvalidResponse(String),
}

impl GenError {
    /// True for initialization failures that prevent the process from
    /// serving at all.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GenError::Connection(_) | GenError::ModelLoad { .. })
    }
}

/// Handle to a loaded generative model.
///
/// Created once at startup via [`GenClient::connect`], then shared
/// read-only across all requests for the lifetime of the process. Cloning
/// is cheap (the underlying channel is reference-counted) and clones talk
/// to the same loaded model.
#[derive(Clone, Debug)]
pub struct GenClient {
    client: TextGenClient<Channel>,
    service_addr: String,
    model_id: String,
}

impl GenClient {
    /// Connect to the generation runtime and load the named model.
    ///
    /// # Arguments
    /// * `addr` - Address of the runtime (e.g., "http://localhost:50051")
    /// * `model_id` - Model identifier to load (e.g., "TinyLlama/TinyLlama-1.1B-Chat-v1.0")
    ///
    /// # Returns
    /// A ready-to-invoke handle, or a fatal [`GenError`] if the channel
    /// cannot be established or the runtime reports the model did not load.
    pub async fn connect(
        addr: impl Into<String>,
        model_id: impl Into<String>,
    ) -> Result<Self, GenError> {
        let addr = addr.into();
        let model_id = model_id.into();
        info!("Connecting to generation runtime at {}", addr);

        let channel = Channel::from_shared(addr.clone())
            .map_err(|e| GenError::Connection(format!("invalid address {addr}: {e}")))?
            .connect()
            .await
            .map_err(|e| GenError::Connection(e.to_string()))?;

        let mut client = TextGenClient::new(channel);

        info!("Loading model {}", model_id);
        let response = client
            .load_model(tonic::Request::new(LoadModelRequest {
                model_id: model_id.clone(),
            }))
            .await
            .map_err(|e| GenError::ModelLoad {
                model_id: model_id.clone(),
                detail: e.message().to_string(),
            })?
            .into_inner();

        if !response.ready {
            error!("Runtime rejected model {}: {}", model_id, response.detail);
            return Err(GenError::ModelLoad {
                model_id,
                detail: response.detail,
            });
        }

        info!("Model {} loaded, handle ready", model_id);
        Ok(GenClient {
            client,
            service_addr: addr,
            model_id,
        })
    }

    /// Run one generation pass and return the raw generated text.
    ///
    /// Blocks (asynchronously) for the duration of model inference; no
    /// timeout is imposed here, callers bring their own.
    pub async fn generate(&self, request: GenerateRequest) -> Result<String, GenError> {
        debug!(
            "Generating for prompt of {} chars (max_new_tokens={})",
            request.prompt.len(),
            request.max_new_tokens
        );

        // Tonic clients need &mut self; clone the cheap channel handle
        // instead of locking the shared one.
        let mut client = self.client.clone();
        let response = client
            .generate(tonic::Request::new(request))
            .await
            .map_err(|e| {
                error!("gRPC error during generation: {}", e);
                GenError::Generation(e.message().to_string())
            })?
            .into_inner();

        if response.text.is_empty() {
            return Err(GenError::InvalidResponse(
                "runtime returned empty generation".into(),
            ));
        }

        debug!("Received {} chars of generated text", response.text.len());
        Ok(response.text)
    }

    /// The model identifier this handle was initialized with.
    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// The address of the runtime this client is connected to.
    pub fn service_address(&self) -> &str {
        &self.service_addr
    }
}

//! Value types passed through the generation pipeline.

use serde_json::Value;

/// Sampling parameters for one generation call.
///
/// These tune randomness and length of the generated text; they never
/// affect what a strategy can parse out of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingParams {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
    pub max_new_tokens: u32,
}

impl Default for SamplingParams {
    fn default() -> Self {
        SamplingParams {
            temperature: 0.7,
            top_p: 0.9,
            top_k: 40,
            repetition_penalty: 1.1,
            max_new_tokens: 300,
        }
    }
}

/// Fields recovered from raw generated text, prior to validation.
///
/// A strategy fills in what it actually found; it never invents a field.
/// `grade` stays in wire form (JSON number, or the raw token from a
/// `Grade:` line) until [`crate::validate::validate`] pins down its domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub grade: Option<Value>,
}

/// A validated summary of one review.
///
/// The reviewer name is attached by the caller; it comes from the request,
/// not from the model.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDigest {
    pub title: String,
    pub summary: String,
    pub grade: u8,
}

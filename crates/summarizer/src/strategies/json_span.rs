//! Strategy that digs a JSON object out of a noisier reply.
//!
//! Chat-tuned models tend to wrap the requested object in pleasantries.
//! This strategy takes the span from the first `{` to the last `}` and
//! parses that, tolerating chatter on either side.

use schema::{Result, SummaryError};

use super::draft_from_json;
use crate::traits::Strategy;
use crate::types::Draft;

/// Asks for a JSON object with an explicit field list and parses the
/// outermost `{` .. `}` span of the output.
pub struct JsonSpan;

impl Strategy for JsonSpan {
    fn name(&self) -> &'static str {
        "json-span"
    }

    fn build_prompt(&self, review: &str) -> String {
        format!(
            "You are given a movie review. Respond with a single JSON object and nothing else.\n\
             Required fields:\n\
             - \"title\": a concise title for the review\n\
             - \"summary\": a short summary of the review in 2-3 sentences\n\
             - \"grade\": an integer between 0 and 5\n\
             Review: {review}\n\
             JSON:"
        )
    }

    fn extract(&self, generated: &str) -> Result<Draft> {
        let start = generated.find('{');
        let end = generated.rfind('}');
        let (start, end) = match (start, end) {
            (Some(start), Some(end)) if start < end => (start, end),
            _ => {
                return Err(SummaryError::Extraction {
                    strategy: self.name(),
                    reason: "no JSON object found in output".to_string(),
                });
            }
        };

        draft_from_json(self.name(), &generated[start..=end])
    }
}

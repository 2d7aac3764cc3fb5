//! Strategy that expects the whole model output to be one JSON object.
//!
//! The simplest contract and the most brittle one: a single token of
//! chatter around the object fails the parse. Kept for models that
//! reliably follow the "only output valid JSON" instruction.

use schema::Result;

use super::draft_from_json;
use crate::traits::Strategy;
use crate::types::Draft;

/// Asks for a bare JSON object and parses the entire output as one.
pub struct JsonWhole;

impl Strategy for JsonWhole {
    fn name(&self) -> &'static str {
        "json-whole"
    }

    fn build_prompt(&self, review: &str) -> String {
        format!(
            "Analyse the following review and return a valid JSON object with these fields:\n\
             {{\"title\": \"string\",    // A concise title for the review\n\
             \"summary\": \"string\",  // A short summary in 2-3 sentences\n\
             \"grade\": integer}}     // A grade between 0 and 5\n\
             Only output valid JSON, with no extra text or comments.\n\
             Review: {review}"
        )
    }

    fn extract(&self, generated: &str) -> Result<Draft> {
        draft_from_json(self.name(), generated.trim())
    }
}

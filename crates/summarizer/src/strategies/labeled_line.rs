//! Chat-formatted strategy with a worked example.
//!
//! The prompt walks the model through one full exchange so that its reply
//! to the real review comes back in the same three-line labelled shape.
//! Extraction splits off the final assistant turn and reads the labels.

use schema::Result;

use super::{ASSISTANT_MARKER, EOS_MARKER, THREE_LINE_INSTRUCTION, reply_tail, scan_labels};
use crate::traits::Strategy;
use crate::types::Draft;

const EXAMPLE_REVIEW: &str =
    "Two hours of pure joy, easily the best animated film I have seen in years.";

const EXAMPLE_REPLY: &str = "Title: Pure animated joy\n\
Grade: 5\n\
Summary: The reviewer calls the film two hours of pure joy and the best animation they have seen in years.";

/// Chat prompt with system/user/assistant turns and one worked example;
/// reads `Title:` / `Grade:` / `Summary:` lines from the final reply.
pub struct LabeledLine;

impl Strategy for LabeledLine {
    fn name(&self) -> &'static str {
        "labeled-line"
    }

    fn build_prompt(&self, review: &str) -> String {
        format!(
            "<|system|>\n{THREE_LINE_INSTRUCTION}{EOS_MARKER}\n\
             <|user|>\n{EXAMPLE_REVIEW}{EOS_MARKER}\n\
             {ASSISTANT_MARKER}\n{EXAMPLE_REPLY}{EOS_MARKER}\n\
             <|user|>\n{review}{EOS_MARKER}\n\
             {ASSISTANT_MARKER}\n"
        )
    }

    fn extract(&self, generated: &str) -> Result<Draft> {
        let tail = reply_tail(self.name(), generated)?;
        Ok(scan_labels(tail))
    }
}

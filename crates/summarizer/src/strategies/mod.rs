//! Strategy implementations for the summarisation pipeline.
//!
//! This module contains the concrete prompt/extraction pairs that can be
//! plugged into a SummaryGenerator, plus the parsing helpers they share.

pub mod assistant_tail;
pub mod json_span;
pub mod json_whole;
pub mod labeled_line;

// Re-export for convenience
pub use assistant_tail::AssistantTail;
pub use json_span::JsonSpan;
pub use json_whole::JsonWhole;
pub use labeled_line::LabeledLine;

use clap::ValueEnum;
use schema::{Result, SummaryError};
use serde_json::Value;

use crate::traits::Strategy;
use crate::types::Draft;

/// Which strategy a process runs with, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
    /// Parse the entire model output as one JSON object
    JsonWhole,
    /// Parse the first `{` .. last `}` span found in the output
    JsonSpan,
    /// Chat prompt with a worked example, labelled-line reply
    LabeledLine,
    /// Chat prompt without examples, read the assistant's tail
    AssistantTail,
}

impl StrategyKind {
    /// Instantiate the selected strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::JsonWhole => Box::new(JsonWhole),
            StrategyKind::JsonSpan => Box::new(JsonSpan),
            StrategyKind::LabeledLine => Box::new(LabeledLine),
            StrategyKind::AssistantTail => Box::new(AssistantTail),
        }
    }
}

/// Turn-start marker for the model's reply in chat-formatted prompts.
pub(crate) const ASSISTANT_MARKER: &str = "<|assistant|>";

/// End-of-sequence token some chat models append to a finished turn.
pub(crate) const EOS_MARKER: &str = "</s>";

/// Instruction shared by the chat strategies: ask for exactly the three
/// labelled lines the extractors know how to read.
pub(crate) const THREE_LINE_INSTRUCTION: &str = "You are a film critic's assistant. \
For each movie review reply with exactly three lines:\n\
Title: <a concise title for the review>\n\
Grade: <an integer between 0 and 5>\n\
Summary: <a short summary of the review in 2-3 sentences>";

/// Parse a JSON payload into a draft summary.
///
/// Non-object payloads are extraction failures; fields that are present
/// but not usable strings are treated as absent and reported downstream
/// by validation.
pub(crate) fn draft_from_json(strategy: &'static str, payload: &str) -> Result<Draft> {
    let value: Value =
        serde_json::from_str(payload).map_err(|e| SummaryError::Extraction {
            strategy,
            reason: format!("output is not valid JSON: {e}"),
        })?;

    let object = value.as_object().ok_or_else(|| SummaryError::Extraction {
        strategy,
        reason: format!("expected a JSON object, got {}", json_kind(&value)),
    })?;

    Ok(Draft {
        title: object
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_string),
        summary: object
            .get("summary")
            .and_then(Value::as_str)
            .map(str::to_string),
        grade: object.get("grade").cloned(),
    })
}

/// The model's reply: everything after the final assistant marker, up to
/// any end-of-sequence token.
///
/// Generation runtimes echo the prompt back in front of the continuation,
/// so earlier markers (including ones inside worked examples) must be
/// skipped.
pub(crate) fn reply_tail<'a>(strategy: &'static str, generated: &'a str) -> Result<&'a str> {
    let idx = generated
        .rfind(ASSISTANT_MARKER)
        .ok_or_else(|| SummaryError::Extraction {
            strategy,
            reason: format!("no `{ASSISTANT_MARKER}` marker in output"),
        })?;

    let tail = &generated[idx + ASSISTANT_MARKER.len()..];
    let tail = tail.split(EOS_MARKER).next().unwrap_or(tail).trim();

    if tail.is_empty() {
        return Err(SummaryError::Extraction {
            strategy,
            reason: "assistant reply was empty".to_string(),
        });
    }
    Ok(tail)
}

/// Read `Title:` / `Grade:` / `Summary:` labelled lines out of a reply.
///
/// First occurrence of each label wins. Lines without a known label are
/// ignored here; lenient strategies decide what to do with them.
pub(crate) fn scan_labels(tail: &str) -> Draft {
    let mut draft = Draft::default();
    for line in tail.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("Title:") {
            if draft.title.is_none() {
                draft.title = Some(rest.trim().to_string());
            }
        } else if let Some(rest) = line.strip_prefix("Grade:") {
            if draft.grade.is_none() {
                draft.grade = Some(Value::String(rest.trim().to_string()));
            }
        } else if let Some(rest) = line.strip_prefix("Summary:") {
            if draft.summary.is_none() {
                draft.summary = Some(rest.trim().to_string());
            }
        }
    }
    draft
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

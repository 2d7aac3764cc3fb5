//! Validation of extracted drafts against the summary contract.
//!
//! A draft leaves extraction with whatever the model happened to produce;
//! this module is the single place that decides whether that is a usable
//! summary. Violations are reported, never repaired: no clamping, no
//! defaults.

use schema::{GRADE_MAX, GRADE_MIN, Result, SummaryError};
use serde_json::Value;

use crate::types::{Draft, ReviewDigest};

/// Check field presence and the grade domain, producing the final record.
///
/// # Returns
/// * `Ok(ReviewDigest)` - all three fields present, grade an integer in range
/// * `Err(SummaryError::MissingField)` - a field absent or blank, named
/// * `Err(SummaryError::GradeNotInteger)` - grade present but not an integer
/// * `Err(SummaryError::GradeOutOfRange)` - integer grade outside the domain
pub fn validate(draft: Draft) -> Result<ReviewDigest> {
    let title = require_text(draft.title, "title")?;
    let summary = require_text(draft.summary, "summary")?;
    let grade_value = draft
        .grade
        .ok_or(SummaryError::MissingField { field: "grade" })?;
    let grade = parse_grade(&grade_value)?;

    Ok(ReviewDigest {
        title,
        summary,
        grade,
    })
}

fn require_text(field: Option<String>, name: &'static str) -> Result<String> {
    match field {
        Some(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
        _ => Err(SummaryError::MissingField { field: name }),
    }
}

/// Pin the grade down to an integer in `[GRADE_MIN, GRADE_MAX]`.
///
/// Accepts a JSON integer or a string of digits (the labelled-line
/// strategies deliver the raw token from the `Grade:` line); everything
/// else is a validation failure.
fn parse_grade(value: &Value) -> Result<u8> {
    let grade = match value {
        Value::Number(n) => n.as_i64().ok_or_else(|| SummaryError::GradeNotInteger {
            value: n.to_string(),
        })?,
        Value::String(s) => {
            s.trim()
                .parse::<i64>()
                .map_err(|_| SummaryError::GradeNotInteger {
                    value: s.trim().to_string(),
                })?
        }
        other => {
            return Err(SummaryError::GradeNotInteger {
                value: other.to_string(),
            });
        }
    };

    if grade < i64::from(GRADE_MIN) || grade > i64::from(GRADE_MAX) {
        return Err(SummaryError::GradeOutOfRange { grade });
    }
    Ok(grade as u8)
}

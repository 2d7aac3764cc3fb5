//! Error types for review summarisation.
//!
//! The taxonomy distinguishes failures the caller can act on (the model
//! produced unusable output for this review) from faults in the service
//! itself (the generation runtime misbehaved).

use thiserror::Error;

/// Errors that can occur while turning a review into a summary.
#[derive(Error, Debug)]
pub enum SummaryError {
    /// Generated text does not contain the structure the active strategy
    /// expects (no JSON object, no assistant marker, no labelled lines).
    #[error("{strategy} extraction failed: {reason}")]
    Extraction {
        strategy: &'static str,
        reason: String,
    },

    /// Structure was present but a required field was absent or empty.
    #[error("model output is missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A grade was present but is not an integer.
    #[error("grade must be an integer, got `{value}`")]
    GradeNotInteger { value: String },

    /// An integer grade fell outside the allowed range.
    #[error("grade {grade} is out of range {min}..={max}", min = crate::GRADE_MIN, max = crate::GRADE_MAX)]
    GradeOutOfRange { grade: i64 },

    /// The model invocation itself failed.
    #[error("text generation failed: {0}")]
    Generation(String),
}

impl SummaryError {
    /// Whether the failure should surface to the caller as a client error.
    ///
    /// Extraction and validation failures are caused by what the model
    /// produced for this specific review; anything else is a server fault.
    pub fn is_client_facing(&self) -> bool {
        !matches!(self, SummaryError::Generation(_))
    }
}

/// Convenience type alias for Results in the summarisation path.
pub type Result<T> = std::result::Result<T, SummaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_a_human_readable_cause() {
        let err = SummaryError::Extraction {
            strategy: "json-span",
            reason: "no JSON object found in output".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "json-span extraction failed: no JSON object found in output"
        );

        let err = SummaryError::MissingField { field: "grade" };
        assert_eq!(err.to_string(), "model output is missing required field `grade`");

        let err = SummaryError::GradeOutOfRange { grade: 7 };
        assert_eq!(err.to_string(), "grade 7 is out of range 0..=5");
    }

    #[test]
    fn extraction_and_validation_failures_are_client_facing() {
        assert!(
            SummaryError::Extraction {
                strategy: "json-whole",
                reason: "not JSON".to_string(),
            }
            .is_client_facing()
        );
        assert!(SummaryError::MissingField { field: "title" }.is_client_facing());
        assert!(
            SummaryError::GradeNotInteger {
                value: "4.5".to_string(),
            }
            .is_client_facing()
        );
        assert!(SummaryError::GradeOutOfRange { grade: -1 }.is_client_facing());
    }

    #[test]
    fn generation_faults_are_server_side() {
        let err = SummaryError::Generation("runtime unavailable".to_string());
        assert!(!err.is_client_facing());
    }
}

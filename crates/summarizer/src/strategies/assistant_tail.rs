//! Chat-formatted strategy without examples, reading the reply leniently.
//!
//! An earlier rendition of this strategy captured the assistant tail as
//! the summary and filled `title` and `grade` with fixed placeholders.
//! The placeholders are gone: the extractor reports what the reply
//! actually contained and lets validation reject the rest, so a caller is
//! never handed fields the model did not produce.

use schema::Result;

use super::{ASSISTANT_MARKER, EOS_MARKER, THREE_LINE_INSTRUCTION, reply_tail, scan_labels};
use crate::traits::Strategy;
use crate::types::Draft;

/// Chat prompt without worked examples; captures everything after the
/// assistant marker, reading labelled lines when present and falling back
/// to treating unlabelled text as the summary.
pub struct AssistantTail;

impl Strategy for AssistantTail {
    fn name(&self) -> &'static str {
        "assistant-tail"
    }

    fn build_prompt(&self, review: &str) -> String {
        format!(
            "<|system|>\n{THREE_LINE_INSTRUCTION}{EOS_MARKER}\n\
             <|user|>\n{review}{EOS_MARKER}\n\
             {ASSISTANT_MARKER}\n"
        )
    }

    fn extract(&self, generated: &str) -> Result<Draft> {
        let tail = reply_tail(self.name(), generated)?;
        let mut draft = scan_labels(tail);

        // Without a worked example the model often answers in prose. Take
        // the unlabelled text as the summary, but never conjure a title or
        // grade out of it.
        if draft.summary.is_none() {
            let prose: Vec<&str> = tail
                .lines()
                .map(str::trim)
                .filter(|line| {
                    !line.is_empty()
                        && !line.starts_with("Title:")
                        && !line.starts_with("Grade:")
                })
                .collect();
            if !prose.is_empty() {
                draft.summary = Some(prose.join(" "));
            }
        }

        Ok(draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn echoed(reply: &str) -> String {
        let prompt = AssistantTail.build_prompt("A movie happened.");
        format!("{prompt}{reply}{EOS_MARKER}")
    }

    #[test]
    fn prompt_has_no_worked_example() {
        let prompt = AssistantTail.build_prompt("Stunning visuals.");
        assert_eq!(prompt.matches("<|user|>").count(), 1);
        assert!(prompt.contains("Stunning visuals."));
    }

    #[test]
    fn labelled_reply_is_read_in_full() {
        let draft = AssistantTail
            .extract(&echoed(
                "Title: Stunning\nGrade: 5\nSummary: Gorgeous from start to finish.",
            ))
            .unwrap();

        assert_eq!(draft.title.as_deref(), Some("Stunning"));
        assert_eq!(draft.grade, Some(Value::String("5".to_string())));
        assert_eq!(draft.summary.as_deref(), Some("Gorgeous from start to finish."));
    }

    #[test]
    fn prose_reply_becomes_the_summary_with_nothing_invented() {
        let draft = AssistantTail
            .extract(&echoed("The reviewer was deeply moved by the film."))
            .unwrap();

        assert_eq!(
            draft.summary.as_deref(),
            Some("The reviewer was deeply moved by the film.")
        );
        assert!(draft.title.is_none(), "title must not be fabricated");
        assert!(draft.grade.is_none(), "grade must not be fabricated");
    }

    #[test]
    fn partial_labels_keep_prose_out_of_them() {
        let draft = AssistantTail
            .extract(&echoed("Grade: 3\nA middling effort overall."))
            .unwrap();

        assert_eq!(draft.grade, Some(Value::String("3".to_string())));
        assert_eq!(draft.summary.as_deref(), Some("A middling effort overall."));
        assert!(draft.title.is_none());
    }

    #[test]
    fn empty_reply_is_an_extraction_error() {
        let err = AssistantTail.extract(&echoed("")).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }
}

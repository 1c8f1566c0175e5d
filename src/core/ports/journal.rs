use std::fmt;

use uuid::Uuid;

use crate::core::models::answer::{Classified, Insert, RawAnswer, SubmissionContext};
use crate::core::models::column::OptionColumn;
use crate::error::Error;

/// Diagnostic sink for the submission pipeline. Recording cannot fail from
/// the caller's side; implementations deal with their own I/O errors.
pub trait Journal {
    fn record(&self, batch: &Uuid, event: Event<'_>);
}

#[derive(Debug)]
pub enum Event<'a> {
    Started { context: &'a SubmissionContext, answers: usize },
    Skipped { raw: &'a RawAnswer },
    Received { question_id: i32, raw: &'a RawAnswer },
    Classified { question_id: i32, shape: &'a Classified, column: &'a OptionColumn },
    Rejected { question_id: i32, raw: &'a RawAnswer },
    Saved { row: &'a Insert },
    Committed { rows: usize },
    RolledBack { error: &'a Error },
}

fn raw_json(raw: &RawAnswer) -> String {
    serde_json::to_string(raw).unwrap_or_else(|_| format!("{:?}", raw))
}

impl fmt::Display for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Started { context, answers } => write!(
                f,
                "new survey submission: saving {} answers for user {}, survey {}, area {}, ward {}",
                answers, context.user_id, context.survey_id, context.area_id, context.ward_id
            ),
            Event::Skipped { raw } => write!(f, "skipping answer with missing question_id: {}", raw_json(raw)),
            Event::Received { question_id, raw } => write!(f, "processing answer for question {}: {}", question_id, raw_json(raw)),
            Event::Classified { question_id, shape, column } => match shape {
                Classified::MultiSelect(options) => write!(
                    f,
                    "question {}: multiple choice, {} options selected, column {}",
                    question_id,
                    options.len(),
                    column
                ),
                Classified::SingleSelect(option) => write!(f, "question {}: single choice, option {}, column {}", question_id, option, column),
                Classified::FreeText(text) => write!(f, "question {}: text answer {:?}", question_id, text),
            },
            Event::Rejected { question_id, raw } => write!(f, "invalid answer format for question {}: {}", question_id, raw_json(raw)),
            Event::Saved { row } => match row.option_id() {
                Some(oid) => write!(f, "saved question {} option {}", row.question_id, oid),
                None => write!(f, "saved question {} text answer", row.question_id),
            },
            Event::Committed { rows } => write!(f, "all responses saved ({} rows)", rows),
            Event::RolledBack { error } => write!(f, "submission rolled back: {}", error),
        }
    }
}

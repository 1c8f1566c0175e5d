use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// Identity shared by every row of one submitted batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionContext {
    pub user_id: i32,
    pub survey_id: i32,
    pub area_id: i32,
    pub ward_id: i32,
}

/// One answer as the client sent it. The option and text fields are kept as
/// raw JSON because clients send ids as numbers or strings and sometimes fill
/// more than one field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAnswer {
    #[serde(default)]
    pub question_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option_ids: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BulkSubmit {
    pub user_id: Option<i32>,
    pub survey_id: Option<i32>,
    pub area_id: Option<i32>,
    pub ward_id: Option<i32>,
    pub answers: Option<Vec<RawAnswer>>,
}

impl BulkSubmit {
    pub fn into_parts(self) -> Result<(SubmissionContext, Vec<RawAnswer>), Error> {
        fn required(value: Option<i32>, name: &'static str) -> Result<i32, Error> {
            value.filter(|v| *v > 0).ok_or(Error::MissingContextField(name))
        }
        let context = SubmissionContext {
            user_id: required(self.user_id, "user_id")?,
            survey_id: required(self.survey_id, "survey_id")?,
            area_id: required(self.area_id, "area_id")?,
            ward_id: required(self.ward_id, "ward_id")?,
        };
        let answers = self.answers.ok_or(Error::MissingContextField("answers"))?;
        Ok((context, answers))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    MultiSelect(Vec<i32>),
    SingleSelect(i32),
    FreeText(String),
}

impl RawAnswer {
    /// `None` for a missing, zero, negative or non-numeric id. Clients built on
    /// primitive ints send `0` for an unset question.
    pub fn question_id(&self) -> Option<i32> {
        self.question_id.as_ref().and_then(coerce_id).filter(|qid| *qid > 0)
    }

    /// Option answers win over text: a client may send an empty `answer_text`
    /// next to the option it actually selected.
    pub fn classify(&self, question_id: i32) -> Result<Classified, Error> {
        if let Some(Value::Array(ids)) = &self.selected_option_ids {
            if !ids.is_empty() {
                // ids are not checked for positivity, unlike selected_option_id
                let options = ids
                    .iter()
                    .map(coerce_id)
                    .collect::<Option<Vec<i32>>>()
                    .ok_or(Error::InvalidAnswerShape { question_id })?;
                return Ok(Classified::MultiSelect(options));
            }
        }
        if let Some(option) = self.selected_option_id.as_ref().and_then(coerce_id).filter(|id| *id > 0) {
            return Ok(Classified::SingleSelect(option));
        }
        if let Some(text) = self.answer_text.as_ref().and_then(coerce_text) {
            let text = text.trim();
            if !text.is_empty() {
                return Ok(Classified::FreeText(text.to_owned()));
            }
        }
        Err(Error::InvalidAnswerShape { question_id })
    }
}

fn coerce_id(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && f.is_finite()).map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answered {
    Option(i32),
    Text(String),
}

/// One row of `responses`. Exactly one of the option column and
/// `answer_text` is set, which `Answered` makes unrepresentable otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insert {
    pub user_id: i32,
    pub survey_id: i32,
    pub area_id: i32,
    pub ward_id: i32,
    pub question_id: i32,
    pub answered: Answered,
}

impl Insert {
    pub fn new(context: &SubmissionContext, question_id: i32, answered: Answered) -> Self {
        Insert {
            user_id: context.user_id,
            survey_id: context.survey_id,
            area_id: context.area_id,
            ward_id: context.ward_id,
            question_id,
            answered,
        }
    }

    pub fn option_id(&self) -> Option<i32> {
        match self.answered {
            Answered::Option(id) => Some(id),
            Answered::Text(_) => None,
        }
    }

    pub fn answer_text(&self) -> Option<&str> {
        match &self.answered {
            Answered::Option(_) => None,
            Answered::Text(text) => Some(text),
        }
    }
}

impl Classified {
    pub fn into_inserts(self, context: &SubmissionContext, question_id: i32) -> Vec<Insert> {
        match self {
            Classified::MultiSelect(options) => options
                .into_iter()
                .map(|oid| Insert::new(context, question_id, Answered::Option(oid)))
                .collect(),
            Classified::SingleSelect(oid) => vec![Insert::new(context, question_id, Answered::Option(oid))],
            Classified::FreeText(text) => vec![Insert::new(context, question_id, Answered::Text(text))],
        }
    }
}

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
    pub type_: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Opt {
    pub id: i32,
    pub question_id: i32,
    pub option_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionItem {
    pub id: i32,
    pub option_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionWithOptions {
    pub id: i32,
    pub question_text: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub options: Vec<OptionItem>,
}

use crate::core::models::{
    answer::Insert as AnswerInsert,
    area::{Area, Ward},
    column::OptionColumn,
    survey::{Opt, Question},
    user::{Profile, User},
};
use crate::error::Error;

pub trait AnswerCommon {
    /// Fails with `Error::WriteFailure`.
    async fn insert(&mut self, column: &OptionColumn, answer: AnswerInsert) -> Result<(), Error>;
}

pub trait SchemaCommon {
    async fn ping(&mut self) -> Result<(), Error>;
    async fn tables(&mut self) -> Result<Vec<String>, Error>;
    async fn columns(&mut self, table: &str) -> Result<Vec<String>, Error>;
}

pub trait UserCommon {
    async fn get_by_phone(&mut self, phone: &str) -> Result<Option<User>, Error>;
    async fn sample(&mut self, limit: i64) -> Result<Vec<Profile>, Error>;
}

pub trait AreaCommon {
    async fn query(&mut self) -> Result<Vec<Area>, Error>;
    async fn wards(&mut self, area_id: i32) -> Result<Vec<Ward>, Error>;
}

pub trait QuestionCommon {
    async fn query_by_survey(&mut self, survey_id: i32) -> Result<Vec<Question>, Error>;
}

pub trait OptionCommon {
    async fn query_by_questions(&mut self, question_ids: Vec<i32>) -> Result<Vec<Opt>, Error>;
}

pub trait Common: AnswerCommon + SchemaCommon + UserCommon + AreaCommon + QuestionCommon + OptionCommon {}

pub trait Store: Common {}

pub trait TxStore: Store {
    async fn commit(self) -> Result<(), Error>;
    async fn rollback(self) -> Result<(), Error>;
}

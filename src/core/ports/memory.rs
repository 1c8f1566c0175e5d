//! In-memory store for service tests. Writes are staged per transaction and
//! only become visible in the shared tables on commit.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use crate::core::models::{
    answer::Insert as AnswerInsert,
    area::{Area, Ward},
    column::OptionColumn,
    survey::{Opt, Question},
    user::{Profile, User},
};
use crate::core::ports::journal::{Event, Journal};
use crate::core::ports::repository::{AnswerCommon, AreaCommon, Common, OptionCommon, QuestionCommon, SchemaCommon, Store, TxStore, UserCommon};
use crate::error::Error;
use crate::sqlx::Error as SqlxError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub column: String,
    pub insert: AnswerInsert,
}

#[derive(Debug, Default)]
pub struct Tables {
    pub tables: Vec<String>,
    pub response_columns: Vec<String>,
    pub responses: Vec<Row>,
    pub users: Vec<User>,
    pub areas: Vec<(Area, Vec<Ward>)>,
    pub questions: Vec<(i32, Question)>,
    pub options: Vec<Opt>,
    pub insert_attempts: usize,
    pub option_queries: usize,
    pub commits: usize,
    pub rollbacks: usize,
    pub fail_commit: bool,
    pub fail_rollback: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemDb {
    tables: Rc<RefCell<Tables>>,
}

impl MemDb {
    pub fn with_response_columns(columns: &[&str]) -> Self {
        let db = MemDb::default();
        db.tables.borrow_mut().response_columns = columns.iter().map(|c| c.to_string()).collect();
        db
    }

    pub fn tx(&self) -> MemStore {
        MemStore {
            db: self.clone(),
            staged: Vec::new(),
        }
    }

    pub fn tables(&self) -> std::cell::RefMut<'_, Tables> {
        self.tables.borrow_mut()
    }

    pub fn responses(&self) -> Vec<Row> {
        self.tables.borrow().responses.clone()
    }
}

pub struct MemStore {
    db: MemDb,
    staged: Vec<Row>,
}

impl AnswerCommon for MemStore {
    async fn insert(&mut self, column: &OptionColumn, answer: AnswerInsert) -> Result<(), Error> {
        let mut tables = self.db.tables();
        tables.insert_attempts += 1;
        if !tables.response_columns.iter().any(|c| c == column.name()) {
            return Err(Error::WriteFailure(SqlxError::ColumnNotFound(column.name().to_owned())));
        }
        self.staged.push(Row {
            column: column.name().to_owned(),
            insert: answer,
        });
        Ok(())
    }
}

impl SchemaCommon for MemStore {
    async fn ping(&mut self) -> Result<(), Error> {
        Ok(())
    }

    async fn tables(&mut self) -> Result<Vec<String>, Error> {
        Ok(self.db.tables().tables.clone())
    }

    async fn columns(&mut self, table: &str) -> Result<Vec<String>, Error> {
        if table == "responses" {
            return Ok(self.db.tables().response_columns.clone());
        }
        Ok(Vec::new())
    }
}

impl UserCommon for MemStore {
    async fn get_by_phone(&mut self, phone: &str) -> Result<Option<User>, Error> {
        Ok(self.db.tables().users.iter().find(|u| u.phone == phone).cloned())
    }

    async fn sample(&mut self, limit: i64) -> Result<Vec<Profile>, Error> {
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(self.db.tables().users.iter().take(limit).cloned().map(Profile::from).collect())
    }
}

impl AreaCommon for MemStore {
    async fn query(&mut self) -> Result<Vec<Area>, Error> {
        Ok(self.db.tables().areas.iter().map(|(a, _)| a.clone()).collect())
    }

    async fn wards(&mut self, area_id: i32) -> Result<Vec<Ward>, Error> {
        Ok(self
            .db
            .tables()
            .areas
            .iter()
            .filter(|(a, _)| a.id == area_id)
            .flat_map(|(_, wards)| wards.clone())
            .collect())
    }
}

impl QuestionCommon for MemStore {
    async fn query_by_survey(&mut self, survey_id: i32) -> Result<Vec<Question>, Error> {
        Ok(self
            .db
            .tables()
            .questions
            .iter()
            .filter(|(sid, _)| *sid == survey_id)
            .map(|(_, q)| q.clone())
            .collect())
    }
}

impl OptionCommon for MemStore {
    async fn query_by_questions(&mut self, question_ids: Vec<i32>) -> Result<Vec<Opt>, Error> {
        let mut tables = self.db.tables();
        tables.option_queries += 1;
        Ok(tables.options.iter().filter(|o| question_ids.contains(&o.question_id)).cloned().collect())
    }
}

impl Common for MemStore {}
impl Store for MemStore {}

impl TxStore for MemStore {
    async fn commit(self) -> Result<(), Error> {
        let mut tables = self.db.tables();
        if tables.fail_commit {
            return Err(Error::WriteFailure(SqlxError::PoolClosed));
        }
        tables.commits += 1;
        tables.responses.extend(self.staged);
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        let mut tables = self.db.tables();
        if tables.fail_rollback {
            return Err(Error::DatabaseError(SqlxError::PoolClosed));
        }
        tables.rollbacks += 1;
        Ok(())
    }
}

/// Keeps journal lines for assertions.
#[derive(Debug, Default)]
pub struct RecordingJournal {
    pub lines: RefCell<Vec<String>>,
}

impl Journal for RecordingJournal {
    fn record(&self, _batch: &Uuid, event: Event<'_>) {
        self.lines.borrow_mut().push(event.to_string());
    }
}

use crate::core::models::{
    answer::Insert as AnswerInsert,
    area::{Area, Ward},
    column::OptionColumn,
    survey::{Opt, Question},
    user::{Profile, User},
};
use crate::core::ports::repository::{AnswerCommon, AreaCommon, Common, OptionCommon, QuestionCommon, SchemaCommon, Store, TxStore, UserCommon};
use crate::error::Error;
use sqlx::pool::PoolConnection;
use sqlx::{query, query_as, query_scalar, Executor, PgPool, Postgres, Transaction};

pub struct PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e>,
{
    executor: E,
}

impl<E> AnswerCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn insert(&mut self, column: &OptionColumn, answer: AnswerInsert) -> Result<(), Error> {
        let stmt = format!(
            "INSERT INTO responses (user_id, survey_id, area_id, ward_id, question_id, {}, answer_text) VALUES ($1, $2, $3, $4, $5, $6, $7)",
            column.quoted()
        );
        query(&stmt)
            .bind(answer.user_id)
            .bind(answer.survey_id)
            .bind(answer.area_id)
            .bind(answer.ward_id)
            .bind(answer.question_id)
            .bind(answer.option_id())
            .bind(answer.answer_text())
            .execute(&mut self.executor)
            .await
            .map_err(Error::WriteFailure)?;
        Ok(())
    }
}

impl<E> SchemaCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn ping(&mut self) -> Result<(), Error> {
        query_scalar::<_, i32>("SELECT 1").fetch_one(&mut self.executor).await?;
        Ok(())
    }

    async fn tables(&mut self) -> Result<Vec<String>, Error> {
        let tables = query_scalar(
            "
        SELECT table_name::text
        FROM information_schema.tables
        WHERE table_schema = current_schema()
        ORDER BY table_name",
        )
        .fetch_all(&mut self.executor)
        .await?;
        Ok(tables)
    }

    async fn columns(&mut self, table: &str) -> Result<Vec<String>, Error> {
        let columns = query_scalar(
            "
        SELECT column_name::text
        FROM information_schema.columns
        WHERE table_schema = current_schema() AND table_name = $1
        ORDER BY ordinal_position",
        )
        .bind(table)
        .fetch_all(&mut self.executor)
        .await?;
        Ok(columns)
    }
}

impl<E> UserCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn get_by_phone(&mut self, phone: &str) -> Result<Option<User>, Error> {
        let user = query_as("SELECT id, name, phone, password_hash FROM users WHERE phone = $1 LIMIT 1")
            .bind(phone)
            .fetch_optional(&mut self.executor)
            .await?;
        Ok(user)
    }

    async fn sample(&mut self, limit: i64) -> Result<Vec<Profile>, Error> {
        let users = query_as("SELECT id, name, phone FROM users ORDER BY id LIMIT $1")
            .bind(limit)
            .fetch_all(&mut self.executor)
            .await?;
        Ok(users)
    }
}

impl<E> AreaCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn query(&mut self) -> Result<Vec<Area>, Error> {
        let areas = query_as("SELECT id, area_name FROM areas ORDER BY id").fetch_all(&mut self.executor).await?;
        Ok(areas)
    }

    async fn wards(&mut self, area_id: i32) -> Result<Vec<Ward>, Error> {
        let wards = query_as("SELECT id, ward_name FROM wards WHERE area_id = $1 ORDER BY id")
            .bind(area_id)
            .fetch_all(&mut self.executor)
            .await?;
        Ok(wards)
    }
}

impl<E> QuestionCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn query_by_survey(&mut self, survey_id: i32) -> Result<Vec<Question>, Error> {
        let questions = query_as("SELECT id, question_text, type AS type_ FROM questions WHERE survey_id = $1 ORDER BY id")
            .bind(survey_id)
            .fetch_all(&mut self.executor)
            .await?;
        Ok(questions)
    }
}

impl<E> OptionCommon for PgSqlx<E>
where
    for<'e> &'e mut E: Executor<'e, Database = Postgres>,
{
    async fn query_by_questions(&mut self, question_ids: Vec<i32>) -> Result<Vec<Opt>, Error> {
        let options = query_as("SELECT id, question_id, option_text FROM options WHERE question_id = ANY($1) ORDER BY id")
            .bind(question_ids)
            .fetch_all(&mut self.executor)
            .await?;
        Ok(options)
    }
}

pub struct PgSqlxManager {
    pool: PgPool,
}

impl PgSqlxManager {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn begin(&self) -> Result<PgSqlx<Transaction<'static, Postgres>>, Error> {
        let tx = self.pool.begin().await.map_err(Error::ConnectionFailure)?;
        Ok(PgSqlx { executor: tx })
    }

    pub async fn acquire(&self) -> Result<PgSqlx<PoolConnection<Postgres>>, Error> {
        let conn = self.pool.acquire().await.map_err(Error::ConnectionFailure)?;
        Ok(PgSqlx { executor: conn })
    }
}

impl Store for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Store for PgSqlx<Transaction<'a, Postgres>> {}
impl Common for PgSqlx<PoolConnection<Postgres>> {}
impl<'a> Common for PgSqlx<Transaction<'a, Postgres>> {}

impl<'a> TxStore for PgSqlx<Transaction<'a, Postgres>> {
    async fn commit(self) -> Result<(), Error> {
        self.executor.commit().await.map_err(Error::WriteFailure)?;
        Ok(())
    }

    async fn rollback(self) -> Result<(), Error> {
        self.executor.rollback().await?;
        Ok(())
    }
}

use crate::actix_web::web::{Data, Json, Path};
use crate::core::models::survey::QuestionWithOptions;
use crate::core::services::survey;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::Reply;

pub async fn questions(survey_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<Reply<Vec<QuestionWithOptions>>>, Error> {
    let survey_id = survey_id.into_inner().0;
    let mut db = manager.acquire().await?;
    let questions = survey::questions_with_options(&mut db, survey_id).await?;
    Ok(Json(Reply::data(questions)))
}

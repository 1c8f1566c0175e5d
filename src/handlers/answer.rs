use crate::actix_web::web::{Data, Json};
use crate::core::models::answer::BulkSubmit;
use crate::core::models::column::OptionColumn;
use crate::core::ports::journal::Journal;
use crate::core::services::answer;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::Reply;

pub async fn submit<J>(Json(submission): Json<BulkSubmit>, manager: Data<PgSqlxManager>, column: Data<OptionColumn>, journal: Data<J>) -> Result<Json<Reply<()>>, Error>
where
    J: Journal + 'static,
{
    let (context, answers) = submission.into_parts()?;
    let tx = manager.begin().await?;
    answer::submit(tx, journal.get_ref(), column.get_ref(), context, answers).await?;
    Ok(Json(Reply::message("Responses saved")))
}

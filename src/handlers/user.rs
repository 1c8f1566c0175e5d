use crate::actix_web::web::{Data, Json};
use crate::core::models::user::{Login, Profile};
use crate::core::services::user;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::Reply;

pub async fn login(Json(Login { phone, password }): Json<Login>, manager: Data<PgSqlxManager>) -> Result<Json<Reply<Profile>>, Error> {
    let mut db = manager.acquire().await?;
    let profile = user::login(&mut db, phone, password).await?;
    Ok(Json(Reply::data(profile)))
}

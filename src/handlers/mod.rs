pub mod answer;
pub mod area;
pub mod survey;
pub mod user;

use crate::actix_web::{
    error::JsonPayloadError,
    http::StatusCode,
    web::{Data, Json},
    HttpRequest, HttpResponse,
};
use crate::core::models::{schema::TableCheck, user::UserSample};
use crate::core::services::{schema, user as user_service};
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::{Reply, Report};

pub async fn index() -> Json<Reply<()>> {
    Json(Reply::message("Election Survey API is running"))
}

pub async fn test_db(manager: Data<PgSqlxManager>) -> Result<Json<Reply<()>>, Error> {
    let mut db = manager.acquire().await?;
    schema::ping(&mut db).await?;
    Ok(Json(Reply::message("Database connection successful")))
}

pub async fn test_tables(manager: Data<PgSqlxManager>) -> Result<Json<Report<TableCheck>>, Error> {
    let mut db = manager.acquire().await?;
    let check = schema::check_tables(&mut db).await?;
    Ok(Json(Report::new(check)))
}

pub async fn test_users(manager: Data<PgSqlxManager>) -> Result<Json<Report<UserSample>>, Error> {
    let mut db = manager.acquire().await?;
    let sample = user_service::sample(&mut db).await?;
    Ok(Json(Report::new(sample)))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::build(StatusCode::NOT_FOUND).json(Reply::<()>::failure("Route not found", None))
}

pub fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::BadRequest(format!("invalid request body: {}", err)).into()
}

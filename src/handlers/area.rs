use crate::actix_web::web::{Data, Json, Path};
use crate::core::models::area::{Area, Ward};
use crate::core::services::area;
use crate::database::sqlx::PgSqlxManager;
use crate::error::Error;
use crate::response::Reply;

pub async fn areas(manager: Data<PgSqlxManager>) -> Result<Json<Reply<Vec<Area>>>, Error> {
    let mut db = manager.acquire().await?;
    let areas = area::areas(&mut db).await?;
    Ok(Json(Reply::data(areas)))
}

pub async fn wards(area_id: Path<(i32,)>, manager: Data<PgSqlxManager>) -> Result<Json<Reply<Vec<Ward>>>, Error> {
    let area_id = area_id.into_inner().0;
    let mut db = manager.acquire().await?;
    let wards = area::wards_of_area(&mut db, area_id).await?;
    Ok(Json(Reply::data(wards)))
}

use crate::core::models::area::{Area, Ward};
use crate::core::ports::repository::{AreaCommon, Store};
use crate::error::Error;

pub async fn areas<S>(store: &mut S) -> Result<Vec<Area>, Error>
where
    S: Store,
{
    AreaCommon::query(store).await
}

pub async fn wards_of_area<S>(store: &mut S, area_id: i32) -> Result<Vec<Ward>, Error>
where
    S: Store,
{
    AreaCommon::wards(store, area_id).await
}

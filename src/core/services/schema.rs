use crate::core::models::schema::TableCheck;
use crate::core::ports::repository::{SchemaCommon, Store};
use crate::error::Error;

pub async fn ping<S>(store: &mut S) -> Result<(), Error>
where
    S: Store,
{
    SchemaCommon::ping(store).await
}

pub async fn check_tables<S>(store: &mut S) -> Result<TableCheck, Error>
where
    S: Store,
{
    let tables = SchemaCommon::tables(store).await?;
    Ok(TableCheck::new(tables))
}

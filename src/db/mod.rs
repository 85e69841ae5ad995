use sea_orm::{ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use crate::config::Config;
use crate::entities::outlet;
use crate::error::{AppError, AppResult};
use crate::matching::Outlet;

pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    Database::connect(&config.database_url)
        .await
        .map_err(|e| AppError::Internal(format!("Failed to connect to database: {}", e)))
}

/// Snapshot of active outlets in creation order.
/// Rows missing a coordinate are kept; matching skips them.
pub async fn fetch_active_outlets(db: &DatabaseConnection) -> AppResult<Vec<Outlet>> {
    let outlets = outlet::Entity::find()
        .filter(outlet::Column::IsActive.eq(true))
        .order_by_asc(outlet::Column::CreatedAt)
        .order_by_asc(outlet::Column::Id)
        .all(db)
        .await?;

    Ok(outlets.into_iter().map(Outlet::from).collect())
}

/// A single active outlet, or `None` if unknown or inactive
pub async fn fetch_active_outlet(db: &DatabaseConnection, id: Uuid) -> AppResult<Option<Outlet>> {
    let found = outlet::Entity::find_by_id(id)
        .filter(outlet::Column::IsActive.eq(true))
        .one(db)
        .await?;

    Ok(found.map(Outlet::from))
}

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};

use crate::db;
use crate::error::AppResult;
use crate::handlers::outlets::PointQuery;
use crate::matching::{self, ServiceabilityResult};
use crate::utils::geo::Coordinate;
use crate::AppState;

/// Check whether any outlet delivers to a point
pub async fn check_serviceability(
    State(state): State<AppState>,
    query: Result<Query<PointQuery>, QueryRejection>,
) -> AppResult<Json<ServiceabilityResult>> {
    let Query(query) = query?;
    let point = Coordinate::from_parts(query.lat, query.lng)?;
    let outlets = db::fetch_active_outlets(&state.db).await?;

    let result =
        matching::check_serviceability(&point, &outlets).with_delivery_fees(&state.config.tariff);

    tracing::debug!(
        lat = point.latitude,
        lng = point.longitude,
        serviceable = result.serviceable,
        candidates = result.candidates.len(),
        "Serviceability check"
    );

    Ok(Json(result))
}

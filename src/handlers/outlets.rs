use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::db;
use crate::error::{AppError, AppResult};
use crate::matching::{self, MatchedOutlet, ServiceArea};
use crate::utils::geo::Coordinate;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PointQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct NearbyQuery {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub radius_km: Option<f64>,
}

/// List outlets within a search radius, nearest first, with fee and ETA
pub async fn nearby_outlets(
    State(state): State<AppState>,
    query: Result<Query<NearbyQuery>, QueryRejection>,
) -> AppResult<Json<Vec<MatchedOutlet>>> {
    let Query(query) = query?;
    let origin = Coordinate::from_parts(query.lat, query.lng)?;
    let radius_km = query
        .radius_km
        .unwrap_or(state.config.default_search_radius_km);

    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(AppError::BadRequest(
            "radius_km must be a non-negative number".to_string(),
        ));
    }

    let outlets = db::fetch_active_outlets(&state.db).await?;
    let tariff = state.config.tariff;

    let matched: Vec<MatchedOutlet> = matching::filter_within_radius(&origin, &outlets, radius_km)
        .into_iter()
        .map(|m| m.with_delivery_estimates(&tariff))
        .collect();

    tracing::debug!(
        lat = origin.latitude,
        lng = origin.longitude,
        radius_km,
        scanned = outlets.len(),
        matched = matched.len(),
        "Nearby outlet search"
    );

    Ok(Json(matched))
}

/// Closest outlet to a point, regardless of its service radius
pub async fn nearest_outlet(
    State(state): State<AppState>,
    query: Result<Query<PointQuery>, QueryRejection>,
) -> AppResult<Json<MatchedOutlet>> {
    let Query(query) = query?;
    let origin = Coordinate::from_parts(query.lat, query.lng)?;
    let outlets = db::fetch_active_outlets(&state.db).await?;

    let nearest = matching::nearest(&origin, &outlets)
        .ok_or_else(|| AppError::NotFound("No outlet with a known location".to_string()))?;

    Ok(Json(nearest.with_delivery_estimates(&state.config.tariff)))
}

/// Delivery quote from one outlet to a point
pub async fn delivery_quote(
    State(state): State<AppState>,
    Path(outlet_id): Path<Uuid>,
    query: Result<Query<PointQuery>, QueryRejection>,
) -> AppResult<Json<MatchedOutlet>> {
    let Query(query) = query?;
    let destination = Coordinate::from_parts(query.lat, query.lng)?;

    let outlet = db::fetch_active_outlet(&state.db, outlet_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Outlet not found".to_string()))?;

    let quote = matching::quote(&destination, &outlet, &state.config.tariff).ok_or_else(|| {
        AppError::BadRequest(format!("Outlet {} has no location on record", outlet.name))
    })?;

    Ok(Json(quote))
}

/// Cities and states covered by active outlets
pub async fn service_areas(State(state): State<AppState>) -> AppResult<Json<ServiceArea>> {
    let outlets = db::fetch_active_outlets(&state.db).await?;
    Ok(Json(matching::aggregate(&outlets)))
}

use axum::{routing::get, Router};

use crate::handlers::{outlets, serviceability};
use crate::AppState;

pub fn create_router(state: AppState) -> Router {
    let outlet_routes = Router::new()
        .route("/nearby", get(outlets::nearby_outlets))
        .route("/nearest", get(outlets::nearest_outlet))
        .route("/{id}/quote", get(outlets::delivery_quote));

    let public_routes = Router::new()
        .route("/serviceability", get(serviceability::check_serviceability))
        .route("/service-areas", get(outlets::service_areas));

    Router::new()
        .nest("/api/outlets", outlet_routes)
        .nest("/api", public_routes)
        .with_state(state)
}

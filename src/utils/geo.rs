use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Mean Earth radius used by the haversine formula
pub const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeoError {
    #[error("Invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("Missing coordinate: both lat and lng are required")]
    MissingCoordinate,

    #[error("Invalid coordinate: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting anything `validate_coordinates` rejects
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self, GeoError> {
        if !validate_coordinates(latitude, longitude) {
            return Err(GeoError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Build a coordinate from optional request parameters
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Result<Self, GeoError> {
        match (latitude, longitude) {
            (Some(lat), Some(lng)) => Self::try_new(lat, lng),
            _ => Err(GeoError::MissingCoordinate),
        }
    }
}

/// Check that a latitude/longitude pair is finite and within range.
/// Out-of-range values are rejected, never clamped.
pub fn validate_coordinates(latitude: f64, longitude: f64) -> bool {
    latitude.is_finite()
        && longitude.is_finite()
        && (-90.0..=90.0).contains(&latitude)
        && (-180.0..=180.0).contains(&longitude)
}

/// Calculate distance between two coordinates using Haversine formula
/// Returns distance in kilometers
pub fn haversine_distance(a: &Coordinate, b: &Coordinate) -> f64 {
    let lat1_rad = a.latitude.to_radians();
    let lat2_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lng = (b.longitude - a.longitude).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Round a distance to 2 decimal places for reporting
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}

use serde::{Deserialize, Serialize};

use crate::entities::outlet;
use crate::utils::estimate::{estimate_fee, estimate_time, FeeTariff};
use crate::utils::geo::{round_km, Coordinate};

pub const DEFAULT_SERVICE_RADIUS_KM: f64 = 10.0;
pub const DEFAULT_PREPARATION_TIME_MIN: f64 = 20.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletAddress {
    pub city: String,
    pub state: String,
}

/// The slice of an outlet record the matching engine works with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: String,
    pub name: String,
    pub coordinates: Option<Coordinate>,
    #[serde(default = "default_service_radius")]
    pub service_radius_km: f64,
    #[serde(default = "default_preparation_time")]
    pub avg_preparation_time_min: f64,
    pub is_active: bool,
    pub address: Option<OutletAddress>,
}

fn default_service_radius() -> f64 {
    DEFAULT_SERVICE_RADIUS_KM
}

fn default_preparation_time() -> f64 {
    DEFAULT_PREPARATION_TIME_MIN
}

impl Outlet {
    /// An active outlet with default radius and preparation time
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        coordinates: Option<Coordinate>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinates,
            service_radius_km: DEFAULT_SERVICE_RADIUS_KM,
            avg_preparation_time_min: DEFAULT_PREPARATION_TIME_MIN,
            is_active: true,
            address: None,
        }
    }
}

impl From<outlet::Model> for Outlet {
    fn from(m: outlet::Model) -> Self {
        // Half a coordinate is as good as none
        let coordinates = match (m.latitude, m.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinate {
                latitude,
                longitude,
            }),
            _ => None,
        };

        let address = if m.city.is_some() || m.state.is_some() {
            Some(OutletAddress {
                city: m.city.unwrap_or_default(),
                state: m.state.unwrap_or_default(),
            })
        } else {
            None
        };

        Self {
            id: m.id.to_string(),
            name: m.name,
            coordinates,
            service_radius_km: m.service_radius_km,
            avg_preparation_time_min: m.avg_preparation_time_min,
            is_active: m.is_active,
            address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedOutlet {
    #[serde(flatten)]
    pub outlet: Outlet,
    pub distance_km: f64,
    pub is_serviceable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time_min: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_fee: Option<f64>,
    /// Unrounded distance, used for comparisons and estimates
    #[serde(skip)]
    pub(crate) exact_distance_km: f64,
}

impl MatchedOutlet {
    pub fn new(outlet: Outlet, exact_distance_km: f64) -> Self {
        let is_serviceable = exact_distance_km <= outlet.service_radius_km;
        Self {
            outlet,
            distance_km: round_km(exact_distance_km),
            is_serviceable,
            estimated_time_min: None,
            delivery_fee: None,
            exact_distance_km,
        }
    }

    pub fn exact_distance_km(&self) -> f64 {
        self.exact_distance_km
    }

    pub fn with_estimated_time(mut self) -> Self {
        self.estimated_time_min = Some(estimate_time(
            self.exact_distance_km,
            self.outlet.avg_preparation_time_min,
        ));
        self
    }

    pub fn with_delivery_fee(mut self, tariff: &FeeTariff) -> Self {
        self.delivery_fee = Some(estimate_fee(self.exact_distance_km, tariff));
        self
    }

    /// Attach both ETA and fee
    pub fn with_delivery_estimates(self, tariff: &FeeTariff) -> Self {
        self.with_estimated_time().with_delivery_fee(tariff)
    }
}

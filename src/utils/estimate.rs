//! Distance-derived delivery economics: fee tariff and ETA.

use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_DISTANCE_KM: f64 = 5.0;
pub const DEFAULT_BASE_FEE: f64 = 0.0;
pub const DEFAULT_PER_KM_FEE: f64 = 10.0;
pub const DEFAULT_MAX_FEE: f64 = 100.0;

/// Average urban travel speed assumed for couriers
pub const AVERAGE_SPEED_KMH: f64 = 20.0;

/// Fixed handover buffer added to every estimate
pub const DELIVERY_BUFFER_MIN: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeeTariff {
    /// Distance covered by the base fee
    pub base_distance_km: f64,
    pub base_fee: f64,
    pub per_km_fee: f64,
    pub max_fee: f64,
}

impl Default for FeeTariff {
    fn default() -> Self {
        Self {
            base_distance_km: DEFAULT_BASE_DISTANCE_KM,
            base_fee: DEFAULT_BASE_FEE,
            per_km_fee: DEFAULT_PER_KM_FEE,
            max_fee: DEFAULT_MAX_FEE,
        }
    }
}

/// Delivery fee for a distance, rounded to whole currency units and capped at `max_fee`
pub fn estimate_fee(distance_km: f64, tariff: &FeeTariff) -> f64 {
    if distance_km <= tariff.base_distance_km {
        return tariff.base_fee;
    }

    let extra_km = distance_km - tariff.base_distance_km;
    (tariff.base_fee + extra_km * tariff.per_km_fee)
        .round()
        .min(tariff.max_fee)
}

/// Total minutes until arrival: preparation + travel + buffer
pub fn estimate_time(distance_km: f64, preparation_min: f64) -> u32 {
    let travel_min = (distance_km / AVERAGE_SPEED_KMH) * 60.0;
    (preparation_min + travel_min + DELIVERY_BUFFER_MIN)
        .round()
        .max(0.0) as u32
}

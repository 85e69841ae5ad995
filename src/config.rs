use std::env;
use std::str::FromStr;

use crate::utils::estimate::{
    FeeTariff, DEFAULT_BASE_DISTANCE_KM, DEFAULT_BASE_FEE, DEFAULT_MAX_FEE, DEFAULT_PER_KM_FEE,
};

pub const DEFAULT_SEARCH_RADIUS_KM: f64 = 10.0;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub server_host: String,
    pub server_port: u16,
    /// Radius for nearby searches that don't pass one
    pub default_search_radius_km: f64,
    pub tariff: FeeTariff,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .expect("DATABASE_URL must be set"),
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: parse_var("SERVER_PORT", 3000),
            default_search_radius_km: parse_var("DEFAULT_SEARCH_RADIUS_KM", DEFAULT_SEARCH_RADIUS_KM),
            tariff: FeeTariff {
                base_distance_km: parse_var("DELIVERY_BASE_DISTANCE_KM", DEFAULT_BASE_DISTANCE_KM),
                base_fee: parse_var("DELIVERY_BASE_FEE", DEFAULT_BASE_FEE),
                per_km_fee: parse_var("DELIVERY_PER_KM_FEE", DEFAULT_PER_KM_FEE),
                max_fee: parse_var("DELIVERY_MAX_FEE", DEFAULT_MAX_FEE),
            },
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{} must be a number", key)),
        Err(_) => default,
    }
}

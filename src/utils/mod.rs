pub mod estimate;
pub mod geo;

pub mod outlets;
pub mod serviceability;

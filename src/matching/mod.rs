//! Geospatial serviceability matching over a snapshot of active outlets.
//!
//! Everything here is a pure function of its inputs. Callers validate
//! coordinates before calling in; nothing in this module re-validates.

pub mod outlet;
pub mod radius;
pub mod service_area;
pub mod serviceability;

pub use outlet::{MatchedOutlet, Outlet, OutletAddress};
pub use radius::{filter_within_radius, nearest};
pub use service_area::{aggregate, OutletSummary, ServiceArea};
pub use serviceability::{check_serviceability, quote, ServiceabilityResult};

use super::outlet::{MatchedOutlet, Outlet};
use crate::utils::geo::{haversine_distance, Coordinate};

/// Outlets within `radius_km` of `origin` (inclusive), nearest first.
///
/// Outlets without coordinates are skipped. The cut-off and the ordering use
/// the exact distance; only the reported `distance_km` is rounded. The sort is
/// stable, so equidistant outlets keep their order from `outlets`.
pub fn filter_within_radius(
    origin: &Coordinate,
    outlets: &[Outlet],
    radius_km: f64,
) -> Vec<MatchedOutlet> {
    let mut within: Vec<(f64, &Outlet)> = outlets
        .iter()
        .filter_map(|o| {
            let coords = o.coordinates.as_ref()?;
            Some((haversine_distance(origin, coords), o))
        })
        .filter(|(distance, _)| *distance <= radius_km)
        .collect();

    within.sort_by(|a, b| a.0.total_cmp(&b.0));

    within
        .into_iter()
        .map(|(distance, o)| MatchedOutlet::new(o.clone(), distance))
        .collect()
}

/// The closest outlet that has coordinates, regardless of any radius
pub fn nearest(origin: &Coordinate, outlets: &[Outlet]) -> Option<MatchedOutlet> {
    filter_within_radius(origin, outlets, f64::INFINITY)
        .into_iter()
        .next()
}

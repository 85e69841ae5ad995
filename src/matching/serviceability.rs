use serde::Serialize;

use super::outlet::{MatchedOutlet, Outlet};
use super::radius::filter_within_radius;
use crate::utils::estimate::FeeTariff;
use crate::utils::geo::{haversine_distance, Coordinate};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceabilityResult {
    pub serviceable: bool,
    pub primary: Option<MatchedOutlet>,
    pub candidates: Vec<MatchedOutlet>,
}

impl ServiceabilityResult {
    fn from_candidates(candidates: Vec<MatchedOutlet>) -> Self {
        Self {
            serviceable: !candidates.is_empty(),
            primary: candidates.first().cloned(),
            candidates,
        }
    }

    /// Attach a delivery fee to every candidate (and the primary)
    pub fn with_delivery_fees(self, tariff: &FeeTariff) -> Self {
        let candidates = self
            .candidates
            .into_iter()
            .map(|c| c.with_delivery_fee(tariff))
            .collect();
        Self::from_candidates(candidates)
    }
}

/// Which outlets can deliver to `point`, nearest first.
///
/// Every outlet is judged against its own `service_radius_km`; a close outlet
/// with a small radius can miss while a farther one with a wide radius matches.
pub fn check_serviceability(point: &Coordinate, outlets: &[Outlet]) -> ServiceabilityResult {
    let mut candidates: Vec<MatchedOutlet> = outlets
        .iter()
        .flat_map(|o| filter_within_radius(point, std::slice::from_ref(o), o.service_radius_km))
        .map(MatchedOutlet::with_estimated_time)
        .collect();

    candidates.sort_by(|a, b| a.exact_distance_km().total_cmp(&b.exact_distance_km()));

    ServiceabilityResult::from_candidates(candidates)
}

/// Distance, serviceability, ETA and fee for a single outlet.
/// `None` when the outlet has no coordinates.
pub fn quote(point: &Coordinate, outlet: &Outlet, tariff: &FeeTariff) -> Option<MatchedOutlet> {
    let coords = outlet.coordinates.as_ref()?;
    let distance = haversine_distance(point, coords);
    Some(MatchedOutlet::new(outlet.clone(), distance).with_delivery_estimates(tariff))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outlet_with_radius(id: &str, lat: f64, lng: f64, radius_km: f64) -> Outlet {
        let mut o = Outlet::new(
            id,
            id,
            Some(Coordinate {
                latitude: lat,
                longitude: lng,
            }),
        );
        o.service_radius_km = radius_km;
        o
    }

    fn point(lat: f64, lng: f64) -> Coordinate {
        Coordinate {
            latitude: lat,
            longitude: lng,
        }
    }

    #[test]
    fn test_each_outlet_uses_its_own_radius() {
        // A sits ~5.6 km from the point with a 10 km radius,
        // B sits ~2.2 km away but only serves 1 km.
        let outlets = vec![
            outlet_with_radius("A", 0.0, 0.0, 10.0),
            outlet_with_radius("B", 0.0, 0.07, 1.0),
        ];

        let result = check_serviceability(&point(0.0, 0.05), &outlets);
        assert!(result.serviceable);
        assert_eq!(result.candidates.len(), 1);
        assert_eq!(result.primary.as_ref().unwrap().outlet.id, "A");
    }

    #[test]
    fn test_candidates_sorted_and_enriched() {
        let mut slow = outlet_with_radius("slow", 0.0, 0.03, 10.0);
        slow.avg_preparation_time_min = 40.0;
        let outlets = vec![slow, outlet_with_radius("quick", 0.0, 0.01, 10.0)];

        let result = check_serviceability(&point(0.0, 0.0), &outlets);
        let ids: Vec<&str> = result
            .candidates
            .iter()
            .map(|c| c.outlet.id.as_str())
            .collect();
        assert_eq!(ids, vec!["quick", "slow"]);

        // ~1.11 km at 20 km/h is ~3.3 min of travel
        assert_eq!(result.candidates[0].estimated_time_min, Some(28));
        // ~3.34 km is ~10 min of travel
        assert_eq!(result.candidates[1].estimated_time_min, Some(55));
        assert!(result.candidates.iter().all(|c| c.is_serviceable));
        assert_eq!(result.primary.as_ref(), result.candidates.first());
    }

    #[test]
    fn test_equidistant_candidates_keep_snapshot_order() {
        let outlets = vec![
            outlet_with_radius("east", 0.0, 0.01, 5.0),
            outlet_with_radius("west", 0.0, -0.01, 5.0),
        ];

        let result = check_serviceability(&point(0.0, 0.0), &outlets);
        let ids: Vec<&str> = result
            .candidates
            .iter()
            .map(|c| c.outlet.id.as_str())
            .collect();
        assert_eq!(ids, vec!["east", "west"]);
        assert_eq!(result.primary.unwrap().outlet.id, "east");

        let reversed: Vec<Outlet> = outlets.into_iter().rev().collect();
        let result = check_serviceability(&point(0.0, 0.0), &reversed);
        assert_eq!(result.primary.unwrap().outlet.id, "west");
    }

    #[test]
    fn test_no_outlet_covers_point() {
        let outlets = vec![
            outlet_with_radius("A", 0.0, 1.0, 10.0),
            Outlet::new("ghost", "ghost", None),
        ];

        let result = check_serviceability(&point(0.0, 0.0), &outlets);
        assert!(!result.serviceable);
        assert!(result.primary.is_none());
        assert!(result.candidates.is_empty());
    }

    #[test]
    fn test_with_delivery_fees_keeps_primary_in_sync() {
        let outlets = vec![outlet_with_radius("A", 0.0, 0.09, 15.0)];
        let result =
            check_serviceability(&point(0.0, 0.0), &outlets).with_delivery_fees(&FeeTariff::default());

        // ~10.01 km -> 5.01 km over base -> 50
        assert_eq!(result.candidates[0].delivery_fee, Some(50.0));
        assert_eq!(result.primary.unwrap().delivery_fee, Some(50.0));
    }

    #[test]
    fn test_quote_outside_radius() {
        let outlet = outlet_with_radius("A", 0.0, 1.0, 10.0);
        let q = quote(&point(0.0, 0.0), &outlet, &FeeTariff::default()).unwrap();

        assert!(!q.is_serviceable);
        assert_eq!(q.distance_km, 111.19);
        assert_eq!(q.delivery_fee, Some(100.0));
        assert!(q.estimated_time_min.is_some());
    }

    #[test]
    fn test_quote_without_coordinates() {
        let outlet = Outlet::new("ghost", "ghost", None);
        assert!(quote(&point(0.0, 0.0), &outlet, &FeeTariff::default()).is_none());
    }
}

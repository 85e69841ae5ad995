use std::collections::BTreeSet;

use serde::Serialize;

use super::outlet::Outlet;
use crate::utils::geo::Coordinate;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutletSummary {
    pub id: String,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub service_radius_km: f64,
    pub coordinates: Option<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceArea {
    pub cities: BTreeSet<String>,
    pub states: BTreeSet<String>,
    pub outlets: Vec<OutletSummary>,
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Collect the distinct cities and states served by `outlets`.
/// Names are compared as exact strings, no case folding.
pub fn aggregate(outlets: &[Outlet]) -> ServiceArea {
    let mut cities = BTreeSet::new();
    let mut states = BTreeSet::new();

    let summaries = outlets
        .iter()
        .map(|o| {
            let city = o.address.as_ref().and_then(|a| non_empty(&a.city));
            let state = o.address.as_ref().and_then(|a| non_empty(&a.state));

            if let Some(c) = &city {
                cities.insert(c.clone());
            }
            if let Some(s) = &state {
                states.insert(s.clone());
            }

            OutletSummary {
                id: o.id.clone(),
                name: o.name.clone(),
                city,
                state,
                service_radius_km: o.service_radius_km,
                coordinates: o.coordinates,
            }
        })
        .collect();

    ServiceArea {
        cities,
        states,
        outlets: summaries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::outlet::OutletAddress;

    fn outlet_in(id: &str, city: &str, state: &str) -> Outlet {
        let mut o = Outlet::new(
            id,
            id,
            Some(Coordinate {
                latitude: -6.2,
                longitude: 106.8,
            }),
        );
        o.address = Some(OutletAddress {
            city: city.to_string(),
            state: state.to_string(),
        });
        o
    }

    #[test]
    fn test_dedup_and_sort() {
        let outlets = vec![
            outlet_in("1", "Surabaya", "East Java"),
            outlet_in("2", "Bandung", "West Java"),
            outlet_in("3", "Bandung", "West Java"),
            outlet_in("4", "bandung", "West Java"),
        ];

        let area = aggregate(&outlets);
        let cities: Vec<&str> = area.cities.iter().map(String::as_str).collect();
        let states: Vec<&str> = area.states.iter().map(String::as_str).collect();

        assert_eq!(cities, vec!["Bandung", "Surabaya", "bandung"]);
        assert_eq!(states, vec!["East Java", "West Java"]);
        assert_eq!(area.outlets.len(), 4);
    }

    #[test]
    fn test_outlets_without_address_or_coordinates() {
        let mut bare = Outlet::new("bare", "Bare", None);
        bare.service_radius_km = 3.5;
        let outlets = vec![bare, outlet_in("2", "", "Bali")];

        let area = aggregate(&outlets);
        assert!(area.cities.is_empty());
        assert_eq!(area.states.len(), 1);

        let summary = &area.outlets[0];
        assert_eq!(summary.city, None);
        assert_eq!(summary.coordinates, None);
        assert_eq!(summary.service_radius_km, 3.5);
    }

    #[test]
    fn test_empty_snapshot() {
        let area = aggregate(&[]);
        assert!(area.cities.is_empty());
        assert!(area.states.is_empty());
        assert!(area.outlets.is_empty());
    }
}

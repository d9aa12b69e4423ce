//! Stops and buses as ingested from base requests.

use std::collections::{HashMap, HashSet};

use geo::Point;

use crate::identifiers::*;
use crate::models::types::RouteKind;

/// A bus stop with its outgoing road distances.
///
/// Road distances are directed: the entry for `A -> B` says nothing about
/// `B -> A`.
#[derive(Clone, Debug, PartialEq)]
pub struct Stop {
    pub id: StopIdentifier,
    /// x = longitude, y = latitude, in degrees
    pub location: Point,
    pub road_distances: HashMap<StopIdentifier, i32>,
}

impl Stop {
    pub fn new(
        id: impl Into<StopIdentifier>,
        latitude: f64,
        longitude: f64,
        road_distances: HashMap<StopIdentifier, i32>,
    ) -> Self {
        Self {
            id: id.into(),
            location: Point::new(longitude, latitude),
            road_distances,
        }
    }

    pub fn latitude(&self) -> f64 {
        self.location.y()
    }

    pub fn longitude(&self) -> f64 {
        self.location.x()
    }

    /// Road distance from this stop to `other`, if one was declared here
    pub fn distance_to(&self, other: &str) -> Option<i32> {
        self.road_distances.get(other).copied()
    }
}

/// A bus line and the stop sequence it actually drives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bus {
    pub id: BusIdentifier,
    pub kind: RouteKind,
    route: Vec<StopIdentifier>,
}

impl Bus {
    /// Build a bus from the stops as listed in its definition.
    ///
    /// A linear line is stored there and back: `[A, B, C]` becomes
    /// `[A, B, C, B, A]`.
    pub fn new(id: impl Into<BusIdentifier>, stops: Vec<StopIdentifier>, kind: RouteKind) -> Self {
        let mut route = stops;
        if kind == RouteKind::Linear && route.len() > 1 {
            route.reserve(route.len() - 1);
            for i in (0..route.len() - 1).rev() {
                let stop = route[i].clone();
                route.push(stop);
            }
        }

        Self {
            id: id.into(),
            kind,
            route,
        }
    }

    /// Driven stop sequence
    pub fn route(&self) -> &[StopIdentifier] {
        &self.route
    }

    pub fn stop_count(&self) -> usize {
        self.route.len()
    }

    pub fn unique_stops(&self) -> HashSet<&StopIdentifier> {
        self.route.iter().collect()
    }

    /// Consecutive `(from, to)` pairs along the route
    pub fn segments(&self) -> impl Iterator<Item = (&StopIdentifier, &StopIdentifier)> + '_ {
        self.route.windows(2).map(|pair| (&pair[0], &pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<StopIdentifier> {
        names.iter().copied().map(StopIdentifier::new).collect()
    }

    #[test]
    fn test_linear_route_is_doubled() {
        let bus = Bus::new("750", ids(&["A", "B", "C"]), RouteKind::Linear);
        assert_eq!(bus.route(), ids(&["A", "B", "C", "B", "A"]).as_slice());
        assert_eq!(bus.stop_count(), 5);
        assert_eq!(bus.unique_stops().len(), 3);
    }

    #[test]
    fn test_roundtrip_route_is_kept() {
        let bus = Bus::new("256", ids(&["A", "B", "C", "A"]), RouteKind::Roundtrip);
        assert_eq!(bus.route(), ids(&["A", "B", "C", "A"]).as_slice());
        assert_eq!(bus.stop_count(), 4);
        assert_eq!(bus.unique_stops().len(), 3);
    }

    #[test]
    fn test_degenerate_linear_routes() {
        let single = Bus::new("1", ids(&["A"]), RouteKind::Linear);
        assert_eq!(single.route(), ids(&["A"]).as_slice());

        let empty = Bus::new("2", Vec::new(), RouteKind::Linear);
        assert_eq!(empty.stop_count(), 0);
        assert_eq!(empty.segments().count(), 0);
    }

    #[test]
    fn test_segments() {
        let bus = Bus::new("1", ids(&["Tula", "Moscow"]), RouteKind::Linear);
        let pairs: Vec<_> = bus
            .segments()
            .map(|(from, to)| (from.as_str(), to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("Tula", "Moscow"), ("Moscow", "Tula")]);
    }

    #[test]
    fn test_directed_distances() {
        let stop = Stop::new(
            "Tula",
            54.2,
            37.6,
            HashMap::from([(StopIdentifier::new("Moscow"), 100)]),
        );
        assert_eq!(stop.distance_to("Moscow"), Some(100));
        assert_eq!(stop.distance_to("Tula"), None);
        assert_eq!(stop.latitude(), 54.2);
        assert_eq!(stop.longitude(), 37.6);
    }
}

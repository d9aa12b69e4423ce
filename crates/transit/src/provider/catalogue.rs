//! In-memory transport catalogue.
//!
//! Stores every stop and bus of a run together with a reverse index from
//! stop to the buses serving it. The index is maintained on ingestion, so
//! queries never rebuild it.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use crate::identifiers::*;
use crate::models::{entities::*, traits::*, types::*};
use crate::spatial::queries::{curvature, haversine_distance};

/// In-memory transit store with stop -> bus reverse index
#[derive(Clone, Debug, Default)]
pub struct TransportCatalogue {
    // Core data
    stops: HashMap<StopIdentifier, Stop>,
    buses: HashMap<BusIdentifier, Bus>,

    // Reverse index
    stop_buses: HashMap<StopIdentifier, BTreeSet<BusIdentifier>>,
}

impl TransportCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalogue from already parsed stops and buses
    pub fn from_data(stops: Vec<Stop>, buses: Vec<Bus>) -> Self {
        let mut catalogue = Self::new();
        for stop in stops {
            catalogue.add_stop(stop);
        }
        for bus in buses {
            catalogue.add_bus(bus);
        }
        catalogue
    }

    /// Insert or replace a stop.
    ///
    /// A defined stop always has a reverse-index entry, possibly empty, so it
    /// answers "no buses" rather than "not found".
    pub fn add_stop(&mut self, stop: Stop) {
        self.stop_buses.entry(stop.id.clone()).or_default();
        self.stops.insert(stop.id.clone(), stop);
    }

    /// Insert or replace a bus and register it with every stop on its route.
    ///
    /// Stops do not have to exist yet.
    pub fn add_bus(&mut self, bus: Bus) {
        if let Some(previous) = self.buses.remove(&bus.id) {
            for stop in previous.route() {
                if let Some(served_by) = self.stop_buses.get_mut(stop) {
                    served_by.remove(&previous.id);
                }
            }
        }

        for stop in bus.route() {
            self.stop_buses
                .entry(stop.clone())
                .or_default()
                .insert(bus.id.clone());
        }
        self.buses.insert(bus.id.clone(), bus);
    }

    /// Road distance between two consecutive stops.
    ///
    /// Uses `from -> to` if declared, otherwise falls back to `to -> from`.
    /// Stops that were never defined have no declared distances.
    pub fn road_distance(&self, from: &str, to: &str) -> Option<i32> {
        self.stops
            .get(from)
            .and_then(|stop| stop.distance_to(to))
            .or_else(|| self.stops.get(to).and_then(|stop| stop.distance_to(from)))
    }

    /// Great-circle distance between two stops, if both are defined
    pub fn geo_distance(&self, from: &str, to: &str) -> Option<f64> {
        let from = self.stops.get(from)?;
        let to = self.stops.get(to)?;
        Some(haversine_distance(from.location, to.location))
    }
}

impl TransitProvider for TransportCatalogue {
    fn get_stop(&self, name: &str) -> Option<&Stop> {
        self.stops.get(name)
    }

    fn get_bus(&self, name: &str) -> Option<&Bus> {
        self.buses.get(name)
    }

    fn all_stops(&self) -> Vec<&Stop> {
        let mut stops: Vec<_> = self.stops.values().collect();
        stops.sort_by(|a, b| a.id.cmp(&b.id));
        stops
    }

    fn all_buses(&self) -> Vec<&Bus> {
        let mut buses: Vec<_> = self.buses.values().collect();
        buses.sort_by(|a, b| a.id.cmp(&b.id));
        buses
    }

    fn bus_stat(&self, name: &str) -> Result<BusStat> {
        let bus = self
            .get_bus(name)
            .ok_or_else(|| TransitError::BusNotFound(BusIdentifier::new(name)))?;

        let mut route_length: i64 = 0;
        let mut geo_length = 0.0;
        for (from, to) in bus.segments() {
            match self.road_distance(from.as_str(), to.as_str()) {
                Some(meters) => route_length += i64::from(meters),
                None => debug!(bus = %bus.id, %from, %to, "no road distance declared, counting 0"),
            }

            match self.geo_distance(from.as_str(), to.as_str()) {
                Some(meters) => geo_length += meters,
                None => warn!(bus = %bus.id, %from, %to, "route segment references an undefined stop"),
            }
        }

        if bus.stop_count() > 1 && geo_length == 0.0 {
            warn!(bus = %bus.id, "route has zero great-circle length, curvature reported as 1.0");
        }

        Ok(BusStat {
            bus_id: bus.id.clone(),
            stop_count: bus.stop_count(),
            unique_stop_count: bus.unique_stops().len(),
            route_length,
            curvature: curvature(route_length, geo_length),
        })
    }

    fn stop_stat(&self, name: &str) -> Result<StopStat> {
        let stop = self
            .get_stop(name)
            .ok_or_else(|| TransitError::StopNotFound(StopIdentifier::new(name)))?;

        let buses = self
            .stop_buses
            .get(name)
            .map(|served_by| served_by.iter().cloned().collect())
            .unwrap_or_default();

        Ok(StopStat {
            stop_id: stop.id.clone(),
            buses,
        })
    }
}

//! Read-only query interface over ingested transit data.
//!
//! The query pass only needs these lookups, so it is written against the
//! trait rather than a concrete store.

use crate::models::entities::{Bus, Stop};
use crate::models::types::*;

/// Provider of all transit data with lookup and statistics methods
pub trait TransitProvider: Send + Sync {
    // ---- Lookups ----
    fn get_stop(&self, name: &str) -> Option<&Stop>;
    fn get_bus(&self, name: &str) -> Option<&Bus>;

    // ---- Collections ----
    fn all_stops(&self) -> Vec<&Stop>;
    fn all_buses(&self) -> Vec<&Bus>;

    // ---- Statistics ----

    /// Route statistics for a bus, or [`TransitError::BusNotFound`]
    fn bus_stat(&self, name: &str) -> Result<BusStat>;

    /// Buses serving a stop, or [`TransitError::StopNotFound`] if the stop
    /// was never defined
    fn stop_stat(&self, name: &str) -> Result<StopStat>;
}

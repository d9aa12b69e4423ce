//! Core data types and enums for transit data.

use std::fmt;

use transit_document::{DocumentError, Value};

use crate::identifiers::*;

// ============================================================================
// Enums
// ============================================================================

/// How a bus line's stop list is turned into the driven route
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RouteKind {
    /// The listed stops are driven as-is (the list normally ends where it
    /// started)
    Roundtrip,
    /// The listed stops are driven there and back, turning at the last one
    Linear,
}

impl RouteKind {
    pub fn from_roundtrip_flag(is_roundtrip: bool) -> Self {
        if is_roundtrip {
            Self::Roundtrip
        } else {
            Self::Linear
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Route statistics of a single bus
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BusStat {
    pub bus_id: BusIdentifier,
    /// Stops on the driven route, counting repeats
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Sum of road distances in meters
    pub route_length: i64,
    /// Road length divided by great-circle length
    pub curvature: f64,
}

impl fmt::Display for BusStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bus {}: {} stops on route, {} unique stops, {} route length, {} curvature",
            self.bus_id,
            self.stop_count,
            self.unique_stop_count,
            self.route_length,
            Value::Float(self.curvature),
        )
    }
}

/// Buses serving a single stop, sorted by name
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StopStat {
    pub stop_id: StopIdentifier,
    pub buses: Vec<BusIdentifier>,
}

impl fmt::Display for StopStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Stop {}: ", self.stop_id)?;
        if self.buses.is_empty() {
            return f.write_str("no buses");
        }
        f.write_str("buses")?;
        for bus in &self.buses {
            write!(f, " {}", bus)?;
        }
        Ok(())
    }
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Bus not found: {0}")]
    BusNotFound(BusIdentifier),

    #[error("Stop not found: {0}")]
    StopNotFound(StopIdentifier),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Value of {0} does not fit in a 32-bit integer")]
    Overflow(&'static str),

    #[error("Malformed document: {0}")]
    Document(#[from] DocumentError),
}

impl TransitError {
    /// Whether this error only means "the queried entity is unknown"
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::BusNotFound(_) | Self::StopNotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, TransitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_kind_from_flag() {
        assert_eq!(RouteKind::from_roundtrip_flag(true), RouteKind::Roundtrip);
        assert_eq!(RouteKind::from_roundtrip_flag(false), RouteKind::Linear);
    }

    #[test]
    fn test_bus_stat_display() {
        let stat = BusStat {
            bus_id: BusIdentifier::new("256"),
            stop_count: 6,
            unique_stop_count: 5,
            route_length: 5950,
            curvature: 1.36123851,
        };
        assert_eq!(
            stat.to_string(),
            "Bus 256: 6 stops on route, 5 unique stops, 5950 route length, 1.361239 curvature"
        );
    }

    #[test]
    fn test_stop_stat_display() {
        let served = StopStat {
            stop_id: StopIdentifier::new("Biryulyovo Zapadnoye"),
            buses: vec![BusIdentifier::new("256"), BusIdentifier::new("828")],
        };
        assert_eq!(served.to_string(), "Stop Biryulyovo Zapadnoye: buses 256 828");

        let idle = StopStat {
            stop_id: StopIdentifier::new("Prazhskaya"),
            buses: vec![],
        };
        assert_eq!(idle.to_string(), "Stop Prazhskaya: no buses");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_stats_serialize() {
        let stat = StopStat {
            stop_id: StopIdentifier::new("A"),
            buses: vec![BusIdentifier::new("1")],
        };
        assert_eq!(
            serde_json::to_string(&stat).unwrap(),
            r#"{"stop_id":"A","buses":["1"]}"#
        );
    }

    #[test]
    fn test_not_found_classification() {
        assert!(TransitError::BusNotFound("1".into()).is_not_found());
        assert!(TransitError::StopNotFound("A".into()).is_not_found());
        assert!(!TransitError::InvalidRequest("bad".into()).is_not_found());
    }
}

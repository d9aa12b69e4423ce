//! Great-circle geometry for route statistics.

pub mod queries;

pub use queries::{curvature, haversine_distance, EARTH_RADIUS_M};

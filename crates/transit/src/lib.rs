//! # transit-catalogue
//!
//! In-memory bus network with route and stop statistics.
//!
//! ## Features
//!
//! - **Directed road distances**: each stop declares distances to its
//!   neighbours; a missing direction falls back to the reverse one
//! - **Route statistics**: stop counts, road length and curvature against the
//!   great-circle length
//! - **Stop statistics**: which buses serve a stop, sorted by name
//! - **Document protocol**: batch requests in, responses out, through
//!   [`transit_document`]
//!
//! ## Example
//!
//! ```
//! use transit_catalogue::prelude::*;
//! use std::collections::HashMap;
//!
//! // Build a catalogue directly
//! let tula = Stop::new(
//!     "Tula",
//!     54.2,
//!     37.6,
//!     HashMap::from([(StopIdentifier::new("Moscow"), 180_000)]),
//! );
//! let moscow = Stop::new("Moscow", 55.7, 37.6, HashMap::new());
//! let bus = Bus::new(
//!     "1",
//!     vec![StopIdentifier::new("Tula"), StopIdentifier::new("Moscow")],
//!     RouteKind::Linear,
//! );
//!
//! let catalogue = TransportCatalogue::from_data(vec![tula, moscow], vec![bus]);
//!
//! let stat = catalogue.bus_stat("1").unwrap();
//! assert_eq!(stat.stop_count, 3); // Tula, Moscow, Tula
//! assert_eq!(stat.route_length, 360_000); // the way back reuses Tula -> Moscow
//!
//! // Or run a whole request document
//! let output = process_document(r#"{
//!     "base_requests": [
//!         {"type": "Stop", "name": "Tula", "latitude": 54.2, "longitude": 37.6}
//!     ],
//!     "stat_requests": [
//!         {"id": 1, "type": "Stop", "name": "Tula"},
//!         {"id": 2, "type": "Bus", "name": "1"}
//!     ]
//! }"#).unwrap();
//! assert_eq!(
//!     output,
//!     r#"[{"buses":[], "request_id":1}, {"error_message":"not found", "request_id":2}]"#
//! );
//! ```

pub mod identifiers;
pub mod models;
pub mod protocol;
pub mod provider;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::identifiers::*;
    pub use crate::models::{entities::*, traits::*, types::*};
    pub use crate::protocol::{
        answer_all, build_catalogue, process_document, BaseRequest, EntityKind, RequestBatch, Response, ResponseBody,
        StatRequest,
    };
    pub use crate::provider::TransportCatalogue;
    pub use crate::spatial::{curvature, haversine_distance};
}

// Module declarations
pub use prelude::*;

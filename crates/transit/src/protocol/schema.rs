//! Field names and tags of the request/response documents.

// ---- Top level ----
pub const BASE_REQUESTS: &str = "base_requests";
pub const STAT_REQUESTS: &str = "stat_requests";

// ---- Request fields ----
pub const TYPE: &str = "type";
pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const STOPS: &str = "stops";
pub const IS_ROUNDTRIP: &str = "is_roundtrip";
pub const LATITUDE: &str = "latitude";
pub const LONGITUDE: &str = "longitude";
pub const ROAD_DISTANCES: &str = "road_distances";

// ---- Type tags ----
pub const TYPE_BUS: &str = "Bus";
pub const TYPE_STOP: &str = "Stop";

// ---- Response fields ----
pub const REQUEST_ID: &str = "request_id";
pub const ERROR_MESSAGE: &str = "error_message";
pub const ROUTE_LENGTH: &str = "route_length";
pub const CURVATURE: &str = "curvature";
pub const STOP_COUNT: &str = "stop_count";
pub const UNIQUE_STOP_COUNT: &str = "unique_stop_count";
pub const BUSES: &str = "buses";

pub const NOT_FOUND: &str = "not found";

//! # transit-document
//!
//! The small self-describing document format used to feed requests to the
//! transit catalogue and to return its answers: arrays, key-sorted objects,
//! 32-bit integers, floats, booleans and strings.
//!
//! ## Example
//!
//! ```
//! use transit_document::{parse, serialize, Value};
//!
//! let doc = parse(r#"{"name": "Tula", "latitude": 54.2, "buses": ["1"]}"#).unwrap();
//! assert_eq!(doc.get("name").unwrap().as_str().unwrap(), "Tula");
//! assert_eq!(doc.get("latitude").unwrap().as_f64().unwrap(), 54.2);
//!
//! // Keys come back sorted
//! assert_eq!(
//!     serialize(&doc),
//!     r#"{"buses":["1"], "latitude":54.2, "name":"Tula"}"#
//! );
//!
//! let mut response = Value::empty_object();
//! response.insert("request_id", 7).unwrap();
//! assert_eq!(response.to_string(), r#"{"request_id":7}"#);
//! ```

pub mod error;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{DocumentError, Result};
pub use parser::{parse, MAX_DEPTH};
pub use serializer::{serialize, FLOAT_PRECISION};
pub use value::{Array, Object, Value, ValueKind};

//! Answers to stat requests and their document form.

use std::fmt;

use transit_document::{Object, Value};

use crate::models::types::*;
use crate::protocol::request::EntityKind;
use crate::protocol::schema;

#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Bus(BusStat),
    Stop(StopStat),
    NotFound { kind: EntityKind, name: String },
}

/// The answer to one stat request
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    pub request_id: i32,
    pub body: ResponseBody,
}

impl Response {
    /// Object form of the answer, with `request_id` injected.
    ///
    /// Counts and lengths must fit the document's 32-bit integers.
    pub fn to_value(&self) -> Result<Value> {
        let mut fields = Object::new();
        match &self.body {
            ResponseBody::Bus(stat) => {
                fields.insert(schema::ROUTE_LENGTH.into(), int(stat.route_length, schema::ROUTE_LENGTH)?);
                fields.insert(schema::CURVATURE.into(), Value::Float(stat.curvature));
                fields.insert(schema::STOP_COUNT.into(), int(stat.stop_count, schema::STOP_COUNT)?);
                fields.insert(
                    schema::UNIQUE_STOP_COUNT.into(),
                    int(stat.unique_stop_count, schema::UNIQUE_STOP_COUNT)?,
                );
            }
            ResponseBody::Stop(stat) => {
                let buses = stat.buses.iter().map(|bus| bus.as_str()).collect::<Value>();
                fields.insert(schema::BUSES.into(), buses);
            }
            ResponseBody::NotFound { .. } => {
                fields.insert(schema::ERROR_MESSAGE.into(), schema::NOT_FOUND.into());
            }
        }
        fields.insert(schema::REQUEST_ID.into(), Value::Integer(self.request_id));
        Ok(Value::Object(fields))
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.body {
            ResponseBody::Bus(stat) => write!(f, "{}", stat),
            ResponseBody::Stop(stat) => write!(f, "{}", stat),
            ResponseBody::NotFound { kind, name } => write!(f, "{} {}: {}", kind, name, schema::NOT_FOUND),
        }
    }
}

/// Array of response objects, in request order
pub fn responses_to_value(responses: &[Response]) -> Result<Value> {
    responses
        .iter()
        .map(Response::to_value)
        .collect::<Result<Vec<_>>>()
        .map(Value::Array)
}

fn int<T: TryInto<i32>>(n: T, field: &'static str) -> Result<Value> {
    n.try_into()
        .map(Value::Integer)
        .map_err(|_| TransitError::Overflow(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::*;

    fn bus_stat(route_length: i64) -> BusStat {
        BusStat {
            bus_id: BusIdentifier::new("256"),
            stop_count: 6,
            unique_stop_count: 5,
            route_length,
            curvature: 1.36123851,
        }
    }

    #[test]
    fn test_bus_response() {
        let response = Response {
            request_id: 1965312327,
            body: ResponseBody::Bus(bus_stat(5950)),
        };
        assert_eq!(
            response.to_value().unwrap().to_string(),
            r#"{"curvature":1.361239, "request_id":1965312327, "route_length":5950, "stop_count":6, "unique_stop_count":5}"#
        );
    }

    #[test]
    fn test_stop_response() {
        let response = Response {
            request_id: 7,
            body: ResponseBody::Stop(StopStat {
                stop_id: StopIdentifier::new("A"),
                buses: vec![BusIdentifier::new("256"), BusIdentifier::new("828")],
            }),
        };
        assert_eq!(
            response.to_value().unwrap().to_string(),
            r#"{"buses":["256", "828"], "request_id":7}"#
        );
    }

    #[test]
    fn test_not_found_response() {
        let response = Response {
            request_id: 3,
            body: ResponseBody::NotFound {
                kind: EntityKind::Bus,
                name: "751".into(),
            },
        };
        assert_eq!(
            response.to_value().unwrap().to_string(),
            r#"{"error_message":"not found", "request_id":3}"#
        );
        assert_eq!(response.to_string(), "Bus 751: not found");
    }

    #[test]
    fn test_route_length_overflow() {
        let response = Response {
            request_id: 1,
            body: ResponseBody::Bus(bus_stat(i64::from(i32::MAX) + 1)),
        };
        assert!(matches!(
            response.to_value(),
            Err(TransitError::Overflow(schema::ROUTE_LENGTH))
        ));
    }

    #[test]
    fn test_responses_array() {
        let responses = vec![
            Response {
                request_id: 1,
                body: ResponseBody::NotFound {
                    kind: EntityKind::Stop,
                    name: "X".into(),
                },
            },
            Response {
                request_id: 2,
                body: ResponseBody::Stop(StopStat {
                    stop_id: StopIdentifier::new("Y"),
                    buses: vec![],
                }),
            },
        ];
        assert_eq!(
            responses_to_value(&responses).unwrap().to_string(),
            r#"[{"error_message":"not found", "request_id":1}, {"buses":[], "request_id":2}]"#
        );
    }
}

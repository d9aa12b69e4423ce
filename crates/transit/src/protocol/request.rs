//! Typed requests decoded from an input document.

use std::collections::HashMap;
use std::fmt;

use transit_document::{Object, Value};

use crate::identifiers::*;
use crate::models::{entities::*, types::*};
use crate::protocol::schema;

/// Which kind of entity a request is about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Bus,
    Stop,
}

impl EntityKind {
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            schema::TYPE_BUS => Ok(Self::Bus),
            schema::TYPE_STOP => Ok(Self::Stop),
            other => Err(TransitError::InvalidRequest(format!(
                "unknown request type {:?}",
                other
            ))),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Bus => schema::TYPE_BUS,
            Self::Stop => schema::TYPE_STOP,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// An ingestion instruction
#[derive(Clone, Debug, PartialEq)]
pub enum BaseRequest {
    Bus(Bus),
    Stop(Stop),
}

/// A read-only query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatRequest {
    pub id: i32,
    pub kind: EntityKind,
    pub name: String,
}

/// Every request of one input document, split by pass
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestBatch {
    pub base: Vec<BaseRequest>,
    pub stat: Vec<StatRequest>,
}

impl RequestBatch {
    /// Parse and decode a whole input document
    pub fn parse(input: &str) -> Result<Self> {
        let document = transit_document::parse(input)?;
        Self::from_value(&document)
    }

    /// Decode an already parsed document.
    ///
    /// A missing request list is treated as empty.
    pub fn from_value(document: &Value) -> Result<Self> {
        let root = Fields::of(document, "document")?;

        let base = root
            .optional_array(schema::BASE_REQUESTS)?
            .iter()
            .map(BaseRequest::from_value)
            .collect::<Result<Vec<_>>>()?;

        let stat = root
            .optional_array(schema::STAT_REQUESTS)?
            .iter()
            .map(StatRequest::from_value)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { base, stat })
    }
}

impl BaseRequest {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "base request")?;
        match EntityKind::from_tag(fields.str(schema::TYPE)?)? {
            EntityKind::Bus => parse_bus(&fields).map(Self::Bus),
            EntityKind::Stop => parse_stop(&fields).map(Self::Stop),
        }
    }
}

impl StatRequest {
    pub fn from_value(value: &Value) -> Result<Self> {
        let fields = Fields::of(value, "stat request")?;
        Ok(Self {
            id: fields.int(schema::ID)?,
            kind: EntityKind::from_tag(fields.str(schema::TYPE)?)?,
            name: fields.str(schema::NAME)?.to_owned(),
        })
    }
}

fn parse_bus(fields: &Fields<'_>) -> Result<Bus> {
    let stops = fields
        .array(schema::STOPS)?
        .iter()
        .map(|stop| {
            stop.as_str()
                .map(StopIdentifier::new)
                .map_err(|e| fields.invalid(schema::STOPS, e))
        })
        .collect::<Result<Vec<_>>>()?;

    let kind = RouteKind::from_roundtrip_flag(fields.bool(schema::IS_ROUNDTRIP)?);
    Ok(Bus::new(fields.str(schema::NAME)?, stops, kind))
}

fn parse_stop(fields: &Fields<'_>) -> Result<Stop> {
    let mut road_distances = HashMap::new();
    if let Some(distances) = fields.optional(schema::ROAD_DISTANCES) {
        let distances = distances
            .as_object()
            .map_err(|e| fields.invalid(schema::ROAD_DISTANCES, e))?;
        for (neighbour, meters) in distances {
            let meters = meters
                .as_int()
                .map_err(|e| fields.invalid(schema::ROAD_DISTANCES, e))?;
            road_distances.insert(StopIdentifier::new(neighbour), meters);
        }
    }

    Ok(Stop::new(
        fields.str(schema::NAME)?,
        fields.f64(schema::LATITUDE)?,
        fields.f64(schema::LONGITUDE)?,
        road_distances,
    ))
}

// ============================================================================
// Field access
// ============================================================================

/// Object fields with request-level error reporting
struct Fields<'a> {
    object: &'a Object,
    context: &'static str,
}

impl<'a> Fields<'a> {
    fn of(value: &'a Value, context: &'static str) -> Result<Self> {
        let object = value.as_object().map_err(|e| {
            TransitError::InvalidRequest(format!("{context} must be an object: {e}"))
        })?;
        Ok(Self { object, context })
    }

    fn invalid(&self, key: &str, error: impl fmt::Display) -> TransitError {
        TransitError::InvalidRequest(format!("{}: field `{}`: {}", self.context, key, error))
    }

    fn optional(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key)
    }

    fn required(&self, key: &str) -> Result<&'a Value> {
        self.optional(key)
            .ok_or_else(|| self.invalid(key, "missing"))
    }

    fn str(&self, key: &str) -> Result<&'a str> {
        self.required(key)?.as_str().map_err(|e| self.invalid(key, e))
    }

    fn int(&self, key: &str) -> Result<i32> {
        self.required(key)?.as_int().map_err(|e| self.invalid(key, e))
    }

    fn f64(&self, key: &str) -> Result<f64> {
        self.required(key)?.as_f64().map_err(|e| self.invalid(key, e))
    }

    fn bool(&self, key: &str) -> Result<bool> {
        self.required(key)?.as_bool().map_err(|e| self.invalid(key, e))
    }

    fn array(&self, key: &str) -> Result<&'a [Value]> {
        self.required(key)?.as_array().map_err(|e| self.invalid(key, e))
    }

    fn optional_array(&self, key: &str) -> Result<&'a [Value]> {
        match self.optional(key) {
            Some(value) => value.as_array().map_err(|e| self.invalid(key, e)),
            None => Ok(&[]),
        }
    }
}

//! Value conversion from result-row JSON into Rust types.
//!
//! This module contains all [`FromValue`] implementations and the spatial
//! point types. Over the HTTP API temporal values arrive as ISO-8601 strings
//! and points as `{"type": "Point", "coordinates": [...], "crs": {...}}`.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::ConnectorError;
use crate::traits::FromValue;

/// Returns a human-readable name for a JSON value variant.
///
/// Used in error messages to describe the actual type received when a
/// conversion fails.
pub fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Integer",
        Value::String(_) => "String",
        Value::Array(_) => "List",
        Value::Object(_) => "Map",
    }
}

// ---------------------------------------------------------------------------
// Numeric macros
// ---------------------------------------------------------------------------

macro_rules! impl_from_val_int {
    ($t:ty) => {
        impl FromValue for $t {
            fn from_value(value: Value) -> Result<Self, ConnectorError> {
                let n = match &value {
                    Value::Number(n) => n.as_i64().map(i128::from).or_else(|| n.as_u64().map(i128::from)),
                    _ => None,
                };
                match n {
                    Some(n) => <$t>::try_from(n).map_err(|_| {
                        ConnectorError::Mapping(format!("{n} out of range for {}", stringify!($t)))
                    }),
                    None => Err(ConnectorError::type_mismatch(
                        "Integer",
                        type_name(&value),
                        stringify!($t),
                    )),
                }
            }
        }
    };
}

macro_rules! impl_from_val_float {
    ($t:ty) => {
        impl FromValue for $t {
            fn from_value(value: Value) -> Result<Self, ConnectorError> {
                match value.as_f64() {
                    Some(f) => Ok(f as $t),
                    None => Err(ConnectorError::type_mismatch(
                        "Float",
                        type_name(&value),
                        stringify!($t),
                    )),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Primitives
// ---------------------------------------------------------------------------

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        Ok(value)
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ConnectorError::type_mismatch("String", type_name(&other), "String")),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ConnectorError::type_mismatch("Boolean", type_name(&other), "bool")),
        }
    }
}

// ---------------------------------------------------------------------------
// Numeric types (range-checked integers, floats accept integers too)
// ---------------------------------------------------------------------------

impl_from_val_int!(i64);
impl_from_val_int!(i32);
impl_from_val_int!(u64);
impl_from_val_int!(u32);
impl_from_val_int!(i16);
impl_from_val_int!(u16);
impl_from_val_int!(i8);
impl_from_val_int!(u8);
impl_from_val_float!(f64);
impl_from_val_float!(f32);

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::Array(xs) => xs.into_iter().map(T::from_value).collect(),
            other => Err(ConnectorError::type_mismatch("List", type_name(&other), "Vec<T>")),
        }
    }
}

/// `Option<T>` is the "loaded vs not loaded" primitive.
/// - Missing row column is handled in the `FromRow` derive (returns `None`).
/// - Present but `null` maps to `None`.
/// - Otherwise maps to `Some(T)`.
impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::Null => Ok(None),
            other => Ok(Some(T::from_value(other)?)),
        }
    }
}

/// Converts a JSON object (a node's properties, a map projection) into
/// `HashMap<String, V>`.
impl<V: FromValue> FromValue for HashMap<String, V> {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::Object(m) => {
                let mut out = HashMap::with_capacity(m.len());
                for (k, v) in m {
                    let converted = V::from_value(v).map_err(|e| e.with_context(format!("key '{k}'")))?;
                    out.insert(k, converted);
                }
                Ok(out)
            }
            other => Err(ConnectorError::type_mismatch("Map", type_name(&other), "HashMap<String, V>")),
        }
    }
}

// ---------------------------------------------------------------------------
// Tuples, for list unpacking such as `RETURN [a.name, b.name] AS pair`
// ---------------------------------------------------------------------------

impl<A: FromValue, B: FromValue> FromValue for (A, B) {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::Array(xs) if xs.len() == 2 => {
                let mut it = xs.into_iter();
                match (it.next(), it.next()) {
                    (Some(a), Some(b)) => Ok((A::from_value(a)?, B::from_value(b)?)),
                    _ => Err(ConnectorError::Mapping("list shrank during conversion".into())),
                }
            }
            other => Err(ConnectorError::type_mismatch("List[2]", type_name(&other), "tuple(A, B)")),
        }
    }
}

impl<A: FromValue, B: FromValue, C: FromValue> FromValue for (A, B, C) {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        match value {
            Value::Array(xs) if xs.len() == 3 => {
                let mut it = xs.into_iter();
                match (it.next(), it.next(), it.next()) {
                    (Some(a), Some(b), Some(c)) => {
                        Ok((A::from_value(a)?, B::from_value(b)?, C::from_value(c)?))
                    }
                    _ => Err(ConnectorError::Mapping("list shrank during conversion".into())),
                }
            }
            other => Err(ConnectorError::type_mismatch("List[3]", type_name(&other), "tuple(A, B, C)")),
        }
    }
}

// ---------------------------------------------------------------------------
// Temporal types (chrono), parsed from ISO-8601 strings
// ---------------------------------------------------------------------------

fn temporal_str(value: Value, target: &str) -> Result<String, ConnectorError> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(ConnectorError::type_mismatch("String", type_name(&other), target)),
    }
}

impl FromValue for chrono::NaiveDate {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        let s = temporal_str(value, "NaiveDate")?;
        s.parse()
            .map_err(|e| ConnectorError::Mapping(format!("'{s}' -> NaiveDate: {e}")))
    }
}

impl FromValue for chrono::NaiveTime {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        let s = temporal_str(value, "NaiveTime")?;
        s.parse()
            .map_err(|e| ConnectorError::Mapping(format!("'{s}' -> NaiveTime: {e}")))
    }
}

impl FromValue for chrono::NaiveDateTime {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        let s = temporal_str(value, "NaiveDateTime")?;
        s.parse()
            .map_err(|e| ConnectorError::Mapping(format!("'{s}' -> NaiveDateTime: {e}")))
    }
}

/// Accepts both plain offsets (`2024-01-02T03:04:05+01:00`) and the
/// zone-id suffix Neo4j appends for zoned datetimes
/// (`2024-01-02T03:04:05+01:00[Europe/Amsterdam]`); the zone name is dropped.
impl FromValue for chrono::DateTime<chrono::FixedOffset> {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        let s = temporal_str(value, "DateTime<FixedOffset>")?;
        let without_zone = match s.find('[') {
            Some(idx) if s.ends_with(']') => &s[..idx],
            _ => s.as_str(),
        };
        chrono::DateTime::parse_from_rfc3339(without_zone)
            .map_err(|e| ConnectorError::Mapping(format!("'{s}' -> DateTime<FixedOffset>: {e}")))
    }
}

// ---------------------------------------------------------------------------
// Spatial types
// ---------------------------------------------------------------------------

/// A 2-dimensional point from Neo4j's spatial system.
///
/// The `sr_id` is the Spatial Reference Identifier (e.g. `4326` for WGS 84
/// geographic, `7203` for cartesian).
///
/// ```rust
/// # use connector_core::{FromValue, Point2D};
/// let p = Point2D::from_value(serde_json::json!({
///     "type": "Point",
///     "coordinates": [1.0, 2.0],
///     "crs": {"srid": 7203, "name": "cartesian"}
/// })).unwrap();
/// assert_eq!(p, Point2D { sr_id: 7203, x: 1.0, y: 2.0 });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Point2D {
    /// Spatial Reference System Identifier (e.g. 4326 for WGS 84, 7203 for cartesian).
    pub sr_id: i64,
    /// X coordinate (or longitude for geographic CRS).
    pub x: f64,
    /// Y coordinate (or latitude for geographic CRS).
    pub y: f64,
}

/// A 3-dimensional point; same as [`Point2D`] with a `z` component.
#[derive(Debug, Clone, PartialEq)]
pub struct Point3D {
    /// Spatial Reference System Identifier (e.g. 4979 for WGS 84-3D, 9157 for cartesian-3D).
    pub sr_id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Pull `(srid, coordinates)` out of a point object.
fn point_parts(value: Value, dims: usize, target: &str) -> Result<(i64, Vec<f64>), ConnectorError> {
    let mut obj = match value {
        Value::Object(obj) => obj,
        other => return Err(ConnectorError::type_mismatch("Point", type_name(&other), target)),
    };
    if obj.get("type").and_then(Value::as_str) != Some("Point") {
        return Err(ConnectorError::type_mismatch("Point", "Map", target));
    }
    let coords: Vec<f64> = Vec::from_value(obj.remove("coordinates").unwrap_or(Value::Null))
        .map_err(|e| e.with_context(format!("{target}::coordinates")))?;
    if coords.len() != dims {
        return Err(ConnectorError::Mapping(format!(
            "{target} expects {dims} coordinates, got {}",
            coords.len()
        )));
    }
    let sr_id = obj
        .get("crs")
        .and_then(|crs| crs.get("srid"))
        .and_then(Value::as_i64)
        .ok_or_else(|| ConnectorError::missing_field("crs.srid", target))?;
    Ok((sr_id, coords))
}

impl FromValue for Point2D {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        let (sr_id, c) = point_parts(value, 2, "Point2D")?;
        Ok(Point2D { sr_id, x: c[0], y: c[1] })
    }
}

impl FromValue for Point3D {
    fn from_value(value: Value) -> Result<Self, ConnectorError> {
        let (sr_id, c) = point_parts(value, 3, "Point3D")?;
        Ok(Point3D { sr_id, x: c[0], y: c[1], z: c[2] })
    }
}

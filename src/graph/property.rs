//! Property values carried by nodes and edges
//!
//! The views never interpret properties; they exist so the store is a real
//! property graph and so consumers (e.g. weighted shortest path) can read them.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Property value type supporting the common scalar and composite kinds.
///
/// Serialized externally tagged so every variant reads back as itself;
/// `DateTime` and `Integer` share a representation otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    DateTime(i64), // Unix timestamp in milliseconds
    Array(Vec<PropertyValue>),
    Map(HashMap<String, PropertyValue>),
    Null,
}

impl PropertyValue {
    pub fn is_null(&self) -> bool {
        matches!(self, PropertyValue::Null)
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Raw millisecond timestamp of a `DateTime`
    pub fn as_datetime(&self) -> Option<i64> {
        match self {
            PropertyValue::DateTime(ms) => Some(*ms),
            _ => None,
        }
    }

    /// `DateTime` as a UTC instant; `None` for other variants or an
    /// out-of-range timestamp
    pub fn as_utc(&self) -> Option<DateTime<Utc>> {
        self.as_datetime().and_then(|ms| Utc.timestamp_millis_opt(ms).single())
    }

    pub fn as_map(&self) -> Option<&HashMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Numeric view of the value: integers widen to `f64`, floats pass
    /// through, everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropertyValue::Integer(i) => Some(*i as f64),
            PropertyValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
            PropertyValue::DateTime(_) => "DateTime",
            PropertyValue::Array(_) => "Array",
            PropertyValue::Map(_) => "Map",
            PropertyValue::Null => "Null",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{}\"", s),
            PropertyValue::Integer(i) => write!(f, "{}", i),
            PropertyValue::Float(fl) => write!(f, "{}", fl),
            PropertyValue::Boolean(b) => write!(f, "{}", b),
            PropertyValue::DateTime(dt) => write!(f, "DateTime({})", dt),
            PropertyValue::Array(arr) => {
                write!(f, "[")?;
                for (i, val) in arr.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", val)?;
                }
                write!(f, "]")
            }
            PropertyValue::Map(map) => {
                // Sorted keys so the rendering is stable
                let mut entries: Vec<_> = map.iter().collect();
                entries.sort_by(|a, b| a.0.cmp(b.0));
                write!(f, "{{")?;
                for (i, (key, val)) in entries.into_iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, val)?;
                }
                write!(f, "}}")
            }
            PropertyValue::Null => write!(f, "null"),
        }
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::String(s)
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::String(s.to_string())
    }
}

impl From<i64> for PropertyValue {
    fn from(i: i64) -> Self {
        PropertyValue::Integer(i)
    }
}

impl From<i32> for PropertyValue {
    fn from(i: i32) -> Self {
        PropertyValue::Integer(i as i64)
    }
}

impl From<f64> for PropertyValue {
    fn from(f: f64) -> Self {
        PropertyValue::Float(f)
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl From<Vec<PropertyValue>> for PropertyValue {
    fn from(arr: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(arr)
    }
}

impl From<HashMap<String, PropertyValue>> for PropertyValue {
    fn from(map: HashMap<String, PropertyValue>) -> Self {
        PropertyValue::Map(map)
    }
}

impl From<DateTime<Utc>> for PropertyValue {
    fn from(dt: DateTime<Utc>) -> Self {
        PropertyValue::DateTime(dt.timestamp_millis())
    }
}

/// Property map for storing node and edge properties
pub type PropertyMap = HashMap<String, PropertyValue>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_value_conversions() {
        let string_prop: PropertyValue = "marko".into();
        assert_eq!(string_prop.as_string(), Some("marko"));
        assert_eq!(string_prop.type_name(), "String");

        let int_prop: PropertyValue = 29i64.into();
        assert_eq!(int_prop.as_integer(), Some(29));

        let float_prop: PropertyValue = 0.4.into();
        assert_eq!(float_prop.as_float(), Some(0.4));

        let bool_prop: PropertyValue = true.into();
        assert_eq!(bool_prop.as_boolean(), Some(true));
        assert!(PropertyValue::Null.is_null());
    }

    #[test]
    fn test_numeric_view() {
        assert_eq!(PropertyValue::Integer(2).as_f64(), Some(2.0));
        assert_eq!(PropertyValue::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(PropertyValue::from("1.0").as_f64(), None);
        assert_eq!(PropertyValue::Null.as_f64(), None);
    }

    #[test]
    fn test_display() {
        let arr = PropertyValue::Array(vec![1i64.into(), "x".into()]);
        assert_eq!(arr.to_string(), "[1, \"x\"]");
        assert_eq!(arr.as_array().map(|a| a.len()), Some(2));
    }

    #[test]
    fn test_datetime_and_map() {
        let instant = Utc.timestamp_millis_opt(1_700_000_000_123).single().unwrap();
        let dt: PropertyValue = instant.into();
        assert_eq!(dt.as_datetime(), Some(1_700_000_000_123));
        assert_eq!(dt.as_utc(), Some(instant));
        assert_eq!(dt.type_name(), "DateTime");
        assert_eq!(dt.as_integer(), None);
        assert_eq!(PropertyValue::Integer(5).as_utc(), None);

        let mut map = HashMap::new();
        map.insert("since".to_string(), PropertyValue::DateTime(10));
        map.insert("city".to_string(), "santa fe".into());
        let map_prop: PropertyValue = map.into();
        assert_eq!(map_prop.type_name(), "Map");
        assert_eq!(map_prop.as_map().map(|m| m.len()), Some(2));
        assert_eq!(map_prop.to_string(), "{city: \"santa fe\", since: DateTime(10)}");
    }

    #[test]
    fn test_json_round_trip_keeps_variant() {
        let mut nested = HashMap::new();
        nested.insert("weight".to_string(), PropertyValue::Float(0.4));
        nested.insert("tags".to_string(), PropertyValue::Array(vec!["a".into(), PropertyValue::Null]));

        let values = vec![
            PropertyValue::String("lop".to_string()),
            PropertyValue::Integer(29),
            PropertyValue::Float(1.5),
            PropertyValue::Boolean(false),
            PropertyValue::DateTime(29),
            PropertyValue::Map(nested),
            PropertyValue::Null,
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: PropertyValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value, "{}", json);
        }

        // Same number, different variant
        assert_ne!(
            serde_json::to_string(&PropertyValue::DateTime(29)).unwrap(),
            serde_json::to_string(&PropertyValue::Integer(29)).unwrap()
        );
    }
}

//! Typed bind values.
//!
//! A [`Value`] is one entry in a statement's parameter sequence. Every
//! variant is nullable through `Option`; a `None` payload stands for SQL
//! `NULL`. Heap-allocated payloads are boxed to keep the enum small.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// A bind value aligned with one `?` placeholder in rendered SQL.
///
/// Values compare by payload, so tests and callers can assert on a
/// statement's full parameter sequence.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(Option<bool>),
    /// 16-bit signed integer
    SmallInt(Option<i16>),
    /// 32-bit signed integer
    Int(Option<i32>),
    /// 64-bit signed integer
    BigInt(Option<i64>),
    /// 32-bit floating point
    Float(Option<f32>),
    /// 64-bit floating point
    Double(Option<f64>),
    /// String value (boxed)
    String(Option<Box<String>>),
    /// Binary data (boxed)
    Bytes(Option<Box<Vec<u8>>>),
    /// Calendar date
    Date(Option<Box<NaiveDate>>),
    /// Date and time without timezone
    DateTime(Option<Box<NaiveDateTime>>),
    /// Date and time in UTC
    DateTimeUtc(Option<Box<DateTime<Utc>>>),
    /// UUID value
    Uuid(Option<Box<uuid::Uuid>>),
    /// JSON document
    Json(Option<Box<serde_json::Value>>),
}

impl Value {
    /// A `NULL` of no particular type.
    pub fn null() -> Self {
        Value::String(None)
    }

    /// Returns `true` if this value is SQL `NULL`.
    pub fn is_null(&self) -> bool {
        match self {
            Self::Bool(v) => v.is_none(),
            Self::SmallInt(v) => v.is_none(),
            Self::Int(v) => v.is_none(),
            Self::BigInt(v) => v.is_none(),
            Self::Float(v) => v.is_none(),
            Self::Double(v) => v.is_none(),
            Self::String(v) => v.is_none(),
            Self::Bytes(v) => v.is_none(),
            Self::Date(v) => v.is_none(),
            Self::DateTime(v) => v.is_none(),
            Self::DateTimeUtc(v) => v.is_none(),
            Self::Uuid(v) => v.is_none(),
            Self::Json(v) => v.is_none(),
        }
    }
}

macro_rules! impl_value_from {
    ($variant:ident, $ty:ty) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(Some(v))
            }
        }
        impl From<Option<$ty>> for Value {
            fn from(v: Option<$ty>) -> Self {
                Value::$variant(v)
            }
        }
    };
    ($variant:ident, $ty:ty, boxed) => {
        impl From<$ty> for Value {
            fn from(v: $ty) -> Self {
                Value::$variant(Some(Box::new(v)))
            }
        }
        impl From<Option<$ty>> for Value {
            fn from(v: Option<$ty>) -> Self {
                Value::$variant(v.map(Box::new))
            }
        }
    };
}

impl_value_from!(Bool, bool);
impl_value_from!(SmallInt, i16);
impl_value_from!(Int, i32);
impl_value_from!(BigInt, i64);
impl_value_from!(Float, f32);
impl_value_from!(Double, f64);
impl_value_from!(String, String, boxed);
impl_value_from!(Bytes, Vec<u8>, boxed);
impl_value_from!(Date, NaiveDate, boxed);
impl_value_from!(DateTime, NaiveDateTime, boxed);
impl_value_from!(DateTimeUtc, DateTime<Utc>, boxed);
impl_value_from!(Uuid, uuid::Uuid, boxed);
impl_value_from!(Json, serde_json::Value, boxed);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(Some(Box::new(v.to_string())))
    }
}

impl From<Option<&str>> for Value {
    fn from(v: Option<&str>) -> Self {
        Value::String(v.map(|s| Box::new(s.to_string())))
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(Some(Box::new(v.to_vec())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_detection() {
        assert!(Value::Int(None).is_null());
        assert!(!Value::Int(Some(42)).is_null());
        assert!(Value::null().is_null());
        assert!(Value::from(None::<&str>).is_null());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(5), Value::Int(Some(5)));
        assert_eq!(Value::from(5i64), Value::BigInt(Some(5)));
        assert_eq!(Value::from("x"), Value::String(Some(Box::new("x".to_string()))));
        assert_eq!(Value::from(Some(true)), Value::Bool(Some(true)));
        assert_eq!(Value::from(None::<i32>), Value::Int(None));
    }
}

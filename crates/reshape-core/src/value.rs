mod object;
pub use object::ValueObject;

#[cfg(feature = "serde")]
mod json;

use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;

/// A plain value, as found on the external side of a mapping.
///
/// Entities read and write their scalar fields as `Value`s too, so a value
/// without a converter passes through the engine unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// A universally unique identifier
    Uuid(uuid::Uuid),

    /// A UTC timestamp
    DateTime(DateTime<Utc>),

    /// An ordered list of values
    List(Vec<Value>),

    /// A keyed structure
    Object(ValueObject),

    /// Null value
    #[default]
    Null,
}

impl Value {
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub const fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    /// Name of the variant, used in conversion errors.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Uuid(_) => "Uuid",
            Self::DateTime(_) => "DateTime",
            Self::List(_) => "List",
            Self::Object(_) => "Object",
            Self::Null => "Null",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&ValueObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut ValueObject> {
        match self {
            Self::Object(object) => Some(object),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn into_bool(self) -> Result<bool> {
        match self {
            Self::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "bool")),
        }
    }

    pub fn into_i64(self) -> Result<i64> {
        match self {
            Self::I64(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "i64")),
        }
    }

    pub fn into_f64(self) -> Result<f64> {
        match self {
            Self::F64(v) => Ok(v),
            Self::I64(v) => Ok(v as f64),
            _ => Err(Error::type_conversion(self, "f64")),
        }
    }

    pub fn into_string(self) -> Result<String> {
        match self {
            Self::String(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "String")),
        }
    }

    pub fn into_uuid(self) -> Result<uuid::Uuid> {
        match self {
            Self::Uuid(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "Uuid")),
        }
    }

    pub fn into_date_time(self) -> Result<DateTime<Utc>> {
        match self {
            Self::DateTime(v) => Ok(v),
            _ => Err(Error::type_conversion(self, "DateTime<Utc>")),
        }
    }

    pub fn into_list(self) -> Result<Vec<Value>> {
        match self {
            Self::List(items) => Ok(items),
            _ => Err(Error::type_conversion(self, "List")),
        }
    }

    pub fn into_object(self) -> Result<ValueObject> {
        match self {
            Self::Object(object) => Ok(object),
            _ => Err(Error::type_conversion(self, "Object")),
        }
    }

    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::I64(v) => write!(f, "{v}"),
            Self::F64(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v:?}"),
            Self::Uuid(v) => write!(f, "\"{v}\""),
            Self::DateTime(v) => write!(
                f,
                "\"{}\"",
                v.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Object(object) => fmt::Display::fmt(object, f),
            Self::Null => f.write_str("null"),
        }
    }
}

impl AsRef<Self> for Value {
    fn as_ref(&self) -> &Self {
        self
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src.into())
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<u32> for Value {
    fn from(src: u32) -> Self {
        Self::I64(src.into())
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<uuid::Uuid> for Value {
    fn from(src: uuid::Uuid) -> Self {
        Self::Uuid(src)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(src: DateTime<Utc>) -> Self {
        Self::DateTime(src)
    }
}

impl From<ValueObject> for Value {
    fn from(value: ValueObject) -> Self {
        Self::Object(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    Self: From<T>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

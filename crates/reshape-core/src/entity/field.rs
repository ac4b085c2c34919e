use super::Entity;
use crate::{Error, Result, Value};

/// A field as read off an entity.
#[derive(Debug)]
pub enum Field<'a> {
    /// A scalar, already expressed as a plain value
    Value(Value),

    /// An embedded entity
    Entity(&'a dyn Entity),

    /// A sequence of embedded entities (or of nested sequences)
    List(Vec<Field<'a>>),
}

/// A value about to be written onto an entity field.
#[derive(Debug)]
pub enum FieldValue {
    /// A scalar
    Value(Value),

    /// A freshly rebuilt embedded entity
    Entity(Box<dyn Entity>),

    /// A sequence of rebuilt entities (or of nested sequences)
    List(Vec<FieldValue>),
}

impl Field<'_> {
    pub fn is_null(&self) -> bool {
        matches!(self, Field::Value(Value::Null))
    }

    /// Short description of the field shape, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Field::Value(value) => value.type_name(),
            Field::Entity(_) => "Entity",
            Field::List(_) => "List",
        }
    }
}

impl FieldValue {
    pub fn null() -> FieldValue {
        FieldValue::Value(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Value(Value::Null))
    }

    /// Unwraps a scalar.
    pub fn into_value(self) -> Result<Value> {
        match self {
            FieldValue::Value(value) => Ok(value),
            FieldValue::Entity(entity) => Err(crate::err!(
                "expected a plain value, found entity `{}`",
                entity.entity_name()
            )),
            FieldValue::List(_) => Err(crate::err!(
                "expected a plain value, found a list of entities"
            )),
        }
    }

    /// Unwraps an embedded entity of type `T`.
    pub fn into_entity<T: Entity>(self) -> Result<T> {
        match self {
            FieldValue::Entity(entity) => match entity.downcast::<T>() {
                Ok(entity) => Ok(*entity),
                Err(entity) => Err(crate::err!(
                    "expected entity `{}`, found entity `{}`",
                    std::any::type_name::<T>(),
                    entity.entity_name()
                )),
            },
            FieldValue::Value(value) => Err(Error::type_conversion(value, "Entity")),
            FieldValue::List(_) => Err(crate::err!("expected an entity, found a list")),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Value(value)
    }
}

impl<T: Entity> From<Box<T>> for FieldValue {
    fn from(entity: Box<T>) -> Self {
        FieldValue::Entity(entity)
    }
}

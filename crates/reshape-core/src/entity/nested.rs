use super::{Field, FieldValue};
use crate::{err, Error, Result, Value};

/// A field type holding embedded entities.
///
/// `#[derive(Entity)]` implements this for the entity itself and
/// `#[derive(Polymorphic)]` for enums over several entity types. Containers
/// (`Vec`, `Option`, `Box`) compose on top.
pub trait NestedField: Sized {
    fn to_field(&self) -> Field<'_>;

    fn from_field(value: FieldValue) -> Result<Self>;
}

impl<T: NestedField> NestedField for Vec<T> {
    fn to_field(&self) -> Field<'_> {
        Field::List(self.iter().map(NestedField::to_field).collect())
    }

    fn from_field(value: FieldValue) -> Result<Self> {
        match value {
            FieldValue::List(items) => items.into_iter().map(T::from_field).collect(),
            FieldValue::Value(value) => Err(Error::type_conversion(value, "List")),
            FieldValue::Entity(entity) => Err(err!(
                "expected a list, found entity `{}`",
                entity.entity_name()
            )),
        }
    }
}

impl<T: NestedField> NestedField for Option<T> {
    fn to_field(&self) -> Field<'_> {
        match self {
            Some(value) => value.to_field(),
            None => Field::Value(Value::Null),
        }
    }

    fn from_field(value: FieldValue) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_field(value).map(Some)
        }
    }
}

impl<T: NestedField> NestedField for Box<T> {
    fn to_field(&self) -> Field<'_> {
        (**self).to_field()
    }

    fn from_field(value: FieldValue) -> Result<Self> {
        T::from_field(value).map(Box::new)
    }
}

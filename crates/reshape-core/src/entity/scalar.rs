use crate::{Error, Result, Value};

use chrono::{DateTime, Utc};

/// A field type stored as a plain [`Value`] on the entity side.
///
/// Implemented for the common primitives; value objects implement it to
/// describe how they are exposed to converters.
pub trait ScalarField: Sized {
    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self>;
}

impl ScalarField for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self> {
        Ok(value)
    }
}

impl ScalarField for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_bool()
    }
}

impl ScalarField for i64 {
    fn to_value(&self) -> Value {
        Value::I64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_i64()
    }
}

macro_rules! impl_narrow_int {
    ( $( $ty:ty => $name:literal ),+ ) => {
        $(
            impl ScalarField for $ty {
                fn to_value(&self) -> Value {
                    Value::I64(i64::from(*self))
                }

                fn from_value(value: Value) -> Result<Self> {
                    match value {
                        Value::I64(v) => <$ty>::try_from(v)
                            .map_err(|_| Error::type_conversion(value, $name)),
                        _ => Err(Error::type_conversion(value, $name)),
                    }
                }
            }
        )+
    };
}

impl_narrow_int!(i32 => "i32", u32 => "u32");

impl ScalarField for f64 {
    fn to_value(&self) -> Value {
        Value::F64(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_f64()
    }
}

impl ScalarField for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_string()
    }
}

impl ScalarField for uuid::Uuid {
    fn to_value(&self) -> Value {
        Value::Uuid(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_uuid()
    }
}

impl ScalarField for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::DateTime(*self)
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_date_time()
    }
}

impl<T: ScalarField> ScalarField for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Null => Ok(None),
            value => T::from_value(value).map(Some),
        }
    }
}

impl<T: ScalarField> ScalarField for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ScalarField::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self> {
        value.into_list()?.into_iter().map(T::from_value).collect()
    }
}

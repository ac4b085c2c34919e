use super::{FieldValue, NestedField, ScalarField};
use crate::{Error, Result};

/// Converts `value` for a scalar field, reporting failures as a
/// could-not-assign error on `entity.property`.
pub fn assign_scalar<T: ScalarField>(value: FieldValue, property: &str, entity: &str) -> Result<T> {
    value
        .into_value()
        .and_then(T::from_value)
        .map_err(|err| err.context(Error::could_not_assign_property_value(property, entity)))
}

/// Converts `value` for a field holding embedded entities, reporting
/// failures as a could-not-assign error on `entity.property`.
pub fn assign_nested<T: NestedField>(value: FieldValue, property: &str, entity: &str) -> Result<T> {
    T::from_field(value)
        .map_err(|err| err.context(Error::could_not_assign_property_value(property, entity)))
}

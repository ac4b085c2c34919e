use super::Error;

/// Error when a resolved value cannot be written onto a blank entity.
///
/// This occurs when:
/// - The field does not exist on the instantiated entity type
/// - The value has a shape the field cannot hold (the cause carries the
///   conversion failure)
#[derive(Debug)]
pub(super) struct CouldNotAssignPropertyValue {
    property: Box<str>,
    entity: Box<str>,
}

impl std::error::Error for CouldNotAssignPropertyValue {}

impl core::fmt::Display for CouldNotAssignPropertyValue {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not assign property `{}` on entity `{}`",
            self.property, self.entity
        )
    }
}

impl Error {
    /// Creates an error for a field that could not be assigned.
    pub fn could_not_assign_property_value(property: impl Into<String>, entity: &str) -> Error {
        Error::from(super::ErrorKind::CouldNotAssignPropertyValue(
            CouldNotAssignPropertyValue {
                property: property.into().into(),
                entity: entity.into(),
            },
        ))
    }

    /// Returns `true` if this error is a could-not-assign-property-value error.
    pub fn is_could_not_assign_property_value(&self) -> bool {
        matches!(
            self.kind(),
            super::ErrorKind::CouldNotAssignPropertyValue(_)
        )
    }
}

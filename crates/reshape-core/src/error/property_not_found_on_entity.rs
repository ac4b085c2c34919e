use super::Error;

/// Error when a declared field cannot be read off the source entity.
///
/// Raised by `transform` when the entity has no field with the declared
/// name.
#[derive(Debug)]
pub(super) struct PropertyNotFoundOnEntity {
    property: Box<str>,
    entity: Box<str>,
}

impl std::error::Error for PropertyNotFoundOnEntity {}

impl core::fmt::Display for PropertyNotFoundOnEntity {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not find property `{}` on entity `{}`",
            self.property, self.entity
        )
    }
}

impl Error {
    /// Creates an error for a declared field missing from an entity.
    pub fn property_not_found_on_entity(property: impl Into<String>, entity: &str) -> Error {
        Error::from(super::ErrorKind::PropertyNotFoundOnEntity(
            PropertyNotFoundOnEntity {
                property: property.into().into(),
                entity: entity.into(),
            },
        ))
    }

    /// Returns `true` if this error is a property-not-found-on-entity error.
    pub fn is_property_not_found_on_entity(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PropertyNotFoundOnEntity(_))
    }
}

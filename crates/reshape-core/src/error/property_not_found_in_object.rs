use super::Error;
use crate::ValueObject;

/// Error when a declared external key is absent from the source object.
///
/// The whole object is kept so the message shows exactly what was received.
#[derive(Debug)]
pub(super) struct PropertyNotFoundInObject {
    property: Box<str>,
    object: ValueObject,
}

impl std::error::Error for PropertyNotFoundInObject {}

impl core::fmt::Display for PropertyNotFoundInObject {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "could not find property `{}` in object: {}",
            self.property, self.object
        )
    }
}

impl Error {
    /// Creates an error for an external key missing from a plain object.
    pub fn property_not_found_in_object(property: impl Into<String>, object: ValueObject) -> Error {
        Error::from(super::ErrorKind::PropertyNotFoundInObject(
            PropertyNotFoundInObject {
                property: property.into().into(),
                object,
            },
        ))
    }

    /// Returns `true` if this error is a property-not-found-in-object error.
    pub fn is_property_not_found_in_object(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PropertyNotFoundInObject(_))
    }

    /// Returns the object that was missing a key, if this is a
    /// property-not-found-in-object error.
    pub fn offending_object(&self) -> Option<&ValueObject> {
        match self.kind() {
            super::ErrorKind::PropertyNotFoundInObject(err) => Some(&err.object),
            _ => None,
        }
    }
}

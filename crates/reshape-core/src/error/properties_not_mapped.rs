use super::Error;

/// Error when an entity has fields that are neither mapped nor ignored.
#[derive(Debug)]
pub(super) struct PropertiesNotMapped {
    properties: Vec<String>,
    entity: Box<str>,
}

impl std::error::Error for PropertiesNotMapped {}

impl core::fmt::Display for PropertiesNotMapped {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "the following entity properties were not mapped on entity `{}`: `{}`",
            self.entity,
            self.properties.join(", ")
        )
    }
}

impl Error {
    /// Creates an error listing every unmapped entity field.
    pub fn properties_not_mapped(properties: Vec<String>, entity: &str) -> Error {
        Error::from(super::ErrorKind::PropertiesNotMapped(PropertiesNotMapped {
            properties,
            entity: entity.into(),
        }))
    }

    /// Returns `true` if this error is a properties-not-mapped error.
    pub fn is_properties_not_mapped(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::PropertiesNotMapped(_))
    }

    /// Returns the unmapped field names, if this is a properties-not-mapped
    /// error.
    pub fn unmapped_properties(&self) -> Option<&[String]> {
        match self.kind() {
            super::ErrorKind::PropertiesNotMapped(err) => Some(&err.properties),
            _ => None,
        }
    }
}

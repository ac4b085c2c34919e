use super::Error;

/// Error when a mapping declaration is invalid.
///
/// This occurs when:
/// - A field is mapped twice, or both mapped and ignored
/// - Two fields are mapped to the same external key
/// - A polymorphic rule has no variants or ambiguous variants
/// - A rule does not fit the runtime value (a leaf rule over an embedded
///   entity, a nested rule over a scalar)
/// - A mapper is bound to a declaration for another entity type
#[derive(Debug)]
pub(super) struct InvalidMapping {
    message: Box<str>,
}

impl std::error::Error for InvalidMapping {}

impl core::fmt::Display for InvalidMapping {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "invalid mapping: {}", self.message)
    }
}

impl Error {
    /// Creates an invalid mapping error.
    pub fn invalid_mapping(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::InvalidMapping(InvalidMapping {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is an invalid mapping error.
    pub fn is_invalid_mapping(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::InvalidMapping(_))
    }
}

use super::Error;
use crate::ValueObject;

/// Error when no variant of a polymorphic rule matches a plain object.
#[derive(Debug)]
pub(super) struct VariantNotResolved {
    object: ValueObject,
}

impl std::error::Error for VariantNotResolved {}

impl core::fmt::Display for VariantNotResolved {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "no entity variant matches object: {}", self.object)
    }
}

impl Error {
    /// Creates an error for an object no polymorphic variant accepts.
    pub fn variant_not_resolved(object: ValueObject) -> Error {
        Error::from(super::ErrorKind::VariantNotResolved(VariantNotResolved {
            object,
        }))
    }

    /// Returns `true` if this error is a variant-not-resolved error.
    pub fn is_variant_not_resolved(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::VariantNotResolved(_))
    }
}

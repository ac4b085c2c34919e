//! The contract between the mapping engine and domain entities.
//!
//! Entities are plain data holders. The engine never inspects them through
//! reflection; instead each entity type exposes a small accessor table that
//! reads and writes fields by name. `#[derive(Entity)]` generates the table,
//! and it can also be written by hand.

mod assign;
pub use assign::{assign_nested, assign_scalar};

mod field;
pub use field::{Field, FieldValue};

mod nested;
pub use nested::NestedField;

mod scalar;
pub use scalar::ScalarField;

use crate::Result;
use std::any::Any;
use std::fmt;

/// A domain object the engine can read field-by-field and rebuild from a
/// blank instance.
pub trait Entity: Any + fmt::Debug {
    /// Name of the entity type, used in error messages.
    fn entity_name(&self) -> &'static str;

    /// Names of every field this entity owns, in declaration order.
    fn field_names(&self) -> Vec<&'static str>;

    /// Reads a field.
    ///
    /// Returns `None` when the entity has no field called `name`.
    fn field(&self, name: &str) -> Option<Field<'_>>;

    /// Writes a field on an instance produced by a blank constructor.
    ///
    /// Fails with a could-not-assign error when the field does not exist or
    /// cannot hold `value`.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<()>;

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl dyn Entity {
    /// Returns `true` if the concrete type behind this entity is `T`.
    pub fn is<T: Entity>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Entity>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Recovers the concrete entity, handing the box back on a type mismatch.
    pub fn downcast<T: Entity>(self: Box<Self>) -> core::result::Result<Box<T>, Box<dyn Entity>> {
        if self.is::<T>() {
            match self.into_any().downcast::<T>() {
                Ok(entity) => Ok(entity),
                Err(_) => unreachable!("type checked above"),
            }
        } else {
            Err(self)
        }
    }
}

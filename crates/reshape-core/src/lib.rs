#[macro_use]
mod macros;

pub mod convert;
pub use convert::Converter;

pub mod entity;
pub use entity::{Entity, Field, FieldValue, NestedField, ScalarField};

mod error;
pub use error::{Error, IntoError};

pub mod mapping;
pub use mapping::{Discriminator, FieldRule, ObjectMapping};

pub mod util;

pub mod value;
pub use value::{Value, ValueObject};

/// A Result type alias that uses reshape's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

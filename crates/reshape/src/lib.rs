//! Declarative, bidirectional mapping between domain entities and plain
//! objects.
//!
//! A [`Mapper`] is bound to an [`ObjectMapping`] describing how each field of
//! an entity corresponds to a key of a [`ValueObject`]. It turns entities into
//! objects with [`Mapper::transform`] and rebuilds them with
//! [`Mapper::reverse_transform`].

extern crate self as reshape;

mod engine;

pub mod mapper;
pub use mapper::{Mapper, MapperOptions};

pub use reshape_core::{
    bail, convert, entity, err, mapping, object, util, value, Converter, Discriminator, Entity,
    Error, Field, FieldRule, FieldValue, NestedField, ObjectMapping, Result, ScalarField, Value,
    ValueObject,
};

pub use reshape_macros::{Entity, Polymorphic};

#[doc(hidden)]
pub mod codegen_support {
    pub use reshape_core::{
        entity::{assign_nested, assign_scalar},
        Entity, Error, Field, FieldValue, NestedField, Result, ScalarField, Value,
    };
    pub use std::{any::Any, boxed::Box, option::Option, vec::Vec};
}

mod options;
pub use options::MapperOptions;

use crate::engine;

use reshape_core::util::prune_null_values;
use reshape_core::{Entity, Error, ObjectMapping, Result, ValueObject};

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Transforms entities of type `E` into plain objects and back.
///
/// A mapper holds nothing but its declaration and options, so it can be
/// cloned cheaply and shared between threads.
pub struct Mapper<E> {
    mapping: Arc<ObjectMapping>,
    options: MapperOptions,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> Mapper<E> {
    /// Binds a mapper to `mapping` with default options.
    pub fn new(mapping: impl Into<Arc<ObjectMapping>>) -> Result<Mapper<E>> {
        Mapper::with_options(mapping, MapperOptions::default())
    }

    pub fn with_options(
        mapping: impl Into<Arc<ObjectMapping>>,
        options: MapperOptions,
    ) -> Result<Mapper<E>> {
        let mapping = mapping.into();

        if !mapping.is::<E>() {
            return Err(Error::invalid_mapping(format!(
                "mapping for entity `{}` cannot be bound to `{}`",
                mapping.entity_name(),
                std::any::type_name::<E>()
            )));
        }

        Ok(Mapper {
            mapping,
            options,
            _entity: PhantomData,
        })
    }

    pub fn mapping(&self) -> &ObjectMapping {
        &self.mapping
    }

    pub fn options(&self) -> &MapperOptions {
        &self.options
    }

    /// Converts `entity` into a plain object.
    ///
    /// Fails if a mapped field is missing on the entity, at any depth, or if
    /// the entity has fields that are neither mapped nor ignored.
    pub fn transform(&self, entity: &E) -> Result<ValueObject> {
        let mut object = engine::transform(&self.mapping, entity)?;

        if !self.options.expose_null_values {
            prune_null_values(&mut object);
        }

        Ok(object)
    }

    /// Rebuilds an entity from a plain object.
    ///
    /// Fails if a mapped key is missing in the object, at any depth, or if a
    /// value cannot be assigned to its field.
    pub fn reverse_transform(&self, object: &ValueObject) -> Result<E> {
        let entity = engine::reverse_transform(&self.mapping, object)?;

        match entity.downcast::<E>() {
            Ok(entity) => Ok(*entity),
            Err(entity) => Err(Error::invalid_mapping(format!(
                "mapping produced entity `{}` instead of `{}`",
                entity.entity_name(),
                std::any::type_name::<E>()
            ))),
        }
    }
}

impl<E> Clone for Mapper<E> {
    fn clone(&self) -> Self {
        Mapper {
            mapping: self.mapping.clone(),
            options: self.options.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> fmt::Debug for Mapper<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapper")
            .field("mapping", &self.mapping)
            .field("options", &self.options)
            .finish()
    }
}

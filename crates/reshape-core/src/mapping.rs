mod builder;
pub use builder::Builder;

mod rule;
pub use rule::{Discriminator, FieldRule, LeafRule, NestedRule, PolymorphicRule, Variant};

use crate::Entity;

use indexmap::IndexMap;
use std::any::TypeId;
use std::fmt;
use std::sync::Arc;

/// Describes how one entity type corresponds to a plain object.
///
/// A mapping is built once, typically at startup, and is immutable
/// afterwards. Child mappings are shared by `Arc`, so the same declaration
/// may appear under several parents; the tree itself must be finite.
pub struct ObjectMapping {
    /// The entity type this mapping produces
    entity: EntityRef,

    /// Entity field name to rule. Iteration order is output key order.
    properties: IndexMap<String, FieldRule>,

    /// Entity fields excluded from the output and from the completeness
    /// check.
    ignored_properties: Vec<String>,
}

/// The target entity type of a mapping, and how to make a blank one.
#[derive(Clone)]
struct EntityRef {
    name: &'static str,
    type_id: TypeId,
    constructor: Arc<dyn Fn() -> Box<dyn Entity> + Send + Sync>,
}

impl ObjectMapping {
    /// Starts a mapping for `E`, whose blank instances come from `Default`.
    pub fn of<E: Entity + Default>() -> Builder {
        Self::with_constructor(E::default)
    }

    /// Starts a mapping for `E` with an explicit zero-argument constructor.
    pub fn with_constructor<E: Entity>(constructor: fn() -> E) -> Builder {
        Builder::new(EntityRef::new(constructor))
    }

    /// Name of the target entity type.
    pub fn entity_name(&self) -> &'static str {
        self.entity.name
    }

    /// Returns `true` if this mapping produces entities of type `E`.
    pub fn is<E: Entity>(&self) -> bool {
        self.entity.type_id == TypeId::of::<E>()
    }

    /// Returns `true` if this mapping produces entities of `entity`'s
    /// concrete type.
    pub fn targets(&self, entity: &dyn Entity) -> bool {
        self.entity.type_id == entity.as_any().type_id()
    }

    /// Creates a blank instance of the target entity.
    pub fn instantiate(&self) -> Box<dyn Entity> {
        (self.entity.constructor)()
    }

    /// Field rules in declaration order.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = (&str, &FieldRule)> {
        self.properties
            .iter()
            .map(|(name, rule)| (name.as_str(), rule))
    }

    pub fn property(&self, name: &str) -> Option<&FieldRule> {
        self.properties.get(name)
    }

    pub fn ignored_properties(&self) -> &[String] {
        &self.ignored_properties
    }

    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignored_properties.iter().any(|ignored| ignored == name)
    }

    /// External keys produced by this mapping, in output order.
    pub fn external_keys(&self) -> impl Iterator<Item = &str> {
        self.properties
            .iter()
            .map(|(name, rule)| rule.external_key(name))
    }
}

impl EntityRef {
    fn new<E: Entity>(constructor: fn() -> E) -> EntityRef {
        EntityRef {
            name: constructor().entity_name(),
            type_id: TypeId::of::<E>(),
            constructor: Arc::new(move || -> Box<dyn Entity> { Box::new(constructor()) }),
        }
    }
}

impl fmt::Debug for ObjectMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectMapping")
            .field("entity", &self.entity.name)
            .field("properties", &self.properties)
            .field("ignored_properties", &self.ignored_properties)
            .finish()
    }
}

use super::ObjectMapping;
use crate::Converter;

use std::sync::Arc;

/// How one entity field maps to one key of the plain object.
#[derive(Debug, Clone)]
pub enum FieldRule {
    /// A scalar field, optionally renamed and converted
    Leaf(LeafRule),

    /// A field holding embedded entities of a single type
    Nested(NestedRule),

    /// A field holding embedded entities of several types
    Polymorphic(PolymorphicRule),
}

#[derive(Debug, Clone, Default)]
pub struct LeafRule {
    rename: Option<String>,
    converter: Option<Arc<dyn Converter>>,
}

#[derive(Debug, Clone)]
pub struct NestedRule {
    rename: Option<String>,
    mapping: Arc<ObjectMapping>,
}

#[derive(Debug, Clone)]
pub struct PolymorphicRule {
    rename: Option<String>,
    discriminator: Discriminator,
    variants: Vec<Variant>,
}

/// One candidate entity type of a polymorphic field.
#[derive(Debug, Clone)]
pub struct Variant {
    tag: String,
    mapping: Arc<ObjectMapping>,
}

/// Selects the variant to rebuild from a plain object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discriminator {
    /// The first variant whose external keys are all present wins.
    Shape,

    /// The variant tag is stored under this key of each object.
    Key(String),
}

impl FieldRule {
    /// A scalar passed through as-is.
    pub fn leaf() -> LeafRule {
        LeafRule::default()
    }

    pub fn nested(mapping: impl Into<Arc<ObjectMapping>>) -> NestedRule {
        NestedRule {
            rename: None,
            mapping: mapping.into(),
        }
    }

    pub fn polymorphic(discriminator: Discriminator) -> PolymorphicRule {
        PolymorphicRule {
            rename: None,
            discriminator,
            variants: vec![],
        }
    }

    /// The key this rule writes under, given the entity field it is
    /// declared on.
    pub fn external_key<'a>(&'a self, field: &'a str) -> &'a str {
        let rename = match self {
            FieldRule::Leaf(rule) => &rule.rename,
            FieldRule::Nested(rule) => &rule.rename,
            FieldRule::Polymorphic(rule) => &rule.rename,
        };

        rename.as_deref().unwrap_or(field)
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, FieldRule::Leaf(_))
    }
}

impl LeafRule {
    /// Writes the field under `key` instead of its own name.
    pub fn rename(mut self, key: impl Into<String>) -> Self {
        self.rename = Some(key.into());
        self
    }

    pub fn converter(mut self, converter: impl Converter + 'static) -> Self {
        self.converter = Some(Arc::new(converter));
        self
    }

    pub fn get_converter(&self) -> Option<&dyn Converter> {
        self.converter.as_deref()
    }
}

impl NestedRule {
    pub fn rename(mut self, key: impl Into<String>) -> Self {
        self.rename = Some(key.into());
        self
    }

    pub fn mapping(&self) -> &ObjectMapping {
        &self.mapping
    }
}

impl PolymorphicRule {
    pub fn rename(mut self, key: impl Into<String>) -> Self {
        self.rename = Some(key.into());
        self
    }

    /// Adds a variant tagged with its entity name.
    pub fn variant(self, mapping: impl Into<Arc<ObjectMapping>>) -> Self {
        let mapping = mapping.into();
        let tag = mapping.entity_name().to_string();
        self.push_variant(tag, mapping)
    }

    /// Adds a variant with an explicit tag.
    pub fn tagged_variant(
        self,
        tag: impl Into<String>,
        mapping: impl Into<Arc<ObjectMapping>>,
    ) -> Self {
        self.push_variant(tag.into(), mapping.into())
    }

    fn push_variant(mut self, tag: String, mapping: Arc<ObjectMapping>) -> Self {
        self.variants.push(Variant { tag, mapping });
        self
    }

    pub fn discriminator(&self) -> &Discriminator {
        &self.discriminator
    }

    /// Candidate variants, in declaration order.
    pub fn variants(&self) -> &[Variant] {
        &self.variants
    }
}

impl Variant {
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn mapping(&self) -> &ObjectMapping {
        &self.mapping
    }
}

impl From<LeafRule> for FieldRule {
    fn from(rule: LeafRule) -> Self {
        FieldRule::Leaf(rule)
    }
}

impl From<NestedRule> for FieldRule {
    fn from(rule: NestedRule) -> Self {
        FieldRule::Nested(rule)
    }
}

impl From<PolymorphicRule> for FieldRule {
    fn from(rule: PolymorphicRule) -> Self {
        FieldRule::Polymorphic(rule)
    }
}

impl From<Arc<ObjectMapping>> for FieldRule {
    fn from(mapping: Arc<ObjectMapping>) -> Self {
        FieldRule::nested(mapping).into()
    }
}

impl From<ObjectMapping> for FieldRule {
    fn from(mapping: ObjectMapping) -> Self {
        FieldRule::nested(mapping).into()
    }
}

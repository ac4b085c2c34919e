use super::{Discriminator, EntityRef, FieldRule, ObjectMapping, PolymorphicRule};
use crate::{Error, Result};

use indexmap::IndexMap;
use std::collections::HashSet;

/// Accumulates the rules of an [`ObjectMapping`].
///
/// Declaration errors are collected and reported by [`Builder::build`].
pub struct Builder {
    entity: EntityRef,
    properties: Vec<(String, FieldRule)>,
    ignored_properties: Vec<String>,
}

impl Builder {
    pub(super) fn new(entity: EntityRef) -> Builder {
        Builder {
            entity,
            properties: vec![],
            ignored_properties: vec![],
        }
    }

    /// Maps the entity field `name` according to `rule`.
    pub fn property(mut self, name: impl Into<String>, rule: impl Into<FieldRule>) -> Builder {
        self.properties.push((name.into(), rule.into()));
        self
    }

    /// Excludes the entity field `name` from the output.
    pub fn ignore(mut self, name: impl Into<String>) -> Builder {
        self.ignored_properties.push(name.into());
        self
    }

    pub fn build(self) -> Result<ObjectMapping> {
        let entity = self.entity.name;
        let mut properties = IndexMap::with_capacity(self.properties.len());
        let mut external_keys = HashSet::new();

        for (name, rule) in self.properties {
            if properties.contains_key(&name) {
                return Err(Error::invalid_mapping(format!(
                    "field `{name}` of entity `{entity}` is mapped more than once"
                )));
            }

            if self.ignored_properties.contains(&name) {
                return Err(Error::invalid_mapping(format!(
                    "field `{name}` of entity `{entity}` is both mapped and ignored"
                )));
            }

            let key = rule.external_key(&name).to_string();
            if !external_keys.insert(key.clone()) {
                return Err(Error::invalid_mapping(format!(
                    "more than one field of entity `{entity}` is mapped to key `{key}`"
                )));
            }

            if let FieldRule::Polymorphic(rule) = &rule {
                verify_polymorphic(rule, &name, entity)?;
            }

            properties.insert(name, rule);
        }

        Ok(ObjectMapping {
            entity: self.entity,
            properties,
            ignored_properties: self.ignored_properties,
        })
    }
}

fn verify_polymorphic(rule: &PolymorphicRule, field: &str, entity: &str) -> Result<()> {
    if rule.variants().is_empty() {
        return Err(Error::invalid_mapping(format!(
            "polymorphic field `{field}` of entity `{entity}` has no variants"
        )));
    }

    let mut tags = HashSet::new();
    let mut seen = Vec::with_capacity(rule.variants().len());

    for variant in rule.variants() {
        let mapping = variant.mapping();

        if seen.contains(&mapping.entity.type_id) {
            return Err(Error::invalid_mapping(format!(
                "polymorphic field `{field}` of entity `{entity}` declares entity `{}` twice",
                mapping.entity_name()
            )));
        }
        seen.push(mapping.entity.type_id);

        if let Discriminator::Key(key) = rule.discriminator() {
            if !tags.insert(variant.tag()) {
                return Err(Error::invalid_mapping(format!(
                    "polymorphic field `{field}` of entity `{entity}` uses tag `{}` twice",
                    variant.tag()
                )));
            }

            if mapping.external_keys().any(|external| external == key) {
                return Err(Error::invalid_mapping(format!(
                    "entity `{}` maps a field to key `{key}`, which holds the variant tag",
                    mapping.entity_name()
                )));
            }
        }
    }

    if let Discriminator::Shape = rule.discriminator() {
        verify_shapes_distinct(rule, field, entity)?;
    }

    Ok(())
}

/// No variant's external keys may be contained in another variant's keys.
fn verify_shapes_distinct(rule: &PolymorphicRule, field: &str, entity: &str) -> Result<()> {
    let shapes: Vec<HashSet<&str>> = rule
        .variants()
        .iter()
        .map(|variant| variant.mapping().external_keys().collect())
        .collect();

    for (i, shape) in shapes.iter().enumerate() {
        for (j, other) in shapes.iter().enumerate() {
            if i != j && shape.is_subset(other) {
                return Err(Error::invalid_mapping(format!(
                    "polymorphic field `{field}` of entity `{entity}` cannot tell entity `{}` \
                     from entity `{}` by shape",
                    rule.variants()[i].mapping().entity_name(),
                    rule.variants()[j].mapping().entity_name(),
                )));
            }
        }
    }

    Ok(())
}

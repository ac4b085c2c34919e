use super::map_scalar;

use reshape_core::mapping::{LeafRule, PolymorphicRule, Variant};
use reshape_core::{
    Discriminator, Entity, Error, FieldRule, FieldValue, ObjectMapping, Result, Value, ValueObject,
};

/// Rebuilds an entity from `object` as described by `mapping`.
///
/// Starts from a blank instance and assigns every mapped field. Keys of
/// `object` that no rule reads are left alone, and ignored fields keep
/// whatever the constructor gave them.
pub(crate) fn reverse_transform(
    mapping: &ObjectMapping,
    object: &ValueObject,
) -> Result<Box<dyn Entity>> {
    let entity_name = mapping.entity_name();
    tracing::trace!(entity = entity_name, "reverse transforming object");

    let mut entity = mapping.instantiate();

    for (name, rule) in mapping.properties() {
        let key = rule.external_key(name);

        let Some(value) = object.get(key) else {
            tracing::debug!(entity = entity_name, key, "mapped key missing in object");
            return Err(Error::property_not_found_in_object(key, object.clone()));
        };

        let value = reverse_field(rule, value, name, entity_name)?;
        entity.set_field(name, value)?;
    }

    Ok(entity)
}

fn reverse_field(rule: &FieldRule, value: &Value, name: &str, entity: &str) -> Result<FieldValue> {
    match rule {
        FieldRule::Leaf(rule) => reverse_leaf(rule, value, name, entity),
        FieldRule::Nested(rule) => reverse_embedded(value, name, entity, &|object| {
            reverse_transform(rule.mapping(), object)
        }),
        FieldRule::Polymorphic(rule) => reverse_embedded(value, name, entity, &|object| {
            let variant = resolve_variant(rule, object)?;
            reverse_transform(variant.mapping(), object)
        }),
    }
}

fn reverse_leaf(rule: &LeafRule, value: &Value, name: &str, entity: &str) -> Result<FieldValue> {
    let value = match rule.get_converter() {
        Some(converter) => map_scalar(value.clone(), &|value| converter.reverse_transform(value))
            .map_err(|e| e.context(Error::could_not_assign_property_value(name, entity)))?,
        None => value.clone(),
    };

    Ok(FieldValue::Value(value))
}

/// Walks a value holding plain objects, rebuilding each one with `f` and
/// keeping list structure and nulls as they are.
fn reverse_embedded(
    value: &Value,
    name: &str,
    entity: &str,
    f: &dyn Fn(&ValueObject) -> Result<Box<dyn Entity>>,
) -> Result<FieldValue> {
    match value {
        Value::Object(object) => f(object).map(FieldValue::Entity),
        Value::List(items) => items
            .iter()
            .map(|item| reverse_embedded(item, name, entity, f))
            .collect::<Result<_>>()
            .map(FieldValue::List),
        Value::Null => Ok(FieldValue::null()),
        value => Err(Error::type_conversion(value.clone(), "Object")
            .context(Error::could_not_assign_property_value(name, entity))),
    }
}

fn resolve_variant<'a>(rule: &'a PolymorphicRule, object: &ValueObject) -> Result<&'a Variant> {
    let found = match rule.discriminator() {
        Discriminator::Key(key) => {
            let Some(tag) = object.get(key) else {
                return Err(Error::property_not_found_in_object(
                    key.as_str(),
                    object.clone(),
                ));
            };

            rule.variants()
                .iter()
                .find(|variant| tag.as_str() == Some(variant.tag()))
        }
        Discriminator::Shape => rule.variants().iter().find(|variant| {
            variant
                .mapping()
                .external_keys()
                .all(|key| object.contains_key(key))
        }),
    };

    found.ok_or_else(|| {
        tracing::debug!(object = %object, "no variant matches object");
        Error::variant_not_resolved(object.clone())
    })
}

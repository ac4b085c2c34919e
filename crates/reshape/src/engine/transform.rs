use super::map_scalar;

use reshape_core::mapping::{LeafRule, PolymorphicRule};
use reshape_core::util::difference;
use reshape_core::{
    err, Discriminator, Entity, Error, Field, FieldRule, ObjectMapping, Result, Value, ValueObject,
};

/// Converts `entity` into a plain object as described by `mapping`.
///
/// Nested rules recurse; the completeness check runs at every level once the
/// entity's own rules have been applied.
pub(crate) fn transform(mapping: &ObjectMapping, entity: &dyn Entity) -> Result<ValueObject> {
    let entity_name = mapping.entity_name();
    tracing::trace!(entity = entity_name, "transforming entity");

    let mut object = ValueObject::with_capacity(mapping.properties().len());
    let mut consumed = Vec::with_capacity(mapping.properties().len());

    for (name, rule) in mapping.properties() {
        let Some(field) = entity.field(name) else {
            tracing::debug!(
                entity = entity_name,
                property = name,
                "mapped property missing on entity"
            );
            return Err(Error::property_not_found_on_entity(name, entity_name));
        };

        let value = transform_field(rule, field, name, entity_name)?;
        object.insert(rule.external_key(name), value);
        consumed.push(name);
    }

    verify_complete(mapping, entity, &consumed)?;

    Ok(object)
}

fn verify_complete(mapping: &ObjectMapping, entity: &dyn Entity, consumed: &[&str]) -> Result<()> {
    let unmapped = difference(&entity.field_names(), consumed);
    let unmapped = difference(&unmapped, mapping.ignored_properties());

    if unmapped.is_empty() {
        return Ok(());
    }

    tracing::debug!(
        entity = mapping.entity_name(),
        unmapped = ?unmapped,
        "entity has unmapped properties"
    );

    Err(Error::properties_not_mapped(
        unmapped.into_iter().map(String::from).collect(),
        mapping.entity_name(),
    ))
}

fn transform_field(rule: &FieldRule, field: Field<'_>, name: &str, entity: &str) -> Result<Value> {
    match rule {
        FieldRule::Leaf(rule) => transform_leaf(rule, field, name, entity),
        FieldRule::Nested(rule) => transform_embedded(field, name, entity, &|embedded| {
            transform(rule.mapping(), embedded).map(Value::Object)
        }),
        FieldRule::Polymorphic(rule) => transform_embedded(field, name, entity, &|embedded| {
            transform_variant(rule, embedded, name, entity)
        }),
    }
}

fn transform_leaf(rule: &LeafRule, field: Field<'_>, name: &str, entity: &str) -> Result<Value> {
    let Field::Value(value) = field else {
        return Err(Error::invalid_mapping(format!(
            "field `{name}` of entity `{entity}` holds embedded entities but is mapped as a scalar"
        )));
    };

    match rule.get_converter() {
        Some(converter) => map_scalar(value, &|value| converter.transform(value)).map_err(|e| {
            e.context(err!(
                "failed to convert property `{name}` on entity `{entity}`"
            ))
        }),
        None => Ok(value),
    }
}

/// Walks a field holding embedded entities, applying `f` to each one and
/// keeping list structure and nulls as they are.
fn transform_embedded(
    field: Field<'_>,
    name: &str,
    entity: &str,
    f: &dyn Fn(&dyn Entity) -> Result<Value>,
) -> Result<Value> {
    match field {
        Field::Entity(embedded) => f(embedded),
        Field::List(items) => items
            .into_iter()
            .map(|item| transform_embedded(item, name, entity, f))
            .collect::<Result<_>>()
            .map(Value::List),
        Field::Value(Value::Null) => Ok(Value::Null),
        Field::Value(value) => Err(Error::invalid_mapping(format!(
            "field `{name}` of entity `{entity}` holds a {} but is mapped as an embedded entity",
            value.type_name()
        ))),
    }
}

fn transform_variant(
    rule: &PolymorphicRule,
    embedded: &dyn Entity,
    name: &str,
    entity: &str,
) -> Result<Value> {
    let Some(variant) = rule
        .variants()
        .iter()
        .find(|variant| variant.mapping().targets(embedded))
    else {
        return Err(Error::invalid_mapping(format!(
            "entity `{}` is not a declared variant of field `{name}` on entity `{entity}`",
            embedded.entity_name()
        )));
    };

    let object = transform(variant.mapping(), embedded)?;

    let object = match rule.discriminator() {
        Discriminator::Shape => object,
        Discriminator::Key(key) => {
            let mut tagged = ValueObject::with_capacity(object.len() + 1);
            tagged.insert(key.as_str(), variant.tag());
            tagged.extend(object);
            tagged
        }
    };

    Ok(Value::Object(object))
}

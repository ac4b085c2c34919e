use crate::{Value, ValueObject};

/// Removes every key holding [`Value::Null`], at any depth.
///
/// Recurses into nested objects and into objects held by lists. List
/// elements themselves are never removed, so a `Null` or a string inside a
/// list stays where it is.
pub fn prune_null_values(object: &mut ValueObject) {
    object.retain(|_, value| !value.is_null());

    for value in object.values_mut() {
        prune_value(value);
    }
}

fn prune_value(value: &mut Value) {
    match value {
        Value::Object(object) => prune_null_values(object),
        Value::List(items) => {
            for item in items {
                prune_value(item);
            }
        }
        _ => {}
    }
}

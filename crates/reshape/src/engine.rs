mod reverse;
pub(crate) use reverse::reverse_transform;

mod transform;
pub(crate) use transform::transform;

use reshape_core::{Result, Value};

/// Applies `f` to a scalar, element-wise over lists. `Null` is never handed
/// to `f`, so optional fields pass through converters untouched.
fn map_scalar(value: Value, f: &dyn Fn(Value) -> Result<Value>) -> Result<Value> {
    match value {
        Value::Null => Ok(Value::Null),
        Value::List(items) => items
            .into_iter()
            .map(|item| map_scalar(item, f))
            .collect::<Result<_>>()
            .map(Value::List),
        value => f(value),
    }
}

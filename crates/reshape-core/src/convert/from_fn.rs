use super::Converter;
use crate::{Result, Value};

use std::fmt;

/// A converter built from a pair of closures. See [`from_fn`].
#[derive(Clone)]
pub struct FromFn<F, R> {
    transform: F,
    reverse: R,
}

/// Builds a converter from a forward and a reverse function.
///
/// ```
/// use reshape_core::{convert, Converter, Value};
///
/// let cents = convert::from_fn(
///     |v| Ok(Value::I64(v.into_i64()? * 100)),
///     |v| Ok(Value::I64(v.into_i64()? / 100)),
/// );
///
/// assert_eq!(cents.transform(Value::I64(3)).unwrap(), Value::I64(300));
/// ```
pub fn from_fn<F, R>(transform: F, reverse: R) -> FromFn<F, R>
where
    F: Fn(Value) -> Result<Value> + Send + Sync,
    R: Fn(Value) -> Result<Value> + Send + Sync,
{
    FromFn { transform, reverse }
}

impl<F, R> Converter for FromFn<F, R>
where
    F: Fn(Value) -> Result<Value> + Send + Sync,
    R: Fn(Value) -> Result<Value> + Send + Sync,
{
    fn transform(&self, value: Value) -> Result<Value> {
        (self.transform)(value)
    }

    fn reverse_transform(&self, value: Value) -> Result<Value> {
        (self.reverse)(value)
    }
}

impl<F, R> fmt::Debug for FromFn<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

//! Scalar converters: symmetric pairs of functions translating one field's
//! native value to and from its external representation.

mod date_time;
pub use date_time::DateTimeToString;

mod from_fn;
pub use from_fn::{from_fn, FromFn};

mod uuid;
pub use self::uuid::UuidToString;

use crate::{Result, Value};
use std::fmt;

/// Converts a single scalar in both directions.
///
/// Implementations must be pure and deterministic, and must round-trip:
/// `reverse_transform(transform(v)?)?` equals `v` for every legal `v`. The
/// engine shares converters between threads and never calls them with
/// `Null`.
pub trait Converter: Send + Sync + fmt::Debug {
    /// Converts a native value to its external representation.
    fn transform(&self, value: Value) -> Result<Value>;

    /// Converts an external representation back to the native value.
    fn reverse_transform(&self, value: Value) -> Result<Value>;
}

//! Sample domain shared by the functional tests: a small blog and a product
//! catalogue, plus the mapping declarations used to store them.

pub mod entity;

mod identifier;
pub use identifier::Identifier;


use chrono::{DateTime, SubsecRound, Utc};

/// The current time at the millisecond precision timestamps survive a
/// round trip with.
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

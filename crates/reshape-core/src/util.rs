//! Helpers shared by the mapping engine.

mod diff;
pub use diff::difference;

mod prune;
pub use prune::prune_null_values;

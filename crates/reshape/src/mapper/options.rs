/// Tunes the output of a [`Mapper`](super::Mapper).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MapperOptions {
    /// Emit keys whose value is null. When `false`, null-valued keys are
    /// pruned from the output at every depth.
    pub expose_null_values: bool,
}

impl Default for MapperOptions {
    fn default() -> Self {
        MapperOptions {
            expose_null_values: true,
        }
    }
}

impl MapperOptions {
    pub fn expose_null_values(mut self, expose: bool) -> Self {
        self.expose_null_values = expose;
        self
    }
}

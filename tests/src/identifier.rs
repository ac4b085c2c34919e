use reshape::{bail, ScalarField, Value};

use std::fmt;

/// A validated version 4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier(uuid::Uuid);

impl Identifier {
    pub fn new() -> Identifier {
        Identifier(uuid::Uuid::new_v4())
    }

    pub fn parse(value: &str) -> reshape::Result<Identifier> {
        Identifier::from_uuid(uuid::Uuid::parse_str(value)?)
    }

    pub fn from_uuid(uuid: uuid::Uuid) -> reshape::Result<Identifier> {
        if uuid.get_version_num() != 4 {
            bail!("value `{uuid}` is not a valid v4 uuid");
        }

        Ok(Identifier(uuid))
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::new()
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl ScalarField for Identifier {
    fn to_value(&self) -> Value {
        Value::Uuid(self.0)
    }

    fn from_value(value: Value) -> reshape::Result<Self> {
        Identifier::from_uuid(value.into_uuid()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_v4() {
        let id = Identifier::new();
        assert_eq!(Identifier::parse(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_other_versions() {
        let err = Identifier::parse("6ba7b810-9dad-11d1-80b4-00c04fd430c8").unwrap_err();
        assert!(err.to_string().contains("not a valid v4 uuid"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Identifier::parse("not-a-uuid").is_err());
    }
}

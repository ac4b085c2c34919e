use super::Converter;
use crate::{Error, Result, Value};

/// Converts a v4 identifier to its hyphenated string form.
///
/// The reverse direction rejects malformed strings and identifiers of any
/// other version.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidToString;

impl Converter for UuidToString {
    fn transform(&self, value: Value) -> Result<Value> {
        let id = value.into_uuid()?;
        Ok(Value::String(id.hyphenated().to_string()))
    }

    fn reverse_transform(&self, value: Value) -> Result<Value> {
        let Value::String(text) = value else {
            return Err(Error::type_conversion(value, "Uuid"));
        };

        let id = uuid::Uuid::parse_str(&text)?;

        if id.get_version_num() != 4 {
            crate::bail!("value '{text}' is not a valid v4 uuid");
        }

        Ok(Value::Uuid(id))
    }
}

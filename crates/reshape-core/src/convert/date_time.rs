use super::Converter;
use crate::{Error, Result, Value};

use chrono::{DateTime, SecondsFormat, Utc};

/// Converts a UTC timestamp to an ISO-8601 string with millisecond
/// precision, e.g. `2021-03-04T05:06:07.890Z`.
///
/// Only timestamps already truncated to milliseconds are accepted; anything
/// finer would not survive the round trip.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeToString;

impl Converter for DateTimeToString {
    /// Fails with a type conversion error for sub-millisecond timestamps.
    fn transform(&self, value: Value) -> Result<Value> {
        let ts = value.into_date_time()?;

        if ts.timestamp_subsec_nanos() % 1_000_000 != 0 {
            return Err(Error::type_conversion(
                Value::DateTime(ts),
                "millisecond-precision DateTime<Utc>",
            ));
        }

        Ok(Value::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true)))
    }

    fn reverse_transform(&self, value: Value) -> Result<Value> {
        let Value::String(text) = value else {
            return Err(Error::type_conversion(value, "DateTime<Utc>"));
        };

        let ts = DateTime::parse_from_rfc3339(&text)?;
        Ok(Value::DateTime(ts.with_timezone(&Utc)))
    }
}

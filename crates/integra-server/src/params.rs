//! Query-string helpers

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Deserialize an optional parameter, treating a blank value as absent.
///
/// Form-style clients send unset fields as `?idReserva=`; those must behave
/// like a missing parameter rather than fail to parse.
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(raw) if !raw.trim().is_empty() => {
            raw.trim().parse().map(Some).map_err(de::Error::custom)
        },
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use serde_json::json;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_as_none")]
        id: Option<i32>,
        #[serde(default, deserialize_with = "empty_as_none")]
        since: Option<NaiveDateTime>,
    }

    fn parse(value: serde_json::Value) -> serde_json::Result<Params> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_blank_values_are_absent() {
        let params = parse(json!({ "id": "", "since": "  " })).unwrap();
        assert!(params.id.is_none());
        assert!(params.since.is_none());

        let params = parse(json!({})).unwrap();
        assert!(params.id.is_none());
    }

    #[test]
    fn test_present_values_parse() {
        let params = parse(json!({ "id": " 7 ", "since": "2024-06-15T10:00:00" })).unwrap();
        assert_eq!(params.id, Some(7));
        assert_eq!(params.since.unwrap().to_string(), "2024-06-15 10:00:00");
    }

    #[test]
    fn test_malformed_value_is_an_error() {
        assert!(parse(json!({ "id": "abc" })).is_err());
        assert!(parse(json!({ "since": "yesterday" })).is_err());
    }
}

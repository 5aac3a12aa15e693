//! Lenient deserializers for query-string filters.
//!
//! Filter structs flatten [`PaginationParams`](crate::PaginationParams), which
//! makes serde buffer every value as a string. These helpers parse those
//! strings and treat an empty value (`?categoryId=`) as absent.

use serde::{Deserialize, Deserializer, de::Error};

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

pub fn deserialize_optional_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_empty(deserializer)? {
        Some(s) => s.parse::<i64>().map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

pub fn deserialize_optional_i16<'de, D>(deserializer: D) -> Result<Option<i16>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_empty(deserializer)? {
        Some(s) => s.parse::<i16>().map(Some).map_err(D::Error::custom),
        None => Ok(None),
    }
}

/// Accepts `true`/`false` and `1`/`0`.
pub fn deserialize_optional_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match non_empty(deserializer)?.as_deref() {
        Some("true") | Some("1") => Ok(Some(true)),
        Some("false") | Some("0") => Ok(Some(false)),
        Some(other) => Err(D::Error::custom(format!(
            "invalid boolean `{}`",
            other
        ))),
        None => Ok(None),
    }
}

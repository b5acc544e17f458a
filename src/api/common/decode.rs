//
//  roblox-cloud
//  api/common/decode.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! JSON decoding helpers shared by the cloud and legacy wire types.
//!
//! Roblox serializes numeric identifiers inconsistently: the cloud API sends
//! `"id": "123"` while the legacy APIs send `"id": 123`, and counts flip
//! between the two depending on the endpoint. The `serde` helpers here accept
//! both encodings and expose identifiers as canonical strings.
//!
//! Resource relations arrive as paths (`"users/156"`,
//! `"groups/7/roles/99"`); [`strip_relation_prefix`] and
//! [`last_path_segment`] reduce them to bare identifiers.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::ApiError;

/// Relation prefix used by the cloud API for user references.
pub const USERS_PREFIX: &str = "users/";

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Text(String),
    Number(serde_json::Number),
}

impl NumberOrString {
    fn into_canonical(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }

    fn into_count<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            Self::Number(number) => number
                .as_u64()
                .ok_or_else(|| E::custom(format!("invalid count: {}", number))),
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| E::custom(format!("invalid count: {:?}", text))),
        }
    }
}

/// Decodes a raw response body into `T`.
///
/// Structural mismatches are returned as [`ApiError::Decode`] unchanged.
///
/// # Example
///
/// ```rust
/// use roblox_cloud::api::common::decode;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Page { #[serde(rename = "nextPageToken")] next: String }
///
/// let page: Page = decode(r#"{"nextPageToken": "abc"}"#).unwrap();
/// assert_eq!(page.next, "abc");
/// ```
pub fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, ApiError> {
    Ok(serde_json::from_str(raw)?)
}

/// Deserializes an identifier sent as either a JSON string or number.
///
/// Use with `#[serde(deserialize_with = "string_or_number")]`.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer).map(NumberOrString::into_canonical)
}

/// Optional variant of [`string_or_number`]; `null` and absent become `None`.
///
/// Pair with `#[serde(default)]` so a missing field is accepted.
pub fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(NumberOrString::into_canonical))
}

/// Deserializes a non-negative count sent as either a JSON string or number.
pub fn count<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    NumberOrString::deserialize(deserializer)?.into_count()
}

/// Optional variant of [`count`].
pub fn optional_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(value) => value.into_count().map(Some),
        None => Ok(None),
    }
}

/// Deserializes a `"users/<id>"` relation into the bare user id.
///
/// `null`, absent and empty values become `None`.
pub fn user_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .filter(|v| !v.is_empty())
        .map(|v| strip_relation_prefix(&v, USERS_PREFIX).to_string()))
}

/// Strips a single leading relation prefix such as `"users/"`.
///
/// Values without the prefix pass through unchanged, so applying this twice
/// gives the same result as applying it once.
///
/// # Example
///
/// ```rust
/// use roblox_cloud::api::common::{strip_relation_prefix, USERS_PREFIX};
///
/// assert_eq!(strip_relation_prefix("users/42", USERS_PREFIX), "42");
/// assert_eq!(strip_relation_prefix("42", USERS_PREFIX), "42");
/// ```
pub fn strip_relation_prefix<'a>(value: &'a str, prefix: &str) -> &'a str {
    value.strip_prefix(prefix).unwrap_or(value)
}

/// Returns the trailing identifier of a resource path.
///
/// `"groups/7/roles/99"` yields `"99"`; a bare `"99"` is returned as is.
pub fn last_path_segment(value: &str) -> &str {
    value.rsplit('/').next().unwrap_or(value)
}

/// Parses an RFC3339 timestamp, returning `None` when it is malformed.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Deserializes an optional RFC3339 timestamp, tolerating malformed values.
///
/// Malformed timestamps decode to `None` instead of failing the record.
pub fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(parse_timestamp))
}

/// Rejects an empty identifier argument with the given error.
pub(crate) fn require<'a>(value: &'a str, err: ApiError) -> Result<&'a str, ApiError> {
    if value.is_empty() {
        Err(err)
    } else {
        Ok(value)
    }
}

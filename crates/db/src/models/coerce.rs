//! Lenient integer fields for request bodies.
//!
//! Accepts a JSON integer or a string holding one (`1` or `"1"`), the way a
//! form `<select>` value would be posted. Anything else (`"cat1"`, `1.5`,
//! `true`) is a deserialization error.

use std::fmt::Display;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum IntOrString<T> {
    Int(T),
    Text(String),
}

/// `deserialize_with` target for integer fields that tolerate numeric strings.
pub fn integer<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match IntOrString::<T>::deserialize(deserializer)? {
        IntOrString::Int(value) => Ok(value),
        IntOrString::Text(text) => text
            .trim()
            .parse::<T>()
            .map_err(|e| de::Error::custom(format!("invalid integer {text:?}: {e}"))),
    }
}

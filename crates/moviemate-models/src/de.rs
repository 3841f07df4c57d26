//! Lenient (de)serializers for store payloads.
//!
//! The store is free to send ids and ratings as JSON numbers or strings, and
//! form-style payloads carry blank strings instead of nulls. These helpers fold
//! all of that into `String` / `Option<String>` / `u32` / [`WatchStatus`].

use serde::{de, Deserialize, Deserializer, Serializer};
use serde_json::Number;

use crate::status::WatchStatus;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    /// Kept as a JSON number so `8.0` stays `"8.0"`
    Num(Number),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::Str(s) => s,
            StringOrNumber::Num(n) => n.to_string(),
        }
    }
}

/// Opaque id, accepted as either a number or a string
pub fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(StringOrNumber::deserialize(deserializer)?.into_string())
}

/// Optional text where `null`, a missing field and `""` all mean absent
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Optional free-form numeric text (ratings), accepted as a number or a string
pub fn optional_numeric_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<StringOrNumber>::deserialize(deserializer)?;
    Ok(value
        .map(StringOrNumber::into_string)
        .filter(|s| !s.trim().is_empty()))
}

/// Non-negative count; `null` reads as zero, numeric strings are parsed
pub fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(0),
        Some(StringOrNumber::Num(n)) => count_from_number(&n),
        Some(StringOrNumber::Str(s)) if s.trim().is_empty() => Ok(0),
        Some(StringOrNumber::Str(s)) => s.trim().parse::<u32>().map_err(de::Error::custom),
    }
}

fn count_from_number<E: de::Error>(n: &Number) -> Result<u32, E> {
    if let Some(u) = n.as_u64() {
        return u32::try_from(u).map_err(E::custom);
    }
    match n.as_f64() {
        Some(f) if f >= 0.0 && f.fract() == 0.0 && f <= f64::from(u32::MAX) => Ok(f as u32),
        _ => Err(E::custom(format!("invalid episode count {}", n))),
    }
}

/// Watch status; `null` and `""` read as the default, names ignore case.
/// An unrecognised name also falls back to the default so one odd record
/// cannot fail a whole list.
pub fn status<'de, D>(deserializer: D) -> Result<WatchStatus, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value
        .as_deref()
        .and_then(|s| s.parse::<WatchStatus>().ok())
        .unwrap_or_default())
}

/// Absent text goes over the wire as `""`, the way form submissions send it
pub fn empty_if_none<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}

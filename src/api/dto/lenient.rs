//! Forgiving field deserializers for request bodies.
//!
//! Clients send loosely typed JSON: numbers where strings are expected, a
//! single value where a list is expected. These helpers cast such values
//! the same way for every DTO instead of rejecting the whole body.

use serde::{Deserialize, Deserializer};

/// JSON scalar accepted in place of a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Str(s) => s,
            Scalar::Int(i) => i.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<Scalar>),
    One(Scalar),
}

impl OneOrMany {
    fn into_strings(self) -> Vec<String> {
        match self {
            OneOrMany::Many(values) => values.into_iter().map(Scalar::into_string).collect(),
            OneOrMany::One(value) => vec![value.into_string()],
        }
    }
}

/// `null` or a scalar, cast to a string.
pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(Scalar::into_string))
}

/// Like [`optional_string`] but keeps an explicit `null` apart from an
/// absent field. Pair with `#[serde(default)]`: absent is `None`, `null` is
/// `Some(None)`.
pub fn nullable_string<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    optional_string(deserializer).map(Some)
}

/// A list or a single scalar; `null` reads as an empty list.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?
        .map(OneOrMany::into_strings)
        .unwrap_or_default())
}

/// [`string_list`] for update bodies, where an absent field stays `None`.
pub fn optional_string_list<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    string_list(deserializer).map(Some)
}

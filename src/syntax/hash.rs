use std::collections::BTreeMap;
use thiserror::Error;

/// Decoded hash: field name -> raw type token. Sorted by key so iteration is
/// stable across calls.
pub type TypeMap = BTreeMap<String, String>;

/// A hash string that cannot be decoded. Only the `types` field is affected;
/// sibling fields are still validated.
#[derive(Debug, Error)]
pub enum MalformedHash {
    #[error("malformed JSON hash: {0}")]
    Json(#[from] serde_json::Error),

    #[error("hash field {0:?} missing value")]
    MissingValue(String),
}

/// Parse a hash string into a field -> type token map.
///
/// Two syntaxes are accepted:
///
///   string form:  `field1:type,field2:type,field3:type:option`
///   JSON form:    `{"field1":"type","field3":"type:option"}`
///
/// Each string segment is split on its first ':' only; whatever follows
/// (including further ':') is the token. Repeated names keep the last value.
pub fn parse_hash(value: &str) -> Result<TypeMap, MalformedHash> {
    let mut out = TypeMap::new();
    if value.is_empty() {
        return Ok(out);
    }

    if value.trim_start().starts_with('{') {
        out = serde_json::from_str(value)?;
        return Ok(out);
    }

    for segment in value.split(',') {
        let (name, token) = segment
            .split_once(':')
            .ok_or_else(|| MalformedHash::MissingValue(segment.to_string()))?;
        out.insert(name.to_string(), token.to_string());
    }

    Ok(out)
}

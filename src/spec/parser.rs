//! Parser filter configuration.
//!
//! YAML shape:
//!
//!   parser:
//!     key_name: message
//!     reserve_data: true
//!     parse:
//!       type: multi_format
//!       patterns:
//!         - format: nginx
//!         - format: json
//!           types: "code:integer,ts:time:unixtime"

use serde::{Deserialize, Deserializer};

/// An explicit `null` (or a bare `key:` in YAML) decodes to the zero value.
fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reserve_time: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub reserve_data: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub remove_key_name_field: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub replace_invalid_sequence: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub inject_key_prefix: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub hash_value_field: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub emit_invalid_record_to_error: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub parse: ParseSection,

    /// Deprecated list form; rejected when non-empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub parsers: Vec<ParseSection>,
}

/// Top-level `<parse>` block. The kind is selected by `type`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseSection {
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub parser_type: String,

    /// Only meaningful inside `patterns`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,

    #[serde(flatten)]
    pub options: ParseOptions,

    /// Alternatives tried in order by `multi_format`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub patterns: Vec<SingleParseSection>,
}

/// One alternative inside a `multi_format` parser. The kind is selected by
/// `format`; `type` must stay empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SingleParseSection {
    #[serde(default, rename = "type", deserialize_with = "null_as_default")]
    pub parser_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,

    #[serde(flatten)]
    pub options: ParseOptions,
}

/// Fields shared by both section shapes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseOptions {
    #[serde(default, deserialize_with = "null_as_default")]
    pub expression: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub time_key: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub null_value_pattern: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub null_empty_string: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub estimate_current_event: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub keep_time_key: bool,

    /// Hash string, e.g. "code:integer,ts:time:unixtime".
    #[serde(default, deserialize_with = "null_as_default")]
    pub types: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub time_format: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub time_type: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub local_time: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub utc: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub format_firstline: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub delimiter: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub delimiter_pattern: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub label_delimiter: String,

    /// `formatN` lines of a multiline parser.
    #[serde(default, deserialize_with = "null_as_default")]
    pub multiline: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_fields_decode_to_zero_values() {
        let config: ParserConfig = serde_yaml::from_str(
            r#"
key_name:
reserve_data: ~
parse:
  type: json
  expression:
  types: null
  utc: null
  multiline:
  patterns:
    - format: nginx
      time_type: ~
"#,
        )
        .unwrap();

        assert_eq!(config.key_name, "");
        assert!(!config.reserve_data);
        assert_eq!(config.parse.parser_type, "json");
        assert_eq!(config.parse.options.expression, "");
        assert_eq!(config.parse.options.types, "");
        assert!(!config.parse.options.utc);
        assert!(config.parse.options.multiline.is_empty());
        assert_eq!(config.parse.patterns[0].options.time_type, "");
    }

    #[test]
    fn json_null_decodes_too() {
        let section: ParseSection =
            serde_json::from_str(r#"{"type": null, "expression": null, "patterns": null}"#).unwrap();
        assert_eq!(section.parser_type, "");
        assert!(section.patterns.is_empty());
    }
}

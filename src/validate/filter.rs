//! Per-plugin dispatch for one filter entry.

use crate::field::{ErrorList, Path, ValidationError};
use crate::spec::{Filter, FilterPlugin, ParserConfig, StdOutFilterConfig};
use crate::validate::Validator;

impl Validator {
    /// Validate every populated plugin of `filter`. Kinds without a validator
    /// are accepted as-is.
    pub fn validate_filter(&self, path: &Path, filter: &Filter, errs: &mut ErrorList) {
        for plugin in filter.plugins() {
            let path = path.child(plugin.kind());
            match plugin {
                FilterPlugin::StdOut(c) => self.validate_stdout(&path, c, errs),
                FilterPlugin::Parser(c) => self.validate_parser_config(&path, c, errs),
                FilterPlugin::Opaque { .. } => {}
            }
        }
    }

    /// `output_type` is passed through to the collector; there is no closed
    /// list to check it against.
    pub fn validate_stdout(&self, _path: &Path, _config: &StdOutFilterConfig, _errs: &mut ErrorList) {}

    pub fn validate_parser_config(&self, path: &Path, config: &ParserConfig, errs: &mut ErrorList) {
        // key_name, the reserve/remove/replace flags, inject_key_prefix,
        // hash_value_field and emit_invalid_record_to_error take any value.
        self.validate_parse_section(&path.child("parse"), &config.parse, errs);

        if !config.parsers.is_empty() {
            errs.push(ValidationError::forbidden(
                path.child("parsers"),
                config.parsers.len(),
                "'parsers' field is deprecated, use 'parse'",
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::ErrorKind;

    fn check(json: &str) -> Vec<String> {
        let filter: Filter = serde_json::from_str(json).unwrap();
        let mut errs = ErrorList::new();
        Validator::new().validate_filter(&Path::new("f"), &filter, &mut errs);
        errs.iter().map(|e| e.path.to_string()).collect()
    }

    #[test]
    fn stdout_always_passes() {
        assert!(check(r#"{"stdout": {"output_type": "anything"}}"#).is_empty());
    }

    #[test]
    fn unimplemented_kinds_are_skipped() {
        assert!(check(r#"{"grep": {"regexp": [{"key": 1}]}, "throttle": "??"}"#).is_empty());
    }

    #[test]
    fn parser_errors_are_rooted_at_parser() {
        assert_eq!(
            check(r#"{"stdout": {}, "parser": {"parse": {"type": "xml"}}}"#),
            vec!["f.parser.parse.type"]
        );
    }

    #[test]
    fn empty_parser_block_needs_a_type() {
        assert_eq!(check(r#"{"parser": {}}"#), vec!["f.parser.parse.type"]);
    }

    #[test]
    fn deprecated_parsers_list() {
        let filter: Filter = serde_json::from_str(
            r#"{"parser": {"parse": {"type": "json"}, "parsers": [{"type": "json"}]}}"#,
        )
        .unwrap();
        let mut errs = ErrorList::new();
        Validator::new().validate_filter(&Path::new("f"), &filter, &mut errs);

        assert_eq!(errs.len(), 1);
        let err = errs.iter().next().unwrap();
        assert_eq!(err.path.to_string(), "f.parser.parsers");
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn unvalidated_parser_options_pass() {
        assert!(
            check(
                r#"{"parser": {
                    "key_name": "",
                    "reserve_time": true,
                    "reserve_data": true,
                    "remove_key_name_field": true,
                    "replace_invalid_sequence": true,
                    "inject_key_prefix": "x.",
                    "hash_value_field": "parsed",
                    "emit_invalid_record_to_error": true,
                    "parse": {"type": "json", "time_key": "ts", "time_format": "%iso8601", "timezone": "+09:00"}
                }}"#
            )
            .is_empty()
        );
    }
}

//! Parse sections: the top-level `parse` block and its nested `patterns`.
//!
//! Both shapes share one rule body. They differ only in which field carries
//! the kind (`type` at top level, `format` in patterns) and in the vocabulary
//! that kind is drawn from; patterns cannot nest another `multi_format`.

use crate::field::{ErrorList, Path, ValidationError};
use crate::spec::{ParseOptions, ParseSection, SingleParseSection};
use crate::syntax::parse_hash;
use crate::validate::Validator;
use crate::validate::types::validate_type_map;

pub const PARSER_TYPES: &[&str] = &[
    "apache2",
    "apache_error",
    "nginx",
    "syslog",
    "csv",
    "tsv",
    "ltsv",
    "json",
    "multiline",
    "none",
    "logfmt",
    "multi_format",
    "regexp",
];

pub const PATTERN_FORMATS: &[&str] = &[
    "apache2",
    "apache_error",
    "nginx",
    "syslog",
    "csv",
    "tsv",
    "json",
    "none",
    "logfmt",
    "regexp",
];

pub const TIME_TYPES: &[&str] = &["float", "unixtime", "string", ""];

/// Kind value that makes `expression` mandatory. Note this is "regex", not the
/// "regexp" listed in [`PARSER_TYPES`]: a "regexp" section never requires an
/// expression and is refused one.
pub const EXPRESSION_KIND: &str = "regex";

const MULTILINE: &str = "multiline";
const LTSV: &str = "ltsv";

/// Which of the two section shapes is being checked.
///
/// At top level `type` selects the kind from [`PARSER_TYPES`] and `format` must
/// be empty. In a pattern `format` selects the kind from [`PATTERN_FORMATS`]
/// and `type` must be empty.
struct Selector<'a> {
    parser_type: &'a str,
    format: &'a str,
    nested: bool,
}

impl Selector<'_> {
    fn kind(&self) -> &str {
        if self.nested { self.format } else { self.parser_type }
    }
}

impl Validator {
    pub fn validate_parse_section(&self, path: &Path, section: &ParseSection, errs: &mut ErrorList) {
        let selector = Selector {
            parser_type: &section.parser_type,
            format: &section.format,
            nested: false,
        };
        self.validate_section(path, &selector, &section.options, errs);

        let patterns = path.child("patterns");
        for (i, pattern) in section.patterns.iter().enumerate() {
            self.validate_single_parse_section(&patterns.index(i), pattern, errs);
        }
    }

    pub fn validate_single_parse_section(
        &self,
        path: &Path,
        section: &SingleParseSection,
        errs: &mut ErrorList,
    ) {
        let selector = Selector {
            parser_type: &section.parser_type,
            format: &section.format,
            nested: true,
        };
        self.validate_section(path, &selector, &section.options, errs);
    }

    /// Rules run in field order: type, expression, null_value_pattern, types,
    /// time_type, local_time, utc, format, then the ltsv and multiline fields.
    fn validate_section(
        &self,
        path: &Path,
        selector: &Selector<'_>,
        opts: &ParseOptions,
        errs: &mut ErrorList,
    ) {
        let kind = selector.kind();

        if !selector.nested && !PARSER_TYPES.contains(&kind) {
            errs.push(ValidationError::not_supported(
                path.child("type"),
                kind,
                PARSER_TYPES,
            ));
        }
        // Reported with the pattern's `format` as the value.
        if selector.nested && !selector.parser_type.is_empty() {
            errs.push(ValidationError::invalid(
                path.child("type"),
                selector.format,
                "'type' cannot be specified in patterns, use 'format'",
            ));
        }

        // expression
        if opts.expression.is_empty() && kind == EXPRESSION_KIND {
            errs.push(ValidationError::required(
                path.child("expression"),
                "'expression' is required for regexp parsers",
            ));
        }
        if !opts.expression.is_empty() && kind != EXPRESSION_KIND {
            errs.push(ValidationError::forbidden(
                path.child("expression"),
                opts.expression.as_str(),
                "'expression' can only be specified for regexp parsers",
            ));
        }
        self.check_regex(path.child("expression"), &opts.expression, errs);

        self.check_regex(path.child("null_value_pattern"), &opts.null_value_pattern, errs);

        // types: a malformed hash only skips the per-type checks.
        match parse_hash(&opts.types) {
            Ok(types) => validate_type_map(&path.child("types"), &types, errs),
            Err(e) => errs.push(ValidationError::invalid(
                path.child("types"),
                opts.types.as_str(),
                e.to_string(),
            )),
        }

        if !TIME_TYPES.contains(&opts.time_type.as_str()) {
            errs.push(ValidationError::not_supported(
                path.child("time_type"),
                opts.time_type.as_str(),
                TIME_TYPES,
            ));
        }

        // One violation, reported on both fields.
        if opts.local_time && opts.utc {
            errs.push(ValidationError::invalid(
                path.child("local_time"),
                opts.local_time,
                "'local_time' and 'utc' cannot both be true",
            ));
            errs.push(ValidationError::invalid(
                path.child("utc"),
                opts.utc,
                "'local_time' and 'utc' cannot both be true",
            ));
        }

        if !selector.nested && !selector.format.is_empty() {
            errs.push(ValidationError::forbidden(
                path.child("format"),
                selector.format,
                "'format' can only be specified in patterns",
            ));
        }
        if selector.nested && !PATTERN_FORMATS.contains(&kind) {
            errs.push(ValidationError::not_supported(
                path.child("format"),
                kind,
                PATTERN_FORMATS,
            ));
        }

        if !opts.format_firstline.is_empty() && kind != MULTILINE {
            errs.push(ValidationError::forbidden(
                path.child("format_firstline"),
                opts.format_firstline.as_str(),
                "'format_firstline' can only be specified for multiline parsers",
            ));
        }
        self.check_regex(path.child("format_firstline"), &opts.format_firstline, errs);

        if !opts.delimiter.is_empty() && kind != LTSV {
            errs.push(ValidationError::forbidden(
                path.child("delimiter"),
                opts.delimiter.as_str(),
                "'delimiter' can only be specified for ltsv parsers",
            ));
        }
        if !opts.delimiter.is_empty() && !opts.delimiter_pattern.is_empty() {
            errs.push(ValidationError::forbidden(
                path.child("delimiter"),
                opts.delimiter.as_str(),
                "'delimiter' can not be specified when a 'delimiter_pattern' is provided",
            ));
        }

        if !opts.delimiter_pattern.is_empty() && kind != LTSV {
            errs.push(ValidationError::forbidden(
                path.child("delimiter_pattern"),
                opts.delimiter_pattern.as_str(),
                "'delimiter_pattern' can only be specified for ltsv parsers",
            ));
        }
        self.check_regex(path.child("delimiter_pattern"), &opts.delimiter_pattern, errs);

        if !opts.label_delimiter.is_empty() && kind != LTSV {
            errs.push(ValidationError::forbidden(
                path.child("label_delimiter"),
                opts.label_delimiter.as_str(),
                "'label_delimiter' can only be specified for ltsv parsers",
            ));
        }

        let multiline = path.child("multiline");
        if !opts.multiline.is_empty() && kind != MULTILINE {
            errs.push(ValidationError::forbidden(
                multiline.clone(),
                opts.multiline.clone(),
                "'multiline' can only be specified for multiline parsers",
            ));
        }
        for (i, line) in opts.multiline.iter().enumerate() {
            self.check_regex(multiline.index(i), line, errs);
        }
    }
}

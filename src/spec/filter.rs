//! Filter entries of a flow. Each entry populates (usually) one plugin kind.

use crate::spec::parser::ParserConfig;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StdOutFilterConfig {
    #[serde(default)]
    pub output_type: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub stdout: Option<StdOutFilterConfig>,

    #[serde(default)]
    pub parser: Option<ParserConfig>,

    // Kinds below are carried opaquely; nothing validates them yet.
    #[serde(default)]
    pub tag_normaliser: Option<Value>,

    #[serde(default)]
    pub dedot: Option<Value>,

    #[serde(default)]
    pub record_transformer: Option<Value>,

    #[serde(default)]
    pub record_modifier: Option<Value>,

    #[serde(default)]
    pub geoip: Option<Value>,

    #[serde(default)]
    pub concat: Option<Value>,

    #[serde(default, rename = "detectExceptions")]
    pub detect_exceptions: Option<Value>,

    #[serde(default)]
    pub grep: Option<Value>,

    #[serde(default)]
    pub prometheus: Option<Value>,

    #[serde(default)]
    pub throttle: Option<Value>,
}

/// A populated plugin payload, borrowed from its [`Filter`].
#[derive(Debug, Clone, Copy)]
pub enum FilterPlugin<'a> {
    StdOut(&'a StdOutFilterConfig),
    Parser(&'a ParserConfig),
    Opaque { kind: &'static str, config: &'a Value },
}

impl FilterPlugin<'_> {
    /// Wire name of the plugin kind, used as the path segment.
    pub fn kind(&self) -> &'static str {
        match self {
            FilterPlugin::StdOut(_) => "stdout",
            FilterPlugin::Parser(_) => "parser",
            FilterPlugin::Opaque { kind, .. } => *kind,
        }
    }
}

impl Filter {
    /// Populated payloads in declaration order.
    pub fn plugins(&self) -> Vec<FilterPlugin<'_>> {
        let mut out = Vec::new();
        if let Some(c) = &self.stdout {
            out.push(FilterPlugin::StdOut(c));
        }
        if let Some(c) = &self.parser {
            out.push(FilterPlugin::Parser(c));
        }

        let opaque: [(&'static str, &Option<Value>); 10] = [
            ("tag_normaliser", &self.tag_normaliser),
            ("dedot", &self.dedot),
            ("record_transformer", &self.record_transformer),
            ("record_modifier", &self.record_modifier),
            ("geoip", &self.geoip),
            ("concat", &self.concat),
            ("detectExceptions", &self.detect_exceptions),
            ("grep", &self.grep),
            ("prometheus", &self.prometheus),
            ("throttle", &self.throttle),
        ];
        for (kind, config) in opaque {
            if let Some(config) = config {
                out.push(FilterPlugin::Opaque { kind, config });
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plugins_follow_declaration_order() {
        let filter: Filter = serde_json::from_str(
            r#"{"grep": {"regexp": []}, "parser": {}, "stdout": {}}"#,
        )
        .unwrap();

        let kinds: Vec<&str> = filter.plugins().iter().map(|p| p.kind()).collect();
        assert_eq!(kinds, vec!["stdout", "parser", "grep"]);
    }

    #[test]
    fn empty_filter_has_no_plugins() {
        let filter: Filter = serde_json::from_str("{}").unwrap();
        assert!(filter.plugins().is_empty());
    }
}

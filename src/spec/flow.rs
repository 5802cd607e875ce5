//! Flow resource: metadata plus a spec holding the ordered filter list.
//!
//! YAML shape:
//!
//!   metadata:
//!     name: nginx-flow
//!     namespace: web
//!   spec:
//!     filters:
//!       - parser: { parse: { type: nginx } }
//!     localOutputRefs: [loki]

use crate::spec::filter::Filter;
use anyhow::Context;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Flow {
    #[serde(default)]
    pub metadata: ObjectMeta,

    #[serde(default)]
    pub spec: FlowSpec,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowSpec {
    #[serde(default)]
    pub selectors: BTreeMap<String, String>,

    #[serde(default)]
    pub filters: Vec<Filter>,

    #[serde(default)]
    pub local_output_refs: Vec<String>,

    #[serde(default)]
    pub global_output_refs: Vec<String>,
}

impl Flow {
    /// Read a flow from disk. `.json` files are decoded as JSON, anything
    /// else as YAML.
    pub fn from_file(path: &Path) -> anyhow::Result<Flow> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read flow file {}", path.display()))?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            serde_json::from_str(&text).with_context(|| format!("decode JSON {}", path.display()))
        } else {
            Flow::from_yaml(&text).with_context(|| format!("decode YAML {}", path.display()))
        }
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Flow> {
        Ok(serde_yaml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_yaml_with_defaults() {
        let flow = Flow::from_yaml(
            r#"
metadata:
  name: web
spec:
  localOutputRefs: [loki]
  filters:
    - stdout: {}
    - parser:
        key_name: log
        parse:
          type: regexp
          expression: /^(?<msg>.*)$/
"#,
        )
        .unwrap();

        assert_eq!(flow.metadata.name, "web");
        assert_eq!(flow.spec.local_output_refs, vec!["loki"]);
        assert_eq!(flow.spec.filters.len(), 2);

        let parser = flow.spec.filters[1].parser.as_ref().unwrap();
        assert_eq!(parser.key_name, "log");
        assert_eq!(parser.parse.parser_type, "regexp");
        assert_eq!(parser.parse.options.expression, "/^(?<msg>.*)$/");
        assert!(!parser.parse.options.utc);
    }

    #[test]
    fn empty_document_is_empty_flow() {
        let flow = Flow::from_yaml("{}").unwrap();
        assert!(flow.spec.filters.is_empty());
    }
}

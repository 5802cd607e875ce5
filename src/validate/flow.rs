use crate::field::{ErrorList, Path};
use crate::spec::FlowSpec;
use crate::validate::Validator;

impl Validator {
    /// Filters are validated in order; list length and duplicates are not
    /// checked.
    pub fn validate_flow_spec(&self, path: &Path, spec: &FlowSpec, errs: &mut ErrorList) {
        let filters = path.child("filters");
        for (i, filter) in spec.filters.iter().enumerate() {
            self.validate_filter(&filters.index(i), filter, errs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Flow;
    use pretty_assertions::assert_eq;

    #[test]
    fn no_filters_is_valid() {
        let flow = Flow::from_yaml("spec: {filters: []}").unwrap();
        assert!(Validator::new().validate(&flow).is_empty());
    }

    #[test]
    fn errors_carry_the_filter_index() {
        let flow = Flow::from_yaml(
            r#"
spec:
  filters:
    - stdout: {}
    - parser: { parse: { type: nginx } }
    - parser: { parse: { type: json, local_time: true, utc: true } }
"#,
        )
        .unwrap();

        let errs = Validator::new().validate(&flow);
        let paths: Vec<String> = errs.iter().map(|e| e.path.to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "spec.filters[2].parser.parse.local_time",
                "spec.filters[2].parser.parse.utc",
            ]
        );
    }
}

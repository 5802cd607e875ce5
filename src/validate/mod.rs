//! Flow validation.
//!
//! A single depth-first pass: flow -> filters[i] -> plugin -> parse section
//! -> patterns[j]. Every level appends to one [`ErrorList`]; nothing returns
//! early, so a single call reports every violation in the document.

pub mod filter;
pub mod flow;
pub mod section;
pub mod types;

use crate::field::{ErrorList, Path, ValidationError};
use crate::spec::Flow;
use crate::syntax::{AcceptAll, RegexCheck};

pub struct Validator {
    regex: Box<dyn RegexCheck + Send + Sync>,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator that accepts every regex-shaped value.
    pub fn new() -> Self {
        Self::with_regex_check(AcceptAll)
    }

    pub fn with_regex_check(check: impl RegexCheck + Send + Sync + 'static) -> Self {
        Self {
            regex: Box::new(check),
        }
    }

    /// Validate the flow's spec. Paths are rooted at `spec`.
    pub fn validate(&self, flow: &Flow) -> ErrorList {
        let mut errs = ErrorList::new();
        self.validate_flow_spec(&Path::new("spec"), &flow.spec, &mut errs);
        errs
    }

    fn check_regex(&self, path: Path, pattern: &str, errs: &mut ErrorList) {
        if let Err(reason) = self.regex.check(pattern) {
            errs.push(ValidationError::invalid(path, pattern, reason));
        }
    }
}

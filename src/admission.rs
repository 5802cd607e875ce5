//! Admission review for flow resources.
//!
//! Create and update are validated; delete is always admitted.

use crate::field::ErrorList;
use crate::spec::Flow;
use crate::validate::Validator;
use clap::ValueEnum;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Error)]
pub enum AdmissionError {
    #[error("flow {name:?} rejected: {errors}")]
    Rejected { name: String, errors: ErrorList },
}

pub struct Admission {
    validator: Validator,
}

impl Admission {
    pub fn new(validator: Validator) -> Self {
        Self { validator }
    }

    pub fn review(&self, op: Operation, flow: &Flow) -> Result<(), AdmissionError> {
        let name = flow.metadata.name.as_str();
        tracing::info!(operation = %op, name, "validate {}", op);

        if op == Operation::Delete {
            return Ok(());
        }

        self.validator.validate(flow).into_result().map_err(|errors| {
            tracing::warn!(name, count = errors.len(), "flow rejected");
            AdmissionError::Rejected {
                name: name.to_string(),
                errors,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BAD: &str = r#"
metadata: { name: bad }
spec:
  filters:
    - parser: { parse: { type: ltsv, delimiter: ",", delimiter_pattern: "/,/" } }
"#;

    fn admission() -> Admission {
        Admission::new(Validator::new())
    }

    #[test]
    fn create_and_update_reject_invalid_flow() {
        let flow = Flow::from_yaml(BAD).unwrap();
        for op in [Operation::Create, Operation::Update] {
            let err = admission().review(op, &flow).unwrap_err();
            let AdmissionError::Rejected { name, errors } = err;
            assert_eq!(name, "bad");
            assert_eq!(errors.len(), 1);
            assert_eq!(
                errors.iter().next().unwrap().path.to_string(),
                "spec.filters[0].parser.parse.delimiter"
            );
        }
    }

    #[test]
    fn delete_is_never_validated() {
        let flow = Flow::from_yaml(BAD).unwrap();
        assert!(admission().review(Operation::Delete, &flow).is_ok());
    }

    #[test]
    fn rejection_message_lists_errors_verbatim() {
        let flow = Flow::from_yaml(BAD).unwrap();
        let err = admission().review(Operation::Create, &flow).unwrap_err();
        assert_eq!(
            err.to_string(),
            "flow \"bad\" rejected: spec.filters[0].parser.parse.delimiter: Forbidden: \
             'delimiter' can not be specified when a 'delimiter_pattern' is provided"
        );
    }
}

//! Validation for log-forwarding flow resources.
//!
//! A flow is an ordered list of filters; parser filters carry a `parse`
//! section whose legal fields depend on its kind. [`validate::Validator`]
//! walks the whole resource once and returns every violation it finds,
//! each addressed by a [`field::Path`] such as
//! `spec.filters[0].parser.parse.patterns[1].format`.

pub mod admission;
pub mod field;
pub mod spec;
pub mod syntax;
pub mod validate;

pub type Result<T> = anyhow::Result<T>;

pub use admission::{Admission, AdmissionError, Operation};
pub use field::{ErrorKind, ErrorList, Path, ValidationError};
pub use spec::Flow;
pub use validate::Validator;

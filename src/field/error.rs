//! Validation errors and the ordered list they accumulate into.

use crate::field::Path;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A conditionally mandatory field is absent.
    Required,
    /// A field is present but not allowed in this context.
    Forbidden,
    /// A field holds an unacceptable value.
    Invalid,
    /// A value falls outside a closed set of choices.
    NotSupported,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "Required value",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::Invalid => "Invalid value",
            ErrorKind::NotSupported => "Unsupported value",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub path: Path,
    pub kind: ErrorKind,
    pub value: Value,
    pub detail: String,
}

impl ValidationError {
    pub fn required(path: Path, detail: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::Required,
            value: Value::Null,
            detail: detail.into(),
        }
    }

    pub fn forbidden(path: Path, value: impl Into<Value>, detail: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::Forbidden,
            value: value.into(),
            detail: detail.into(),
        }
    }

    pub fn invalid(path: Path, value: impl Into<Value>, detail: impl Into<String>) -> Self {
        Self {
            path,
            kind: ErrorKind::Invalid,
            value: value.into(),
            detail: detail.into(),
        }
    }

    /// `allowed` is rendered sorted, so callers may pass it in any order.
    pub fn not_supported(path: Path, value: impl Into<Value>, allowed: &[&str]) -> Self {
        Self {
            path,
            kind: ErrorKind::NotSupported,
            value: value.into(),
            detail: format!("supported values: {}", quote_all(allowed)),
        }
    }

    /// Like [`ValidationError::not_supported`] with a leading context sentence.
    pub fn not_supported_in(
        path: Path,
        value: impl Into<Value>,
        allowed: &[&str],
        context: &str,
    ) -> Self {
        let mut err = Self::not_supported(path, value, allowed);
        err.detail = format!("{}, {}", context, err.detail);
        err
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ErrorKind::Required | ErrorKind::Forbidden => {
                write!(f, "{}: {}: {}", self.path, self.kind.as_str(), self.detail)
            }
            ErrorKind::Invalid | ErrorKind::NotSupported => write!(
                f,
                "{}: {}: {}: {}",
                self.path,
                self.kind.as_str(),
                self.value,
                self.detail
            ),
        }
    }
}

fn quote_all(values: &[&str]) -> String {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    sorted
        .iter()
        .map(|v| format!("{:?}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Ordered, append-only error collection. Insertion order is discovery order
/// and nothing is deduplicated.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ErrorList(Vec<ValidationError>);

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.0.push(err);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Empty list means success; anything else is handed back as the failure.
    pub fn into_result(self) -> Result<(), ErrorList> {
        if self.0.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.len() == 1 {
            return write!(f, "{}", self.0[0]);
        }
        write!(f, "[")?;
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", err)?;
        }
        write!(f, "]")
    }
}

impl std::error::Error for ErrorList {}

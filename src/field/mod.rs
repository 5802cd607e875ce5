//! Field addressing and error accumulation shared by every validator.

pub mod error;
pub mod path;

pub use error::{ErrorKind, ErrorList, ValidationError};
pub use path::{Path, Segment};

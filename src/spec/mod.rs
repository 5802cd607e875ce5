//! Spec layer: the deserialized flow resource.
//!
//! Everything here is plain data built once by serde; validation lives in
//! `crate::validate` and never mutates these values.

pub mod filter;
pub mod flow;
pub mod parser;

pub use filter::{Filter, FilterPlugin, StdOutFilterConfig};
pub use flow::{Flow, FlowSpec, ObjectMeta};
pub use parser::{ParseOptions, ParseSection, ParserConfig, SingleParseSection};

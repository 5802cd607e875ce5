//! Collector-side syntaxes that appear inside parser configuration: the hash
//! (field type) mini-language and regex-shaped fields.

pub mod hash;
pub mod pattern;

pub use hash::{MalformedHash, TypeMap, parse_hash};
pub use pattern::{AcceptAll, CompiledRegexCheck, RegexCheck};

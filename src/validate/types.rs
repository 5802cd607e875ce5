//! Field type tokens from a decoded hash.

use crate::field::{ErrorList, Path, ValidationError};
use crate::syntax::TypeMap;

pub const FIELD_TYPES: &[&str] = &["string", "integer", "float", "bool", "time", "array"];

/// Check every `name -> token` pair. A token is `type[:option]`; only the part
/// before the first ':' is checked against [`FIELD_TYPES`].
pub fn validate_type_map(path: &Path, types: &TypeMap, errs: &mut ErrorList) {
    for (name, token) in types {
        // The `time:<format>` option goes to the collector's time parser
        // unchecked.
        let type_name = token.split_once(':').map_or(token.as_str(), |(t, _)| t);

        if !FIELD_TYPES.contains(&type_name) {
            errs.push(ValidationError::not_supported_in(
                path.key(name),
                type_name,
                FIELD_TYPES,
                &format!("field {:?} using unsupported type {:?}", name, type_name),
            ));
        }
    }
}

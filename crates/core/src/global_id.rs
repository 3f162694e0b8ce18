//! Global object identifiers.
//!
//! A global id is the standard base64 encoding of `"TypeName:localId"`, unique
//! across every type in a schema. It shares the encoding of pagination cursors
//! but nothing else: a global id names an object, a cursor names a position.

use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::{GlobalIdError, GlobalIdResult};

/// Type name and type-local id recovered from a global id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedGlobalId {
    pub type_name: String,
    pub id: String,
}

impl fmt::Display for ResolvedGlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.type_name, self.id)
    }
}

/// Build the global id for an object of `type_name` with local `id`.
pub fn to_global_id(type_name: &str, id: &str) -> String {
    STANDARD.encode(format!("{type_name}:{id}"))
}

/// Recover the type name and local id from a global id.
///
/// The split happens at the first `:`, so local ids may themselves contain
/// colons.
pub fn from_global_id(global_id: &str) -> GlobalIdResult<ResolvedGlobalId> {
    let bytes = STANDARD
        .decode(global_id)
        .map_err(|e| GlobalIdError::InvalidEncoding(e.to_string()))?;
    let text = String::from_utf8(bytes).map_err(|_| GlobalIdError::InvalidUtf8)?;

    let (type_name, id) = text
        .split_once(':')
        .ok_or_else(|| GlobalIdError::MissingSeparator(text.clone()))?;

    Ok(ResolvedGlobalId {
        type_name: type_name.to_string(),
        id: id.to_string(),
    })
}

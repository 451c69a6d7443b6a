//! Compound identifiers: `container/object`.
//!
//! Names are joined with a single `/` and no escaping. A container or object
//! name that itself contains `/` therefore cannot be split back apart, and
//! [`split_id`] rejects it rather than guessing.

use crate::errors::{ObjectError, ObjectResult};

/// Separator between container and object name.
pub const ID_SEPARATOR: char = '/';

/// Join a container and object name into a compound identifier.
pub fn compose_id(container: &str, name: &str) -> String {
    format!("{}{}{}", container, ID_SEPARATOR, name)
}

/// Pick the identifier for an operation.
///
/// An explicit `id` wins and is used verbatim. Otherwise both `container` and
/// `name` must be set and are joined.
pub fn resolve_id(id: &str, container: &str, name: &str) -> ObjectResult<String> {
    if !id.is_empty() {
        return Ok(id.to_string());
    }
    // Stricter than rejecting only a fully empty pair: `c1/` and `/f.txt` fail too.
    if container.is_empty() || name.is_empty() {
        return Err(ObjectError::validation(
            "Either ID or Name and Container must be set",
        ));
    }
    Ok(compose_id(container, name))
}

/// Split a compound identifier into `(container, name)`.
///
/// Fails unless the identifier holds exactly one separator.
pub fn split_id(id: &str) -> ObjectResult<(String, String)> {
    let mut parts = id.split(ID_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(container), Some(name), None) => Ok((container.to_string(), name.to_string())),
        _ => Err(ObjectError::validation(format!(
            "Unknown ID specified: {}",
            id
        ))),
    }
}

//! Input validation.
//!
//! Checks secret names client-side so a bad row fails before any request.

use crate::error::{Result, ValidationError};

/// Validate an Actions secret name.
///
/// Names must match `^[A-Za-z_][A-Za-z0-9_]*$`:
/// - ASCII letters, digits and underscore only
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError::InvalidSecretName` if the name is rejected.
pub fn validate_secret_name(name: &str) -> Result<()> {
    let mut chars = name.chars();

    let valid = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        }
        _ => false,
    };

    if !valid {
        return Err(ValidationError::InvalidSecretName {
            name: name.to_string(),
        }
        .into());
    }

    Ok(())
}

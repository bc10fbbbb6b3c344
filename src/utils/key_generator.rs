//! Short key generation and validation utilities.
//!
//! Public keys and secret-key suffixes are drawn from the 36-symbol alphabet
//! `A-Z0-9`. Uniqueness against storage is handled by
//! [`crate::application::services::UrlService::generate_unique_key`].

use crate::error::AppError;
use rand::Rng;

/// Symbols used for generated keys.
pub const KEY_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of a generated public key.
pub const DEFAULT_KEY_LENGTH: usize = 5;

/// Length of the random suffix appended to a key to form its secret key.
pub const SECRET_SUFFIX_LENGTH: usize = 8;

/// Longest accepted caller-provided key.
const MAX_CUSTOM_KEY_LENGTH: usize = 64;

/// Keys that would shadow a fixed route segment.
const RESERVED_KEYS: &[&str] = &["url", "peek", "admin", "health", "docs"];

/// Generates a random key of `length` characters from [`KEY_ALPHABET`].
///
/// No uniqueness guarantee.
pub fn generate_key(length: usize) -> String {
    let mut rng = rand::rng();

    (0..length)
        .map(|_| {
            let idx = rng.random_range(0..KEY_ALPHABET.len());
            KEY_ALPHABET[idx] as char
        })
        .collect()
}

/// Builds the secret key for `key`: `<key>_<8 random symbols>`.
pub fn generate_secret_key(key: &str) -> String {
    format!("{}_{}", key, generate_key(SECRET_SUFFIX_LENGTH))
}

/// Validates a caller-provided key.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_key(key: &str) -> Result<(), AppError> {
    if key.is_empty() || key.len() > MAX_CUSTOM_KEY_LENGTH {
        return Err(AppError::bad_request(format!(
            "Key must be 1-{MAX_CUSTOM_KEY_LENGTH} characters"
        )));
    }

    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "Key can only contain letters, digits, hyphens and underscores",
        ));
    }

    if RESERVED_KEYS.iter().any(|r| r.eq_ignore_ascii_case(key)) {
        return Err(AppError::bad_request(format!("Key '{key}' is reserved")));
    }

    Ok(())
}

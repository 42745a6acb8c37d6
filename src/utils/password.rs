//! Salted password hashing for protected links.
//!
//! Stored form is `hex(salt)$hex(sha256(salt || password))`. The salt is a
//! fresh 16-byte random value per password, so identical passwords hash to
//! different stored values.

use rand::RngCore;
use sha2::{Digest, Sha256};

const SALT_BYTES: usize = 16;

/// Hashes a plaintext password with a fresh random salt.
pub fn hash_password(password: &str) -> String {
    let mut salt = [0u8; SALT_BYTES];
    rand::rng().fill_bytes(&mut salt);

    format!(
        "{}${}",
        hex::encode(salt),
        hex::encode(digest(&salt, password))
    )
}

/// Verifies a supplied password against a stored `salt$digest` value.
///
/// Malformed stored values never verify. The digest comparison runs in
/// constant time; it does not exit on the first differing byte.
pub fn verify_password(stored: &str, supplied: &str) -> bool {
    let Some((salt_hex, expected_hex)) = stored.split_once('$') else {
        return false;
    };
    let Ok(salt) = hex::decode(salt_hex) else {
        return false;
    };
    let Ok(expected) = hex::decode(expected_hex) else {
        return false;
    };

    let actual = digest(&salt, supplied);
    if expected.len() != actual.len() {
        return false;
    }

    expected
        .iter()
        .zip(actual.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

fn digest(salt: &[u8], password: &str) -> sha2::digest::Output<Sha256> {
    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(password.as_bytes());
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let stored = hash_password("secret123");
        assert!(verify_password(&stored, "secret123"));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let stored = hash_password("secret123");
        assert!(!verify_password(&stored, "secret124"));
        assert!(!verify_password(&stored, ""));
    }

    #[test]
    fn test_stored_value_is_not_plaintext() {
        let stored = hash_password("secret123");
        assert!(!stored.contains("secret123"));
    }

    #[test]
    fn test_salts_differ_between_hashes() {
        let a = hash_password("same-password");
        let b = hash_password("same-password");
        assert_ne!(a, b);
        assert!(verify_password(&a, "same-password"));
        assert!(verify_password(&b, "same-password"));
    }

    #[test]
    fn test_malformed_stored_value_never_verifies() {
        assert!(!verify_password("", "anything"));
        assert!(!verify_password("no-separator", "anything"));
        assert!(!verify_password("zz$notsalt", "anything"));

        let stored = hash_password("secret123");
        let (salt_hex, digest_hex) = stored.split_once('$').unwrap();
        // Non-hex digest.
        assert!(!verify_password(&format!("{salt_hex}$zz"), "secret123"));
        // Truncated digest must fail the length check, not partially match.
        let truncated = &digest_hex[..digest_hex.len() / 2];
        assert!(!verify_password(
            &format!("{salt_hex}${truncated}"),
            "secret123"
        ));
    }
}

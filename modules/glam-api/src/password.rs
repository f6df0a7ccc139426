use bcrypt::DEFAULT_COST;

use glam_common::messages;

/// Hash a plaintext password with bcrypt at the default cost.
pub fn hash(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, DEFAULT_COST)
}

/// Check a plaintext password against a stored bcrypt hash. A missing or
/// malformed hash counts as a mismatch.
pub fn verify(plain: &str, hashed: &str) -> bool {
    bcrypt::verify(plain, hashed).unwrap_or(false)
}

/// Enforce the account password rule: at least 8 characters with at least
/// one digit, one lowercase and one uppercase letter.
pub fn validate(plain: &str) -> Result<(), &'static str> {
    let long_enough = plain.chars().count() >= 8;
    let has_digit = plain.chars().any(|c| c.is_ascii_digit());
    let has_lower = plain.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = plain.chars().any(|c| c.is_ascii_uppercase());

    if long_enough && has_digit && has_lower && has_upper {
        Ok(())
    } else {
        Err(messages::PASSWORD_ERROR)
    }
}

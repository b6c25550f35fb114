use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as _;
use argon2::password_hash::PasswordVerifier as _;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// One-way credential hasher (Argon2id, random salt per hash).
///
/// Stateless apart from the algorithm parameters, so a single instance can be
/// shared across any number of concurrent requests.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
}

impl PasswordHasher {
    /// Create a hasher with the library's recommended Argon2id parameters.
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password for storage.
    ///
    /// Two calls with the same plaintext produce different PHC strings because
    /// each call draws a fresh salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Salt generation or the Argon2 computation failed
    pub fn hash(&self, plaintext: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Check a plaintext against a PHC string produced by [`hash`](Self::hash).
    ///
    /// # Errors
    /// * `InvalidHash` - The stored value is not a PHC string
    pub fn verify(&self, plaintext: &str, hashed: &str) -> Result<bool, PasswordError> {
        let parsed =
            PasswordHash::new(hashed).map_err(|e| PasswordError::InvalidHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok())
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("Passw0rd").expect("Failed to hash password");

        assert!(hash.starts_with("$argon2id$"));
        assert!(!hash.contains("Passw0rd"));
        assert!(hasher.verify("Passw0rd", &hash).expect("Failed to verify"));
        assert!(!hasher.verify("Passw0rd!", &hash).expect("Failed to verify"));
        assert!(!hasher.verify("", &hash).expect("Failed to verify"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();
        let first = hasher.hash("same-input-1").expect("Failed to hash password");
        let second = hasher.hash("same-input-1").expect("Failed to hash password");

        assert_ne!(first, second);
        assert!(hasher.verify("same-input-1", &first).unwrap());
        assert!(hasher.verify("same-input-1", &second).unwrap());
    }

    #[test]
    fn test_distinct_passwords_do_not_cross_verify() {
        let hasher = PasswordHasher::new();
        let passwords = ["alpha123", "alpha124", "Alpha123", "bravo999"];
        let hashes: Vec<String> = passwords
            .iter()
            .map(|p| hasher.hash(p).expect("Failed to hash password"))
            .collect();

        for (i, hash) in hashes.iter().enumerate() {
            for (j, password) in passwords.iter().enumerate() {
                assert_eq!(hasher.verify(password, hash).unwrap(), i == j);
            }
        }
    }

    #[test]
    fn test_verify_invalid_hash() {
        let hasher = PasswordHasher::new();
        let result = hasher.verify("password", "invalid_hash");
        assert!(matches!(result, Err(PasswordError::InvalidHash(_))));
    }
}

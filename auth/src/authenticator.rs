use std::sync::Arc;

use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and token
/// issuance.
///
/// Shares the process-wide [`TokenCodec`] with the request middleware so
/// that issued and validated tokens always use the same key.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: Arc<TokenCodec>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    /// Create a new authenticator sharing the given codec.
    pub fn new(token_codec: Arc<TokenCodec>) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec,
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a signed token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Account identifier for the token subject claim
    /// * `role` - Role token, embedded verbatim
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Stored hash is malformed
    /// * `JwtError` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: impl ToString,
        role: &str,
    ) -> Result<String, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        Ok(self.token_codec.issue(subject, role)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(
            b"test_secret_key_with_at_least_512_bits_of_entropy_for_hs512_use!",
        ))
    }

    #[test]
    fn test_authenticate_success() {
        let codec = codec();
        let authenticator = Authenticator::new(Arc::clone(&codec));

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let token = authenticator
            .authenticate(password, &hash, 42, "CLIENT")
            .expect("Authentication failed");

        assert!(codec.validate(&token));
        assert_eq!(codec.extract_subject(&token).unwrap(), "42");
        assert_eq!(codec.extract_role(&token).unwrap(), "CLIENT");
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(codec());

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, 42, "CLIENT");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_authenticate_malformed_hash_is_not_invalid_credentials() {
        let authenticator = Authenticator::new(codec());

        let result = authenticator.authenticate("password", "garbage", 42, "CLIENT");
        assert!(matches!(
            result,
            Err(AuthenticationError::PasswordError(_))
        ));
    }
}

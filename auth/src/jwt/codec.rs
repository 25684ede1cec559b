use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::JwtError;

/// Token codec for issuing and validating bearer tokens.
///
/// Signs with HS512 (HMAC-SHA-512). The key is process-wide, loaded once
/// at startup; tokens carry a fixed lifetime of 24 hours from issuance.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    lifetime: Duration,
}

impl TokenCodec {
    /// Create a new codec with a symmetric signing key.
    ///
    /// # Arguments
    /// * `secret` - Signing key; at least 512 bits of entropy recommended
    ///   for HS512. Load from configuration, never hard-code.
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS512,
            lifetime: Duration::hours(24),
        }
    }

    /// Override the token lifetime.
    ///
    /// The service keeps the 24 hour default; tests shorten it to
    /// exercise expiry without waiting.
    pub fn with_lifetime(mut self, lifetime: Duration) -> Self {
        self.lifetime = lifetime;
        self
    }

    /// Issue a signed token for a subject and role.
    ///
    /// The subject is embedded in its decimal string form; the role is
    /// embedded verbatim. Expiry is issue time plus the codec lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token signing failed
    pub fn issue(&self, subject: impl ToString, role: &str) -> Result<String, JwtError> {
        let claims = Claims::new(subject, role, self.lifetime);
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Check a token: true iff the signature verifies against the current
    /// key and the token is not expired.
    ///
    /// Malformed, mis-signed, and expired tokens all yield `false`; no
    /// error ever crosses this boundary.
    pub fn validate(&self, token: &str) -> bool {
        self.decode(token).is_ok()
    }

    /// Extract the subject claim.
    ///
    /// Defined only for tokens that already passed [`validate`](Self::validate);
    /// callers must validate first.
    pub fn extract_subject(&self, token: &str) -> Result<String, JwtError> {
        self.decode(token).map(|claims| claims.sub)
    }

    /// Extract the role claim.
    ///
    /// Defined only for tokens that already passed [`validate`](Self::validate);
    /// callers must validate first.
    pub fn extract_role(&self, token: &str) -> Result<String, JwtError> {
        self.decode(token).map(|claims| claims.role)
    }

    /// Decode and verify a token, returning its claims.
    ///
    /// # Errors
    /// * `TokenExpired` - The exp claim is in the past
    /// * `DecodingFailed` - Malformed token or signature mismatch
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        // A token is valid strictly while now < exp; no clock leeway.
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::DecodingFailed(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] =
        b"test_secret_key_with_at_least_512_bits_of_entropy_for_hs512_use!";

    #[test]
    fn test_issue_and_validate() {
        let codec = TokenCodec::new(SECRET);

        let token = codec.issue(42, "CLIENT").expect("Failed to issue token");
        assert!(!token.is_empty());
        assert!(codec.validate(&token));
    }

    #[test]
    fn test_subject_and_role_round_trip() {
        let codec = TokenCodec::new(SECRET);

        let token = codec.issue(42, "ADMIN").expect("Failed to issue token");
        assert!(codec.validate(&token));

        assert_eq!(codec.extract_subject(&token).unwrap(), "42");
        assert_eq!(codec.extract_role(&token).unwrap(), "ADMIN");
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let codec = TokenCodec::new(SECRET).with_lifetime(Duration::seconds(-30));

        let token = codec.issue(42, "CLIENT").expect("Failed to issue token");
        assert!(!codec.validate(&token));
        assert!(matches!(codec.decode(&token), Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_garbled_token_is_invalid() {
        let codec = TokenCodec::new(SECRET);

        assert!(!codec.validate("not.a.token"));
        assert!(!codec.validate(""));
    }

    #[test]
    fn test_wrong_key_is_invalid() {
        let codec = TokenCodec::new(SECRET);
        let other = TokenCodec::new(
            b"another_secret_key_with_at_least_512_bits_of_entropy_for_hs512!!",
        );

        let token = codec.issue(42, "CLIENT").expect("Failed to issue token");
        assert!(!other.validate(&token));
    }

    #[test]
    fn test_tampered_token_is_invalid() {
        let codec = TokenCodec::new(SECRET);

        let token = codec.issue(42, "CLIENT").expect("Failed to issue token");
        let mut tampered = token.clone();
        tampered.pop();

        assert!(!codec.validate(&tampered));
    }
}

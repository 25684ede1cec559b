use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Bearer token claims.
///
/// The payload is intentionally closed: subject, role, and expiry are
/// the only fields the service ever puts into a token. The subject is
/// the account id in its decimal string form; the role is copied
/// verbatim from the account at issuance time and never re-derived.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (account id, decimal string)
    pub sub: String,

    /// Role claim, uppercase token (ADMIN, EMPLOYEE, CLIENT, USER)
    pub role: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims expiring `lifetime` from now.
    ///
    /// # Arguments
    /// * `subject` - Account identifier (serialized with `ToString`)
    /// * `role` - Role token, stored verbatim
    /// * `lifetime` - Duration until the token expires
    pub fn new(subject: impl ToString, role: impl Into<String>, lifetime: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            role: role.into(),
            exp: (Utc::now() + lifetime).timestamp(),
        }
    }

    /// Check if the claims are expired at `current_timestamp`.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = Claims::new(42, "CLIENT", Duration::hours(24));

        assert_eq!(claims.sub, "42");
        assert_eq!(claims.role, "CLIENT");

        let now = Utc::now().timestamp();
        assert!(claims.exp >= now + 24 * 60 * 60 - 1);
        assert!(claims.exp <= now + 24 * 60 * 60 + 1);
    }

    #[test]
    fn test_subject_is_decimal_string() {
        let claims = Claims::new(9_007_199_254_740_991_i64, "ADMIN", Duration::hours(1));
        assert_eq!(claims.sub, "9007199254740991");
    }

    #[test]
    fn test_is_expired() {
        let claims = Claims {
            sub: "1".to_string(),
            role: "USER".to_string(),
            exp: 1000,
        };

        assert!(!claims.is_expired(999));
        assert!(!claims.is_expired(1000)); // exactly at expiration
        assert!(claims.is_expired(1001));
    }
}

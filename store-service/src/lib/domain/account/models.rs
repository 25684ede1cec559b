use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;

use crate::account::errors::AccountIdError;
use crate::account::errors::EmailError;

/// Account aggregate entity.
///
/// Represents a registered account. The password hash is the opaque PHC
/// string produced by the password hasher; the plaintext never reaches
/// this type.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub email: EmailAddress,
    pub password_hash: String,
    pub display_name: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Account unique identifier type.
///
/// Database-assigned; the decimal string form of this id is the token
/// subject claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Parse an account ID from its decimal string form.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a decimal integer
    pub fn from_string(s: &str) -> Result<Self, AccountIdError> {
        s.parse::<i64>()
            .map(AccountId)
            .map_err(|e| AccountIdError::InvalidFormat(e.to_string()))
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account role, closed set.
///
/// Stored as the uppercase token and carried verbatim in issued tokens.
/// `User` is the fallback for empty or unrecognized role strings at
/// registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Employee,
    Client,
    User,
}

impl Role {
    /// Normalize a raw role string.
    ///
    /// Case-insensitive; empty and unknown values fall back to `User`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_uppercase().as_str() {
            "ADMIN" => Role::Admin,
            "EMPLOYEE" => Role::Employee,
            "CLIENT" => Role::Client,
            _ => Role::User,
        }
    }

    /// The uppercase wire/storage form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Employee => "EMPLOYEE",
            Role::Client => "CLIENT",
            Role::User => "USER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Email address type
///
/// The login identifier. Validated against RFC 5322; compared
/// case-sensitively, exactly as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Per-request identity derived from a validated token.
///
/// Attached by the request identity middleware, consumed by the
/// authorization gate and by owner-scoped handlers. Never persisted and
/// never shared across requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub account_id: AccountId,
    pub role: Role,
}

/// Successful login outcome: the signed token plus the identifying
/// fields the client echoes back.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub token: String,
    pub account_id: AccountId,
    pub role: Role,
}

/// Command to register a new account with domain types.
#[derive(Debug)]
pub struct RegisterAccountCommand {
    pub email: EmailAddress,
    pub password: String,
    pub display_name: String,
    pub role: Role,
}

impl RegisterAccountCommand {
    /// Construct a new registration command.
    ///
    /// # Arguments
    /// * `email` - Validated login identifier
    /// * `password` - Plain text password (hashed by the service)
    /// * `display_name` - Human-readable name
    /// * `role` - Already-normalized role
    pub fn new(email: EmailAddress, password: String, display_name: String, role: Role) -> Self {
        Self {
            email,
            password,
            display_name,
            role,
        }
    }
}

/// A new account as handed to the repository: everything but the
/// database-assigned id and creation timestamp.
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: EmailAddress,
    pub password_hash: String,
    pub display_name: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_normalizes_case() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("Employee"), Role::Employee);
        assert_eq!(Role::parse("CLIENT"), Role::Client);
    }

    #[test]
    fn test_role_parse_falls_back_to_user() {
        assert_eq!(Role::parse(""), Role::User);
        assert_eq!(Role::parse("   "), Role::User);
        assert_eq!(Role::parse("superuser"), Role::User);
    }

    #[test]
    fn test_account_id_decimal_round_trip() {
        let id = AccountId(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(AccountId::from_string("42").unwrap(), id);
    }

    #[test]
    fn test_account_id_rejects_non_decimal() {
        assert!(AccountId::from_string("abc").is_err());
        assert!(AccountId::from_string("").is_err());
    }

    #[test]
    fn test_email_address_validation() {
        assert!(EmailAddress::new("a@x.com".to_string()).is_ok());
        assert!(EmailAddress::new("not-an-email".to_string()).is_err());
    }
}

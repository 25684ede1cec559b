//! Authentication utilities library
//!
//! Provides the authentication infrastructure for the store service:
//! - Password hashing (Argon2id)
//! - Bearer token issuance and validation (HS512, fixed lifetime)
//! - Authentication coordination (verify credentials, issue token)
//!
//! The service defines its own domain traits and adapts these
//! implementations; nothing in this crate knows about HTTP or storage.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Tokens
//! ```
//! use auth::TokenCodec;
//!
//! let codec = TokenCodec::new(b"secret_key_with_at_least_512_bits_of_entropy_for_hs512_signing!!");
//! let token = codec.issue(42, "CLIENT").unwrap();
//! assert!(codec.validate(&token));
//! assert_eq!(codec.extract_subject(&token).unwrap(), "42");
//! assert_eq!(codec.extract_role(&token).unwrap(), "CLIENT");
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use std::sync::Arc;
//! use auth::{Authenticator, TokenCodec};
//!
//! let codec = Arc::new(TokenCodec::new(b"secret_key_with_at_least_512_bits_of_entropy_for_hs512_signing!!"));
//! let auth = Authenticator::new(Arc::clone(&codec));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let token = auth.authenticate("password123", &hash, 42, "CLIENT").unwrap();
//! assert!(codec.validate(&token));
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use password::PasswordError;
pub use password::PasswordHasher;

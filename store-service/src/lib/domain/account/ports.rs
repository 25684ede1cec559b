use async_trait::async_trait;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AuthSession;
use crate::account::models::NewAccount;
use crate::account::models::RegisterAccountCommand;

/// Port for account domain service operations.
#[async_trait]
pub trait AccountServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// Hashes the password and stores the account. No token is issued at
    /// registration.
    ///
    /// # Errors
    /// * `AlreadyExists` - Login identifier is already registered
    /// * `Password` - Password hashing failed
    /// * `DatabaseError` - Database operation failed
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError>;

    /// Verify credentials and issue a signed token.
    ///
    /// Unknown login identifier and wrong password both fail with
    /// `InvalidCredentials`, with an identical message for the two
    /// causes.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown identifier or wrong password
    /// * `Password` - Stored hash is structurally invalid
    /// * `Token` - Token issuance failed
    /// * `DatabaseError` - Database operation failed
    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AccountError>;

    /// Retrieve all registered accounts.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError>;
}

/// Persistence operations for the account aggregate.
#[async_trait]
pub trait AccountRepository: Send + Sync + 'static {
    /// Persist a new account.
    ///
    /// Insertion and the duplicate check are one atomic operation: the
    /// unique constraint on the login identifier is the guard, so two
    /// concurrent registrations of the same email cannot both succeed.
    ///
    /// # Errors
    /// * `AlreadyExists` - Login identifier is already registered
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;

    /// Retrieve an account by login identifier (exact, case-sensitive).
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;

    /// Retrieve all accounts.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn list_all(&self) -> Result<Vec<Account>, AccountError>;
}

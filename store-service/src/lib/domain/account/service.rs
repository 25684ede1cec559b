use std::sync::Arc;

use async_trait::async_trait;
use auth::AuthenticationError;
use auth::Authenticator;

use crate::account::errors::AccountError;
use crate::account::models::Account;
use crate::account::models::AuthSession;
use crate::account::models::NewAccount;
use crate::account::models::RegisterAccountCommand;
use crate::account::ports::AccountRepository;
use crate::account::ports::AccountServicePort;

/// Domain service implementation for account operations: registration
/// and credential verification.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<Authenticator>,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    /// * `authenticator` - Password hashing + token issuance coordinator
    pub fn new(repository: Arc<AR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        let password_hash = self.authenticator.hash_password(&command.password)?;

        tracing::info!(email = %command.email, role = %command.role, "Registering account");

        // The duplicate-email check happens inside the insert: the unique
        // constraint decides, not a prior lookup.
        self.repository
            .create(NewAccount {
                email: command.email,
                password_hash,
                display_name: command.display_name,
                role: command.role,
            })
            .await
    }

    async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AccountError> {
        let account = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AccountError::InvalidCredentials)?;

        let token = self
            .authenticator
            .authenticate(
                password,
                &account.password_hash,
                account.id,
                account.role.as_str(),
            )
            .map_err(|e| match e {
                AuthenticationError::InvalidCredentials => AccountError::InvalidCredentials,
                AuthenticationError::PasswordError(err) => AccountError::Password(err),
                AuthenticationError::JwtError(err) => AccountError::Token(err),
            })?;

        Ok(AuthSession {
            token,
            account_id: account.id,
            role: account.role,
        })
    }

    async fn list_accounts(&self) -> Result<Vec<Account>, AccountError> {
        self.repository.list_all().await
    }
}

#[cfg(test)]
mod tests {
    use auth::TokenCodec;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::*;

    use super::*;
    use crate::account::models::AccountId;
    use crate::account::models::EmailAddress;
    use crate::account::models::Role;

    mock! {
        pub TestAccountRepository {}

        #[async_trait]
        impl AccountRepository for TestAccountRepository {
            async fn create(&self, account: NewAccount) -> Result<Account, AccountError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError>;
            async fn list_all(&self) -> Result<Vec<Account>, AccountError>;
        }
    }

    const SECRET: &[u8] =
        b"test_secret_key_with_at_least_512_bits_of_entropy_for_hs512_use!";

    fn codec() -> Arc<TokenCodec> {
        Arc::new(TokenCodec::new(SECRET))
    }

    fn authenticator(codec: &Arc<TokenCodec>) -> Arc<Authenticator> {
        Arc::new(Authenticator::new(Arc::clone(codec)))
    }

    fn stored_account(email: &str, password_hash: String, role: Role) -> Account {
        Account {
            id: AccountId(1),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash,
            display_name: "Ann".to_string(),
            role,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_register_hashes_password_and_creates_account() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .withf(|account| {
                account.email.as_str() == "a@x.com"
                    && account.password_hash.starts_with("$argon2")
                    && account.role == Role::Client
            })
            .times(1)
            .returning(|account| {
                Ok(Account {
                    id: AccountId(1),
                    email: account.email,
                    password_hash: account.password_hash,
                    display_name: account.display_name,
                    role: account.role,
                    created_at: Utc::now(),
                })
            });

        let codec = codec();
        let service = AccountService::new(Arc::new(repository), authenticator(&codec));

        let command = RegisterAccountCommand::new(
            EmailAddress::new("a@x.com".to_string()).unwrap(),
            "pw1".to_string(),
            "Ann".to_string(),
            Role::parse("client"),
        );

        let account = service.register(command).await.unwrap();
        assert_eq!(account.role, Role::Client);
        // The plaintext never reaches storage.
        assert_ne!(account.password_hash, "pw1");
    }

    #[tokio::test]
    async fn test_register_duplicate_email_fails() {
        let mut repository = MockTestAccountRepository::new();

        repository
            .expect_create()
            .times(1)
            .returning(|_| Err(AccountError::AlreadyExists));

        let codec = codec();
        let service = AccountService::new(Arc::new(repository), authenticator(&codec));

        let command = RegisterAccountCommand::new(
            EmailAddress::new("a@x.com".to_string()).unwrap(),
            "pw2".to_string(),
            "Ann Again".to_string(),
            Role::parse("client"),
        );

        let result = service.register(command).await;
        assert!(matches!(result, Err(AccountError::AlreadyExists)));
    }

    #[tokio::test]
    async fn test_login_issues_validatable_token() {
        let codec = codec();
        let authenticator = authenticator(&codec);
        let hash = authenticator.hash_password("pw1").unwrap();

        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(1)
            .returning(move |_| Ok(Some(stored_account("a@x.com", hash.clone(), Role::Client))));

        let service = AccountService::new(Arc::new(repository), authenticator);

        let session = service.login("a@x.com", "pw1").await.unwrap();
        assert_eq!(session.account_id, AccountId(1));
        assert_eq!(session.role, Role::Client);
        assert!(codec.validate(&session.token));
        assert_eq!(codec.extract_subject(&session.token).unwrap(), "1");
        assert_eq!(codec.extract_role(&session.token).unwrap(), "CLIENT");
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_wrong_password_are_indistinguishable() {
        let codec = codec();
        let authenticator = authenticator(&codec);
        let hash = authenticator.hash_password("pw1").unwrap();

        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email == "b@x.com")
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .withf(|email| email == "a@x.com")
            .times(1)
            .returning(move |_| Ok(Some(stored_account("a@x.com", hash.clone(), Role::Client))));

        let service = AccountService::new(Arc::new(repository), authenticator);

        let unknown = service.login("b@x.com", "pw1").await.unwrap_err();
        let wrong = service.login("a@x.com", "wrong").await.unwrap_err();

        assert!(matches!(unknown, AccountError::InvalidCredentials));
        assert!(matches!(wrong, AccountError::InvalidCredentials));
        // Same kind, same externally observable message.
        assert_eq!(unknown.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn test_login_malformed_stored_hash_is_internal_error() {
        let codec = codec();

        let mut repository = MockTestAccountRepository::new();
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| {
                Ok(Some(stored_account(
                    "a@x.com",
                    "not_a_phc_string".to_string(),
                    Role::Client,
                )))
            });

        let service = AccountService::new(Arc::new(repository), authenticator(&codec));

        let result = service.login("a@x.com", "pw1").await;
        assert!(matches!(result, Err(AccountError::Password(_))));
    }

    #[tokio::test]
    async fn test_list_accounts() {
        let codec = codec();
        let authenticator = authenticator(&codec);
        let hash = authenticator.hash_password("pw1").unwrap();

        let mut repository = MockTestAccountRepository::new();
        repository.expect_list_all().times(1).returning(move || {
            Ok(vec![stored_account("a@x.com", hash.clone(), Role::Admin)])
        });

        let service = AccountService::new(Arc::new(repository), authenticator);

        let accounts = service.list_accounts().await.unwrap();
        assert_eq!(accounts.len(), 1);
        assert_eq!(accounts[0].role, Role::Admin);
    }
}

pub mod list_accounts;
pub mod list_accounts_public;
pub mod login;
pub mod register;

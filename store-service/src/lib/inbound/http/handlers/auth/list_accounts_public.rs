use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::account::models::Account;
use crate::account::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

/// Public test listing of accounts, reduced to the safe summary fields.
pub async fn list_accounts_public(
    State(state): State<AppState>,
) -> Result<ApiSuccess<Vec<AccountSummaryData>>, ApiError> {
    state
        .account_service
        .list_accounts()
        .await
        .map_err(ApiError::from)
        .map(|accounts| {
            ApiSuccess::new(
                StatusCode::OK,
                accounts.iter().map(AccountSummaryData::from).collect(),
            )
        })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountSummaryData {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl From<&Account> for AccountSummaryData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.0,
            email: account.email.as_str().to_string(),
            name: account.display_name.clone(),
            role: account.role.as_str().to_string(),
        }
    }
}

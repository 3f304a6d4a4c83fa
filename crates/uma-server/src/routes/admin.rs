//! Administrative account routes

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, post};
use serde::Serialize;
use tracing::info;
use uma_application::NewAccount;
use uma_domain::LockoutState;

use crate::auth::AdminIdentity;
use crate::error::ApiError;
use crate::state::AuthState;

/// Result of an account operation
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub success: bool,
    pub message: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lockout: Option<LockoutState>,
}

/// Register an account
#[post("/admin/accounts", format = "json", data = "<account>")]
pub async fn register(
    admin: AdminIdentity,
    state: &State<AuthState>,
    account: Json<NewAccount>,
) -> Result<(Status, Json<AccountResponse>), ApiError> {
    let record = state.registration.register(account.into_inner()).await?;
    info!(admin = %admin.0.subject, email = %record.email, "Account created by administrator");

    Ok((
        Status::Created,
        Json(AccountResponse {
            success: true,
            message: "Account created".to_string(),
            email: record.email,
            lockout: None,
        }),
    ))
}

/// Clear the lockout of `email`
#[post("/admin/accounts/<email>/unlock")]
pub async fn unlock(
    admin: AdminIdentity,
    state: &State<AuthState>,
    email: &str,
) -> Result<Json<AccountResponse>, ApiError> {
    let lockout = state.lockout.unlock(email).await?;
    info!(admin = %admin.0.subject, email, "Account unlocked by administrator");

    Ok(Json(AccountResponse {
        success: true,
        message: "Account unlocked".to_string(),
        email: email.to_string(),
        lockout: Some(lockout),
    }))
}

//! Login route

use rocket::serde::json::Json;
use rocket::{State, post};
use serde::{Deserialize, Serialize};
use uma_domain::Role;

use crate::error::ApiError;
use crate::state::AuthState;

/// Login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Issued token and the claims a client needs without decoding it
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
    pub role: Role,
    pub expires_at: u64,
}

/// Exchange credentials for a bearer token
#[post("/auth/login", format = "json", data = "<request>")]
pub async fn login(
    state: &State<AuthState>,
    request: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let issued = state
        .authenticator
        .authenticate(&request.email, &request.password)
        .await?;
    let claims = issued.claims().clone();

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        token: issued.into_string(),
        role: claims.role,
        expires_at: claims.exp,
    }))
}

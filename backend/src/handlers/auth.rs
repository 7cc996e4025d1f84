//! Authentication handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::auth::{LoginResult, RegisterInput};
use crate::services::AuthService;
use crate::AppState;

#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub id: Uuid,
}

/// Register endpoint handler
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterInput>,
) -> AppResult<(StatusCode, Json<RegisterResponse>)> {
    let service = AuthService::new(state.db.clone(), &state.config);
    let id = service.register(input).await?;

    Ok((StatusCode::CREATED, Json(RegisterResponse { id })))
}

/// Login endpoint handler
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResult>> {
    let service = AuthService::new(state.db.clone(), &state.config);
    let result = service.login(&body.email, &body.password).await?;

    Ok(Json(result))
}

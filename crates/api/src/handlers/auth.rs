//! Handlers for the `/auth` resource (signup, login).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use upkeep_core::error::CoreError;
use upkeep_core::principal::Role;
use upkeep_core::types::DbId;
use upkeep_db::models::user::CreateUser;
use upkeep_db::repositories::UserRepo;
use upkeep_events::AuditEvent;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    /// `"Company User"` or `"Technician"`. Admin is not self-assignable.
    pub role: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public user info embedded in auth responses.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /auth/signup
///
/// Create an account as Company User or Technician. Signing up as a
/// Technician also creates the linked technician row (without a team:
/// unassigned technicians see no team-scoped requests until an admin
/// assigns them).
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<UserInfo>>)> {
    if input.password != input.confirm_password {
        return Err(AppError::Core(CoreError::Validation(
            "Passwords do not match".into(),
        )));
    }

    let role: Role = input
        .role
        .parse()
        .map_err(|_| AppError::Core(CoreError::Validation("Invalid role selected".into())))?;
    if role == Role::Admin {
        return Err(AppError::Core(CoreError::Forbidden(
            "Cannot sign up as Admin".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let (user, _technician) = UserRepo::signup(
        &state.pool,
        &CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            role: role.as_str().to_string(),
        },
    )
    .await?;

    state
        .audit
        .publish(AuditEvent::new("SIGNUP").by(user.id).on("User", user.id));

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: UserInfo {
                id: user.id,
                name: user.name,
                email: user.email,
                role: user.role,
            },
        }),
    ))
}

/// POST /auth/login
///
/// Authenticate with email + password. Returns a bearer access token whose
/// claims carry the user's id and role.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let user = UserRepo::find_by_email(&state.pool, &input.email)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Invalid email or password".into()))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid email or password".into(),
        )));
    }

    let role: Role = user
        .role
        .parse()
        .map_err(|_| AppError::InternalError(format!("Stored role '{}' is invalid", user.role)))?;

    let access_token = generate_access_token(user.id, role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    state.audit.publish(AuditEvent::new("LOGIN").by(user.id));

    Ok(Json(AuthResponse {
        access_token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        },
    }))
}

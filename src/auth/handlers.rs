use axum::{extract::State, routing::post, Json, Router};
use sqlx::PgPool;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{AuthResponse, LoginRequest, RegisterRequest},
        password::{hash_password, verify_password},
        repo::User,
    },
    error::ApiError,
    extract::ApiJson,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Insert the user, translating a unique violation on email into a
/// conflict. This is the authoritative duplicate check; it also catches a
/// concurrent registration that slipped past the handler's pre-check.
async fn create_user(
    db: &PgPool,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, ApiError> {
    match User::create(db, name, email, password_hash).await {
        Ok(u) => Ok(u),
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(email = %email, "email already registered");
            Err(ApiError::Conflict)
        }
        Err(e) => Err(e.into()),
    }
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.password.is_empty() {
        warn!("register with missing fields");
        return Err(ApiError::Validation("All fields are required"));
    }

    // Best-effort pre-check; the unique constraint on email is authoritative.
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict);
    }

    let hash = hash_password(&payload.password)?;
    let user = create_user(&state.db, &payload.name, &payload.email, &hash).await?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(AuthResponse {
        message: "User registered successfully",
        user_id: user.id,
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if payload.email.is_empty() || payload.password.is_empty() {
        warn!("login with missing fields");
        return Err(ApiError::Validation("Email and password required"));
    }

    // Unknown email and wrong password answer identically.
    let Some(user) = User::find_by_email(&state.db, &payload.email).await? else {
        warn!("login with unknown email");
        return Err(ApiError::Unauthorized);
    };

    if !verify_password(&payload.password, &user.password) {
        warn!(user_id = user.id, "login with invalid password");
        return Err(ApiError::Unauthorized);
    }

    info!(user_id = user.id, "user logged in");
    Ok(Json(AuthResponse {
        message: "Login successful",
        user_id: user.id,
    }))
}

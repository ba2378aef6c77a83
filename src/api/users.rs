//! User endpoints: listing, registration, login and record management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Payload};
use crate::domain::user::{LoginRequest, RegisterRequest, UpdateUserRequest, User};

const USERS_LIST_FAILED: &str = "An error occurred while fetching users.";

/// Single user response
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// Registration response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUserResponse {
    pub new_user: User,
}

/// Update response
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserResponse {
    pub update_user: User,
}

/// Create the user router
pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route(
            "/user/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/register", post(register))
        .route("/login", post(login))
}

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    debug!("Listing users");

    let users = state.user_service.list().await.map_err(|e| {
        error!(error = %e, "Failed to list users");
        ApiError::internal(USERS_LIST_FAILED)
    })?;

    if users.is_empty() {
        return Err(ApiError::not_found("No users found at this time.").with_msg_key());
    }

    Ok(Json(users))
}

/// GET /user/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = %id, "Getting user");

    let user = state
        .user_service
        .get(&id)
        .await?
        .ok_or_else(|| ApiError::not_found("User not found"))?;

    Ok(Json(UserResponse { user }))
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<(StatusCode, Json<NewUserResponse>), ApiError> {
    let request = RegisterRequest::from_payload(&body)?;
    debug!(username = %request.username, "Registering user");

    let new_user = state.user_service.register(request).await?;

    Ok((StatusCode::CREATED, Json(NewUserResponse { new_user })))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<Json<UserResponse>, ApiError> {
    let request = LoginRequest::from_payload(&body)?;
    debug!("Login attempt");

    let user = state.user_service.login(request).await?;

    Ok(Json(UserResponse { user }))
}

/// PUT /user/{id}
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Payload(body): Payload,
) -> Result<Json<UpdateUserResponse>, ApiError> {
    let request = UpdateUserRequest::from_payload(&body)?;
    debug!(user_id = %id, "Updating user");

    let update_user = state.user_service.update(&id, request).await?;

    Ok(Json(UpdateUserResponse { update_user }))
}

/// DELETE /user/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    debug!(user_id = %id, "Deleting user");

    state.user_service.delete(&id).await?;

    Ok(Json(json!({ "msg": "User deleted" })))
}

//! User endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::{User, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::JsonOrForm;
use crate::http::server::AppState;
use crate::models::Username;

/// Create user request
#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
}

/// User response
#[derive(Debug, Serialize)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            username: u.username,
        }
    }
}

/// GET /api/users - list all users
async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// POST /api/users - register a new user
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonOrForm(req): JsonOrForm<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    let username = Username::new(req.username.as_deref().unwrap_or_default())?;
    let user = UserRepo::new(&state.pool).create(username).await?;

    tracing::debug!(id = %user.id, username = %user.username, "user created");
    Ok(Json(UserResponse::from(user)))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", get(list_users).post(create_user))
}

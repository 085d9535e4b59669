//! Exercise endpoints
//!
//! Both handlers look the user up before validating anything else, so an
//! unknown id is always a 404.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::{ExerciseRepo, LogEntry, NewExercise, UserRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{FieldValue, JsonOrForm, QueryParams};
use crate::http::server::AppState;
use crate::models::{CalendarDate, Description, LogFilter, Minutes, ValidationError};

/// Add exercise request
#[derive(Deserialize)]
pub struct AddExerciseRequest {
    pub description: Option<String>,
    pub duration: Option<FieldValue>,
    pub date: Option<String>,
}

/// Log query parameters
#[derive(Deserialize)]
pub struct LogParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Exercise response
#[derive(Debug, Serialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    pub date: CalendarDate,
    pub duration: i64,
    pub description: String,
}

/// Log response
#[derive(Debug, Serialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub user_id: String,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntryResponse>,
}

/// One log line
#[derive(Debug, Serialize)]
pub struct LogEntryResponse {
    pub description: String,
    pub duration: i64,
    pub date: CalendarDate,
}

impl From<LogEntry> for LogEntryResponse {
    fn from(e: LogEntry) -> Self {
        Self {
            description: e.description,
            duration: e.duration,
            date: e.date,
        }
    }
}

impl AddExerciseRequest {
    fn validate(self, user_id: String) -> Result<NewExercise, ApiError> {
        let description = Description::new(self.description.as_deref().unwrap_or_default())?;
        let duration = match &self.duration {
            Some(value) => Minutes::parse(&value.as_text())?,
            None => return Err(ValidationError::Empty { field: "duration" }.into()),
        };
        let date = match self.date.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => CalendarDate::parse("date", s)?,
            _ => CalendarDate::today(),
        };

        Ok(NewExercise {
            user_id,
            description,
            duration,
            date,
        })
    }
}

/// POST /api/users/{_id}/exercises - log an exercise
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    body: Result<JsonOrForm<AddExerciseRequest>, ApiError>,
) -> Result<Json<ExerciseResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).get(&user_id).await?;

    let JsonOrForm(req) = body?;
    let new = req.validate(user.id)?;
    let exercise = ExerciseRepo::new(&state.pool).insert(new).await?;

    tracing::debug!(id = %exercise.id, user_id = %exercise.user_id, "exercise logged");
    Ok(Json(ExerciseResponse {
        user_id: exercise.user_id,
        username: user.username,
        date: exercise.date,
        duration: exercise.duration,
        description: exercise.description,
    }))
}

/// GET /api/users/{_id}/logs - filtered exercise log
async fn get_log(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    params: Result<QueryParams<LogParams>, ApiError>,
) -> Result<Json<LogResponse>, ApiError> {
    let user = UserRepo::new(&state.pool).get(&user_id).await?;

    let QueryParams(params) = params?;
    let filter = LogFilter::parse(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    )?;

    let entries = ExerciseRepo::new(&state.pool)
        .log(&user.id, &filter, state.date_comparison)
        .await?;

    let log: Vec<LogEntryResponse> = entries.into_iter().map(LogEntryResponse::from).collect();
    Ok(Json(LogResponse {
        user_id: user.id,
        username: user.username,
        count: log.len(),
        log,
    }))
}

/// Exercise routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/users/{id}/exercises", post(add_exercise))
        .route("/api/users/{id}/logs", get(get_log))
}

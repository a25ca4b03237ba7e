// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise API routes.

use crate::error::{AppError, Result};
use crate::models::UserSummary;
use crate::services::{AppendedExercise, ExerciseLogResponse, LogQuery, NewExercise};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationError};

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/exercise/new-user", post(create_user))
        .route("/api/exercise/users", get(list_users))
        .route("/api/exercise/add", post(add_exercise))
        .route("/api/exercise/log", get(get_log))
}

fn not_blank(value: &str) -> std::result::Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn validate_form<T: Validate>(form: &T) -> Result<()> {
    form.validate().map_err(|errors| {
        let mut fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|k| k.to_string())
            .collect();
        fields.sort_unstable();
        AppError::BadRequest(format!("missing required field(s): {}", fields.join(", ")))
    })
}

// ─── Users ───────────────────────────────────────────────────

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
struct NewUserForm {
    #[validate(custom(function = "not_blank"))]
    username: String,
}

/// Register a user.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Form(form): Form<NewUserForm>,
) -> Result<Json<UserSummary>> {
    validate_form(&form)?;

    let user = state
        .exercise_service
        .register_user(form.username.trim())
        .await?;
    Ok(Json(user))
}

/// List all users.
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<UserSummary>>> {
    let users = state.exercise_service.list_users().await?;
    Ok(Json(users))
}

// ─── Exercises ───────────────────────────────────────────────

#[derive(Deserialize, Validate, Default)]
#[serde(default)]
struct AddExerciseForm {
    #[serde(rename = "userId")]
    #[validate(custom(function = "not_blank"))]
    user_id: String,
    #[validate(custom(function = "not_blank"))]
    description: String,
    #[validate(custom(function = "not_blank"))]
    duration: String,
    date: Option<String>,
}

/// Append an exercise to a user's log.
async fn add_exercise(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddExerciseForm>,
) -> Result<Json<AppendedExercise>> {
    validate_form(&form)?;

    let duration = form
        .duration
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::BadRequest("duration must be an integer".to_string()))?;

    let new = NewExercise {
        description: form.description,
        duration,
        date: form.date,
    };

    let added = state
        .exercise_service
        .append_exercise(form.user_id.trim(), new)
        .await?;
    Ok(Json(added))
}

#[derive(Deserialize)]
struct LogParams {
    #[serde(rename = "userId")]
    user_id: Option<String>,
    /// Lower date bound (yyyy-mm-dd), inclusive
    from: Option<String>,
    /// Upper date bound (yyyy-mm-dd), inclusive
    to: Option<String>,
    /// Maximum number of entries; only positive integers apply
    limit: Option<String>,
}

/// Get a user's exercise log.
async fn get_log(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LogParams>,
) -> Result<Json<ExerciseLogResponse>> {
    let user_id = params
        .user_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .ok_or(AppError::UserNotFound(AppError::UNKNOWN_USER_ID))?;

    let query = LogQuery::from_raw(
        params.from.as_deref(),
        params.to.as_deref(),
        params.limit.as_deref(),
    );

    tracing::debug!(
        user_id,
        from = ?query.from,
        to = ?query.to,
        limit = ?query.limit,
        "Fetching exercise log"
    );

    let log = state.exercise_service.exercise_log(user_id, &query).await?;
    Ok(Json(log))
}

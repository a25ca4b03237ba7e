// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Exercise tracking service.
//!
//! Handles the user-facing workflows over the injected [`UserStore`]:
//! 1. Register a user (best-effort unique username)
//! 2. List users
//! 3. Append an exercise to a user's log
//! 4. Query a user's log with date bounds and a limit

use crate::db::UserStore;
use crate::error::{AppError, Result};
use crate::models::{is_valid_user_id, Exercise, User, UserSummary};
use crate::services::exercise_log::{query_log, ExerciseLogResponse, LogQuery};
use crate::time_utils::{normalize_at, CanonicalDate};
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Input for appending an exercise. `date` is raw caller text.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub description: String,
    pub duration: i64,
    pub date: Option<String>,
}

/// Response body for `POST /api/exercise/add`.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AppendedExercise {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    pub date: CanonicalDate,
    #[cfg_attr(feature = "binding-generation", ts(type = "number"))]
    pub duration: i64,
    pub description: String,
}

/// Exercise tracking operations.
#[derive(Clone)]
pub struct ExerciseService {
    store: UserStore,
}

impl ExerciseService {
    pub fn new(store: UserStore) -> Self {
        Self { store }
    }

    /// Register a new user.
    ///
    /// The username check and insert are separate store calls, so two
    /// concurrent registrations of the same name can both succeed.
    pub async fn register_user(&self, username: &str) -> Result<UserSummary> {
        let existing = self.store.find_users_by_username(username).await?;
        if !existing.is_empty() {
            return Err(AppError::UsernameTaken(username.to_string()));
        }

        let user = User::new(username)?;
        self.store.create_user(&user).await?;

        tracing::info!(user_id = %user.id, username, "Registered user");
        Ok(user.summary())
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        self.store.list_users().await
    }

    /// Append an exercise dated today (UTC) when no date is given.
    pub async fn append_exercise(
        &self,
        user_id: &str,
        new: NewExercise,
    ) -> Result<AppendedExercise> {
        self.append_exercise_at(user_id, new, CanonicalDate::today())
            .await
    }

    /// Append an exercise, resolving a missing date to `today`.
    ///
    /// The date and the shape of `user_id` are validated before the store is
    /// touched; an invalid date or unknown user leaves every log unchanged.
    pub async fn append_exercise_at(
        &self,
        user_id: &str,
        new: NewExercise,
        today: CanonicalDate,
    ) -> Result<AppendedExercise> {
        let date = normalize_at(new.date.as_deref(), today)?;

        if !is_valid_user_id(user_id) {
            return Err(AppError::UserNotFound(AppError::USER_ID_NOT_FOUND));
        }

        let exercise = Exercise {
            description: new.description,
            duration: new.duration,
            date,
        };

        let user = self
            .store
            .push_exercise(user_id, &exercise)
            .await?
            .ok_or(AppError::UserNotFound(AppError::USER_ID_NOT_FOUND))?;

        tracing::info!(
            user_id,
            date = %exercise.date,
            duration = exercise.duration,
            "Exercise added"
        );

        Ok(AppendedExercise {
            id: user.id,
            username: user.username,
            date: exercise.date,
            duration: exercise.duration,
            description: exercise.description,
        })
    }

    /// Fetch a user's log, filtered and shaped for the response.
    pub async fn exercise_log(
        &self,
        user_id: &str,
        query: &LogQuery,
    ) -> Result<ExerciseLogResponse> {
        if !is_valid_user_id(user_id) {
            return Err(AppError::UserNotFound(AppError::UNKNOWN_USER_ID));
        }

        let user = self
            .store
            .get_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound(AppError::UNKNOWN_USER_ID))?;

        let response = query_log(&user, query);

        tracing::debug!(
            user_id,
            total = user.log.len(),
            returned = response.count,
            "Exercise log fetched"
        );

        Ok(response)
    }
}

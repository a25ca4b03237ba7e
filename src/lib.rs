// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Exercise Tracker: register users and keep dated exercise logs
//!
//! This crate provides a small REST API for appending exercises to a
//! user's log and reading the log back with date bounds and a limit.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::UserStore;
use services::ExerciseService;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub exercise_service: ExerciseService,
}

impl AppState {
    /// Build state around an injected document store.
    pub fn new(config: Config, store: UserStore) -> Self {
        Self {
            config,
            exercise_service: ExerciseService::new(store),
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod exercise;
pub mod exercise_log;

pub use exercise::{AppendedExercise, ExerciseService, NewExercise};
pub use exercise_log::{ExerciseLogResponse, LogQuery};

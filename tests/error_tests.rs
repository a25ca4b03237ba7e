// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::http::StatusCode;
use axum::response::IntoResponse;
use exercise_tracker::error::AppError;
use exercise_tracker::time_utils::parse_date;

#[test]
fn test_error_status_codes() {
    let cases = [
        (AppError::UsernameTaken("alice".to_string()), StatusCode::CONFLICT),
        (
            AppError::UserNotFound(AppError::UNKNOWN_USER_ID),
            StatusCode::NOT_FOUND,
        ),
        (
            AppError::BadRequest("bad".to_string()),
            StatusCode::BAD_REQUEST,
        ),
        (
            AppError::Database("down".to_string()),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
        (
            AppError::Internal(anyhow::anyhow!("boom")),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (err, status) in cases {
        assert_eq!(err.into_response().status(), status);
    }
}

#[test]
fn test_date_parse_error_converts() {
    let err: AppError = parse_date("nope").unwrap_err().into();
    assert!(matches!(err, AppError::DateParse(_)));
    assert_eq!(err.to_string(), "Cast to date failed for value \"nope\"");
    assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
}

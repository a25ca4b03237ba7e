// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and are skipped
//! unless FIRESTORE_EMULATOR_HOST is set.

use exercise_tracker::db::UserStore;
use exercise_tracker::models::{Exercise, User};
use exercise_tracker::services::{ExerciseService, LogQuery, NewExercise};
use exercise_tracker::time_utils::parse_date;

mod common;
use common::test_db;

/// Username unique to this test run.
fn unique_username(prefix: &str) -> String {
    use std::time::{SystemTime, UNIX_EPOCH};
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

#[tokio::test]
async fn test_user_round_trip() {
    require_emulator!();

    let db = test_db().await;
    let user = User::new(unique_username("roundtrip")).unwrap();

    assert!(db.get_user(&user.id).await.unwrap().is_none());
    db.create_user(&user).await.unwrap();

    let fetched = db.get_user(&user.id).await.unwrap().expect("user stored");
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.username, user.username);
    assert!(fetched.log.is_empty());

    let by_name = db.find_users_by_username(&user.username).await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].id, user.id);

    let listed = db.list_users().await.unwrap();
    assert!(listed.iter().any(|u| u.id == user.id));
}

#[tokio::test]
async fn test_push_exercise_preserves_order_and_duplicates() {
    require_emulator!();

    let db = test_db().await;
    let user = User::new(unique_username("push")).unwrap();
    db.create_user(&user).await.unwrap();

    let entry = Exercise {
        description: "run".to_string(),
        duration: 30,
        date: parse_date("2023-01-01").unwrap(),
    };
    db.push_exercise(&user.id, &entry).await.unwrap();
    let updated = db
        .push_exercise(&user.id, &entry)
        .await
        .unwrap()
        .expect("user exists");

    assert_eq!(updated.log, vec![entry.clone(), entry]);

    let fetched = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(fetched.log.len(), 2);
    assert_eq!(fetched.log[0].date.to_string(), "Sun Jan 01 2023");
}

#[tokio::test]
async fn test_concurrent_pushes_keep_both_entries() {
    require_emulator!();

    let db = test_db().await;
    let user = User::new(unique_username("concurrent")).unwrap();
    db.create_user(&user).await.unwrap();

    let entry = |description: &str| Exercise {
        description: description.to_string(),
        duration: 10,
        date: parse_date("2023-01-01").unwrap(),
    };
    let (first, second) = (entry("run"), entry("swim"));

    let (a, b) = tokio::join!(
        db.push_exercise(&user.id, &first),
        db.push_exercise(&user.id, &second)
    );
    assert!(a.unwrap().is_some());
    assert!(b.unwrap().is_some());

    let fetched = db.get_user(&user.id).await.unwrap().unwrap();
    assert_eq!(fetched.log.len(), 2);
    assert!(fetched.log.contains(&first));
    assert!(fetched.log.contains(&second));
}

#[tokio::test]
async fn test_list_users_returns_summaries() {
    require_emulator!();

    let db = test_db().await;
    let user = User::new(unique_username("listed")).unwrap();
    db.create_user(&user).await.unwrap();
    db.push_exercise(
        &user.id,
        &Exercise {
            description: "row".to_string(),
            duration: 20,
            date: parse_date("2023-01-01").unwrap(),
        },
    )
    .await
    .unwrap();

    let listed = db.list_users().await.unwrap();
    let summary = listed
        .iter()
        .find(|u| u.id == user.id)
        .expect("user listed");
    assert_eq!(summary.username, user.username);
}

#[tokio::test]
async fn test_push_to_missing_user() {
    require_emulator!();

    let db = test_db().await;
    let entry = Exercise {
        description: "run".to_string(),
        duration: 30,
        date: parse_date("2023-01-01").unwrap(),
    };

    let result = db.push_exercise("no-such-user", &entry).await.unwrap();
    assert!(result.is_none());
    assert!(db.get_user("no-such-user").await.unwrap().is_none());
}

#[tokio::test]
async fn test_service_over_firestore() {
    require_emulator!();

    let service = ExerciseService::new(UserStore::from(test_db().await));
    let user = service
        .register_user(&unique_username("service"))
        .await
        .unwrap();

    for date in ["2023-01-03", "2023-01-01", "2023-01-02"] {
        service
            .append_exercise(
                &user.id,
                NewExercise {
                    description: "swim".to_string(),
                    duration: 45,
                    date: Some(date.to_string()),
                },
            )
            .await
            .unwrap();
    }

    let response = service
        .exercise_log(
            &user.id,
            &LogQuery::from_raw(Some("2023-01-02"), None, Some("1")),
        )
        .await
        .unwrap();
    assert_eq!(response.count, 1);
    assert_eq!(response.log[0].date.to_string(), "Tue Jan 03 2023");
}

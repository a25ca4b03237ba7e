// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process user store backed by a concurrent map.

use crate::models::{Exercise, User, UserSummary};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory user collection. Clones share the same map.
#[derive(Clone, Default)]
pub struct MemoryDb {
    users: Arc<DashMap<String, User>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_users_by_username(&self, username: &str) -> Vec<User> {
        self.users
            .iter()
            .filter(|entry| entry.username == username)
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn create_user(&self, user: &User) {
        self.users.insert(user.id.clone(), user.clone());
    }

    /// Users sorted by username, then identifier.
    pub fn list_users(&self) -> Vec<UserSummary> {
        let mut users: Vec<UserSummary> =
            self.users.iter().map(|entry| entry.summary()).collect();
        users.sort_by(|a, b| a.username.cmp(&b.username).then_with(|| a.id.cmp(&b.id)));
        users
    }

    pub fn get_user(&self, user_id: &str) -> Option<User> {
        self.users.get(user_id).map(|entry| entry.value().clone())
    }

    /// Append under the entry's shard lock, so concurrent pushes to the
    /// same user are serialized.
    pub fn push_exercise(&self, user_id: &str, exercise: &Exercise) -> Option<User> {
        let mut entry = self.users.get_mut(user_id)?;
        entry.log.push(exercise.clone());
        Some(entry.value().clone())
    }
}

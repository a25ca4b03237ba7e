//! User model for storage and API.

use crate::error::AppError;
use crate::models::Exercise;
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Random bytes per user identifier (24 hex characters).
const USER_ID_BYTES: usize = 12;

/// User document stored in the `users` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque identifier (also used as document ID)
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    /// Exercise entries in the order they were added
    #[serde(default)]
    pub log: Vec<Exercise>,
}

impl User {
    /// Create a user with a fresh identifier and an empty log.
    pub fn new(username: impl Into<String>) -> Result<Self, AppError> {
        Ok(Self {
            id: generate_user_id()?,
            username: username.into(),
            log: Vec::new(),
        })
    }

    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

/// The `{username, _id}` view of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

/// Generate a random hex user identifier.
pub fn generate_user_id() -> Result<String, AppError> {
    let mut bytes = [0u8; USER_ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failure")))?;
    Ok(hex::encode(bytes))
}

/// Whether `id` has the shape of a generated identifier.
///
/// Anything else cannot name a stored user and must not reach the store as a
/// document path.
pub fn is_valid_user_id(id: &str) -> bool {
    id.len() == USER_ID_BYTES * 2 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

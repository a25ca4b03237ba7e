//! Database layer.
//!
//! Handlers never talk to a backend directly. They receive a [`UserStore`],
//! which is either Firestore or the in-process [`MemoryDb`] used for local
//! runs and tests.

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::error::AppError;
use crate::models::{Exercise, User, UserSummary};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
}

/// Document store holding user documents keyed by opaque identifier.
#[derive(Clone)]
pub enum UserStore {
    Firestore(FirestoreDb),
    Memory(MemoryDb),
}

impl UserStore {
    /// Find all users registered under a username.
    pub async fn find_users_by_username(&self, username: &str) -> Result<Vec<User>, AppError> {
        match self {
            UserStore::Firestore(db) => db.find_users_by_username(username).await,
            UserStore::Memory(db) => Ok(db.find_users_by_username(username)),
        }
    }

    /// Store a new user document.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        match self {
            UserStore::Firestore(db) => db.create_user(user).await,
            UserStore::Memory(db) => {
                db.create_user(user);
                Ok(())
            }
        }
    }

    /// List every user as `{username, _id}`.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        match self {
            UserStore::Firestore(db) => db.list_users().await,
            UserStore::Memory(db) => Ok(db.list_users()),
        }
    }

    /// Get a user by identifier.
    pub async fn get_user(&self, user_id: &str) -> Result<Option<User>, AppError> {
        match self {
            UserStore::Firestore(db) => db.get_user(user_id).await,
            UserStore::Memory(db) => Ok(db.get_user(user_id)),
        }
    }

    /// Append an exercise to a user's log.
    ///
    /// Returns the updated user, or `None` if the identifier is unknown (in
    /// which case nothing is written).
    pub async fn push_exercise(
        &self,
        user_id: &str,
        exercise: &Exercise,
    ) -> Result<Option<User>, AppError> {
        match self {
            UserStore::Firestore(db) => db.push_exercise(user_id, exercise).await,
            UserStore::Memory(db) => Ok(db.push_exercise(user_id, exercise)),
        }
    }
}

impl From<FirestoreDb> for UserStore {
    fn from(db: FirestoreDb) -> Self {
        UserStore::Firestore(db)
    }
}

impl From<MemoryDb> for UserStore {
    fn from(db: MemoryDb) -> Self {
        UserStore::Memory(db)
    }
}

//! Persistence seam for users and exercises.
//!
//! Handlers never talk to the database directly: they hold an
//! `Arc<dyn TrackerStore>` built once at startup. [`PgStore`] is the
//! production backend; [`MemoryStore`] keeps everything in process and is
//! what the HTTP tests run against.

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Exercise, LogFilter, NewExercise, User};

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid identifier: {0}")]
    InvalidId(String),
    #[error("Username already exists: {0}")]
    DuplicateUsername(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Parse a path-supplied user identifier.
pub fn parse_user_id(raw: &str) -> StoreResult<Uuid> {
    Uuid::parse_str(raw.trim()).map_err(|_| StoreError::InvalidId(raw.to_string()))
}

#[async_trait]
pub trait TrackerStore: Send + Sync {
    /// Insert a user. A taken username yields [`StoreError::DuplicateUsername`].
    async fn create_user(&self, username: &str) -> StoreResult<User>;

    /// All users in storage-default order.
    async fn list_users(&self) -> StoreResult<Vec<User>>;

    async fn find_user(&self, user_id: Uuid) -> StoreResult<Option<User>>;

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<Exercise>;

    /// Exercises matching `filter`, ascending by date, capped at `filter.limit`.
    async fn find_exercises(&self, filter: &LogFilter) -> StoreResult<Vec<Exercise>>;

    /// Remove every exercise and return how many were deleted.
    async fn delete_all_exercises(&self) -> StoreResult<u64>;
}

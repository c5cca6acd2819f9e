use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, StoreResult, TrackerStore};
use crate::models::{Exercise, LogFilter, NewExercise, User};

#[derive(Debug, Default)]
struct Collections {
    users: Vec<User>,
    exercises: Vec<Exercise>,
}

/// In-process store with the same observable behaviour as [`super::PgStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collections>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn exercise_count(&self) -> usize {
        self.inner.read().await.exercises.len()
    }
}

#[async_trait]
impl TrackerStore for MemoryStore {
    async fn create_user(&self, username: &str) -> StoreResult<User> {
        let mut inner = self.inner.write().await;

        if inner.users.iter().any(|u| u.username == username) {
            return Err(StoreError::DuplicateUsername(username.to_string()));
        }

        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        Ok(self.inner.read().await.users.clone())
    }

    async fn find_user(&self, user_id: Uuid) -> StoreResult<Option<User>> {
        let inner = self.inner.read().await;
        Ok(inner.users.iter().find(|u| u.id == user_id).cloned())
    }

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<Exercise> {
        let exercise = Exercise {
            id: Uuid::new_v4(),
            user_id: exercise.user_id,
            description: exercise.description,
            duration: exercise.duration,
            date: exercise.date,
            created_at: Utc::now(),
        };
        self.inner.write().await.exercises.push(exercise.clone());

        Ok(exercise)
    }

    async fn find_exercises(&self, filter: &LogFilter) -> StoreResult<Vec<Exercise>> {
        let inner = self.inner.read().await;

        // Stable sort keeps insertion order for entries on the same date.
        let mut exercises: Vec<Exercise> = inner
            .exercises
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect();
        exercises.sort_by_key(|e| e.date);

        if let Some(limit) = filter.limit {
            exercises.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }

        Ok(exercises)
    }

    async fn delete_all_exercises(&self) -> StoreResult<u64> {
        let mut inner = self.inner.write().await;
        let removed = inner.exercises.len() as u64;
        inner.exercises.clear();

        Ok(removed)
    }
}

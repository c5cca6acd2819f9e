use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{StoreError, StoreResult, TrackerStore};
use crate::models::{Exercise, LogFilter, NewExercise, User};

#[derive(Debug, Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TrackerStore for PgStore {
    async fn create_user(&self, username: &str) -> StoreResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username)
            VALUES ($1)
            RETURNING id, username, created_at
            "#,
        )
        .bind(username)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::DuplicateUsername(username.to_string())
            }
            other => StoreError::Database(other),
        })
    }

    async fn list_users(&self) -> StoreResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, username, created_at FROM users")
            .fetch_all(&self.db)
            .await?;

        Ok(users)
    }

    async fn find_user(&self, user_id: Uuid) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, created_at FROM users WHERE id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        Ok(user)
    }

    async fn create_exercise(&self, exercise: NewExercise) -> StoreResult<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(
            r#"
            INSERT INTO exercises (user_id, description, duration, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, duration, date, created_at
            "#,
        )
        .bind(exercise.user_id)
        .bind(exercise.description)
        .bind(exercise.duration)
        .bind(exercise.date)
        .fetch_one(&self.db)
        .await?;

        Ok(exercise)
    }

    async fn find_exercises(&self, filter: &LogFilter) -> StoreResult<Vec<Exercise>> {
        // LIMIT NULL is LIMIT ALL in Postgres.
        let exercises = sqlx::query_as::<_, Exercise>(
            r#"
            SELECT id, user_id, description, duration, date, created_at
            FROM exercises
            WHERE user_id = $1
              AND ($2::date IS NULL OR date >= $2)
              AND ($3::date IS NULL OR date <= $3)
            ORDER BY date ASC, created_at ASC
            LIMIT $4
            "#,
        )
        .bind(filter.user_id)
        .bind(filter.from)
        .bind(filter.to)
        .bind(filter.limit)
        .fetch_all(&self.db)
        .await?;

        Ok(exercises)
    }

    async fn delete_all_exercises(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM exercises")
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}

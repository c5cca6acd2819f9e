use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;
use uuid::Uuid;

use super::validation::format_date;

#[derive(Debug, Clone, FromRow)]
pub struct Exercise {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub duration: f64,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

/// A validated exercise ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewExercise {
    pub user_id: Uuid,
    pub description: String,
    pub duration: f64,
    pub date: NaiveDate,
}

/// Form body of `POST /api/users/:id/exercises`. Fields stay raw strings so the
/// service can report which one is missing or malformed.
#[derive(Debug, Default, Deserialize)]
pub struct AddExercise {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

/// The user merged with the exercise that was just recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

/// Query string of `GET /api/users/:id/logs`.
#[derive(Debug, Default, Deserialize)]
pub struct LogQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// Storage-level selection of one user's exercises.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFilter {
    pub user_id: Uuid,
    /// Inclusive lower bound.
    pub from: Option<NaiveDate>,
    /// Inclusive upper bound.
    pub to: Option<NaiveDate>,
    /// `None` means unlimited.
    pub limit: Option<i64>,
}

impl LogFilter {
    pub fn matches(&self, exercise: &Exercise) -> bool {
        exercise.user_id == self.user_id
            && self.from.map_or(true, |from| exercise.date >= from)
            && self.to.map_or(true, |to| exercise.date <= to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    #[serde(serialize_with = "serialize_duration")]
    pub duration: f64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(exercise: Exercise) -> Self {
        Self {
            description: exercise.description,
            duration: exercise.duration,
            date: format_date(exercise.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub count: usize,
    pub log: Vec<LogEntry>,
}

/// Whole-number durations go out as JSON integers (`30`, not `30.0`).
fn serialize_duration<S>(duration: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if duration.fract() == 0.0 && duration.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*duration as i64)
    } else {
        serializer.serialize_f64(*duration)
    }
}

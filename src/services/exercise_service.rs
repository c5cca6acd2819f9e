use std::sync::Arc;

use chrono::{Local, NaiveDate};

use crate::error::TrackerError;
use crate::models::{
    format_date, non_blank, parse_date, parse_duration, parse_limit, AddExercise,
    ExerciseResponse, LogEntry, LogFilter, LogQuery, LogResponse, NewExercise,
};
use crate::storage::{parse_user_id, TrackerStore};

pub const MIN_DURATION: f64 = 1.0;

#[derive(Clone)]
pub struct ExerciseService {
    store: Arc<dyn TrackerStore>,
}

impl ExerciseService {
    pub fn new(store: Arc<dyn TrackerStore>) -> Self {
        Self { store }
    }

    /// Record an exercise for `raw_user_id`.
    ///
    /// Input is validated in a fixed order before the user lookup: identifier,
    /// required fields, numeric duration, minimum duration, then the optional date.
    pub async fn add_exercise(
        &self,
        raw_user_id: &str,
        form: AddExercise,
    ) -> Result<ExerciseResponse, TrackerError> {
        let raw_user_id = non_blank(Some(raw_user_id)).ok_or(TrackerError::MissingUserId)?;

        // Blank counts as missing, but the description is stored as supplied.
        let description = form
            .description
            .filter(|d| non_blank(Some(d.as_str())).is_some());
        let duration = form.duration.filter(|d| non_blank(Some(d.as_str())).is_some());
        let (description, duration) = match (description, duration) {
            (Some(description), Some(duration)) => (description, duration),
            _ => return Err(TrackerError::MissingExerciseFields),
        };

        let duration = parse_duration(&duration).ok_or(TrackerError::DurationNotNumber)?;
        if duration < MIN_DURATION {
            return Err(TrackerError::DurationTooShort);
        }

        let date = match non_blank(form.date.as_deref()) {
            Some(raw) => parse_date(raw).ok_or(TrackerError::InvalidDate)?,
            None => today(),
        };

        let user_id = parse_user_id(raw_user_id)?;
        let user = self
            .store
            .find_user(user_id)
            .await?
            .ok_or(TrackerError::UserDoesNotExist)?;

        let exercise = self
            .store
            .create_exercise(NewExercise {
                user_id,
                description,
                duration,
                date,
            })
            .await?;

        tracing::debug!("Recorded exercise {} for user {}", exercise.id, user.id);

        Ok(ExerciseResponse {
            id: user.id,
            username: user.username,
            description: exercise.description,
            duration: exercise.duration,
            date: format_date(exercise.date),
        })
    }

    /// Fetch a user's log. Filters are validated before any storage access.
    pub async fn get_log(
        &self,
        raw_user_id: &str,
        query: LogQuery,
    ) -> Result<LogResponse, TrackerError> {
        let from = match non_blank(query.from.as_deref()) {
            Some(raw) => Some(parse_date(raw).ok_or(TrackerError::InvalidFromDate)?),
            None => None,
        };
        let to = match non_blank(query.to.as_deref()) {
            Some(raw) => Some(parse_date(raw).ok_or(TrackerError::InvalidToDate)?),
            None => None,
        };
        let limit = match query.limit.as_deref() {
            Some(raw) => parse_limit(raw).ok_or(TrackerError::InvalidLimit)?,
            None => 0,
        };

        let user_id = parse_user_id(raw_user_id).map_err(|_| TrackerError::UserNotFound)?;
        let user = match self.store.find_user(user_id).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(TrackerError::UserNotFound),
            Err(e) => {
                tracing::warn!("User lookup failed for {}: {}", user_id, e);
                return Err(TrackerError::UserNotFound);
            }
        };

        let filter = LogFilter {
            user_id,
            from,
            to,
            limit: (limit > 0).then_some(limit),
        };
        let log: Vec<LogEntry> = self
            .store
            .find_exercises(&filter)
            .await?
            .into_iter()
            .map(LogEntry::from)
            .collect();

        Ok(LogResponse {
            id: user.id,
            username: user.username,
            count: log.len(),
            log,
        })
    }

    pub async fn delete_all_exercises(&self) -> Result<u64, TrackerError> {
        let removed = self.store.delete_all_exercises().await?;
        tracing::warn!("Deleted all exercises ({} records)", removed);
        Ok(removed)
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

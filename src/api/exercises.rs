use std::sync::Arc;

use axum::{extract::State, routing::get, Router};

use crate::error::TrackerError;
use crate::services::ExerciseService;
use crate::storage::TrackerStore;

pub const PURGE_CONFIRMATION: &str = "complete delete successful";

pub fn exercise_admin_routes(store: Arc<dyn TrackerStore>) -> Router {
    Router::new()
        .route("/del", get(delete_all_exercises))
        .with_state(ExerciseService::new(store))
}

/// Remove every exercise record. Unauthenticated; mounted only when
/// `ENABLE_EXERCISE_PURGE` is on.
pub async fn delete_all_exercises(
    State(service): State<ExerciseService>,
) -> Result<&'static str, TrackerError> {
    service.delete_all_exercises().await?;
    Ok(PURGE_CONFIRMATION)
}

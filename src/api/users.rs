use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Form, Router,
};
use axum_extra::extract::WithRejection;

use crate::error::TrackerError;
use crate::models::{AddExercise, CreateUser, ExerciseResponse, LogQuery, LogResponse, UserResponse};
use crate::services::{ExerciseService, UserService};
use crate::storage::TrackerStore;

#[derive(Clone)]
pub struct UsersAppState {
    pub user_service: UserService,
    pub exercise_service: ExerciseService,
}

pub fn users_routes(store: Arc<dyn TrackerStore>) -> Router {
    let shared_state = UsersAppState {
        user_service: UserService::new(store.clone()),
        exercise_service: ExerciseService::new(store),
    };

    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:user_id/exercises", post(add_exercise))
        .route("/:user_id/logs", get(get_log))
        .with_state(shared_state)
}

/// Create a user from a `username` form field
pub async fn create_user(
    State(state): State<UsersAppState>,
    WithRejection(Form(request), _): WithRejection<Form<CreateUser>, TrackerError>,
) -> Result<Json<UserResponse>, TrackerError> {
    let user = state.user_service.create_user(request).await?;
    Ok(Json(user))
}

/// List every user as `{username, _id}`
pub async fn list_users(
    State(state): State<UsersAppState>,
) -> Result<Json<Vec<UserResponse>>, TrackerError> {
    let users = state.user_service.list_users().await?;
    Ok(Json(users))
}

/// Record an exercise for a user
pub async fn add_exercise(
    State(state): State<UsersAppState>,
    Path(user_id): Path<String>,
    WithRejection(Form(request), _): WithRejection<Form<AddExercise>, TrackerError>,
) -> Result<Json<ExerciseResponse>, TrackerError> {
    let exercise = state.exercise_service.add_exercise(&user_id, request).await?;
    Ok(Json(exercise))
}

/// Get a user's exercise log, optionally filtered by `from`, `to` and `limit`
pub async fn get_log(
    State(state): State<UsersAppState>,
    Path(user_id): Path<String>,
    WithRejection(Query(query), _): WithRejection<Query<LogQuery>, TrackerError>,
) -> Result<Json<LogResponse>, TrackerError> {
    let log = state.exercise_service.get_log(&user_id, query).await?;
    Ok(Json(log))
}

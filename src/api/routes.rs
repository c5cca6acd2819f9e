use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::exercises::exercise_admin_routes;
use super::health::{health_check, landing_page};
use super::users::users_routes;
use crate::config::AppConfig;
use crate::storage::TrackerStore;

pub fn create_routes(store: Arc<dyn TrackerStore>, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", get(landing_page))
        .route("/health", get(health_check))
        .nest("/api/users", users_routes(store.clone()));

    if config.enable_exercise_purge {
        router = router.nest("/api/Exercise", exercise_admin_routes(store));
    } else {
        tracing::info!("Exercise purge route disabled");
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

use axum::{http::StatusCode, response::{Html, Json}};
use serde_json::{json, Value};

const LANDING_PAGE: &str = include_str!("../../views/index.html");

pub async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

pub async fn health_check() -> Result<Json<Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "service": "exercise-tracker",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339()
    })))
}

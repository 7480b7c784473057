use crate::model::classifier::Classifier;
use crate::server::{handlers, types::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn create_router(classifier: Arc<dyn Classifier>) -> Router {
    let state = Arc::new(AppState { classifier });

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/predict", post(handlers::predict))
        .route("/api/reset", post(handlers::reset))
        .route("/api/banner", get(handlers::banner))
        .route("/api/buttons", get(handlers::button_labels))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

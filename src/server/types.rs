use crate::locale::Language;
use crate::model::classifier::Classifier;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared Application State
///
/// The classifier handle is the only cross-request state and is read-only
/// after startup.
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
}

// --- DTOs (Data Transfer Objects) ---

#[derive(Deserialize)]
pub struct PredictRequest {
    /// Base64 encoded upload; absent when the form has no image.
    pub image: Option<String>,
    #[serde(default)]
    pub lang: Language,
}

#[derive(Serialize)]
pub struct PredictResponse {
    /// One of the fixed result/warning fragments, ready to render.
    pub html: String,
}

#[derive(Serialize)]
pub struct ResetResponse {
    /// Always null: the cleared upload slot.
    pub image: Option<String>,
    /// Always empty: the cleared output region.
    pub html: String,
}

#[derive(Deserialize)]
pub struct LocaleQuery {
    #[serde(default)]
    pub lang: Language,
}

#[derive(Serialize)]
pub struct BannerResponse {
    pub title: String,
    pub subtitle: String,
}

#[derive(Serialize)]
pub struct ButtonLabelsResponse {
    pub analyze: String,
    pub reset: String,
}

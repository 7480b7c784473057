use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use base64::{engine::general_purpose, Engine as _};
use std::sync::Arc;
use std::time::Instant;
use tokio::time::{sleep, Duration};

use crate::error::InferenceError;
use crate::locale;
use crate::server::{page, types::*};

pub async fn health_check() -> &'static str {
    "OK"
}

/// The bilingual upload form. Served with Arabic text, the default
/// selector value.
pub async fn index() -> Html<&'static str> {
    Html(page::PAGE)
}

pub async fn predict(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PredictRequest>,
) -> Result<Json<PredictResponse>, InferenceError> {
    let lang = payload.lang;

    // The one guarded condition: an empty form never reaches the model.
    let encoded = match payload.image.as_deref() {
        Some(data) if !data.is_empty() => data,
        _ => {
            return Ok(Json(PredictResponse {
                html: locale::upload_warning(lang).to_string(),
            }))
        }
    };

    // 1. Decode Base64
    let image_bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| InferenceError::PreprocessingError(format!("Base64 decode failed: {}", e)))?;

    // 2. Preprocess + classify
    let start = Instant::now();
    let input_tensor = crate::preprocessing::image::tensor_from_bytes(&image_bytes)?;
    let diagnosis = state.classifier.classify(input_tensor)?;
    tracing::debug!(
        diagnosis = diagnosis.label(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "classified upload"
    );

    // 3. Map the label onto the fixed result fragment
    Ok(Json(PredictResponse {
        html: locale::verdict(lang, diagnosis).to_string(),
    }))
}

/// Clears the form after a fixed half-second pause.
pub async fn reset() -> Json<ResetResponse> {
    sleep(Duration::from_millis(500)).await;

    Json(ResetResponse {
        image: None,
        html: String::new(),
    })
}

pub async fn banner(Query(query): Query<LocaleQuery>) -> Json<BannerResponse> {
    let (title, subtitle) = locale::banner(query.lang);
    Json(BannerResponse {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    })
}

pub async fn button_labels(Query(query): Query<LocaleQuery>) -> Json<ButtonLabelsResponse> {
    let (analyze, reset) = locale::button_labels(query.lang);
    Json(ButtonLabelsResponse {
        analyze: analyze.to_string(),
        reset: reset.to_string(),
    })
}

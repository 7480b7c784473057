use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ndarray::ShapeError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Model not found at path: {0}")]
    ModelNotFound(String),

    #[error("ONNX Runtime error: {0}")]
    OrtError(#[from] ort::Error),

    #[error("Image processing error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Preprocessing error: {0}")]
    PreprocessingError(String),

    #[error("Shape error: {0}")]
    ShapeError(#[from] ShapeError),
}

impl IntoResponse for InferenceError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            InferenceError::ModelNotFound(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            InferenceError::ImageError(_) => {
                (StatusCode::BAD_REQUEST, "Invalid image data".to_string())
            }
            InferenceError::PreprocessingError(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            InferenceError::ShapeError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
            InferenceError::OrtError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found_error() {
        let error = InferenceError::ModelNotFound("models/pneumonia_xray.onnx".to_string());
        assert_eq!(
            error.to_string(),
            "Model not found at path: models/pneumonia_xray.onnx"
        );
    }

    #[test]
    fn test_preprocessing_error() {
        let error = InferenceError::PreprocessingError("Base64 decode failed".to_string());
        assert_eq!(error.to_string(), "Preprocessing error: Base64 decode failed");
    }

    #[test]
    fn test_shape_error_conversion() {
        let shape_error = ShapeError::from_kind(ndarray::ErrorKind::OutOfBounds);
        let inference_error = InferenceError::from(shape_error);
        match inference_error {
            InferenceError::ShapeError(_) => {} // Expected
            _ => panic!("Expected ShapeError"),
        }
    }

    #[test]
    fn test_image_error_conversion() {
        let image_error =
            image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        let inference_error = InferenceError::from(image_error);
        match inference_error {
            InferenceError::ImageError(_) => {} // Expected
            _ => panic!("Expected ImageError"),
        }
    }

    #[test]
    fn test_into_response_model_not_found() {
        let error = InferenceError::ModelNotFound("test".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_bad_input() {
        let error = InferenceError::PreprocessingError("bad base64".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let image_error =
            image::ImageError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "test"));
        let response = InferenceError::from(image_error).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

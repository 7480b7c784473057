use crate::error::InferenceError;
use ort::session::{builder::GraphOptimizationLevel, Session};
use std::path::Path;

// Initialize the global environment for ORT (only needed once)
pub fn init_ort() -> Result<(), InferenceError> {
    ort::init().with_name("pneumoscan").commit()?;
    Ok(())
}

/// Loads the classifier artifact from disk and builds an inference session.
///
/// The service owns exactly one model; a missing or unreadable artifact is
/// fatal to startup.
pub fn load_model(model_path: impl AsRef<Path>) -> Result<Session, InferenceError> {
    let path = model_path.as_ref();
    if !path.exists() {
        return Err(InferenceError::ModelNotFound(path.display().to_string()));
    }

    let session = Session::builder()?
        .with_optimization_level(GraphOptimizationLevel::Level3)?
        .with_intra_threads(4)? // Parallelism within an op
        .commit_from_file(path)?;

    tracing::info!(path = %path.display(), "classifier session ready");
    for (i, input) in session.inputs.iter().enumerate() {
        tracing::debug!(index = i, name = %input.name, ty = ?input.input_type, "model input");
    }

    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_model_nonexistent_file() {
        let result = load_model("no/such/pneumonia_xray.onnx");
        assert!(result.is_err());

        match result.unwrap_err() {
            InferenceError::ModelNotFound(path) => {
                assert!(path.contains("pneumonia_xray.onnx"));
            }
            other => panic!("Expected ModelNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_load_model_rejects_non_onnx_file() {
        let _ = init_ort();

        // The file exists, so loading gets past the path check and fails
        // inside the ONNX parser instead.
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"not an onnx graph").unwrap();

        let result = load_model(temp_file.path());
        match result {
            Err(InferenceError::OrtError(_)) => {}
            other => panic!("Expected OrtError, got {:?}", other.map(|_| ())),
        }
    }
}

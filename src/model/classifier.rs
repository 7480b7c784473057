use crate::error::InferenceError;
use ndarray::{Array4, Axis};
use ort::session::Session;
use ort::value::Value;
use std::sync::Mutex;

/// The two categories the classifier was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnosis {
    Normal,
    Pneumonia,
}

impl Diagnosis {
    /// Picks the top class from the raw score vector.
    ///
    /// Class order follows the training vocabulary, which is sorted
    /// alphabetically: index 0 = NORMAL, index 1 = PNEUMONIA.
    pub fn from_scores(scores: &[f32]) -> Self {
        let top = scores
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(i, _)| i)
            .unwrap_or(0);

        if top == 1 {
            Diagnosis::Pneumonia
        } else {
            Diagnosis::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::Normal => "NORMAL",
            Diagnosis::Pneumonia => "PNEUMONIA",
        }
    }
}

/// The single inference call the rest of the service depends on.
///
/// Handlers only see this trait, which keeps them testable without a real
/// ONNX session behind them.
pub trait Classifier: Send + Sync {
    fn classify(&self, input: Array4<f32>) -> Result<Diagnosis, InferenceError>;
}

/// Production classifier backed by an ONNX Runtime session.
pub struct OnnxClassifier {
    // Session::run needs exclusive access; requests serialize on this lock.
    session: Mutex<Session>,
}

impl OnnxClassifier {
    pub fn new(session: Session) -> Self {
        Self {
            session: Mutex::new(session),
        }
    }
}

impl Classifier for OnnxClassifier {
    fn classify(&self, input: Array4<f32>) -> Result<Diagnosis, InferenceError> {
        let mut session = self.session.lock().unwrap();
        let input_name = session.inputs[0].name.clone();

        let shape = input.shape().to_vec();
        let data = input.into_raw_vec().into_boxed_slice();
        let input_value = Value::from_array((shape, data))?;
        let outputs = session.run(ort::inputs![input_name => input_value])?;

        // Only the top label matters; per-class scores are discarded after
        // the argmax.
        let (shape, data) = outputs[0].try_extract_tensor::<f32>()?;
        let dims: Vec<usize> = shape.iter().map(|&d| d as usize).collect();
        let output = ndarray::ArrayViewD::from_shape(dims.as_slice(), data)?;
        let scores: Vec<f32> = output.index_axis(Axis(0), 0).iter().copied().collect();

        Ok(Diagnosis::from_scores(&scores))
    }
}

pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod preprocessing;
pub mod server;

// Re-export common types
pub use error::InferenceError;

use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
}

#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
}

/// The single classifier this service owns.
#[derive(Deserialize, Clone)]
pub struct ModelConfig {
    pub name: String,
    pub path: String,
}

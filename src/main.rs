use pneumoscan::{config, model, server};
use std::fs;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pneumoscan=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. ONNX Runtime environment
    model::loader::init_ort()?;

    // 3. Config
    let config_content = fs::read_to_string("config.yaml")?;
    let config: config::AppConfig = serde_yaml::from_str(&config_content)?;

    // 4. Classifier (fatal if the artifact is missing or unreadable)
    tracing::info!(
        model = %config.model.name,
        path = %config.model.path,
        "loading classifier"
    );
    let session = model::loader::load_model(&config.model.path)?;
    let classifier: Arc<dyn model::classifier::Classifier> =
        Arc::new(model::classifier::OnnxClassifier::new(session));

    // 5. Router
    let app = server::routes::create_router(classifier);

    // 6. Bind & serve
    let listener =
        TcpListener::bind(format!("{}:{}", config.server.host, config.server.port)).await?;
    tracing::info!(
        "listening on http://{}:{}",
        config.server.host,
        config.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}

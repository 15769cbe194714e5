use filter_rs::api::{ApiServer, AppState};
use filter_rs::config::Config;
use filter_rs::inference::InferenceService;
use filter_rs::store::FsArtifactStore;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = if std::path::Path::new("config.toml").exists() {
        Config::from_file("config.toml")?
    } else {
        Config::default()
    };

    // Initialize logging
    let level: Level = config.logging.level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .pretty()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    info!("Starting filter-rs server");
    info!("  Listening on: {}", config.server.listen_addr);
    info!("  Artifact root: {}", config.artifacts.root);

    let store = FsArtifactStore::new(&config.artifacts.root);
    let service = Arc::new(InferenceService::new(
        store,
        config.artifacts.vectorizer_name.clone(),
        config.artifacts.classifier_name.clone(),
    ));

    // Load artifacts up front; without them the service answers 503 until
    // an operator runs the train binary and restarts
    match service.load().await {
        Ok(()) => info!("Model ready"),
        Err(e) => warn!("Serving without a model: {}", e),
    }

    let state = Arc::new(AppState { service });
    let server = ApiServer::new(state, config.server.listen_addr.clone());
    server.run().await?;

    Ok(())
}

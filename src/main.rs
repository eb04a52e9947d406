use maintenance_predictor::{
    api::{build_router, AppState},
    config::Config,
    ml::{DecisionTreeRiskClassifier, FeatureExtractor, RiskService},
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maintenance_predictor=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    tracing::info!(
        "Starting maintenance-predictor v{}",
        env!("CARGO_PKG_VERSION")
    );
    tracing::info!("Model artifact: {}", config.model.path.display());

    // Load the classifier artifact. This is fatal: the process must not
    // serve traffic without a loaded classifier.
    let n_features = FeatureExtractor::new().n_features();
    let classifier = DecisionTreeRiskClassifier::load(&config.model.path, n_features)?;
    tracing::info!("✅ Risk classifier loaded");

    // Assemble the read-only pipeline state
    let risk = Arc::new(RiskService::new(Arc::new(classifier)));
    let app_state = AppState::new(risk);

    // Build HTTP router
    let app = build_router(app_state);

    // Start HTTP server
    let http_addr = format!("{}:{}", config.server.host, config.server.port);
    let http_listener = tokio::net::TcpListener::bind(&http_addr).await?;

    tracing::info!("🚀 HTTP API server listening on http://{}", http_addr);
    tracing::info!("   Health check: http://{}/health", http_addr);
    tracing::info!("   CSV upload:   http://{}/api/upload", http_addr);
    tracing::info!("   Predictions:  http://{}/api/predict", http_addr);
    tracing::info!("   Recommendations: http://{}/api/recommend", http_addr);

    let http_handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(http_listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        _ = http_handle => {
            tracing::warn!("HTTP server stopped");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    tracing::info!("Shutting down gracefully...");
    Ok(())
}

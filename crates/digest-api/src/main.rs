use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use digest_api::{build_router, config::Config, state::AppState};
use digest_llm::{OpenAIClient, OpenAIConfig};
use digest_workflow::FileStager;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    // Initialize logging
    init_logging(&config);

    tracing::info!("Starting DigestPaper server");
    tracing::info!("Config loaded: {}:{}", config.server.host, config.server.port);

    if config.openai_api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; remote calls will be rejected by the provider");
    }

    // Initialize provider client
    let mut client_config = OpenAIConfig::new(config.openai_api_key.clone());
    if let Some(base_url) = &config.openai_base_url {
        client_config = client_config.with_base_url(base_url);
    }
    let client = Arc::new(OpenAIClient::from_config(client_config)?);

    let state = Arc::new(AppState::new(config.clone(), client));

    spawn_staging_sweeper(state.stager.clone(), &config);

    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically delete staged uploads older than `staging.max_age_secs`
fn spawn_staging_sweeper(stager: FileStager, config: &Config) {
    let max_age = Duration::from_secs(config.staging.max_age_secs);
    let period = Duration::from_secs(config.staging.sweep_interval_secs.max(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            if let Err(e) = stager.sweep(max_age).await {
                tracing::warn!(error = %e, "staging sweep failed");
            }
        }
    });
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match config.logging.format.as_str() {
        "json" => {
            registry.with(tracing_subscriber::fmt::layer().json()).init();
        }
        _ => {
            registry.with(tracing_subscriber::fmt::layer().pretty()).init();
        }
    }
}

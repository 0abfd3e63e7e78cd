use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tourgenie::api::{create_router, AppState};
use tourgenie::archive::PlaceArchive;
use tourgenie::config::Config;
use tourgenie::embeddings::EmbeddingProvider;
use tourgenie::knowledge::SearchIndexClient;
use tourgenie::llm::LlmProvider;
use tourgenie::places::PlaceSearchClient;
use tourgenie::services::IngestOutcome;

#[derive(Parser)]
#[command(name = "tourgenie")]
#[command(about = "Travel-information assistant with a vector-indexed knowledge base")]
struct Args {
    /// Seed the knowledge base from a JSON file of place names before serving
    #[arg(long)]
    seed_places: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tourgenie=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    if config.server.api_keys.is_empty() {
        tracing::warn!(
            "TOURGENIE_API_KEYS is not set — guide and ingestion endpoints are locked. Set TOURGENIE_API_KEYS to enable access."
        );
    }

    tracing::info!("Initializing embedding provider: {}...", config.embeddings.model);
    let embeddings = EmbeddingProvider::new(&config.embeddings)?;

    tracing::info!("Initializing search index client: {}...", config.index.index_name);
    let index = SearchIndexClient::new(&config.index)?;

    let places = PlaceSearchClient::new(&config.places)?;
    if config.places.api_key.is_none() {
        tracing::warn!("PLACES_API_KEY is not set - place lookups will fail");
    }

    if let Some(llm_config) = &config.llm {
        tracing::info!("Initializing LLM provider: {}...", llm_config.model);
    }
    let llm = LlmProvider::new(config.llm.as_ref());
    if !llm.is_available() {
        tracing::warn!("LLM unavailable - guide generation will be disabled");
    }

    let archive = PlaceArchive::new(&config.archive.path);

    let state = AppState::new(
        config.clone(),
        index,
        places,
        archive,
        embeddings,
        llm,
    );

    if let Some(path) = &args.seed_places {
        seed_places(&state, path).await?;
    }

    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("TourGenie starting on http://{}", addr);
    tracing::info!("  Health check: http://{}/api/v1/health", addr);
    tracing::info!("  API docs:     http://{}/api/v1/docs", addr);
    tracing::info!("  OpenAPI spec: http://{}/api/v1/openapi.json", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Batch-seed the knowledge base from a JSON array of place names.
async fn seed_places(state: &AppState, path: &std::path::Path) -> anyhow::Result<()> {
    let raw = std::fs::read_to_string(path)?;
    let names: Vec<String> = serde_json::from_str(&raw)?;

    tracing::info!(count = names.len(), "Seeding knowledge base from {}", path.display());

    for name in &names {
        match state.guide.ingest_by_name(name).await {
            Ok(IngestOutcome::Added(record)) => {
                tracing::info!(place = %record.name, "Seeded place");
            }
            Ok(IngestOutcome::NotFound) => {
                tracing::warn!(place = %name, "Place not found, skipped");
            }
            Err(e) => {
                tracing::error!(place = %name, error = %e, "Seeding failed for place");
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, shutting down...");
}

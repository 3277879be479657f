//! ProjectAid backend entry point.
//!
//! Loads and validates configuration, connects to PostgreSQL, wires the
//! generation strategy selected at startup, and serves the document API.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use project_aid::adapters::ai::{OpenAiClient, OpenAiConfig};
use project_aid::adapters::export::PandocExportService;
use project_aid::adapters::generation::{
    FallbackDocumentGenerator, RemoteDocumentGenerator, TemplateDocumentGenerator,
};
use project_aid::adapters::http::document::{document_router, DocumentAppState};
use project_aid::adapters::postgres::{
    PostgresCatalogReader, PostgresDocumentRepository, PostgresExportedFileRepository,
};
use project_aid::adapters::storage::LocalExportStorage;
use project_aid::config::{AppConfig, GenerationStrategy};
use project_aid::ports::DocumentGenerator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    info!(environment = ?config.server.environment, "starting project-aid backend");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let generator = build_generator(&config);
    info!(generator = %generator.generator_info().name, "generation strategy wired");

    let export_service = {
        let mut service = PandocExportService::new().with_timeout(config.storage.export_timeout_secs);
        if let Some(path) = &config.storage.pandoc_path {
            service = service.with_pandoc_path(path);
        }
        Arc::new(service)
    };

    let state = DocumentAppState::new(
        Arc::new(PostgresCatalogReader::new(pool.clone())),
        generator,
        Arc::new(PostgresDocumentRepository::new(pool.clone())),
        Arc::new(PostgresExportedFileRepository::new(pool)),
        export_service,
        Arc::new(LocalExportStorage::new(config.storage.uploads_root.clone())),
    );

    let app = document_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = config.server.socket_addr();
    info!(%addr, "listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Wires the generator selected by configuration. The strategy is decided
/// here, once, at startup; request handling never inspects configuration.
fn build_generator(config: &AppConfig) -> Arc<dyn DocumentGenerator> {
    match config.generation.strategy {
        GenerationStrategy::Free => Arc::new(TemplateDocumentGenerator::new()),
        GenerationStrategy::OpenAi => {
            let api_key = config
                .generation
                .openai_api_key
                .clone()
                .expect("validated at startup");
            let client = OpenAiClient::new(
                OpenAiConfig::new(api_key)
                    .with_model(config.generation.model.clone())
                    .with_timeout(config.generation.timeout()),
            );
            let remote = RemoteDocumentGenerator::new(
                Arc::new(client),
                config.generation.max_tokens,
                config.generation.temperature,
            );
            Arc::new(FallbackDocumentGenerator::new(
                remote,
                TemplateDocumentGenerator::new(),
            ))
        }
    }
}

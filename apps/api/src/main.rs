mod compiler;
mod config;
mod db;
mod dsl;
mod errors;
mod layout;
mod models;
mod routes;
mod sections;
mod state;
mod storage;
mod tokens;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::compiler::ResumeCompiler;
use crate::config::Config;
use crate::db::create_pool;
use crate::dsl::migration::MigrationEngine;
use crate::dsl::migrators::default_migrators;
use crate::dsl::model::CURRENT_DSL_VERSION;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::PgResumeStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume DSL API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url, config.db_max_connections).await?;
    let store = Arc::new(PgResumeStore::new(db));

    // Migration registry is built once and shared read-only
    let mut migrations = MigrationEngine::new();
    migrations.register_migrators(default_migrators())?;
    info!("DSL schema v{CURRENT_DSL_VERSION}, migrators registered");

    let compiler = Arc::new(ResumeCompiler::new(
        Arc::new(migrations),
        store,
        config.persist_migrated_dsl,
    ));
    if config.persist_migrated_dsl {
        info!("Migrated DSL documents will be written back to storage");
    }

    // Build app state
    let state = AppState {
        config: config.clone(),
        compiler,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the editor host is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

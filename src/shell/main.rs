use anyhow::Context;
use std::sync::Arc;

use app_server::modules::auth::adapters::static_tokens::StaticTokenContextProvider;
use app_server::modules::query_engine::graphql::GraphQlEngine;
use app_server::shared::infrastructure::data_store::in_memory::InMemoryDataStore;
use app_server::shell::config::ServerConfig;
use app_server::shell::startup::StartupCoordinator;
use app_server::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = ServerConfig::from_env().context("failed to read server config")?;

    let context_provider = match &config.auth_tokens_file {
        Some(path) => StaticTokenContextProvider::from_json_file(path)
            .context("failed to load auth token table")?,
        None => StaticTokenContextProvider::new(),
    };
    if context_provider.is_empty() {
        tracing::info!("no auth tokens configured, every request is anonymous");
    } else {
        tracing::debug!(tokens = context_provider.len(), "context provider ready");
    }

    // In-memory deps for now
    let data_store = Arc::new(InMemoryDataStore::new());
    let engine = Arc::new(GraphQlEngine::new());

    let coordinator = StartupCoordinator::new(
        config,
        engine,
        Arc::new(context_provider),
        data_store.clone(),
    );

    tokio::spawn(async move { data_store.connect() });

    let server = coordinator.start().await.context("server start-up failed")?;
    server.wait().await.context("server stopped")?;
    Ok(())
}

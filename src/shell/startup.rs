// Start-up sequence: engine first, routes second, listener last.
//
// Ordering
// 1. Start the query engine. Failure aborts start-up; no socket is ever bound.
// 2. Build the router around the started engine and the context provider.
// 3. Wait for the data store's readiness signal (first transition only).
// 4. Bind the listener and serve.
//
// A data store that never becomes ready keeps step 3 pending forever. That is deliberate:
// there is no timeout here, only the "waiting" log line.

use std::net::SocketAddr;
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::modules::auth::context_provider::ContextProvider;
use crate::modules::query_engine::engine::{EngineInitError, QueryEngine};
use crate::shared::infrastructure::data_store::DataStore;
use crate::shell::config::{API_PATH, ServerConfig};
use crate::shell::http::router;
use crate::shell::state::AppState;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    EngineInit(#[from] EngineInitError),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
}

pub struct StartupCoordinator {
    config: Arc<ServerConfig>,
    engine: Arc<dyn QueryEngine>,
    context_provider: Arc<dyn ContextProvider>,
    data_store: Arc<dyn DataStore>,
}

impl StartupCoordinator {
    pub fn new(
        config: ServerConfig,
        engine: Arc<dyn QueryEngine>,
        context_provider: Arc<dyn ContextProvider>,
        data_store: Arc<dyn DataStore>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            engine,
            context_provider,
            data_store,
        }
    }

    pub async fn start(self) -> Result<RunningServer, StartupError> {
        tracing::info!(environment = %self.config.environment, "starting query engine");
        self.engine.start().await?;

        let app = router(AppState {
            engine: self.engine,
            context_provider: self.context_provider,
            config: self.config.clone(),
        });

        let readiness = self.data_store.readiness();
        if !readiness.is_ready() {
            tracing::info!("waiting for data store readiness");
        }
        readiness.wait().await;

        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| StartupError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| StartupError::Bind { addr, source })?;

        tracing::info!("API server running on port {}", local_addr.port());
        tracing::info!(
            "Use GraphQL at http://localhost:{}{}",
            local_addr.port(),
            API_PATH
        );

        let task = tokio::spawn(async move { axum::serve(listener, app).await });
        Ok(RunningServer { local_addr, task })
    }
}

/// A bound, serving listener.
pub struct RunningServer {
    local_addr: SocketAddr,
    task: JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Serves until the listener fails.
    pub async fn wait(self) -> std::io::Result<()> {
        self.task.await.map_err(std::io::Error::other)?
    }

    /// Drops the listener without draining in-flight requests.
    pub fn abort(self) {
        self.task.abort();
    }
}

use std::sync::Arc;

use crate::modules::auth::context_provider::ContextProvider;
use crate::modules::query_engine::engine::QueryEngine;
use crate::shell::config::ServerConfig;

/// Everything route handlers need, built once per server instance.
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<dyn QueryEngine>,
    pub context_provider: Arc<dyn ContextProvider>,
    pub config: Arc<ServerConfig>,
}

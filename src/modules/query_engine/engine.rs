// Port for the query engine the HTTP front forwards API traffic to.
//
// Responsibilities
// - `start` must complete before the engine is attached to any route.
// - `execute` runs a single request with the context derived for that request only.

use async_graphql::{Request, Response};
use async_trait::async_trait;
use thiserror::Error;

use crate::modules::auth::core::request_context::RequestContext;

#[derive(Debug, Error)]
pub enum EngineInitError {
    #[error("engine start-up probe failed: {0}")]
    Probe(String),

    #[error("engine initialization failed: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait QueryEngine: Send + Sync {
    async fn start(&self) -> Result<(), EngineInitError>;
    async fn execute(&self, request: Request, context: RequestContext) -> Response;
}

// Query engine doubles for router and start-up tests.

use async_graphql::{Request, Response, Value};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::modules::auth::core::request_context::RequestContext;
use crate::modules::query_engine::engine::{EngineInitError, QueryEngine};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub query: String,
    pub operation_name: Option<String>,
    pub variables: serde_json::Value,
    pub context: RequestContext,
}

/// Records every request it executes and answers `{ "ok": true }`.
#[derive(Default)]
pub struct RecordingEngine {
    start_delay: Option<Duration>,
    starts: AtomicUsize,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start_delay(delay: Duration) -> Self {
        Self {
            start_delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn starts(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryEngine for RecordingEngine {
    async fn start(&self) -> Result<(), EngineInitError> {
        if let Some(delay) = self.start_delay {
            tokio::time::sleep(delay).await;
        }
        self.starts.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn execute(&self, request: Request, context: RequestContext) -> Response {
        self.calls.lock().unwrap().push(RecordedCall {
            query: request.query.clone(),
            operation_name: request.operation_name.clone(),
            variables: serde_json::to_value(&request.variables).unwrap(),
            context,
        });
        Response::new(Value::from_json(serde_json::json!({ "ok": true })).unwrap())
    }
}

/// Fails `start`; `execute` must never be reached.
pub struct FailingEngine;

#[async_trait]
impl QueryEngine for FailingEngine {
    async fn start(&self) -> Result<(), EngineInitError> {
        Err(EngineInitError::Unexpected("schema could not be loaded".into()))
    }

    async fn execute(&self, _request: Request, _context: RequestContext) -> Response {
        panic!("execute called on an engine that failed to start")
    }
}

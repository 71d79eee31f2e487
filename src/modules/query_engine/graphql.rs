use async_graphql::{
    Context, EmptyMutation, EmptySubscription, ID, Object, Request, Response, Result as GqlResult,
    Schema, ServerError, SimpleObject,
};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::modules::auth::core::request_context::{AuthenticatedUser, RequestContext};
use crate::modules::query_engine::engine::{EngineInitError, QueryEngine};

#[derive(SimpleObject, Clone)]
#[graphql(name = "User")]
pub struct GqlUser {
    pub id: ID,
    pub username: String,
    pub email: String,
}

impl From<&AuthenticatedUser> for GqlUser {
    fn from(user: &AuthenticatedUser) -> Self {
        Self {
            id: ID(user.id.clone()),
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Viewer {
    pub authenticated: bool,
    pub user: Option<GqlUser>,
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// The caller, as seen through the context derived for this request.
    async fn viewer(&self, context: &Context<'_>) -> GqlResult<Viewer> {
        let request_context = context.data::<RequestContext>()?;
        Ok(Viewer {
            authenticated: request_context.is_authenticated(),
            user: request_context.user().map(Into::into),
        })
    }
}

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema() -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish()
}

pub struct GraphQlEngine {
    schema: AppSchema,
    started: AtomicBool,
}

impl Default for GraphQlEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphQlEngine {
    pub fn new() -> Self {
        Self {
            schema: build_schema(),
            started: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl QueryEngine for GraphQlEngine {
    async fn start(&self) -> Result<(), EngineInitError> {
        let probe = self.schema.execute("{ __typename }").await;
        if let Some(error) = probe.errors.first() {
            return Err(EngineInitError::Probe(error.message.clone()));
        }
        self.started.store(true, Ordering::Release);
        tracing::debug!("query engine started");
        Ok(())
    }

    async fn execute(&self, request: Request, context: RequestContext) -> Response {
        if !self.started.load(Ordering::Acquire) {
            return Response::from_errors(vec![ServerError::new(
                "query engine has not started",
                None,
            )]);
        }
        self.schema.execute(request.data(context)).await
    }
}

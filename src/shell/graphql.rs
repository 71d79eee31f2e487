use async_graphql::http::{GraphiQLSource, parse_query_string};
use async_graphql_axum::GraphQLResponse;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};

use crate::shell::body::DecodedBody;
use crate::shell::config::API_PATH;
use crate::shell::state::AppState;

/// API entry point for POST: decoded body in, fresh per-request context attached, engine response out.
pub async fn graphql(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    DecodedBody(body): DecodedBody,
) -> Response {
    let request: async_graphql::Request = match serde_json::from_value(body) {
        Ok(request) => request,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, format!("invalid GraphQL request: {e}"))
                .into_response();
        }
    };
    execute(&state, &headers, &uri, request).await
}

/// API entry point for GET: `?query=...` executes; a bare GET opens GraphiQL in development.
pub async fn graphql_get(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    let Some(query) = uri.query().filter(|query| !query.is_empty()) else {
        if state.config.environment.is_development() {
            return graphiql().await.into_response();
        }
        return (StatusCode::BAD_REQUEST, "missing GraphQL query").into_response();
    };

    match parse_query_string(query) {
        Ok(request) => execute(&state, &headers, &uri, request).await,
        Err(e) => {
            (StatusCode::BAD_REQUEST, format!("invalid GraphQL request: {e}")).into_response()
        }
    }
}

async fn execute(
    state: &AppState,
    headers: &HeaderMap,
    uri: &Uri,
    request: async_graphql::Request,
) -> Response {
    let context = state.context_provider.derive(headers, uri).await;
    let response = state.engine.execute(request, context).await;
    GraphQLResponse::from(response).into_response()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(API_PATH).finish())
}

use axum::{
    Router,
    http::StatusCode,
    routing::{MethodRouter, get, get_service},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::shell::config::API_PATH;
use crate::shell::graphql;
use crate::shell::state::AppState;

/// Builds the HTTP front. The mode is read from the configuration once, here.
pub fn router(state: AppState) -> Router {
    let mut router = Router::new().route(
        API_PATH,
        get(graphql::graphql_get).post(graphql::graphql),
    );

    // Only GET and HEAD reach the client build; other methods on unmatched paths stay 404.
    if state.config.environment.serves_client() {
        let client = ServeDir::new(&state.config.client_build_dir)
            .fallback(ServeFile::new(state.config.fallback_document()));
        let client: MethodRouter = get_service(client).fallback(not_found);
        router = router.fallback_service(client);
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}

// Boundary between the HTTP front and whatever derives authentication context.
//
// Responsibilities
// - Turn raw request data into a RequestContext, once per request.
// - Never fail the request: a missing, malformed or unknown token yields an anonymous context.

use async_trait::async_trait;
use axum::extract::Query;
use axum::http::{HeaderMap, Uri, header::AUTHORIZATION};
use std::collections::HashMap;

use crate::modules::auth::core::request_context::RequestContext;

#[async_trait]
pub trait ContextProvider: Send + Sync {
    async fn derive(&self, headers: &HeaderMap, uri: &Uri) -> RequestContext;
}

/// Finds the caller's token: `Authorization: Bearer <token>` first, then a `token` query parameter.
pub fn extract_token(headers: &HeaderMap, uri: &Uri) -> Option<String> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| {
            let (scheme, token) = value.trim().split_once(' ')?;
            scheme.eq_ignore_ascii_case("bearer").then(|| token.trim())
        })
        .filter(|token| !token.is_empty())
        .map(str::to_owned);

    from_header.or_else(|| {
        let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(uri).ok()?;
        params.remove("token").filter(|token| !token.is_empty())
    })
}

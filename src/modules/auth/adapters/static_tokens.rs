// Token table implementation of the ContextProvider port.
//
// Purpose
// - Deterministic context derivation for local development and tests.
//
// Responsibilities
// - Map a known token to its user; everything else is anonymous.
// - Optionally load the table from a JSON file of `{ "<token>": { id, username, email } }`.

use async_trait::async_trait;
use axum::http::{HeaderMap, Uri};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::modules::auth::context_provider::{ContextProvider, extract_token};
use crate::modules::auth::core::request_context::{AuthenticatedUser, RequestContext};

#[derive(Debug, Error)]
pub enum TokenTableError {
    #[error("failed to read token table {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse token table {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone)]
pub struct StaticTokenContextProvider {
    users_by_token: HashMap<String, AuthenticatedUser>,
}

impl StaticTokenContextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(mut self, token: impl Into<String>, user: AuthenticatedUser) -> Self {
        self.users_by_token.insert(token.into(), user);
        self
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TokenTableError> {
        let display = path.display().to_string();
        let raw = std::fs::read_to_string(path).map_err(|source| TokenTableError::Read {
            path: display.clone(),
            source,
        })?;
        let users_by_token = serde_json::from_str(&raw).map_err(|source| TokenTableError::Parse {
            path: display,
            source,
        })?;
        Ok(Self { users_by_token })
    }

    pub fn len(&self) -> usize {
        self.users_by_token.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users_by_token.is_empty()
    }
}

#[async_trait]
impl ContextProvider for StaticTokenContextProvider {
    async fn derive(&self, headers: &HeaderMap, uri: &Uri) -> RequestContext {
        let Some(token) = extract_token(headers, uri) else {
            return RequestContext::anonymous();
        };
        match self.users_by_token.get(&token) {
            Some(user) => RequestContext::authenticated(user.clone()),
            None => {
                tracing::debug!("unknown token, continuing as anonymous");
                RequestContext::anonymous()
            }
        }
    }
}

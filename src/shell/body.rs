// Request body decoding shared by every handler that takes a body.
//
// Responsibilities
// - Accept JSON and URL-encoded bodies and hand handlers a parsed value, never raw bytes.
// - Reject anything else for this request only.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::{StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Form fields that carry JSON documents as strings.
const JSON_ENCODED_FORM_FIELDS: [&str; 2] = ["variables", "extensions"];

#[derive(Debug, Clone, PartialEq)]
pub struct DecodedBody(pub Value);

#[derive(Debug)]
pub enum BodyRejection {
    UnsupportedMediaType,
    Malformed(String),
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        match self {
            BodyRejection::UnsupportedMediaType => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "expected application/json or application/x-www-form-urlencoded",
            )
                .into_response(),
            BodyRejection::Malformed(reason) => (StatusCode::BAD_REQUEST, reason).into_response(),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum BodyKind {
    Json,
    UrlEncoded,
}

fn body_kind(request: &Request) -> Option<BodyKind> {
    let content_type = request.headers().get(CONTENT_TYPE)?.to_str().ok()?;
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    if mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
    {
        Some(BodyKind::Json)
    } else if mime == "application/x-www-form-urlencoded" {
        Some(BodyKind::UrlEncoded)
    } else {
        None
    }
}

fn form_to_value(fields: HashMap<String, String>) -> Value {
    let object: Map<String, Value> = fields
        .into_iter()
        .map(|(key, raw)| {
            let value = if JSON_ENCODED_FORM_FIELDS.contains(&key.as_str()) {
                serde_json::from_str(&raw).unwrap_or(Value::String(raw))
            } else {
                Value::String(raw)
            };
            (key, value)
        })
        .collect();
    Value::Object(object)
}

impl<S> FromRequest<S> for DecodedBody
where
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&request) {
            Some(BodyKind::Json) => {
                let Json(value) = Json::<Value>::from_request(request, state)
                    .await
                    .map_err(|rejection| BodyRejection::Malformed(rejection.body_text()))?;
                Ok(DecodedBody(value))
            }
            Some(BodyKind::UrlEncoded) => {
                let Form(fields) = Form::<HashMap<String, String>>::from_request(request, state)
                    .await
                    .map_err(|rejection| BodyRejection::Malformed(rejection.body_text()))?;
                Ok(DecodedBody(form_to_value(fields)))
            }
            None => Err(BodyRejection::UnsupportedMediaType),
        }
    }
}

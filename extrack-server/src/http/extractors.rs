//! Custom Axum extractors
//!
//! Rejections are turned into `ApiError::Validation` so every failure keeps
//! the `{"error": ...}` shape.

use std::borrow::Cow;

use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::{Form, Json};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::ValidationError;

/// Request body from either a JSON or a url-encoded form payload.
///
/// The `Content-Type` header picks the decoder. A request without one is
/// read as a form, which is what plain HTML forms and `curl -d` send.
pub struct JsonOrForm<T>(pub T);

impl<T, S> FromRequest<S> for JsonOrForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(mut req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase);

        match content_type.as_deref() {
            Some(ct) if is_json(ct) => {
                let Json(value) = Json::<T>::from_request(req, state)
                    .await
                    .map_err(|e| unreadable(e.body_text()))?;
                Ok(Self(value))
            }
            _ => {
                if content_type.is_none() {
                    req.headers_mut().insert(
                        CONTENT_TYPE,
                        HeaderValue::from_static("application/x-www-form-urlencoded"),
                    );
                }
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|e| unreadable(e.body_text()))?;
                Ok(Self(value))
            }
        }
    }
}

/// Query string parameters with JSON-shaped rejections.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| unreadable(e.body_text()))?;
        Ok(Self(value))
    }
}

/// A scalar form field that JSON clients may also send as a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
}

impl FieldValue {
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Number(n) => Cow::Owned(n.to_string()),
        }
    }
}

fn is_json(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default().trim();
    mime == "application/json" || mime.ends_with("+json")
}

fn unreadable(reason: String) -> ApiError {
    ApiError::Validation(ValidationError::UnreadableBody { reason })
}

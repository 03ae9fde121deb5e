//! Extractors that turn request data into typed parameters, failing with [`ApiError`].

use crate::error::ApiError;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts, HeaderMap},
    Form, Json,
};
use serde::de::DeserializeOwned;

/// Request parameters read from wherever the client put them.
///
/// JSON and urlencoded bodies are decoded according to `Content-Type`. A request
/// without a `Content-Type`, or with an empty JSON body, is read from its query
/// string. Any other media type is rejected.
#[derive(Debug)]
pub struct Params<T>(pub T);

#[derive(Debug, PartialEq)]
enum Source {
    Json,
    Form,
    Query,
    Unsupported(String),
}

fn source(headers: &HeaderMap) -> Source {
    let Some(content_type) = headers.get(CONTENT_TYPE) else {
        return Source::Query;
    };

    let media_type = content_type
        .to_str()
        .unwrap_or_default()
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if media_type == "application/json" || media_type.ends_with("+json") {
        Source::Json
    } else if media_type == "application/x-www-form-urlencoded" {
        Source::Form
    } else {
        Source::Unsupported(media_type)
    }
}

#[async_trait]
impl<S, T> FromRequest<S> for Params<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match source(req.headers()) {
            Source::Json => {
                let uri = req.uri().clone();
                let bytes = Bytes::from_request(req, state).await?;
                if bytes.is_empty() {
                    let Query(value) = Query::<T>::try_from_uri(&uri)?;
                    return Ok(Self(value));
                }
                let Json(value) = Json::<T>::from_bytes(&bytes)?;
                Ok(Self(value))
            }
            Source::Form => {
                let Form(value) = Form::<T>::from_request(req, state).await?;
                Ok(Self(value))
            }
            Source::Query => {
                let Query(value) = Query::<T>::try_from_uri(req.uri())?;
                Ok(Self(value))
            }
            Source::Unsupported(media_type) => Err(ApiError::UnsupportedMediaType(format!(
                "Unsupported content type `{media_type}`, expected `application/json` or `application/x-www-form-urlencoded`"
            ))),
        }
    }
}

/// The `:id` segment of `/messages/:id`.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

//! Extractors whose rejections use the uniform JSON error body.
//!
//! Axum's stock `Json` and `Path` extractors reject with plain-text bodies
//! and a mix of 400/415/422 statuses. These wrappers route every rejection
//! through [`AppError`] instead.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;

use crate::error::AppError;

/// JSON body extractor. Any rejection (missing or wrong content type,
/// malformed JSON, missing field, wrong field type) becomes a 422.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::Unprocessable(rejection.body_text())),
        }
    }
}

/// Path parameter extractor. A segment that does not parse (e.g. a
/// non-integer id) is treated as a route miss and becomes a 404.
#[derive(Debug, Clone, Copy)]
pub struct AppPath<T>(pub T);

impl<S, T> FromRequestParts<S> for AppPath<T>
where
    Path<T>: FromRequestParts<S, Rejection = PathRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(AppPath(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection, "Unparseable path parameter");
                Err(AppError::NotFound)
            }
        }
    }
}

//! Custom Axum extractors

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body extractor whose rejections are validation errors.
///
/// Axum's stock `Json` answers malformed bodies with plain-text 400/415/422
/// responses; this keeps them in the API's JSON error envelope.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

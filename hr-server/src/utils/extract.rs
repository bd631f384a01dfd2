//! Validated JSON extractor
//!
//! [`ValidJson`] replaces `axum::Json` in mutating handlers. It funnels both
//! failure classes through [`AppError::Validation`] (HTTP 400):
//! - body/shape errors from serde: missing required field, wrong type,
//!   a value outside a closed enum, malformed JSON
//! - constraint violations from the payload's `Validate` derive, aggregated
//!   across all fields

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::{AppError, validation::validate_payload};

pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        validate_payload(&payload)?;

        Ok(Self(payload))
    }
}

//! JSON and form body extractors whose rejections are [`AppError`]s.

use crate::error::AppError;
use crate::input::Fields;
use async_trait::async_trait;
use axum::{
    extract::{FromRequest, Request},
    Form, Json,
};
use serde_json::Value;

/// JSON object body. Malformed JSON or a wrong content type becomes `AppError::BadRequest`.
#[derive(Clone, Debug)]
pub struct JsonFields(pub Fields);

#[async_trait]
impl<S> FromRequest<S> for JsonFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(JsonFields(Fields::from_json(value)?))
    }
}

/// `application/x-www-form-urlencoded` body.
#[derive(Clone, Debug)]
pub struct FormFields(pub Fields);

#[async_trait]
impl<S> FromRequest<S> for FormFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(FormFields(Fields::from_form(pairs)))
    }
}

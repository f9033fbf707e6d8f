use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, format_validation_errors};
use validator::Validate;

/// JSON extractor that runs `validator` rules before the handler body.
/// Malformed JSON and failed rules both surface as 400 responses.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppErrorHttp(ServiceError::Validation(vec![e.body_text()])))?;

        value.validate().map_err(|e| {
            let messages = format_validation_errors(&e)
                .lines()
                .map(str::to_string)
                .collect();
            AppErrorHttp(ServiceError::Validation(messages))
        })?;

        Ok(Self(value))
    }
}

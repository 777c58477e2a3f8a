use crate::error::{AppError, INVALID_JSON_MESSAGE};
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

/// JSON body extractor that ignores `Content-Type` and decodes only the first
/// JSON value in the body; anything after it is left unread. Every failure is
/// a plain `400 Invalid JSON data`. `DefaultBodyLimit` still applies.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        decode_first_value(&bytes).map(JsonBody)
    }
}

fn decode_first_value<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<T>()
        .next()
    {
        Some(value) => Ok(value?),
        None => {
            tracing::debug!("Rejected empty request body");
            Err(AppError::bad_request(INVALID_JSON_MESSAGE))
        }
    }
}

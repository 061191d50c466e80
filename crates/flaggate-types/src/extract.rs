//! Custom Axum extractors for Flaggate request bodies.

use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::Error;

// JsonBody //
//**********//
/// JSON body extractor whose rejection is a [`Error::ValidationError`].
///
/// `axum::Json` rejects with its own plain-text responses. Handlers use this
/// instead so a malformed or incomplete body is reported through the common
/// error format with status 400.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
	T: DeserializeOwned,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		match axum::Json::<T>::from_request(req, state).await {
			Ok(axum::Json(value)) => Ok(JsonBody(value)),
			Err(rejection) => Err(Error::ValidationError(rejection.body_text())),
		}
	}
}

// vim: ts=4

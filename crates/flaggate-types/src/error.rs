//! Error type shared by all Flaggate crates.

use axum::{Json, http::StatusCode, response::IntoResponse};

pub type FgResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	/// Referenced user, feature or override does not exist
	NotFound,
	/// Malformed request or rejected input; nothing was mutated
	ValidationError(String),
	DbError,
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl Error {
	fn code(&self) -> &'static str {
		match self {
			Error::NotFound => "E-NOT-FOUND",
			Error::ValidationError(_) => "E-VALIDATION",
			Error::DbError => "E-DB",
			Error::Internal(_) | Error::Io(_) => "E-INTERNAL",
		}
	}

	fn status(&self) -> StatusCode {
		match self {
			Error::NotFound => StatusCode::NOT_FOUND,
			Error::ValidationError(_) => StatusCode::BAD_REQUEST,
			Error::DbError | Error::Internal(_) | Error::Io(_) => {
				StatusCode::INTERNAL_SERVER_ERROR
			}
		}
	}
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<chrono::ParseError> for Error {
	fn from(err: chrono::ParseError) -> Self {
		Self::ValidationError(format!("invalid date: {}", err))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::DbError => write!(f, "database error"),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "io error: {}", err),
		}
	}
}

impl std::error::Error for Error {}

impl IntoResponse for Error {
	fn into_response(self) -> axum::response::Response {
		let status = self.status();
		// Internal details stay in the log
		let message = match &self {
			Error::NotFound | Error::ValidationError(_) => self.to_string(),
			Error::DbError | Error::Internal(_) | Error::Io(_) => {
				tracing::error!(error = %self, "request failed");
				"internal server error".to_string()
			}
		};
		let body = serde_json::json!({
			"error": {
				"code": self.code(),
				"message": message,
			}
		});
		(status, Json(body)).into_response()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_status_mapping() {
		assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
		assert_eq!(
			Error::ValidationError("bad".into()).into_response().status(),
			StatusCode::BAD_REQUEST
		);
		assert_eq!(Error::DbError.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[test]
	fn test_date_parse_error_is_validation() {
		let err: Error = chrono::NaiveDate::parse_from_str("2024-13-40", "%Y-%m-%d")
			.map_err(Error::from)
			.err()
			.unwrap_or(Error::NotFound);
		assert!(matches!(err, Error::ValidationError(_)));
	}
}

// vim: ts=4

//! HTTP handlers of the Flaggate service.
//!
//! Handlers validate their input, call into `flaggate-core` and shape the
//! JSON responses. Routing lives in the `flaggate` crate.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod catalog;
pub mod check;
pub mod feature;
pub mod listing;
pub mod overrides;
pub mod prelude;
pub mod user;

use serde::Serialize;

/// Body of responses that only confirm an action
#[derive(Debug, Serialize)]
pub struct Message {
	pub message: &'static str,
}

impl Message {
	pub fn new(message: &'static str) -> axum::Json<Self> {
		axum::Json(Self { message })
	}
}

// vim: ts=4

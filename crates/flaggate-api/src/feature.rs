//! Feature flag handlers

use axum::{
	Json,
	extract::{Path, State},
};
use serde::{Deserialize, Serialize};

use flaggate_types::utils::{lookup_key, validate_name};

use crate::Message;
use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct CreateFeatureReq {
	name: String,
	default_state: bool,
}

#[derive(Debug, Serialize)]
pub struct CreateFeatureRes {
	message: &'static str,
	feature: Box<str>,
}

pub async fn post_create_feature(
	State(app): State<App>,
	JsonBody(req): JsonBody<CreateFeatureReq>,
) -> FgResult<Json<CreateFeatureRes>> {
	let name = validate_name("name", &req.name)?;
	let feature = app.record_adapter.create_feature(name, req.default_state).await?;
	info!(feature = %feature.name, default_enabled = feature.default_enabled, "feature created");

	Ok(Json(CreateFeatureRes { message: "Feature created", feature: feature.name }))
}

/// Deletes a flag and every override that refers to it
pub async fn delete_feature(
	State(app): State<App>,
	Path(name): Path<String>,
) -> FgResult<Json<Message>> {
	let name = lookup_key(&name);
	app.record_adapter.delete_feature(name).await?;
	info!(feature = %name, "feature deleted");

	Ok(Message::new("Feature deleted"))
}

// vim: ts=4

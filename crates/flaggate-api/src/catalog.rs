//! Region title catalog handlers

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use flaggate_types::record_adapter::CatalogTitle;
use flaggate_types::utils::{validate_key, validate_name};

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct AddTitleReq {
	region: String,
	name: String,
}

pub async fn post_add_title(
	State(app): State<App>,
	JsonBody(req): JsonBody<AddTitleReq>,
) -> FgResult<(StatusCode, Json<CatalogTitle>)> {
	let region = validate_key("region", &req.region)?;
	let name = validate_name("name", &req.name)?;
	let title = app.record_adapter.create_title(region, name).await?;
	info!(region = %title.region, title = %title.name, "title added");

	Ok((StatusCode::CREATED, Json(title)))
}

pub async fn list_titles(State(app): State<App>) -> FgResult<Json<Vec<CatalogTitle>>> {
	Ok(Json(app.record_adapter.list_titles(None).await?))
}

// vim: ts=4

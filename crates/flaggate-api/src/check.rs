//! Feature evaluation handlers

use axum::{Json, extract::State};
use serde::Deserialize;
use std::collections::BTreeMap;

use flaggate_core::evaluation::{self, Entitlements};
use flaggate_types::types::today;
use flaggate_types::utils::lookup_key;

use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct CheckFeatureReq {
	user_id: UserId,
	feature: String,
}

pub async fn post_check_feature(
	State(app): State<App>,
	JsonBody(req): JsonBody<CheckFeatureReq>,
) -> FgResult<Json<Verdict>> {
	let verdict = evaluation::evaluate(&app, req.user_id, lookup_key(&req.feature), today()).await?;
	info!(
		user_id = %req.user_id,
		feature = %req.feature,
		enabled = verdict.enabled,
		source = %verdict.source,
		"feature checked"
	);

	Ok(Json(verdict))
}

#[derive(Debug, Deserialize)]
pub struct UserReq {
	user_id: UserId,
}

pub async fn post_check_all_features(
	State(app): State<App>,
	JsonBody(req): JsonBody<UserReq>,
) -> FgResult<Json<BTreeMap<Box<str>, Verdict>>> {
	let verdicts = evaluation::evaluate_all(&app, req.user_id, today()).await?;
	Ok(Json(verdicts))
}

pub async fn post_my_features(
	State(app): State<App>,
	JsonBody(req): JsonBody<UserReq>,
) -> FgResult<Json<Entitlements>> {
	let ent = evaluation::entitlements(&app, req.user_id, today()).await?;
	info!(
		user_id = %req.user_id,
		features = ent.features.len(),
		titles = ent.titles.len(),
		"entitlements listed"
	);

	Ok(Json(ent))
}

// vim: ts=4

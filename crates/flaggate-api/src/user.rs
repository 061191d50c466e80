//! User and subscription handlers

use axum::{Json, extract::State, http::StatusCode};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use flaggate_core::subscription;
use flaggate_types::record_adapter::{CreateUserData, User};
use flaggate_types::types::today;
use flaggate_types::utils::{validate_key, validate_name};

use crate::Message;
use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct CreateUserReq {
	name: String,
	region: String,
	#[serde(default)]
	subscription_active: bool,
	subscription_expiry: Option<NaiveDate>,
}

pub async fn post_create_user(
	State(app): State<App>,
	JsonBody(req): JsonBody<CreateUserReq>,
) -> FgResult<(StatusCode, Json<User>)> {
	let data = CreateUserData {
		name: validate_name("name", &req.name)?,
		region: validate_key("region", &req.region)?,
		subscription_active: req.subscription_active,
		subscription_expiry: req.subscription_expiry,
	};
	let user = subscription::create_user(
		app.record_adapter.as_ref(),
		data,
		app.opts.default_plan_days,
		today(),
	)
	.await?;

	Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Debug, Deserialize)]
pub struct SubscribeReq {
	user_id: UserId,
	plan_days: Option<u32>,
}

#[derive(Debug, Serialize)]
pub struct SubscribeRes {
	message: &'static str,
	expiry: NaiveDate,
}

pub async fn post_subscribe_user(
	State(app): State<App>,
	JsonBody(req): JsonBody<SubscribeReq>,
) -> FgResult<Json<SubscribeRes>> {
	let plan_days = req.plan_days.unwrap_or(app.opts.default_plan_days);
	let expiry =
		subscription::subscribe(app.record_adapter.as_ref(), req.user_id, plan_days, today())
			.await?;

	Ok(Json(SubscribeRes { message: "User upgraded to Prime", expiry }))
}

#[derive(Debug, Deserialize)]
pub struct AddUserGroupReq {
	user_id: UserId,
	group_name: String,
}

pub async fn post_add_user_group(
	State(app): State<App>,
	JsonBody(req): JsonBody<AddUserGroupReq>,
) -> FgResult<Json<Message>> {
	let group_name = validate_key("group_name", &req.group_name)?;
	app.record_adapter.add_user_group(req.user_id, group_name).await?;
	info!(user_id = %req.user_id, group = %group_name, "user added to group");

	Ok(Message::new("User added to group"))
}

// vim: ts=4

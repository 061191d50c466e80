//! Override handlers
//!
//! All writes are upserts: posting an override for an existing key replaces
//! its value.

use axum::{Json, extract::State};
use serde::Deserialize;

use flaggate_types::record_adapter::OverrideScope;
use flaggate_types::utils::{lookup_key, validate_key};

use crate::Message;
use crate::prelude::*;

#[derive(Debug, Deserialize)]
pub struct UserOverrideReq {
	user_id: UserId,
	feature: String,
	enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct GroupOverrideReq {
	group_name: String,
	feature: String,
	enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct RegionOverrideReq {
	region: String,
	feature: String,
	enabled: bool,
}

async fn store(app: &App, scope: OverrideScope<'_>, feature: &str, enabled: bool) -> FgResult<()> {
	let feature = app.record_adapter.read_feature(lookup_key(feature)).await?;
	app.record_adapter.upsert_override(scope, feature.id, enabled).await?;
	info!(scope = %scope, feature = %feature.name, enabled, "override set");
	Ok(())
}

pub async fn post_add_user_override(
	State(app): State<App>,
	JsonBody(req): JsonBody<UserOverrideReq>,
) -> FgResult<Json<Message>> {
	// Unknown users are reported as NotFound, not as a store failure
	app.record_adapter.read_user(req.user_id).await?;
	store(&app, OverrideScope::User(req.user_id), &req.feature, req.enabled).await?;
	Ok(Message::new("User override added"))
}

pub async fn post_add_group_override(
	State(app): State<App>,
	JsonBody(req): JsonBody<GroupOverrideReq>,
) -> FgResult<Json<Message>> {
	let group_name = validate_key("group_name", &req.group_name)?;
	store(&app, OverrideScope::Group(group_name), &req.feature, req.enabled).await?;
	Ok(Message::new("Group override added"))
}

pub async fn post_add_region_override(
	State(app): State<App>,
	JsonBody(req): JsonBody<RegionOverrideReq>,
) -> FgResult<Json<Message>> {
	let region = validate_key("region", &req.region)?;
	store(&app, OverrideScope::Region(region), &req.feature, req.enabled).await?;
	Ok(Message::new("Region override added"))
}

#[derive(Debug, Deserialize)]
pub struct RemoveOverrideReq {
	feature: String,
	user_id: Option<UserId>,
	group_name: Option<String>,
	region: Option<String>,
}

impl RemoveOverrideReq {
	fn scope(&self) -> FgResult<OverrideScope<'_>> {
		match (self.user_id, self.group_name.as_deref(), self.region.as_deref()) {
			(Some(user_id), None, None) => Ok(OverrideScope::User(user_id)),
			(None, Some(group), None) => Ok(OverrideScope::Group(lookup_key(group))),
			(None, None, Some(region)) => Ok(OverrideScope::Region(lookup_key(region))),
			_ => Err(Error::ValidationError(
				"exactly one of user_id, group_name or region is required".into(),
			)),
		}
	}
}

pub async fn post_remove_override(
	State(app): State<App>,
	JsonBody(req): JsonBody<RemoveOverrideReq>,
) -> FgResult<Json<Message>> {
	let scope = req.scope()?;
	let feature = app.record_adapter.read_feature(lookup_key(&req.feature)).await?;
	if app.record_adapter.delete_override(scope, feature.id).await? {
		info!(scope = %scope, feature = %feature.name, "override removed");
		Ok(Message::new("Override removed"))
	} else {
		Ok(Message::new("No override to remove"))
	}
}


// vim: ts=4

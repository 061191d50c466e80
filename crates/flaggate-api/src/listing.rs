//! Full-table listings for the admin surface. Not paginated.

use axum::{Json, extract::State};

use flaggate_types::record_adapter::{
	FeatureFlag, GroupMembership, GroupOverride, RegionOverride, User, UserOverride,
};

use crate::prelude::*;

pub async fn list_users(State(app): State<App>) -> FgResult<Json<Vec<User>>> {
	Ok(Json(app.record_adapter.list_users().await?))
}

pub async fn list_features(State(app): State<App>) -> FgResult<Json<Vec<FeatureFlag>>> {
	Ok(Json(app.record_adapter.list_features().await?))
}

pub async fn list_user_overrides(State(app): State<App>) -> FgResult<Json<Vec<UserOverride>>> {
	Ok(Json(app.record_adapter.list_user_overrides().await?))
}

pub async fn list_group_overrides(State(app): State<App>) -> FgResult<Json<Vec<GroupOverride>>> {
	Ok(Json(app.record_adapter.list_group_overrides().await?))
}

pub async fn list_region_overrides(State(app): State<App>) -> FgResult<Json<Vec<RegionOverride>>> {
	Ok(Json(app.record_adapter.list_region_overrides().await?))
}

pub async fn list_user_groups(State(app): State<App>) -> FgResult<Json<Vec<GroupMembership>>> {
	Ok(Json(app.record_adapter.list_group_memberships().await?))
}

// vim: ts=4

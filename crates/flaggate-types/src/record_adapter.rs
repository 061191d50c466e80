//! Adapter that stores users, feature flags, overrides and the title catalog.
//!
//! Every table is keyed by a unique tuple. Overrides are written only through
//! [`RecordAdapter::upsert_override`], which replaces the row on the same key
//! instead of adding a second one.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use std::fmt::Debug;

use crate::prelude::*;
use crate::types::FeatureId;

/// A user and their subscription state
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	pub name: Box<str>,
	pub subscription_active: bool,
	pub subscription_expiry: Option<NaiveDate>,
	pub region: Box<str>,
}

/// Data needed to create a new user
#[derive(Debug)]
pub struct CreateUserData<'a> {
	pub name: &'a str,
	pub region: &'a str,
	pub subscription_active: bool,
	pub subscription_expiry: Option<NaiveDate>,
}

/// A named boolean capability with a global default
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureFlag {
	pub id: FeatureId,
	pub name: Box<str>,
	pub default_enabled: bool,
}

/// Key of one override row, without the feature part
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverrideScope<'a> {
	User(UserId),
	Group(&'a str),
	Region(&'a str),
}

impl std::fmt::Display for OverrideScope<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			OverrideScope::User(user_id) => write!(f, "user:{}", user_id),
			OverrideScope::Group(group) => write!(f, "group:{}", group),
			OverrideScope::Region(region) => write!(f, "region:{}", region),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserOverride {
	pub user_id: UserId,
	pub feature_id: FeatureId,
	pub feature: Box<str>,
	pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupOverride {
	pub group_name: Box<str>,
	pub feature_id: FeatureId,
	pub feature: Box<str>,
	pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionOverride {
	pub region: Box<str>,
	pub feature_id: FeatureId,
	pub feature: Box<str>,
	pub enabled: bool,
}

/// Explicit membership of a user in a named group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
	pub user_id: UserId,
	pub group_name: Box<str>,
}

/// A region-scoped catalog entry (e.g. a streamable title)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTitle {
	pub id: i64,
	pub region: Box<str>,
	pub name: Box<str>,
}

#[async_trait]
pub trait RecordAdapter: Debug + Send + Sync {
	/// # Users
	async fn create_user(&self, data: &CreateUserData<'_>) -> FgResult<User>;
	async fn read_user(&self, user_id: UserId) -> FgResult<User>;
	async fn list_users(&self) -> FgResult<Vec<User>>;
	/// Overwrites the subscription pair of a user
	async fn update_subscription(
		&self,
		user_id: UserId,
		active: bool,
		expiry: Option<NaiveDate>,
	) -> FgResult<()>;

	/// # Group memberships
	/// Adding an existing membership is a no-op
	async fn add_user_group(&self, user_id: UserId, group_name: &str) -> FgResult<()>;
	/// Group names of one user, sorted
	async fn list_user_groups(&self, user_id: UserId) -> FgResult<Vec<Box<str>>>;
	async fn list_group_memberships(&self) -> FgResult<Vec<GroupMembership>>;

	/// # Feature flags
	/// Fails with `ValidationError` if the name is taken
	async fn create_feature(&self, name: &str, default_enabled: bool) -> FgResult<FeatureFlag>;
	async fn read_feature(&self, name: &str) -> FgResult<FeatureFlag>;
	async fn list_features(&self) -> FgResult<Vec<FeatureFlag>>;
	/// Deletes the flag together with all of its overrides
	async fn delete_feature(&self, name: &str) -> FgResult<()>;

	/// # Overrides
	/// Insert or replace the override on (scope, feature_id)
	async fn upsert_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
		enabled: bool,
	) -> FgResult<()>;
	async fn read_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
	) -> FgResult<Option<bool>>;
	/// Returns whether a row was removed
	async fn delete_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
	) -> FgResult<bool>;
	async fn list_user_overrides(&self) -> FgResult<Vec<UserOverride>>;
	async fn list_group_overrides(&self) -> FgResult<Vec<GroupOverride>>;
	async fn list_region_overrides(&self) -> FgResult<Vec<RegionOverride>>;

	/// # Catalog
	async fn create_title(&self, region: &str, name: &str) -> FgResult<CatalogTitle>;
	/// Lists titles, optionally restricted to a region (case-insensitive)
	async fn list_titles(&self, region: Option<&str>) -> FgResult<Vec<CatalogTitle>>;
}

// vim: ts=4

//! Shared fixtures for evaluation tests

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::NaiveDate;
use tempfile::TempDir;

use flaggate_core::app::{AppBuilderOpts, AppState};
use flaggate_core::prelude::*;
use flaggate_core::resolver::Policy;
use flaggate_record_adapter_sqlite::RecordAdapterSqlite;
use flaggate_types::record_adapter::{
	CatalogTitle, CreateUserData, FeatureFlag, GroupMembership, GroupOverride, OverrideScope,
	RecordAdapter, RegionOverride, User, UserOverride,
};
use flaggate_types::types::FeatureId;

/// Wraps the SQLite adapter, counting subscription writes and optionally
/// failing them
#[derive(Debug)]
pub struct CountingAdapter {
	inner: RecordAdapterSqlite,
	pub subscription_writes: AtomicUsize,
	pub fail_writes: AtomicBool,
}

impl CountingAdapter {
	pub fn writes(&self) -> usize {
		self.subscription_writes.load(Ordering::SeqCst)
	}

	pub fn set_fail_writes(&self, fail: bool) {
		self.fail_writes.store(fail, Ordering::SeqCst);
	}
}

#[async_trait]
impl RecordAdapter for CountingAdapter {
	async fn create_user(&self, data: &CreateUserData<'_>) -> FgResult<User> {
		self.inner.create_user(data).await
	}
	async fn read_user(&self, user_id: UserId) -> FgResult<User> {
		self.inner.read_user(user_id).await
	}
	async fn list_users(&self) -> FgResult<Vec<User>> {
		self.inner.list_users().await
	}
	async fn update_subscription(
		&self,
		user_id: UserId,
		active: bool,
		expiry: Option<NaiveDate>,
	) -> FgResult<()> {
		self.subscription_writes.fetch_add(1, Ordering::SeqCst);
		if self.fail_writes.load(Ordering::SeqCst) {
			return Err(Error::DbError);
		}
		self.inner.update_subscription(user_id, active, expiry).await
	}

	async fn add_user_group(&self, user_id: UserId, group_name: &str) -> FgResult<()> {
		self.inner.add_user_group(user_id, group_name).await
	}
	async fn list_user_groups(&self, user_id: UserId) -> FgResult<Vec<Box<str>>> {
		self.inner.list_user_groups(user_id).await
	}
	async fn list_group_memberships(&self) -> FgResult<Vec<GroupMembership>> {
		self.inner.list_group_memberships().await
	}

	async fn create_feature(&self, name: &str, default_enabled: bool) -> FgResult<FeatureFlag> {
		self.inner.create_feature(name, default_enabled).await
	}
	async fn read_feature(&self, name: &str) -> FgResult<FeatureFlag> {
		self.inner.read_feature(name).await
	}
	async fn list_features(&self) -> FgResult<Vec<FeatureFlag>> {
		self.inner.list_features().await
	}
	async fn delete_feature(&self, name: &str) -> FgResult<()> {
		self.inner.delete_feature(name).await
	}

	async fn upsert_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
		enabled: bool,
	) -> FgResult<()> {
		self.inner.upsert_override(scope, feature_id, enabled).await
	}
	async fn read_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
	) -> FgResult<Option<bool>> {
		self.inner.read_override(scope, feature_id).await
	}
	async fn delete_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
	) -> FgResult<bool> {
		self.inner.delete_override(scope, feature_id).await
	}
	async fn list_user_overrides(&self) -> FgResult<Vec<UserOverride>> {
		self.inner.list_user_overrides().await
	}
	async fn list_group_overrides(&self) -> FgResult<Vec<GroupOverride>> {
		self.inner.list_group_overrides().await
	}
	async fn list_region_overrides(&self) -> FgResult<Vec<RegionOverride>> {
		self.inner.list_region_overrides().await
	}

	async fn create_title(&self, region: &str, name: &str) -> FgResult<CatalogTitle> {
		self.inner.create_title(region, name).await
	}
	async fn list_titles(&self, region: Option<&str>) -> FgResult<Vec<CatalogTitle>> {
		self.inner.list_titles(region).await
	}
}

pub struct TestApp {
	pub app: App,
	pub adapter: Arc<CountingAdapter>,
	_temp: TempDir,
}

pub async fn create_test_app(policy: Policy) -> TestApp {
	let temp = TempDir::new().expect("Failed to create temp directory");
	let inner = RecordAdapterSqlite::new(temp.path()).await.expect("Failed to create adapter");
	let adapter = Arc::new(CountingAdapter {
		inner,
		subscription_writes: AtomicUsize::new(0),
		fail_writes: AtomicBool::new(false),
	});
	let opts = AppBuilderOpts { policy, ..AppBuilderOpts::default() };
	let app = AppState::new(opts, adapter.clone());
	TestApp { app, adapter, _temp: temp }
}

pub fn today() -> NaiveDate {
	NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid date")
}

pub fn yesterday() -> NaiveDate {
	today().pred_opt().expect("valid date")
}

pub async fn create_user(
	adapter: &CountingAdapter,
	name: &str,
	region: &str,
	active: bool,
	expiry: Option<NaiveDate>,
) -> User {
	adapter
		.create_user(&CreateUserData {
			name,
			region,
			subscription_active: active,
			subscription_expiry: expiry,
		})
		.await
		.expect("Should create user")
}

// vim: ts=4

//! SQLite implementation of the Flaggate record store.
//!
//! Each domain lives in its own module with free functions taking the pool;
//! this file only wires them into the [`RecordAdapter`] trait.

use std::path::Path;

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::sqlite::{self, SqlitePool};

use flaggate::prelude::*;
use flaggate::record_adapter::{
	CatalogTitle, CreateUserData, FeatureFlag, GroupMembership, GroupOverride, OverrideScope,
	RecordAdapter, RegionOverride, User, UserOverride,
};
use flaggate::types::FeatureId;

mod catalog;
mod feature;
mod group;
mod overrides;
mod schema;
mod user;
mod utils;

/// Database file created inside the adapter's directory
pub const DB_FILE: &str = "records.db";

#[derive(Debug)]
pub struct RecordAdapterSqlite {
	db: SqlitePool,
}

impl RecordAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> FgResult<Self> {
		tokio::fs::create_dir_all(path.as_ref()).await?;

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref().join(DB_FILE))
			.create_if_missing(true)
			.foreign_keys(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		schema::init_db(&db)
			.await
			.inspect_err(|err| warn!("DbError: {:#?}", err))
			.or(Err(Error::DbError))?;

		Ok(Self { db })
	}
}

#[async_trait]
impl RecordAdapter for RecordAdapterSqlite {
	// Users
	//*******
	async fn create_user(&self, data: &CreateUserData<'_>) -> FgResult<User> {
		user::create(&self.db, data).await
	}

	async fn read_user(&self, user_id: UserId) -> FgResult<User> {
		user::read(&self.db, user_id).await
	}

	async fn list_users(&self) -> FgResult<Vec<User>> {
		user::list(&self.db).await
	}

	async fn update_subscription(
		&self,
		user_id: UserId,
		active: bool,
		expiry: Option<NaiveDate>,
	) -> FgResult<()> {
		user::update_subscription(&self.db, user_id, active, expiry).await
	}

	// Group memberships
	//*******************
	async fn add_user_group(&self, user_id: UserId, group_name: &str) -> FgResult<()> {
		group::add(&self.db, user_id, group_name).await
	}

	async fn list_user_groups(&self, user_id: UserId) -> FgResult<Vec<Box<str>>> {
		group::list_for_user(&self.db, user_id).await
	}

	async fn list_group_memberships(&self) -> FgResult<Vec<GroupMembership>> {
		group::list(&self.db).await
	}

	// Feature flags
	//***************
	async fn create_feature(&self, name: &str, default_enabled: bool) -> FgResult<FeatureFlag> {
		feature::create(&self.db, name, default_enabled).await
	}

	async fn read_feature(&self, name: &str) -> FgResult<FeatureFlag> {
		feature::read(&self.db, name).await
	}

	async fn list_features(&self) -> FgResult<Vec<FeatureFlag>> {
		feature::list(&self.db).await
	}

	async fn delete_feature(&self, name: &str) -> FgResult<()> {
		feature::delete(&self.db, name).await
	}

	// Overrides
	//***********
	async fn upsert_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
		enabled: bool,
	) -> FgResult<()> {
		overrides::upsert(&self.db, scope, feature_id, enabled).await
	}

	async fn read_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
	) -> FgResult<Option<bool>> {
		overrides::read(&self.db, scope, feature_id).await
	}

	async fn delete_override(
		&self,
		scope: OverrideScope<'_>,
		feature_id: FeatureId,
	) -> FgResult<bool> {
		overrides::delete(&self.db, scope, feature_id).await
	}

	async fn list_user_overrides(&self) -> FgResult<Vec<UserOverride>> {
		overrides::list_user(&self.db).await
	}

	async fn list_group_overrides(&self) -> FgResult<Vec<GroupOverride>> {
		overrides::list_group(&self.db).await
	}

	async fn list_region_overrides(&self) -> FgResult<Vec<RegionOverride>> {
		overrides::list_region(&self.db).await
	}

	// Catalog
	//*********
	async fn create_title(&self, region: &str, name: &str) -> FgResult<CatalogTitle> {
		catalog::create(&self.db, region, name).await
	}

	async fn list_titles(&self, region: Option<&str>) -> FgResult<Vec<CatalogTitle>> {
		catalog::list(&self.db, region).await
	}
}

// vim: ts=4

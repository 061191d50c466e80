//! Per-user, per-group and per-region feature overrides
//!
//! The three tables share one shape: (key, feature_id) primary key plus the
//! `enabled` value. Writes are upserts on that key.

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use flaggate::prelude::*;
use flaggate::record_adapter::{GroupOverride, OverrideScope, RegionOverride, UserOverride};
use flaggate::types::FeatureId;

use crate::utils::*;

/// Table and key column for a scope
fn table(scope: OverrideScope<'_>) -> (&'static str, &'static str) {
	match scope {
		OverrideScope::User(_) => ("user_overrides", "user_id"),
		OverrideScope::Group(_) => ("group_overrides", "group_name"),
		OverrideScope::Region(_) => ("region_overrides", "region"),
	}
}

fn push_key<'a>(query: &mut sqlx::QueryBuilder<'a, sqlx::Sqlite>, scope: OverrideScope<'a>) {
	match scope {
		OverrideScope::User(user_id) => query.push_bind(user_id.0),
		OverrideScope::Group(key) | OverrideScope::Region(key) => query.push_bind(key),
	};
}

pub(crate) async fn upsert(
	db: &SqlitePool,
	scope: OverrideScope<'_>,
	feature_id: FeatureId,
	enabled: bool,
) -> FgResult<()> {
	let (table, key) = table(scope);
	let mut query = sqlx::QueryBuilder::new(format!(
		"INSERT INTO {table} ({key}, feature_id, enabled) VALUES ("
	));
	push_key(&mut query, scope);
	query.push(", ").push_bind(feature_id.0).push(", ").push_bind(enabled);
	query.push(format!(") ON CONFLICT({key}, feature_id) DO UPDATE SET enabled = excluded.enabled"));

	query.build().execute(db).await.map_err(|err| match err {
		sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => Error::NotFound,
		err => {
			inspect(&err);
			Error::DbError
		}
	})?;

	debug!(scope = %scope, feature_id = %feature_id, enabled, "override stored");
	Ok(())
}

pub(crate) async fn read(
	db: &SqlitePool,
	scope: OverrideScope<'_>,
	feature_id: FeatureId,
) -> FgResult<Option<bool>> {
	let (table, key) = table(scope);
	let mut query = sqlx::QueryBuilder::new(format!("SELECT enabled FROM {table} WHERE {key} = "));
	push_key(&mut query, scope);
	query.push(" AND feature_id = ").push_bind(feature_id.0);

	let row = query
		.build()
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	row.map(|row| row.try_get("enabled"))
		.transpose()
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

pub(crate) async fn delete(
	db: &SqlitePool,
	scope: OverrideScope<'_>,
	feature_id: FeatureId,
) -> FgResult<bool> {
	let (table, key) = table(scope);
	let mut query = sqlx::QueryBuilder::new(format!("DELETE FROM {table} WHERE {key} = "));
	push_key(&mut query, scope);
	query.push(" AND feature_id = ").push_bind(feature_id.0);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected() > 0)
}

async fn list_rows(db: &SqlitePool, table: &str, key: &str) -> FgResult<Vec<SqliteRow>> {
	let sql = format!(
		"SELECT o.{key} AS scope_key, o.feature_id, f.name AS feature, o.enabled
		FROM {table} o JOIN features f ON f.id = o.feature_id
		ORDER BY o.{key}, f.name"
	);
	sqlx::query(&sql)
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)
}

pub(crate) async fn list_user(db: &SqlitePool) -> FgResult<Vec<UserOverride>> {
	let rows = list_rows(db, "user_overrides", "user_id").await?;
	collect_res(rows.iter().map(|row| {
		Ok(UserOverride {
			user_id: UserId(row.try_get("scope_key")?),
			feature_id: FeatureId(row.try_get("feature_id")?),
			feature: row.try_get("feature")?,
			enabled: row.try_get("enabled")?,
		})
	}))
}

pub(crate) async fn list_group(db: &SqlitePool) -> FgResult<Vec<GroupOverride>> {
	let rows = list_rows(db, "group_overrides", "group_name").await?;
	collect_res(rows.iter().map(|row| {
		Ok(GroupOverride {
			group_name: row.try_get("scope_key")?,
			feature_id: FeatureId(row.try_get("feature_id")?),
			feature: row.try_get("feature")?,
			enabled: row.try_get("enabled")?,
		})
	}))
}

pub(crate) async fn list_region(db: &SqlitePool) -> FgResult<Vec<RegionOverride>> {
	let rows = list_rows(db, "region_overrides", "region").await?;
	collect_res(rows.iter().map(|row| {
		Ok(RegionOverride {
			region: row.try_get("scope_key")?,
			feature_id: FeatureId(row.try_get("feature_id")?),
			feature: row.try_get("feature")?,
			enabled: row.try_get("enabled")?,
		})
	}))
}

// vim: ts=4

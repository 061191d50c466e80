//! Feature flag records

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use flaggate::prelude::*;
use flaggate::record_adapter::FeatureFlag;
use flaggate::types::FeatureId;

use crate::utils::*;

fn feature_from_row(row: &SqliteRow) -> Result<FeatureFlag, sqlx::Error> {
	Ok(FeatureFlag {
		id: FeatureId(row.try_get("id")?),
		name: row.try_get("name")?,
		default_enabled: row.try_get("default_enabled")?,
	})
}

pub(crate) async fn create(
	db: &SqlitePool,
	name: &str,
	default_enabled: bool,
) -> FgResult<FeatureFlag> {
	let row = sqlx::query("INSERT INTO features (name, default_enabled) VALUES (?, ?) RETURNING id")
		.bind(name)
		.bind(default_enabled)
		.fetch_one(db)
		.await
		.map_err(|err| map_insert_err(err, "feature"))?;

	let id: i64 = row.try_get("id").inspect_err(inspect).map_err(|_| Error::DbError)?;

	Ok(FeatureFlag { id: FeatureId(id), name: name.into(), default_enabled })
}

pub(crate) async fn read(db: &SqlitePool, name: &str) -> FgResult<FeatureFlag> {
	let res = sqlx::query("SELECT id, name, default_enabled FROM features WHERE name = ?")
		.bind(name)
		.fetch_one(db)
		.await;

	map_res(res, feature_from_row)
}

pub(crate) async fn list(db: &SqlitePool) -> FgResult<Vec<FeatureFlag>> {
	let rows = sqlx::query("SELECT id, name, default_enabled FROM features ORDER BY name")
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(feature_from_row))
}

/// Overrides go with the flag through `ON DELETE CASCADE`
pub(crate) async fn delete(db: &SqlitePool, name: &str) -> FgResult<()> {
	let res = sqlx::query("DELETE FROM features WHERE name = ?")
		.bind(name)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		return Err(Error::NotFound);
	}
	Ok(())
}

// vim: ts=4

//! Region-scoped catalog titles

use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use flaggate::prelude::*;
use flaggate::record_adapter::CatalogTitle;

use crate::utils::*;

fn title_from_row(row: &SqliteRow) -> Result<CatalogTitle, sqlx::Error> {
	Ok(CatalogTitle {
		id: row.try_get("id")?,
		region: row.try_get("region")?,
		name: row.try_get("name")?,
	})
}

pub(crate) async fn create(db: &SqlitePool, region: &str, name: &str) -> FgResult<CatalogTitle> {
	let row = sqlx::query("INSERT INTO titles (region, name) VALUES (?, ?) RETURNING id")
		.bind(region)
		.bind(name)
		.fetch_one(db)
		.await
		.map_err(|err| map_insert_err(err, "title"))?;

	let id: i64 = row.try_get("id").inspect_err(inspect).map_err(|_| Error::DbError)?;

	Ok(CatalogTitle { id, region: region.into(), name: name.into() })
}

pub(crate) async fn list(db: &SqlitePool, region: Option<&str>) -> FgResult<Vec<CatalogTitle>> {
	let mut query = sqlx::QueryBuilder::new("SELECT id, region, name FROM titles");
	if let Some(region) = region {
		query.push(" WHERE region = ").push_bind(region).push(" COLLATE NOCASE");
	}
	query.push(" ORDER BY region, name");

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(title_from_row))
}

// vim: ts=4

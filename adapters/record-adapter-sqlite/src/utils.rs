//! Shared utilities for the SQLite adapter

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;

use flaggate::prelude::*;
use flaggate::types::{format_date, parse_date};

/// Log database error for debugging
pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Map a single-row query result, translating SQL errors to FgResult
pub(crate) fn map_res<T, F>(row: Result<SqliteRow, sqlx::Error>, f: F) -> FgResult<T>
where
	F: FnOnce(&SqliteRow) -> Result<T, sqlx::Error>,
{
	match row {
		Ok(ref row) => f(row).inspect_err(inspect).map_err(|_| Error::DbError),
		Err(sqlx::Error::RowNotFound) => Err(Error::NotFound),
		Err(err) => {
			inspect(&err);
			Err(Error::DbError)
		}
	}
}

/// Collect an iterator of row conversions, translating errors
pub(crate) fn collect_res<T>(
	iter: impl Iterator<Item = Result<T, sqlx::Error>> + Unpin,
) -> FgResult<Vec<T>> {
	let mut items = Vec::new();
	for item in iter {
		items.push(item.inspect_err(inspect).map_err(|_| Error::DbError)?);
	}
	Ok(items)
}

/// Map an insert error, reporting a taken unique key as a validation error
pub(crate) fn map_insert_err(err: sqlx::Error, what: &str) -> Error {
	match err {
		sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
			Error::ValidationError(format!("{} already exists", what))
		}
		err => {
			inspect(&err);
			Error::DbError
		}
	}
}

pub(crate) fn date_to_db(date: Option<NaiveDate>) -> Option<String> {
	date.map(format_date)
}

pub(crate) fn date_from_db(value: Option<&str>) -> Result<Option<NaiveDate>, sqlx::Error> {
	value.map(|s| parse_date(s).map_err(|err| sqlx::Error::Decode(Box::new(err)))).transpose()
}

// vim: ts=4

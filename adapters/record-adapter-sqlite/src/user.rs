//! User records and subscription state

use chrono::NaiveDate;
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

use flaggate::prelude::*;
use flaggate::record_adapter::{CreateUserData, User};

use crate::utils::*;

fn user_from_row(row: &SqliteRow) -> Result<User, sqlx::Error> {
	Ok(User {
		id: UserId(row.try_get("id")?),
		name: row.try_get("name")?,
		subscription_active: row.try_get("subscription_active")?,
		subscription_expiry: date_from_db(row.try_get("subscription_expiry")?)?,
		region: row.try_get("region")?,
	})
}

pub(crate) async fn create(db: &SqlitePool, data: &CreateUserData<'_>) -> FgResult<User> {
	let res = sqlx::query(
		"INSERT INTO users (name, subscription_active, subscription_expiry, region)
		VALUES (?, ?, ?, ?) RETURNING id",
	)
	.bind(data.name)
	.bind(data.subscription_active)
	.bind(date_to_db(data.subscription_expiry))
	.bind(data.region)
	.fetch_one(db)
	.await;

	let id: i64 = map_res(res, |row| row.try_get("id"))?;

	Ok(User {
		id: UserId(id),
		name: data.name.into(),
		subscription_active: data.subscription_active,
		subscription_expiry: data.subscription_expiry,
		region: data.region.into(),
	})
}

pub(crate) async fn read(db: &SqlitePool, user_id: UserId) -> FgResult<User> {
	let res = sqlx::query(
		"SELECT id, name, subscription_active, subscription_expiry, region FROM users WHERE id = ?",
	)
	.bind(user_id.0)
	.fetch_one(db)
	.await;

	map_res(res, user_from_row)
}

pub(crate) async fn list(db: &SqlitePool) -> FgResult<Vec<User>> {
	let rows = sqlx::query(
		"SELECT id, name, subscription_active, subscription_expiry, region FROM users ORDER BY id",
	)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(user_from_row))
}

pub(crate) async fn update_subscription(
	db: &SqlitePool,
	user_id: UserId,
	active: bool,
	expiry: Option<NaiveDate>,
) -> FgResult<()> {
	let res = sqlx::query(
		"UPDATE users SET subscription_active = ?, subscription_expiry = ? WHERE id = ?",
	)
	.bind(active)
	.bind(date_to_db(expiry))
	.bind(user_id.0)
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

//! Explicit user group memberships

use sqlx::{Row, SqlitePool};

use flaggate::prelude::*;
use flaggate::record_adapter::GroupMembership;

use crate::utils::*;

pub(crate) async fn add(db: &SqlitePool, user_id: UserId, group_name: &str) -> FgResult<()> {
	sqlx::query("INSERT OR IGNORE INTO user_groups (user_id, group_name) VALUES (?, ?)")
		.bind(user_id.0)
		.bind(group_name)
		.execute(db)
		.await
		.map_err(|err| match err {
			sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
				Error::NotFound
			}
			err => {
				inspect(&err);
				Error::DbError
			}
		})?;

	Ok(())
}

pub(crate) async fn list_for_user(db: &SqlitePool, user_id: UserId) -> FgResult<Vec<Box<str>>> {
	let rows = sqlx::query("SELECT group_name FROM user_groups WHERE user_id = ? ORDER BY group_name")
		.bind(user_id.0)
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(|row| row.try_get("group_name")))
}

pub(crate) async fn list(db: &SqlitePool) -> FgResult<Vec<GroupMembership>> {
	let rows =
		sqlx::query("SELECT user_id, group_name FROM user_groups ORDER BY user_id, group_name")
			.fetch_all(db)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

	collect_res(rows.iter().map(|row| {
		Ok(GroupMembership {
			user_id: UserId(row.try_get("user_id")?),
			group_name: row.try_get("group_name")?,
		})
	}))
}

// vim: ts=4

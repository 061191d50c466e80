//! Database schema initialization
//!
//! Every statement is idempotent, so this runs on each startup.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Users
	//*******
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS users (
		id integer NOT NULL,
		name text NOT NULL,
		subscription_active boolean NOT NULL DEFAULT 0,
		subscription_expiry text,		-- 'YYYY-MM-DD', NULL: never expires
		region text NOT NULL,
		PRIMARY KEY(id AUTOINCREMENT)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS user_groups (
		user_id integer NOT NULL REFERENCES users(id) ON DELETE CASCADE,
		group_name text NOT NULL,
		PRIMARY KEY(user_id, group_name)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Feature flags
	//***************
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS features (
		id integer NOT NULL,
		name text NOT NULL,
		default_enabled boolean NOT NULL DEFAULT 0,
		PRIMARY KEY(id AUTOINCREMENT)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_features_name ON features(name)")
		.execute(&mut *tx)
		.await?;

	// Overrides
	//***********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS user_overrides (
		user_id integer NOT NULL REFERENCES users(id) ON DELETE CASCADE,
		feature_id integer NOT NULL REFERENCES features(id) ON DELETE CASCADE,
		enabled boolean NOT NULL,
		PRIMARY KEY(user_id, feature_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS group_overrides (
		group_name text NOT NULL,
		feature_id integer NOT NULL REFERENCES features(id) ON DELETE CASCADE,
		enabled boolean NOT NULL,
		PRIMARY KEY(group_name, feature_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS region_overrides (
		region text NOT NULL,
		feature_id integer NOT NULL REFERENCES features(id) ON DELETE CASCADE,
		enabled boolean NOT NULL,
		PRIMARY KEY(region, feature_id)
	)",
	)
	.execute(&mut *tx)
	.await?;

	// Catalog
	//*********
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS titles (
		id integer NOT NULL,
		region text NOT NULL,
		name text NOT NULL,
		PRIMARY KEY(id AUTOINCREMENT)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_titles_region_name ON titles(region, name)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4

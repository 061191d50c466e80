//! Record adapter CRUD tests
//!
//! Users, feature flags, group memberships and catalog titles

use chrono::NaiveDate;
use flaggate::error::Error;
use flaggate::record_adapter::{CreateUserData, RecordAdapter};
use flaggate::types::UserId;
use flaggate_record_adapter_sqlite::RecordAdapterSqlite;
use tempfile::TempDir;

async fn create_test_adapter() -> (RecordAdapterSqlite, TempDir) {
	let temp_dir = TempDir::new().expect("Failed to create temp directory");
	let adapter = RecordAdapterSqlite::new(temp_dir.path()).await.expect("Failed to create adapter");
	(adapter, temp_dir)
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
	NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[tokio::test]
async fn test_create_and_read_user() {
	let (adapter, _temp) = create_test_adapter().await;

	let created = adapter
		.create_user(&CreateUserData {
			name: "alexa",
			region: "USA",
			subscription_active: true,
			subscription_expiry: Some(date(2030, 1, 1)),
		})
		.await
		.expect("Should create user");

	let user = adapter.read_user(created.id).await.expect("Should read user");
	assert_eq!(user, created);
	assert_eq!(user.subscription_expiry, Some(date(2030, 1, 1)));
	assert_eq!(user.region.as_ref(), "USA");
}

#[tokio::test]
async fn test_read_nonexistent_user() {
	let (adapter, _temp) = create_test_adapter().await;

	let result = adapter.read_user(UserId(9999)).await;
	assert!(matches!(result, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_update_subscription() {
	let (adapter, _temp) = create_test_adapter().await;
	let user = adapter
		.create_user(&CreateUserData {
			name: "bob",
			region: "EU",
			subscription_active: false,
			subscription_expiry: None,
		})
		.await
		.expect("Should create user");

	adapter
		.update_subscription(user.id, true, Some(date(2031, 6, 30)))
		.await
		.expect("Should update subscription");

	let user = adapter.read_user(user.id).await.expect("Should read user");
	assert!(user.subscription_active);
	assert_eq!(user.subscription_expiry, Some(date(2031, 6, 30)));

	let missing = adapter.update_subscription(UserId(4242), false, None).await;
	assert!(matches!(missing, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_list_users_in_id_order() {
	let (adapter, _temp) = create_test_adapter().await;
	for name in ["u1", "u2", "u3"] {
		adapter
			.create_user(&CreateUserData {
				name,
				region: "IN",
				subscription_active: false,
				subscription_expiry: None,
			})
			.await
			.expect("Should create user");
	}

	let users = adapter.list_users().await.expect("Should list users");
	let names: Vec<&str> = users.iter().map(|u| u.name.as_ref()).collect();
	assert_eq!(names, vec!["u1", "u2", "u3"]);
}

#[tokio::test]
async fn test_feature_name_is_unique() {
	let (adapter, _temp) = create_test_adapter().await;

	let feature =
		adapter.create_feature("one_day_delivery", true).await.expect("Should create feature");
	assert!(feature.default_enabled);

	let duplicate = adapter.create_feature("one_day_delivery", false).await;
	assert!(matches!(duplicate, Err(Error::ValidationError(_))));

	let features = adapter.list_features().await.expect("Should list features");
	assert_eq!(features.len(), 1);
}

#[tokio::test]
async fn test_read_and_delete_feature() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.create_feature("prime_movie_access", false).await.expect("Should create feature");

	let feature = adapter.read_feature("prime_movie_access").await.expect("Should read feature");
	assert_eq!(feature.name.as_ref(), "prime_movie_access");
	assert!(!feature.default_enabled);

	adapter.delete_feature("prime_movie_access").await.expect("Should delete feature");
	assert!(matches!(adapter.read_feature("prime_movie_access").await, Err(Error::NotFound)));
	assert!(matches!(adapter.delete_feature("prime_movie_access").await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_group_membership_is_idempotent() {
	let (adapter, _temp) = create_test_adapter().await;
	let user = adapter
		.create_user(&CreateUserData {
			name: "carol",
			region: "USA",
			subscription_active: false,
			subscription_expiry: None,
		})
		.await
		.expect("Should create user");

	adapter.add_user_group(user.id, "beta_testers").await.expect("Should add group");
	adapter.add_user_group(user.id, "beta_testers").await.expect("Should add group twice");
	adapter.add_user_group(user.id, "alpha").await.expect("Should add group");

	let groups = adapter.list_user_groups(user.id).await.expect("Should list groups");
	let groups: Vec<&str> = groups.iter().map(AsRef::as_ref).collect();
	assert_eq!(groups, vec!["alpha", "beta_testers"]);
	assert_eq!(adapter.list_group_memberships().await.map(|m| m.len()).ok(), Some(2));

	let unknown = adapter.add_user_group(UserId(777), "alpha").await;
	assert!(matches!(unknown, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_titles_filter_by_region_ignoring_case() {
	let (adapter, _temp) = create_test_adapter().await;
	adapter.create_title("USA", "Heist Night").await.expect("Should create title");
	adapter.create_title("USA", "Arctic Run").await.expect("Should create title");
	adapter.create_title("IN", "Monsoon").await.expect("Should create title");

	let duplicate = adapter.create_title("USA", "Arctic Run").await;
	assert!(matches!(duplicate, Err(Error::ValidationError(_))));

	let titles = adapter.list_titles(Some("usa")).await.expect("Should list titles");
	let names: Vec<&str> = titles.iter().map(|t| t.name.as_ref()).collect();
	assert_eq!(names, vec!["Arctic Run", "Heist Night"]);

	let all = adapter.list_titles(None).await.expect("Should list titles");
	assert_eq!(all.len(), 3);
}

// vim: ts=4

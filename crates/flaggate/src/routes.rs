use axum::{
	Router,
	routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::prelude::*;
use flaggate_api::{catalog, check, feature, listing, overrides, user};

pub fn init(app: App) -> Router {
	Router::new()
		// Users and subscriptions
		.route("/create-user/", post(user::post_create_user))
		.route("/subscribe-user/", post(user::post_subscribe_user))
		.route("/add-user-group/", post(user::post_add_user_group))
		// Features and overrides
		.route("/create-feature/", post(feature::post_create_feature))
		.route("/features/{name}/", delete(feature::delete_feature))
		.route("/add-user-override/", post(overrides::post_add_user_override))
		.route("/add-group-override/", post(overrides::post_add_group_override))
		.route("/add-region-override/", post(overrides::post_add_region_override))
		.route("/remove-override/", post(overrides::post_remove_override))
		// Evaluation
		.route("/check-feature/", post(check::post_check_feature))
		.route("/check-all-features/", post(check::post_check_all_features))
		.route("/my-features/", post(check::post_my_features))
		// Catalog
		.route("/add-title/", post(catalog::post_add_title))
		.route("/titles/", get(catalog::list_titles))
		// Listings
		.route("/users/", get(listing::list_users))
		.route("/features/", get(listing::list_features))
		.route("/user-overrides/", get(listing::list_user_overrides))
		.route("/group-overrides/", get(listing::list_group_overrides))
		.route("/region-overrides/", get(listing::list_region_overrides))
		.route("/user-groups/", get(listing::list_user_groups))
		.layer(TraceLayer::new_for_http())
		.with_state(app)
}

// vim: ts=4

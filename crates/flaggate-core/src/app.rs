//! App state type

use std::sync::Arc;

use flaggate_types::record_adapter::RecordAdapter;

use crate::resolver::Policy;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Subscription plan length when the caller gives none
pub const DEFAULT_PLAN_DAYS: u32 = 365;
pub const DEFAULT_SUBSCRIBER_GROUP: &str = "prime_users";
pub const DEFAULT_CATALOG_FEATURE: &str = "prime_movie_access";

#[derive(Debug)]
pub struct AppState {
	pub opts: AppBuilderOpts,
	pub record_adapter: Arc<dyn RecordAdapter>,
}

pub type App = Arc<AppState>;

#[derive(Debug, Clone)]
pub struct AppBuilderOpts {
	pub listen: Box<str>,
	pub policy: Policy,
	/// Group whose membership follows subscription status
	pub subscriber_group: Box<str>,
	pub default_plan_days: u32,
	/// Feature that unlocks the region title catalog
	pub catalog_feature: Box<str>,
}

impl Default for AppBuilderOpts {
	fn default() -> Self {
		Self {
			listen: "127.0.0.1:8080".into(),
			policy: Policy::default(),
			subscriber_group: DEFAULT_SUBSCRIBER_GROUP.into(),
			default_plan_days: DEFAULT_PLAN_DAYS,
			catalog_feature: DEFAULT_CATALOG_FEATURE.into(),
		}
	}
}

impl AppState {
	pub fn new(opts: AppBuilderOpts, record_adapter: Arc<dyn RecordAdapter>) -> App {
		Arc::new(Self { opts, record_adapter })
	}
}

// vim: ts=4

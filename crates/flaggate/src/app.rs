//! App builder - constructs and runs the Flaggate service

use std::sync::Arc;

use crate::prelude::*;
use crate::record_adapter::RecordAdapter;
use crate::resolver::Policy;
use crate::routes;
pub use flaggate_core::app::{App, AppBuilderOpts, AppState, VERSION};

pub struct AppBuilder {
	opts: AppBuilderOpts,
	record_adapter: Option<Arc<dyn RecordAdapter>>,
}

impl AppBuilder {
	pub fn new() -> Self {
		// A subscriber may already be installed (tests build several apps)
		let _ = tracing_subscriber::fmt()
			.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
			.with_target(false)
			.try_init();
		AppBuilder { opts: AppBuilderOpts::default(), record_adapter: None }
	}

	// Opts
	pub fn listen(&mut self, listen: impl Into<Box<str>>) -> &mut Self {
		self.opts.listen = listen.into();
		self
	}
	pub fn policy(&mut self, policy: Policy) -> &mut Self {
		self.opts.policy = policy;
		self
	}
	pub fn subscriber_group(&mut self, subscriber_group: impl Into<Box<str>>) -> &mut Self {
		self.opts.subscriber_group = subscriber_group.into();
		self
	}
	pub fn default_plan_days(&mut self, days: u32) -> &mut Self {
		self.opts.default_plan_days = days;
		self
	}
	pub fn catalog_feature(&mut self, catalog_feature: impl Into<Box<str>>) -> &mut Self {
		self.opts.catalog_feature = catalog_feature.into();
		self
	}

	// Adapters
	pub fn record_adapter(&mut self, record_adapter: Arc<dyn RecordAdapter>) -> &mut Self {
		self.record_adapter = Some(record_adapter);
		self
	}

	/// Validates the options and creates the shared app state
	pub fn build(self) -> FgResult<App> {
		let Some(record_adapter) = self.record_adapter else {
			error!("FATAL: No record adapter configured");
			return Err(Error::Internal("No record adapter configured".to_string()));
		};
		if self.opts.default_plan_days == 0 {
			error!("FATAL: Plan length must be at least one day");
			return Err(Error::Internal("Plan length must be at least one day".to_string()));
		}
		if self.opts.subscriber_group.trim().is_empty() {
			error!("FATAL: Subscriber group name is empty");
			return Err(Error::Internal("Subscriber group name is empty".to_string()));
		}

		Ok(AppState::new(self.opts, record_adapter))
	}

	pub async fn run(self) -> FgResult<()> {
		info!("  __ _                      _       ");
		info!(" / _| | __ _  __ _  __ _  __ _| |_ ___ ");
		info!("| |_| |/ _` |/ _` |/ _` |/ _` | __/ _ \\");
		info!("|  _| | (_| | (_| | (_| | (_| | ||  __/");
		info!("|_| |_|\\__,_|\\__, |\\__, |\\__,_|\\__\\___|");
		info!("             |___/ |___/               ");
		info!("V{}", VERSION);

		let app = self.build()?;
		info!(
			policy = %app.opts.policy,
			subscriber_group = %app.opts.subscriber_group,
			plan_days = app.opts.default_plan_days,
			catalog_feature = %app.opts.catalog_feature,
			"configuration"
		);

		let router = routes::init(app.clone());
		let listener = tokio::net::TcpListener::bind(app.opts.listen.as_ref()).await.map_err(|e| {
			error!("FATAL: Cannot listen on {}: {}", app.opts.listen, e);
			Error::Io(e)
		})?;
		info!("Listening on HTTP {}", app.opts.listen);

		axum::serve(listener, router).await?;
		Ok(())
	}
}

impl Default for AppBuilder {
	fn default() -> Self {
		Self::new()
	}
}

// vim: ts=4

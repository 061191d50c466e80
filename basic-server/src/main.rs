use std::{env, path, process::ExitCode, str::FromStr, sync::Arc};

use flaggate::prelude::*;
use flaggate::{AppBuilder, Policy};
use flaggate_record_adapter_sqlite::RecordAdapterSqlite;

pub struct Config {
	pub listen: String,
	pub db_dir: path::PathBuf,
	pub policy: Policy,
	pub subscriber_group: Option<String>,
	pub plan_days: Option<u32>,
	pub catalog_feature: Option<String>,
}

fn parse_var<T: FromStr>(name: &str) -> FgResult<Option<T>> {
	match env::var(name) {
		Ok(value) => value
			.trim()
			.parse()
			.map(Some)
			.map_err(|_| Error::Internal(format!("invalid value for {}: {}", name, value))),
		Err(_) => Ok(None),
	}
}

impl Config {
	fn from_env() -> FgResult<Self> {
		Ok(Config {
			listen: env::var("LISTEN").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
			db_dir: path::PathBuf::from(env::var("DB_DIR").unwrap_or_else(|_| "./data".to_string())),
			policy: parse_var::<Policy>("FLAGGATE_POLICY")?.unwrap_or_default(),
			subscriber_group: env::var("SUBSCRIBER_GROUP").ok(),
			plan_days: parse_var("PLAN_DAYS")?,
			catalog_feature: env::var("CATALOG_FEATURE").ok(),
		})
	}
}

async fn run() -> FgResult<()> {
	let mut builder = AppBuilder::new();
	let config = Config::from_env()?;

	let record_adapter = Arc::new(RecordAdapterSqlite::new(&config.db_dir).await?);

	builder.listen(config.listen).policy(config.policy).record_adapter(record_adapter);
	if let Some(group) = config.subscriber_group {
		builder.subscriber_group(group);
	}
	if let Some(days) = config.plan_days {
		builder.default_plan_days(days);
	}
	if let Some(feature) = config.catalog_feature {
		builder.catalog_feature(feature);
	}

	builder.run().await
}

#[tokio::main]
async fn main() -> ExitCode {
	match run().await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("FATAL: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4

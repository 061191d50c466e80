//! Evaluation facade
//!
//! Every feature decision goes through here: load the user and the flag, run
//! the subscription gate, load the overrides the policy needs, resolve.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

use flaggate_types::record_adapter::{FeatureFlag, OverrideScope, User};

use crate::prelude::*;
use crate::resolver::{self, OverrideSet};
use crate::subscription;

/// What a user currently gets
#[derive(Debug, Clone, Serialize)]
pub struct Entitlements {
	pub user: User,
	/// Names of the enabled features, sorted
	pub features: Vec<Box<str>>,
	/// Catalog titles of the user's region, empty unless the catalog feature is on
	pub titles: Vec<Box<str>>,
	pub not_subscribed: bool,
	pub subscription_expired: bool,
}

/// Explicit group memberships, only read when the policy will look at overrides
async fn load_groups(app: &App, user: &User, active: bool) -> FgResult<Vec<Box<str>>> {
	if app.opts.policy.consults_overrides(active) {
		app.record_adapter.list_user_groups(user.id).await
	} else {
		Ok(Vec::new())
	}
}

/// Loads overrides tier by tier, stopping at the first tier that has one
async fn load_overrides(
	app: &App,
	user: &User,
	active: bool,
	groups: &[Box<str>],
	feature: &FeatureFlag,
) -> FgResult<OverrideSet> {
	let mut set = OverrideSet::default();
	if !app.opts.policy.consults_overrides(active) {
		return Ok(set);
	}
	let adapter = &app.record_adapter;

	set.user = adapter.read_override(OverrideScope::User(user.id), feature.id).await?;
	if set.user.is_some() {
		return Ok(set);
	}

	for group in resolver::effective_groups(&app.opts.subscriber_group, active, groups) {
		set.group = adapter.read_override(OverrideScope::Group(group), feature.id).await?;
		if set.group.is_some() {
			return Ok(set);
		}
	}

	set.region = adapter.read_override(OverrideScope::Region(&user.region), feature.id).await?;
	Ok(set)
}

async fn verdict_for(
	app: &App,
	user: &User,
	active: bool,
	groups: &[Box<str>],
	feature: &FeatureFlag,
) -> FgResult<Verdict> {
	let overrides = load_overrides(app, user, active, groups, feature).await?;
	let verdict = resolver::resolve(app.opts.policy, active, feature.default_enabled, &overrides);
	debug!(
		user_id = %user.id,
		feature = %feature.name,
		enabled = verdict.enabled,
		source = %verdict.source,
		"feature evaluated"
	);
	Ok(verdict)
}

/// Evaluates one feature for one user.
///
/// Fails with `NotFound` when either the user or the feature does not exist.
pub async fn evaluate(
	app: &App,
	user_id: UserId,
	feature_name: &str,
	today: NaiveDate,
) -> FgResult<Verdict> {
	let user = app.record_adapter.read_user(user_id).await?;
	let feature = app.record_adapter.read_feature(feature_name).await?;
	let active = subscription::resolve_subscription(app.record_adapter.as_ref(), &user, today).await;
	let groups = load_groups(app, &user, active).await?;

	verdict_for(app, &user, active, &groups, &feature).await
}

async fn evaluate_user(
	app: &App,
	user: &User,
	active: bool,
) -> FgResult<BTreeMap<Box<str>, Verdict>> {
	let groups = load_groups(app, user, active).await?;
	let mut verdicts = BTreeMap::new();
	for feature in app.record_adapter.list_features().await? {
		let verdict = verdict_for(app, user, active, &groups, &feature).await?;
		verdicts.insert(feature.name, verdict);
	}
	Ok(verdicts)
}

/// Evaluates every known feature for one user, running the gate once
pub async fn evaluate_all(
	app: &App,
	user_id: UserId,
	today: NaiveDate,
) -> FgResult<BTreeMap<Box<str>, Verdict>> {
	let user = app.record_adapter.read_user(user_id).await?;
	let active = subscription::resolve_subscription(app.record_adapter.as_ref(), &user, today).await;
	evaluate_user(app, &user, active).await
}

/// Fail-safe check for internal gating, used for the title catalog.
///
/// A feature that is not configured counts as disabled, as does any store
/// failure.
pub async fn is_enabled_or_off(
	app: &App,
	user: &User,
	feature_name: &str,
	today: NaiveDate,
) -> bool {
	let feature = match app.record_adapter.read_feature(feature_name).await {
		Ok(feature) => feature,
		Err(Error::NotFound) => {
			debug!(feature = %feature_name, "feature not configured, treating as off");
			return false;
		}
		Err(err) => {
			warn!(feature = %feature_name, error = %err, "feature lookup failed, treating as off");
			return false;
		}
	};

	let active = subscription::resolve_subscription(app.record_adapter.as_ref(), user, today).await;
	let res = match load_groups(app, user, active).await {
		Ok(groups) => verdict_for(app, user, active, &groups, &feature).await,
		Err(err) => Err(err),
	};
	match res {
		Ok(verdict) => verdict.enabled,
		Err(err) => {
			warn!(user_id = %user.id, feature = %feature_name, error = %err, "evaluation failed, treating as off");
			false
		}
	}
}

/// Enabled features and region titles for one user
pub async fn entitlements(app: &App, user_id: UserId, today: NaiveDate) -> FgResult<Entitlements> {
	let mut user = app.record_adapter.read_user(user_id).await?;
	let subscription_expired = user.subscription_expiry.is_some_and(|expiry| expiry < today);
	let active = subscription::resolve_subscription(app.record_adapter.as_ref(), &user, today).await;
	user.subscription_active = active;

	let verdicts = evaluate_user(app, &user, active).await?;
	let catalog_on = is_enabled_or_off(app, &user, &app.opts.catalog_feature, today).await;
	let features =
		verdicts.into_iter().filter(|(_, verdict)| verdict.enabled).map(|(name, _)| name).collect();

	let titles = if catalog_on {
		app.record_adapter
			.list_titles(Some(&*user.region))
			.await?
			.into_iter()
			.map(|title| title.name)
			.collect()
	} else {
		Vec::new()
	};

	Ok(Entitlements {
		user,
		features,
		titles,
		not_subscribed: !active,
		subscription_expired,
	})
}

// vim: ts=4

//! Subscription gate
//!
//! A subscription whose expiry date lies before `today` is inactive, whatever
//! the stored flag says. The stored flag is corrected lazily, the first time an
//! evaluation notices the lapse. A missing expiry never lapses.

use chrono::NaiveDate;

use flaggate_types::record_adapter::{CreateUserData, RecordAdapter, User};
use flaggate_types::types::add_days;

use crate::prelude::*;

/// Outcome of the pure expiry check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryResolution {
	/// Effective subscription state for this evaluation
	pub active: bool,
	/// The stored flag is still `true` although the expiry has passed
	pub mutation_needed: bool,
}

pub fn resolve_expiry(user: &User, today: NaiveDate) -> ExpiryResolution {
	match user.subscription_expiry {
		Some(expiry) if expiry < today => {
			ExpiryResolution { active: false, mutation_needed: user.subscription_active }
		}
		_ => ExpiryResolution { active: user.subscription_active, mutation_needed: false },
	}
}

/// Runs [`resolve_expiry`] and persists the correction when one is needed.
///
/// A failed write is logged and otherwise ignored: the returned resolution is
/// the corrected one either way.
pub async fn correct_expiry(
	adapter: &dyn RecordAdapter,
	user: &User,
	today: NaiveDate,
) -> ExpiryResolution {
	let res = resolve_expiry(user, today);
	if res.mutation_needed {
		info!(user_id = %user.id, expiry = ?user.subscription_expiry, "subscription lapsed, deactivating");
		if let Err(err) =
			adapter.update_subscription(user.id, false, user.subscription_expiry).await
		{
			warn!(user_id = %user.id, error = %err, "failed to persist subscription expiry");
		}
	}
	res
}

/// Effective subscription state of `user` on `today`
pub async fn resolve_subscription(
	adapter: &dyn RecordAdapter,
	user: &User,
	today: NaiveDate,
) -> bool {
	correct_expiry(adapter, user, today).await.active
}

/// Activates a subscription of `plan_days` days starting `today`.
///
/// Returns the new expiry date.
pub async fn subscribe(
	adapter: &dyn RecordAdapter,
	user_id: UserId,
	plan_days: u32,
	today: NaiveDate,
) -> FgResult<NaiveDate> {
	if plan_days == 0 {
		return Err(Error::ValidationError("plan_days must be at least 1".into()));
	}
	let expiry = add_days(today, plan_days);
	adapter.update_subscription(user_id, true, Some(expiry)).await?;
	info!(user_id = %user_id, expiry = %expiry, "subscription activated");
	Ok(expiry)
}

/// Creates a user. An active subscription without an expiry gets one
/// `plan_days` from `today`.
pub async fn create_user(
	adapter: &dyn RecordAdapter,
	data: CreateUserData<'_>,
	plan_days: u32,
	today: NaiveDate,
) -> FgResult<User> {
	let subscription_expiry = match data.subscription_expiry {
		None if data.subscription_active => Some(add_days(today, plan_days)),
		expiry => expiry,
	};
	let user = adapter.create_user(&CreateUserData { subscription_expiry, ..data }).await?;
	info!(user_id = %user.id, name = %user.name, region = %user.region, "user created");
	Ok(user)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(y: i32, m: u32, d: u32) -> NaiveDate {
		NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
	}

	fn user(active: bool, expiry: Option<NaiveDate>) -> User {
		User {
			id: UserId(1),
			name: "alexa".into(),
			subscription_active: active,
			subscription_expiry: expiry,
			region: "USA".into(),
		}
	}

	#[test]
	fn test_lapsed_active_needs_mutation() {
		let res = resolve_expiry(&user(true, Some(date(2024, 1, 1))), date(2024, 1, 2));
		assert_eq!(res, ExpiryResolution { active: false, mutation_needed: true });
	}

	#[test]
	fn test_lapsed_already_inactive_needs_nothing() {
		let res = resolve_expiry(&user(false, Some(date(2024, 1, 1))), date(2024, 1, 2));
		assert_eq!(res, ExpiryResolution { active: false, mutation_needed: false });
	}

	#[test]
	fn test_expiry_today_is_still_active() {
		let res = resolve_expiry(&user(true, Some(date(2024, 1, 1))), date(2024, 1, 1));
		assert_eq!(res, ExpiryResolution { active: true, mutation_needed: false });
	}

	#[test]
	fn test_missing_expiry_never_lapses() {
		assert!(resolve_expiry(&user(true, None), NaiveDate::MAX).active);
		assert!(!resolve_expiry(&user(false, None), NaiveDate::MIN).active);
	}

	#[test]
	fn test_expiry_is_monotonic() {
		let u = user(true, Some(date(2024, 6, 1)));
		let mut was_inactive = false;
		let mut day = date(2024, 5, 1);
		while day < date(2024, 7, 1) {
			let active = resolve_expiry(&u, day).active;
			assert!(!(was_inactive && active), "reactivated on {}", day);
			was_inactive |= !active;
			day = add_days(day, 1);
		}
		assert!(was_inactive);
	}
}

// vim: ts=4

//! Override resolver
//!
//! Precedence is user, then group, then region, then the flag default. The
//! first tier holding an override decides. Resolution itself is pure and works
//! on an [`OverrideSet`] the caller loaded from the record store.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::prelude::*;

/// How the subscription state interacts with overrides
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
	/// An inactive subscription blocks the feature before any override is read
	#[default]
	Gated,
	/// Overrides apply to everyone; only the subscriber group follows the
	/// subscription state
	Ungated,
}

impl Policy {
	/// Whether overrides are read at all for a user with this subscription state
	pub fn consults_overrides(self, active: bool) -> bool {
		match self {
			Policy::Gated => active,
			Policy::Ungated => true,
		}
	}
}

impl std::fmt::Display for Policy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(match self {
			Policy::Gated => "gated",
			Policy::Ungated => "ungated",
		})
	}
}

impl FromStr for Policy {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"gated" | "a" => Ok(Policy::Gated),
			"ungated" | "b" => Ok(Policy::Ungated),
			other => Err(Error::ValidationError(format!("unknown policy: {}", other))),
		}
	}
}

/// Overrides found for one (user, feature) pair, one slot per tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverrideSet {
	pub user: Option<bool>,
	/// Override of the first effective group that has one
	pub group: Option<bool>,
	pub region: Option<bool>,
}

pub fn resolve(
	policy: Policy,
	active: bool,
	default_enabled: bool,
	overrides: &OverrideSet,
) -> Verdict {
	if !policy.consults_overrides(active) {
		return Verdict::blocked();
	}

	if let Some(enabled) = overrides.user {
		Verdict::new(enabled, Source::User)
	} else if let Some(enabled) = overrides.group {
		Verdict::new(enabled, Source::Group)
	} else if let Some(enabled) = overrides.region {
		Verdict::new(enabled, Source::Region)
	} else {
		Verdict::new(default_enabled, Source::Default)
	}
}

/// Groups consulted in the group tier, in lookup order.
///
/// The subscriber group comes first and only while `active`. A stored explicit
/// membership of the subscriber group is ignored. Explicit groups follow in
/// lexicographic order.
pub fn effective_groups<'a>(
	subscriber_group: &'a str,
	active: bool,
	explicit: &'a [Box<str>],
) -> Vec<&'a str> {
	let mut explicit: Vec<&str> =
		explicit.iter().map(|g| &**g).filter(|g| *g != subscriber_group).collect();
	explicit.sort_unstable();
	explicit.dedup();

	let mut groups = Vec::with_capacity(explicit.len() + 1);
	if active {
		groups.push(subscriber_group);
	}
	groups.extend(explicit);
	groups
}

#[cfg(test)]
mod tests {
	use super::*;

	const ALL: OverrideSet = OverrideSet { user: Some(false), group: Some(true), region: Some(true) };

	#[test]
	fn test_no_overrides_falls_back_to_default() {
		for policy in [Policy::Gated, Policy::Ungated] {
			for default in [true, false] {
				let v = resolve(policy, true, default, &OverrideSet::default());
				assert_eq!(v, Verdict::new(default, Source::Default));
			}
		}
	}

	#[test]
	fn test_gated_blocks_inactive() {
		assert_eq!(resolve(Policy::Gated, false, true, &ALL), Verdict::blocked());
	}

	#[test]
	fn test_ungated_applies_overrides_to_inactive() {
		assert_eq!(resolve(Policy::Ungated, false, true, &ALL), Verdict::new(false, Source::User));
		let region_only = OverrideSet { region: Some(false), ..OverrideSet::default() };
		assert_eq!(
			resolve(Policy::Ungated, false, true, &region_only),
			Verdict::new(false, Source::Region)
		);
	}

	#[test]
	fn test_precedence() {
		assert_eq!(resolve(Policy::Gated, true, true, &ALL), Verdict::new(false, Source::User));

		let no_user = OverrideSet { user: None, ..ALL };
		assert_eq!(resolve(Policy::Gated, true, false, &no_user), Verdict::new(true, Source::Group));

		let region_only = OverrideSet { region: Some(false), ..OverrideSet::default() };
		assert_eq!(
			resolve(Policy::Gated, true, true, &region_only),
			Verdict::new(false, Source::Region)
		);
	}

	#[test]
	fn test_effective_groups() {
		let explicit: Vec<Box<str>> = vec!["zeta".into(), "prime_users".into(), "alpha".into()];
		assert_eq!(effective_groups("prime_users", true, &explicit), vec![
			"prime_users",
			"alpha",
			"zeta"
		]);
		assert_eq!(effective_groups("prime_users", false, &explicit), vec!["alpha", "zeta"]);
		assert!(effective_groups("prime_users", false, &[]).is_empty());
	}

	#[test]
	fn test_policy_parse() {
		assert_eq!("gated".parse::<Policy>().ok(), Some(Policy::Gated));
		assert_eq!(" Ungated ".parse::<Policy>().ok(), Some(Policy::Ungated));
		assert_eq!("b".parse::<Policy>().ok(), Some(Policy::Ungated));
		assert!("strict".parse::<Policy>().is_err());
		assert_eq!(Policy::default(), Policy::Gated);
		assert_eq!(Policy::Ungated.to_string(), "ungated");
	}
}

// vim: ts=4

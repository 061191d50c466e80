//! Common types used throughout Flaggate.

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

// UserId //
//********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub i64);

impl std::fmt::Display for UserId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

// FeatureId //
//***********//
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureId(pub i64);

impl std::fmt::Display for FeatureId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

// Dates //
//*******//
/// Calendar format used on the wire and in the record store
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local calendar date
pub fn today() -> NaiveDate {
	Local::now().date_naive()
}

/// `date + days`, saturating at the last representable date
pub fn add_days(date: NaiveDate, days: u32) -> NaiveDate {
	date.checked_add_days(Days::new(u64::from(days))).unwrap_or(NaiveDate::MAX)
}

pub fn format_date(date: NaiveDate) -> String {
	date.format(DATE_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
	NaiveDate::parse_from_str(s, DATE_FORMAT)
}

// Verdict //
//*********//
/// Which tier of the precedence chain produced a verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Source {
	User,
	Group,
	Region,
	Default,
	/// Subscription inactive, no override was consulted
	Blocked,
}

impl std::fmt::Display for Source {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			Source::User => "USER",
			Source::Group => "GROUP",
			Source::Region => "REGION",
			Source::Default => "DEFAULT",
			Source::Blocked => "BLOCKED",
		};
		f.write_str(s)
	}
}

/// Result of evaluating a feature for a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
	pub enabled: bool,
	pub source: Source,
}

impl Verdict {
	pub fn new(enabled: bool, source: Source) -> Self {
		Self { enabled, source }
	}

	pub fn blocked() -> Self {
		Self { enabled: false, source: Source::Blocked }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_source_serializes_uppercase() {
		let json = serde_json::to_string(&Verdict::new(true, Source::Region)).unwrap_or_default();
		assert_eq!(json, r#"{"enabled":true,"source":"REGION"}"#);
		assert_eq!(Source::Blocked.to_string(), "BLOCKED");
	}

	#[test]
	fn test_add_days() {
		let d = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap_or_default();
		assert_eq!(format_date(add_days(d, 1)), "2025-01-01");
		assert_eq!(add_days(NaiveDate::MAX, 10), NaiveDate::MAX);
	}

	#[test]
	fn test_parse_date() {
		assert!(parse_date("2025-02-28").is_ok());
		assert!(parse_date("28/02/2025").is_err());
	}
}

// vim: ts=4

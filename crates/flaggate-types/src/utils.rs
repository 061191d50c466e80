//! Utility functions

use crate::prelude::*;

/// Longest accepted user, feature or title name
pub const MAX_NAME_LENGTH: usize = 100;
/// Longest accepted region or group name
pub const MAX_KEY_LENGTH: usize = 50;

/// Trim and validate a required name-like field.
///
/// Rejects empty (or whitespace only) values and values longer than `max_len`
/// characters. Returns the trimmed value.
pub fn validate_field<'a>(field: &str, value: &'a str, max_len: usize) -> FgResult<&'a str> {
	let value = value.trim();
	if value.is_empty() {
		return Err(Error::ValidationError(format!("{} cannot be empty", field)));
	}
	if value.chars().count() > max_len {
		return Err(Error::ValidationError(format!(
			"{} is longer than {} characters",
			field, max_len
		)));
	}
	Ok(value)
}

/// Normalises a name used to look up a stored record.
///
/// Stored names went through [`validate_field`], which trims them, so lookups
/// trim the same way.
pub fn lookup_key(value: &str) -> &str {
	value.trim()
}

pub fn validate_name<'a>(field: &str, value: &'a str) -> FgResult<&'a str> {
	validate_field(field, value, MAX_NAME_LENGTH)
}

pub fn validate_key<'a>(field: &str, value: &'a str) -> FgResult<&'a str> {
	validate_field(field, value, MAX_KEY_LENGTH)
}


// vim: ts=4

use std::{error::Error, fmt};

pub use bw_proc_macro::{variant_checkers, FromStr};

/// Returned when a string names no variant of the parsed enum.
#[derive(Debug, PartialEq)]
pub struct ParseEnumError {
	/// The input that failed to parse.
	pub input: String,
}

impl fmt::Display for ParseEnumError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "unknown variant name: {:?}", self.input)
	}
}

impl Error for ParseEnumError {}

/// Lowercases `s` and strips separators, so `Terran_Marine`, `terran marine`
/// and `TerranMarine` all compare equal.
#[doc(hidden)]
pub fn normalize_variant_name(s: &str) -> String {
	s.chars()
		.filter(|c| !matches!(c, '_' | ' ' | '-'))
		.flat_map(char::to_lowercase)
		.collect()
}

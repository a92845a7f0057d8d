//! Brace characters tracked by the extractor.

pub const SQUARE_L: char = '[';
pub const SQUARE_R: char = ']';
pub const ROUND_L: char = '(';
pub const ROUND_R: char = ')';
pub const CURLY_L: char = '{';
pub const CURLY_R: char = '}';

/// Returns the closing pair for given opening brace.
pub fn pair_of(ch: char) -> Option<char> {
	match ch {
		SQUARE_L => Some(SQUARE_R),
		ROUND_L => Some(ROUND_R),
		CURLY_L => Some(CURLY_R),
		_ => None,
	}
}

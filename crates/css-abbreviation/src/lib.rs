//! Parser for Emmet stylesheet abbreviations.
//!
//! An abbreviation like `bd1-s#fc0` tokenizes into literal, number and color
//! tokens and parses into a list of [`CssProperty`] structures. Resolving
//! the property names and keywords against a snippet catalog is left to the
//! caller.

pub mod parser;
pub mod tokenizer;

pub use parser::CssProperty;
pub use tokenizer::tokens::{CssToken, CssTokenKind, CssValue, OperatorType, QuoteKind};

use emmet_scanner::{ScannerError, TokenScannerError};

/// Error produced while parsing a stylesheet abbreviation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
	Scanner(ScannerError),
	Token(TokenScannerError),
}

impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ParseError::Scanner(err) => err.fmt(f),
			ParseError::Token(err) => err.fmt(f),
		}
	}
}

impl std::error::Error for ParseError {}

impl From<ScannerError> for ParseError {
	fn from(err: ScannerError) -> Self {
		ParseError::Scanner(err)
	}
}

impl From<TokenScannerError> for ParseError {
	fn from(err: TokenScannerError) -> Self {
		ParseError::Token(err)
	}
}

/// Parses given abbreviation into a property set.
///
/// With `value_mode` set, the abbreviation is parsed as a value of an
/// existing property: the leading name extraction is skipped.
pub fn parse(abbr: &str, value_mode: bool) -> Result<Vec<CssProperty>, ParseError> {
	let tokens = tokenizer::tokenize(abbr, value_mode)?;
	Ok(parser::parse(tokens, value_mode)?)
}

//! Error types for the expansion entry points.

use emmet_scanner::{ScannerError, TokenScannerError};
use thiserror::Error;

/// Error raised by [`crate::expand`] on a malformed abbreviation.
///
/// No partial result is produced; the scanner variant renders with the
/// source line and a caret under the offending position.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
	#[error("{}", .0.with_caret())]
	Scanner(ScannerError),
	#[error(transparent)]
	Token(TokenScannerError),
}

impl Error {
	pub(crate) fn from_markup(err: emmet_abbreviation::ParseError) -> Self {
		match err {
			emmet_abbreviation::ParseError::Scanner(err) => Error::Scanner(err),
			emmet_abbreviation::ParseError::Token(err) => Error::Token(err),
		}
	}

	pub(crate) fn from_css(err: emmet_css_abbreviation::ParseError) -> Self {
		match err {
			emmet_css_abbreviation::ParseError::Scanner(err) => Error::Scanner(err),
			emmet_css_abbreviation::ParseError::Token(err) => Error::Token(err),
		}
	}
}

/// Result type for expansion operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Scanning primitives shared by every Emmet parser.
//!
//! The [`Scanner`] is a forward cursor over a string slice with byte-offset
//! positions, used by the abbreviation tokenizers and the document matchers.
//! The [`TokenScanner`] provides the same cursor abstraction over a list of
//! already-produced tokens for the recursive descent parsers.

pub mod scanner;
pub mod token_scanner;
pub mod utils;

pub use scanner::{Scanner, ScannerError};
pub use token_scanner::{SourcePos, TokenScanner, TokenScannerError};

//! Fast scan of stylesheet source: quickly determines document structure as
//! selector, property name, property value and block end tokens.
//!
//! The scanner does not provide detailed info about CSS atoms like compound
//! selectors or operators; that data can be parsed later on demand.

use std::ops::ControlFlow;

use emmet_scanner::Scanner;
use emmet_scanner::utils::{is_quote, is_space};

/// Kind of a scanned stylesheet fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenType {
	Selector,
	PropertyName,
	PropertyValue,
	BlockEnd,
}

#[derive(Default)]
struct ScanState {
	/// Start of the token being consumed.
	start: Option<usize>,
	/// End of the token being consumed.
	end: Option<usize>,
	/// Location of a possible property delimiter.
	property_delimiter: Option<usize>,
	/// Location of a possible property start.
	property_start: Option<usize>,
	/// Location of a possible property end.
	property_end: Option<usize>,
	/// Depth of `(…)` expression context.
	expression: i32,
}

impl ScanState {
	fn reset(&mut self) {
		self.start = None;
		self.end = None;
		self.property_start = None;
		self.property_end = None;
		self.property_delimiter = None;
	}
}

/// Performs a fast scan of given stylesheet source and runs the callback for
/// each token found: `(kind, start, end, delimiter)`.
///
/// Returning [`ControlFlow::Break`] from the callback stops the scan.
pub fn scan(
	source: &str,
	mut callback: impl FnMut(TokenType, usize, usize, Option<usize>) -> ControlFlow<()>,
) {
	let mut scanner = Scanner::new(source);
	let mut state = ScanState::default();

	macro_rules! notify {
		($kind:expr, $delimiter:expr, $start:expr, $end:expr) => {
			if callback($kind, $start, $end, $delimiter).is_break() {
				return;
			}
		};
	}

	while !scanner.eof() {
		if comment(&mut scanner) || scanner.eat_while(is_space) {
			continue;
		}

		scanner.start = scanner.pos;
		let block_end = scanner.eat('}');
		if block_end || scanner.eat(';') {
			// Block or property end
			if state.property_start.is_some() {
				// Pending property
				notify!(
					TokenType::PropertyName,
					state.property_delimiter,
					state.property_start.unwrap_or(0),
					state.property_end.unwrap_or(0)
				);

				if state.start.is_none() {
					// Explicit property value state: emit an empty value
					state.start = Some(scanner.start);
					state.end = Some(scanner.start);
				}

				notify!(
					TokenType::PropertyValue,
					Some(scanner.start),
					state.start.unwrap_or(0),
					state.end.unwrap_or(0)
				);
			} else if state.start.is_some() {
				// Flush the consumed token
				notify!(
					TokenType::PropertyName,
					Some(scanner.start),
					state.start.unwrap_or(0),
					state.end.unwrap_or(0)
				);
			}

			if block_end {
				notify!(
					TokenType::BlockEnd,
					Some(scanner.start),
					scanner.start,
					scanner.pos
				);
			}

			state.reset();
		} else if scanner.eat('{') {
			// Block start
			if state.start.is_none() && state.property_start.is_none() {
				// No consumed selector, emit an empty selector start
				state.start = Some(scanner.pos);
				state.end = Some(scanner.pos);
			}

			if state.property_start.is_some() {
				// A value that looked like a property name-value pair was
				// actually a selector
				state.start = state.property_start;
			}

			notify!(
				TokenType::Selector,
				Some(scanner.start),
				state.start.unwrap_or(0),
				state.end.unwrap_or(0)
			);
			state.reset();
		} else if scanner.eat(':') && !is_known_selector_colon(&mut scanner, &state) {
			// A colon could be a property delimiter (`foo: bar`), a variable
			// delimiter (`$foo: bar`), a pseudo-selector (`a:hover`) or a
			// media query expression (`min-width: 100px`). Accumulate a
			// possible property name-value pair
			if state.property_start.is_none() {
				state.property_start = state.start;
			}
			state.property_end = state.end;
			state.property_delimiter = Some(scanner.pos - 1);
			state.start = None;
			state.end = None;
		} else {
			if state.start.is_none() {
				state.start = Some(scanner.pos);
			}

			if scanner.eat('(') {
				state.expression += 1;
			} else if scanner.eat(')') {
				state.expression -= 1;
			} else if !literal(&mut scanner) {
				scanner.next();
			}

			state.end = Some(scanner.pos);
		}
	}

	if state.property_start.is_some() {
		// Pending property name
		notify!(
			TokenType::PropertyName,
			state.property_delimiter,
			state.property_start.unwrap_or(0),
			state.property_end.unwrap_or(0)
		);
	}

	if state.start.is_some() {
		// Pending token
		let kind = if state.property_start.is_some() {
			TokenType::PropertyValue
		} else {
			TokenType::PropertyName
		};
		notify!(
			kind,
			None,
			state.start.unwrap_or(0),
			state.end.unwrap_or(0)
		);
	}
}

/// Consumes a CSS comment: `/* … */`, possibly unterminated.
fn comment(scanner: &mut Scanner) -> bool {
	let start = scanner.pos;
	if scanner.eat('/') && scanner.eat('*') {
		scanner.start = start;
		while !scanner.eof() {
			if scanner.eat('*') {
				if scanner.eat('/') {
					return true;
				}
				continue;
			}
			scanner.next();
		}
		return true;
	}

	scanner.pos = start;
	false
}

/// Consumes a quoted literal; incomplete strings are consumed to the line
/// end without an error.
pub(crate) fn literal(scanner: &mut Scanner) -> bool {
	let Some(ch) = scanner.peek() else {
		return false;
	};

	if is_quote(ch) {
		scanner.start = scanner.pos;
		scanner.next();
		while !scanner.eof() {
			if scanner.eat(ch) || scanner.eat('\n') || scanner.eat('\r') {
				break;
			}

			// Skip escape character, if any
			scanner.eat('\\');
			scanner.next();
		}

		true
	} else {
		false
	}
}

/// Check if the scanner is at a selector context for the `:` just consumed:
/// either inside an expression like `(min-width: 10px)` or a pseudo-element
/// `::before`.
fn is_known_selector_colon(scanner: &mut Scanner, state: &ScanState) -> bool {
	state.expression > 0 || scanner.eat_while(':')
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(source: &str) -> Vec<(TokenType, String)> {
		let mut result = Vec::new();
		scan(source, |kind, start, end, _| {
			result.push((kind, source[start..end].to_string()));
			ControlFlow::Continue(())
		});
		result
	}

	#[test]
	fn test_simple_rule() {
		assert_eq!(
			tokens("a { color: red; }"),
			vec![
				(TokenType::Selector, "a".to_string()),
				(TokenType::PropertyName, "color".to_string()),
				(TokenType::PropertyValue, "red".to_string()),
				(TokenType::BlockEnd, "}".to_string()),
			]
		);
	}

	#[test]
	fn test_pseudo_selectors() {
		// `::before` keeps the colon as part of the selector
		assert_eq!(
			tokens("a::before { content: \"a\" }"),
			vec![
				(TokenType::Selector, "a::before".to_string()),
				(TokenType::PropertyName, "content".to_string()),
				(TokenType::PropertyValue, "\"a\"".to_string()),
				(TokenType::BlockEnd, "}".to_string()),
			]
		);
	}

	#[test]
	fn test_media_expression() {
		// A colon inside `(…)` does not split the selector
		assert_eq!(
			tokens("@media (min-width: 900px) { a { b: c; } }"),
			vec![
				(TokenType::Selector, "@media (min-width: 900px)".to_string()),
				(TokenType::Selector, "a".to_string()),
				(TokenType::PropertyName, "b".to_string()),
				(TokenType::PropertyValue, "c".to_string()),
				(TokenType::BlockEnd, "}".to_string()),
				(TokenType::BlockEnd, "}".to_string()),
			]
		);
	}

	#[test]
	fn test_pending_tokens_flushed() {
		assert_eq!(
			tokens("color: red"),
			vec![
				(TokenType::PropertyName, "color".to_string()),
				(TokenType::PropertyValue, "red".to_string()),
			]
		);

		assert_eq!(
			tokens("color"),
			vec![(TokenType::PropertyName, "color".to_string())]
		);
	}

	#[test]
	fn test_comments_skipped() {
		assert_eq!(
			tokens("/* a: b; */ c { d: e }"),
			vec![
				(TokenType::Selector, "c".to_string()),
				(TokenType::PropertyName, "d".to_string()),
				(TokenType::PropertyValue, "e".to_string()),
				(TokenType::BlockEnd, "}".to_string()),
			]
		);
	}
}

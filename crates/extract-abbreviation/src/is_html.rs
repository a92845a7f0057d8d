//! Right-to-left recognizer for a complete HTML tag ending at the scanner
//! position; used to stop extraction at embedded markup.

use emmet_scanner::utils::{is_alpha, is_number, is_quote};

use crate::brackets::{CURLY_L, CURLY_R, ROUND_L, ROUND_R, SQUARE_L, SQUARE_R, pair_of};
use crate::reader::BackwardScanner;

/// Check if given scanner’s current position points at the end of an HTML
/// tag.
pub fn is_html(scanner: &mut BackwardScanner) -> bool {
	let start = scanner.pos;

	if !scanner.consume_char('>') {
		return false;
	}

	let mut ok = false;
	scanner.consume_char('/'); // possibly self-closed element

	while !scanner.sol() {
		scanner.consume_while(is_white_space);

		if consume_ident(scanner) {
			// Ate an identifier: could be a tag name, a boolean attribute or
			// an unquoted attribute value
			if scanner.consume_char('/') {
				// Either a closing tag or an invalid tag
				ok = scanner.consume_char('<');
				break;
			} else if scanner.consume_char('<') {
				// Opening tag
				ok = true;
				break;
			} else if scanner.consume(is_white_space) {
				// Boolean attribute
				continue;
			} else if scanner.consume_char('=') {
				// Simple unquoted value or invalid attribute
				if consume_ident(scanner) {
					continue;
				}
				break;
			} else if consume_attribute_with_unquoted_value(scanner) {
				// The identifier was a part of an unquoted value
				ok = true;
				break;
			}

			// Invalid tag
			break;
		}

		if consume_attribute(scanner) {
			continue;
		}

		break;
	}

	scanner.pos = start;
	ok
}

/// Consumes an HTML attribute backwards. Returns `true` if one was consumed.
fn consume_attribute(scanner: &mut BackwardScanner) -> bool {
	consume_attribute_with_quoted_value(scanner) || consume_attribute_with_unquoted_value(scanner)
}

fn consume_attribute_with_quoted_value(scanner: &mut BackwardScanner) -> bool {
	let start = scanner.pos;
	if consume_quoted(scanner) && scanner.consume_char('=') && consume_ident(scanner) {
		return true;
	}

	scanner.pos = start;
	false
}

fn consume_attribute_with_unquoted_value(scanner: &mut BackwardScanner) -> bool {
	let start = scanner.pos;
	let mut stack: Vec<char> = Vec::new();

	while !scanner.sol() {
		let ch = scanner.peek();
		if is_close_bracket(ch) {
			stack.push(ch);
		} else if is_open_bracket(ch) {
			if stack.pop() != pair_of(ch) {
				// Unexpected open bracket
				break;
			}
		} else if !is_unquoted_value(ch) {
			break;
		}
		scanner.pos -= 1;
	}

	if start != scanner.pos && scanner.consume_char('=') && consume_ident(scanner) {
		return true;
	}

	scanner.pos = start;
	false
}

/// Consumes an HTML identifier backwards.
fn consume_ident(scanner: &mut BackwardScanner) -> bool {
	scanner.consume_while(is_ident)
}

/// Consumes a quoted string backwards.
pub fn consume_quoted(scanner: &mut BackwardScanner) -> bool {
	let start = scanner.pos;
	let quote = scanner.previous();

	if let Some(quote) = quote {
		if is_quote(quote) {
			while !scanner.sol() {
				if scanner.previous() == Some(quote) && scanner.peek() != '\\' {
					return true;
				}
			}
		}
	}

	scanner.pos = start;
	false
}

fn is_ident(ch: char) -> bool {
	ch == ':' || ch == '-' || is_alpha(ch) || is_number(ch)
}

fn is_white_space(ch: char) -> bool {
	ch == ' ' || ch == '\t'
}

/// Check if given character may belong to an unquoted attribute value.
fn is_unquoted_value(ch: char) -> bool {
	ch != '\0' && ch != '=' && !is_white_space(ch) && !is_quote(ch)
}

fn is_open_bracket(ch: char) -> bool {
	matches!(ch, CURLY_L | ROUND_L | SQUARE_L)
}

fn is_close_bracket(ch: char) -> bool {
	matches!(ch, CURLY_R | ROUND_R | SQUARE_R)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn html(text: &str) -> bool {
		is_html(&mut BackwardScanner::new(text, 0))
	}

	#[test]
	fn test_simple_tags() {
		assert!(html("<div>"));
		assert!(html("<div/>"));
		assert!(html("<div />"));
		assert!(html("</div>"));
		assert!(html("<foo-bar>"));
	}

	#[test]
	fn test_tags_with_attributes() {
		assert!(html("<div foo=\"bar\">"));
		assert!(html("<div foo=bar>"));
		assert!(html("<div foo>"));
		assert!(html("<div a=\"b\" c=d>"));
		assert!(html("<div a=^b$ c=d>"));
		assert!(html("<div a=b c=^%d]$>"));
	}

	#[test]
	fn test_invalid_tags() {
		assert!(!html("div>"));
		assert!(!html("<div"));
		assert!(!html("<div =bar>"));
		assert!(!html("<div foo=>"));
		assert!(!html("[a=b c=d]>"));
		assert!(!html("div[a=b c=d]>"));
	}

	#[test]
	fn test_consume_quoted() {
		let mut scanner = BackwardScanner::new(" \"foo\"", 0);
		assert!(consume_quoted(&mut scanner));
		assert_eq!(scanner.pos, 1);

		let mut scanner = BackwardScanner::new("\"a\\\"b\"", 0);
		assert!(consume_quoted(&mut scanner));
		assert_eq!(scanner.pos, 0);
	}
}

//! Fast scan of HTML/XML source: reports each tag found without allocating
//! attribute data.

use std::ops::ControlFlow;

use emmet_scanner::Scanner;
use emmet_scanner::utils::{eat_quoted, is_space};
use rustc_hash::FxHashMap;

use crate::attributes::{attribute_name, attribute_value, attributes, get_attribute_value};
use crate::utils::{ElementType, consume_array, consume_section, ident, is_terminator};

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";
const COMMENT_OPEN: &str = "<!--";
const COMMENT_CLOSE: &str = "-->";
const PI_START: &str = "<?";
const PI_END: &str = "?>";

/// Performs a fast scan of given source code: for each tag found, invokes
/// the callback with the tag name, its type and its range in the source.
///
/// `special` lists tags whose content is consumed opaquely up to the
/// matching closing tag. Returning [`ControlFlow::Break`] from the callback
/// stops the scan.
pub fn scan(
	source: &str,
	mut callback: impl FnMut(&str, ElementType, usize, usize) -> ControlFlow<()>,
	special: &FxHashMap<String, Option<Vec<String>>>,
) {
	let mut scanner = Scanner::new(source);

	while !scanner.eof() {
		if cdata(&mut scanner) || comment(&mut scanner) || processing_instruction(&mut scanner) {
			continue;
		}

		let start = scanner.pos;
		if scanner.eat('<') {
			// Maybe a tag name?
			let mut elem_type = if scanner.eat('/') {
				ElementType::Close
			} else {
				ElementType::Open
			};
			let name_start = scanner.pos;

			if ident(&mut scanner) {
				// Consumed tag name
				let name_end = scanner.pos;
				if elem_type != ElementType::Close {
					skip_attributes(&mut scanner);
					scanner.eat_while(is_space);
					if scanner.eat('/') {
						elem_type = ElementType::SelfClose;
					}
				}

				if scanner.eat('>') {
					// Tag properly closed
					let name = scanner.substring(name_start, name_end);
					if callback(name, elem_type, start, scanner.pos).is_break() {
						return;
					}

					if elem_type == ElementType::Open
						&& is_special(special, name, source, start, scanner.pos)
					{
						// Found an opening tag of a special element: skip
						// content until the closing tag
						let mut found = false;
						while !scanner.eof() {
							if consume_closing(&mut scanner, name) {
								found = true;
								break;
							}

							scanner.next();
						}

						if found
							&& callback(name, ElementType::Close, scanner.start, scanner.pos)
								.is_break()
						{
							return;
						}
					}
				}
			}
		} else {
			scanner.next();
		}
	}
}

/// Skips attributes in the current tag context.
fn skip_attributes(scanner: &mut Scanner) {
	while !scanner.eof() {
		scanner.eat_while(is_space);
		if attribute_name(scanner) {
			if scanner.eat('=') {
				attribute_value(scanner);
			}
		} else if scanner.peek().is_some_and(is_terminator) {
			break;
		} else {
			scanner.next();
		}
	}
}

/// Consumes a closing tag with given name from the scanner.
fn consume_closing(scanner: &mut Scanner, name: &str) -> bool {
	let start = scanner.pos;
	if scanner.eat('<') && scanner.eat('/') && consume_array(scanner, name) && scanner.eat('>') {
		scanner.start = start;
		return true;
	}

	scanner.pos = start;
	false
}

fn cdata(scanner: &mut Scanner) -> bool {
	consume_section(scanner, CDATA_OPEN, CDATA_CLOSE, true)
}

fn comment(scanner: &mut Scanner) -> bool {
	consume_section(scanner, COMMENT_OPEN, COMMENT_CLOSE, true)
}

fn processing_instruction(scanner: &mut Scanner) -> bool {
	if consume_array(scanner, PI_START) {
		while !scanner.eof() {
			if consume_array(scanner, PI_END) {
				break;
			}

			if !eat_quoted(scanner) {
				scanner.next();
			}
		}

		return true;
	}

	false
}

/// Check if given tag name should be considered special in the current
/// context.
fn is_special(
	special: &FxHashMap<String, Option<Vec<String>>>,
	name: &str,
	source: &str,
	start: usize,
	end: usize,
) -> bool {
	match special.get(name) {
		Some(None) => true,
		Some(Some(type_values)) => {
			let attrs = attributes(&source[start + name.len() + 1..end - 1], None);
			let value = get_attribute_value(&attrs, "type").unwrap_or_default();
			type_values.contains(&value)
		}
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::utils::ScannerOptions;

	fn tags(source: &str) -> Vec<(String, ElementType, usize, usize)> {
		let options = ScannerOptions::default();
		let mut result = Vec::new();
		scan(
			source,
			|name, elem_type, start, end| {
				result.push((name.to_string(), elem_type, start, end));
				ControlFlow::Continue(())
			},
			&options.special,
		);
		result
	}

	#[test]
	fn test_open_close() {
		assert_eq!(
			tags("<a href=\"1>2\"><b/></a>"),
			vec![
				("a".to_string(), ElementType::Open, 0, 14),
				("b".to_string(), ElementType::SelfClose, 14, 18),
				("a".to_string(), ElementType::Close, 18, 22),
			]
		);
	}

	#[test]
	fn test_comments_and_cdata() {
		assert_eq!(
			tags("<!-- <skip> --><a><![CDATA[<b>]]></a>"),
			vec![
				("a".to_string(), ElementType::Open, 15, 18),
				("a".to_string(), ElementType::Close, 33, 38),
			]
		);
	}

	#[test]
	fn test_special_tags() {
		// Content of a special tag is consumed opaquely
		assert_eq!(
			tags("<style><b></style><script type=\"text/plain\"><i></script>"),
			vec![
				("style".to_string(), ElementType::Open, 0, 7),
				("style".to_string(), ElementType::Close, 10, 18),
				("script".to_string(), ElementType::Open, 18, 44),
				("i".to_string(), ElementType::Open, 44, 47),
				("script".to_string(), ElementType::Close, 47, 56),
			]
		);
	}
}

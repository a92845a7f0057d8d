//! Attribute parser for scanned tags.

use emmet_scanner::Scanner;
use emmet_scanner::utils::{eat_quoted, is_space};
use serde::Serialize;

use crate::utils::{consume_paired, get_unquoted_value, ident, is_unquoted};

/// A single parsed attribute with source ranges for name and value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeToken {
	pub name: String,
	pub name_start: usize,
	pub name_end: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value_start: Option<usize>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub value_end: Option<usize>,
}

/// Parses given string as a list of HTML attributes.
///
/// When `name` is given, `src` must be a complete opening tag
/// (`<a foo="bar">`); otherwise it should be the fragment between the
/// element name and the closing angle bracket.
pub fn attributes(src: &str, name: Option<&str>) -> Vec<AttributeToken> {
	let mut result = Vec::new();
	let mut start = 0;
	let mut end = src.len();

	if let Some(name) = name {
		start = name.len() + 1;
		end -= if src.ends_with("/>") { 2 } else { 1 };
	}

	let mut scanner = Scanner::limit(src, start, end);

	while !scanner.eof() {
		scanner.eat_while(is_space);
		if attribute_name(&mut scanner) {
			let mut token = AttributeToken {
				name: scanner.current().to_string(),
				name_start: scanner.start,
				name_end: scanner.pos,
				value: None,
				value_start: None,
				value_end: None,
			};

			if scanner.eat('=') && attribute_value(&mut scanner) {
				token.value = Some(scanner.current().to_string());
				token.value_start = Some(scanner.start);
				token.value_end = Some(scanner.pos);
			}

			result.push(token);
		} else {
			// Skip invalid attributes instead of failing: this is not a
			// validating parser
			scanner.next();
		}
	}

	result
}

/// Consumes an attribute name from given scanner.
pub fn attribute_name(scanner: &mut Scanner) -> bool {
	let start = scanner.pos;
	if scanner.eat('*') || scanner.eat('#') {
		// Angular-style directives: `<section *ngIf="showSection">`,
		// `<video #movieplayer …>`
		ident(scanner);
		scanner.start = start;
		return true;
	}

	// Attribute name could be a regular name or an expression:
	// React-style `{...props}`, Angular-style `[ng-for]`
	consume_paired(scanner) || ident(scanner)
}

/// Consumes an attribute value: quoted, React-like expression or unquoted
/// literal.
pub fn attribute_value(scanner: &mut Scanner) -> bool {
	eat_quoted(scanner) || consume_paired(scanner) || unquoted(scanner)
}

/// Returns the clean (unquoted) value of the `name` attribute.
pub fn get_attribute_value(attrs: &[AttributeToken], name: &str) -> Option<String> {
	attrs
		.iter()
		.find(|attr| attr.name == name)
		.and_then(|attr| attr.value.as_deref())
		.map(|value| get_unquoted_value(value).to_string())
}

fn unquoted(scanner: &mut Scanner) -> bool {
	let start = scanner.pos;
	if scanner.eat_while(is_unquoted) {
		scanner.start = start;
		true
	} else {
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_attribute_string() {
		let attrs = attributes("foo bar=\"baz\" *ngIf={a == b}", None);
		assert_eq!(attrs.len(), 3);
		assert_eq!(attrs[0].name, "foo");
		assert!(attrs[0].value.is_none());
		assert_eq!(attrs[1].name, "bar");
		assert_eq!(attrs[1].value.as_deref(), Some("\"baz\""));
		assert_eq!(attrs[2].name, "*ngIf");
		assert_eq!(attrs[2].value.as_deref(), Some("{a == b}"));
	}

	#[test]
	fn test_parse_from_tag() {
		let attrs = attributes("<img src=\"foo.png\" alt />", Some("img"));
		assert_eq!(attrs.len(), 2);
		assert_eq!(attrs[0].name, "src");
		assert_eq!(attrs[0].value_start, Some(9));
		assert_eq!(attrs[0].value.as_deref(), Some("\"foo.png\""));
		assert_eq!(attrs[1].name, "alt");
	}

	#[test]
	fn test_unquoted_value() {
		let attrs = attributes("a=b c", None);
		assert_eq!(attrs[0].value.as_deref(), Some("b"));
		assert_eq!(attrs[1].name, "c");
	}
}

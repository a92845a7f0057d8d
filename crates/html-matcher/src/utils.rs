//! Shared helpers for the HTML scanner.

use emmet_scanner::Scanner;
use emmet_scanner::utils::{eat_pair, is_alpha, is_number, is_quote, is_space};
use rustc_hash::FxHashMap;

/// Kind of a scanned tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ElementType {
	Open,
	Close,
	SelfClose,
}

/// Scanner behavior options.
#[derive(Debug, Clone)]
pub struct ScannerOptions {
	/// Parse the source as an XML document: should-be-empty elements like
	/// `<br>` are expected to have a closing pair.
	pub xml: bool,
	/// Tags whose content is consumed opaquely up to the matching closing
	/// tag. A `None` value always marks the element special; a list marks it
	/// special only when its `type` attribute has one of the listed values.
	pub special: FxHashMap<String, Option<Vec<String>>>,
	/// Elements treated as empty (without a closing tag) in non-XML mode.
	pub empty: Vec<String>,
}

impl Default for ScannerOptions {
	fn default() -> Self {
		let mut special = FxHashMap::default();
		special.insert("style".to_string(), None);
		special.insert(
			"script".to_string(),
			Some(
				[
					"",
					"text/javascript",
					"application/x-javascript",
					"javascript",
					"typescript",
					"ts",
					"coffee",
					"coffeescript",
				]
				.iter()
				.map(|s| s.to_string())
				.collect(),
			),
		);

		ScannerOptions {
			xml: false,
			special,
			empty: [
				"img", "meta", "link", "br", "base", "hr", "area", "wbr", "col", "embed", "input",
				"param", "source", "track",
			]
			.iter()
			.map(|s| s.to_string())
			.collect(),
		}
	}
}

/// Consumes the exact character sequence from given scanner.
pub fn consume_array(scanner: &mut Scanner, chars: &str) -> bool {
	let start = scanner.pos;

	for ch in chars.chars() {
		if !scanner.eat(ch) {
			scanner.pos = start;
			return false;
		}
	}

	scanner.start = start;
	true
}

/// Consumes a section that starts with `prefix` and ends with `suffix`.
pub fn consume_section(scanner: &mut Scanner, prefix: &str, suffix: &str, allow_unclosed: bool) -> bool {
	let start = scanner.pos;
	if consume_array(scanner, prefix) {
		while !scanner.eof() {
			if consume_array(scanner, suffix) {
				scanner.start = start;
				return true;
			}

			scanner.next();
		}

		if allow_unclosed {
			scanner.start = start;
			return true;
		}

		scanner.pos = start;
		return false;
	}

	scanner.pos = start;
	false
}

/// Check if given character can start a tag or attribute name.
pub fn name_start_char(ch: char) -> bool {
	// Limited XML spec: https://www.w3.org/TR/xml/#NT-NameStartChar
	let o = ch as u32;
	is_alpha(ch)
		|| ch == ':'
		|| ch == '_'
		|| (0xC0..=0xD6).contains(&o)
		|| (0xD8..=0xF6).contains(&o)
		|| (0xF8..=0x2FF).contains(&o)
		|| (0x370..=0x37D).contains(&o)
		|| (0x37F..=0x1FFF).contains(&o)
}

/// Check if given character can be used in a tag or attribute name.
pub fn name_char(ch: char) -> bool {
	// Limited XML spec: https://www.w3.org/TR/xml/#NT-NameChar
	let o = ch as u32;
	name_start_char(ch)
		|| ch == '-'
		|| ch == '.'
		|| is_number(ch)
		|| o == 0xB7
		|| (0x0300..=0x036F).contains(&o)
}

/// Consumes an identifier from given scanner.
pub fn ident(scanner: &mut Scanner) -> bool {
	let start = scanner.pos;
	if scanner.eat(name_start_char) {
		scanner.eat_while(name_char);
		scanner.start = start;
		return true;
	}

	false
}

/// Check if given character terminates a tag.
pub fn is_terminator(ch: char) -> bool {
	ch == '>' || ch == '/'
}

/// Check if given character is a valid unquoted attribute value character.
pub fn is_unquoted(ch: char) -> bool {
	!is_quote(ch) && !is_space(ch) && !is_terminator(ch)
}

/// Consumes paired tokens (like `[` and `]`) with respect of nesting and
/// embedded quoted values.
pub fn consume_paired(scanner: &mut Scanner) -> bool {
	eat_pair(scanner, '<', '>')
		|| eat_pair(scanner, '(', ')')
		|| eat_pair(scanner, '[', ']')
		|| eat_pair(scanner, '{', '}')
}

/// Returns the unquoted value of given string.
pub fn get_unquoted_value(value: &str) -> &str {
	let mut value = value;
	if let Some(first) = value.chars().next() {
		if is_quote(first) {
			value = &value[1..];
		}
	}

	if let Some(last) = value.chars().last() {
		if is_quote(last) {
			value = &value[..value.len() - 1];
		}
	}

	value
}

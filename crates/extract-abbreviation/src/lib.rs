//! Extracts an Emmet abbreviation ending at the caret from a line of host
//! source code, so an editor can expand without explicit selection.

pub mod brackets;
pub mod is_html;
pub mod reader;

use serde::{Deserialize, Serialize};

use brackets::{CURLY_L, CURLY_R, ROUND_L, ROUND_R, SQUARE_L, SQUARE_R};
use emmet_scanner::utils::{is_alpha, is_number, is_quote};
use is_html::is_html as is_at_html_tag;
use reader::BackwardScanner;

const SPECIAL_CHARS: &str = "#.*:$-_!@%^+>/";

/// Host language family; stylesheet abbreviations carry no `[]`/`{}`
/// brackets, so those are not balanced during extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxKind {
	#[default]
	Markup,
	Stylesheet,
}

/// Options for [`extract`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
	/// Search for closing braces right after the caret, as most editors
	/// auto-insert them; the user does not have to move the caret past the
	/// auto-inserted part.
	pub look_ahead: bool,
	/// Context syntax family of the expanded abbreviation.
	#[serde(rename = "type")]
	pub syntax: SyntaxKind,
	/// String that must precede the abbreviation for it to be extracted; the
	/// abbreviation starts at the nearest prefix occurrence.
	pub prefix: String,
}

impl Default for ExtractOptions {
	fn default() -> Self {
		ExtractOptions {
			look_ahead: true,
			syntax: SyntaxKind::Markup,
			prefix: String::new(),
		}
	}
}

/// Abbreviation found inside a line of source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedAbbreviation {
	/// Extracted abbreviation.
	pub abbreviation: String,
	/// Byte offset of the abbreviation in the line.
	pub location: usize,
	/// Start of the matched region, including the prefix.
	pub start: usize,
	/// End of the extracted abbreviation.
	pub end: usize,
}

/// Extracts an abbreviation from given line of source code, ending at `pos`
/// (defaults to the line end).
pub fn extract(line: &str, pos: Option<usize>, options: &ExtractOptions) -> Option<ExtractedAbbreviation> {
	let mut pos = pos.unwrap_or(line.len()).min(line.len());

	if options.look_ahead {
		pos = offset_past_auto_closed(line, pos, options);
	}

	let start = get_start_offset(line, pos, &options.prefix)?;

	let mut scanner = BackwardScanner::new(line, start);
	scanner.pos = pos;
	let mut stack: Vec<char> = Vec::new();

	while !scanner.sol() {
		let ch = scanner.peek();

		if stack.contains(&CURLY_R) {
			if ch == CURLY_R {
				stack.push(ch);
				scanner.pos -= 1;
				continue;
			}

			if ch != CURLY_L {
				scanner.pos -= 1;
				continue;
			}
		}

		if is_close_brace(ch, options.syntax) {
			stack.push(ch);
		} else if is_open_brace(ch, options.syntax) {
			if stack.pop() != brackets::pair_of(ch) {
				// Unexpected brace
				break;
			}
		} else if stack.contains(&SQUARE_R) || stack.contains(&CURLY_R) {
			// Respect all characters inside attribute sets or text nodes
			scanner.pos -= 1;
			continue;
		} else if is_at_html_tag(&mut scanner) || !is_abbreviation(ch) {
			break;
		}

		scanner.pos -= 1;
	}

	if stack.is_empty() && scanner.pos != pos {
		// Found something, trim invalid symbols from the beginning
		let raw = &line[scanner.pos..pos];
		let abbreviation = raw.trim_start_matches(['*', '+', '>', '^']);
		if abbreviation.is_empty() {
			return None;
		}

		let location = pos - abbreviation.len();
		let start = if options.prefix.is_empty() {
			location
		} else {
			start - options.prefix.len()
		};

		return Some(ExtractedAbbreviation {
			abbreviation: abbreviation.to_string(),
			location,
			start,
			end: pos,
		});
	}

	None
}

/// Returns a new line index right past the characters after `pos` that an
/// editor will likely auto-close: `}`, `]` and quotes.
fn offset_past_auto_closed(line: &str, mut pos: usize, options: &ExtractOptions) -> usize {
	let bytes = line.as_bytes();

	// A closing quote is allowed only as the very next character
	if pos < bytes.len() && is_quote(bytes[pos] as char) {
		pos += 1;
	}

	// Advance until a non-autoclosed character is found
	while pos < bytes.len() && is_close_brace(bytes[pos] as char, options.syntax) {
		pos += 1;
	}

	pos
}

/// Returns the left boundary in `line` where the search stops: the nearest
/// `prefix` occurrence that is not inside a balanced `[]` or `{}` pair.
fn get_start_offset(line: &str, pos: usize, prefix: &str) -> Option<usize> {
	if prefix.is_empty() {
		return Some(0);
	}

	let mut scanner = BackwardScanner::new(line, 0);
	scanner.pos = pos;

	while !scanner.sol() {
		if consume_pair(&mut scanner, SQUARE_R, SQUARE_L)
			|| consume_pair(&mut scanner, CURLY_R, CURLY_L)
		{
			continue;
		}

		let result = scanner.pos;
		if consume_prefix(&mut scanner, prefix) {
			return Some(result);
		}

		scanner.pos -= 1;
	}

	None
}

/// Consumes a full character pair backwards, if possible.
fn consume_pair(scanner: &mut BackwardScanner, close: char, open: char) -> bool {
	let start = scanner.pos;
	if scanner.consume_char(close) {
		while !scanner.sol() {
			if scanner.consume_char(open) {
				return true;
			}

			scanner.pos -= 1;
		}
	}

	scanner.pos = start;
	false
}

/// Consumes the prefix characters right-to-left, if possible.
fn consume_prefix(scanner: &mut BackwardScanner, prefix: &str) -> bool {
	let start = scanner.pos;
	let mut consumed = false;

	for (i, ch) in prefix.chars().rev().enumerate() {
		if !scanner.consume_char(ch) {
			break;
		}
		consumed = i == prefix.chars().count() - 1;
	}

	if !consumed {
		scanner.pos = start;
	}

	consumed
}

fn is_abbreviation(ch: char) -> bool {
	is_alpha(ch) || is_number(ch) || SPECIAL_CHARS.contains(ch)
}

fn is_open_brace(ch: char, syntax: SyntaxKind) -> bool {
	ch == ROUND_L || (syntax == SyntaxKind::Markup && (ch == SQUARE_L || ch == CURLY_L))
}

fn is_close_brace(ch: char, syntax: SyntaxKind) -> bool {
	ch == ROUND_R || (syntax == SyntaxKind::Markup && (ch == SQUARE_R || ch == CURLY_R))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn result(abbreviation: &str, location: usize) -> Option<ExtractedAbbreviation> {
		result_with_start(abbreviation, location, location)
	}

	fn result_with_start(
		abbreviation: &str,
		location: usize,
		start: usize,
	) -> Option<ExtractedAbbreviation> {
		Some(ExtractedAbbreviation {
			abbreviation: abbreviation.to_string(),
			location,
			start,
			end: location + abbreviation.len(),
		})
	}

	fn extract_at_caret(line: &str, options: &ExtractOptions) -> Option<ExtractedAbbreviation> {
		// `|` marks the caret; without it the caret is at the line end
		match line.find('|') {
			Some(caret) => {
				let line = line.replacen('|', "", 1);
				extract(&line, Some(caret), options)
			}
			None => extract(line, None, options),
		}
	}

	fn simple(line: &str) -> Option<ExtractedAbbreviation> {
		extract_at_caret(line, &ExtractOptions::default())
	}

	#[test]
	fn test_basic() {
		assert_eq!(simple(".bar"), result(".bar", 0));
		assert_eq!(simple(".foo .bar"), result(".bar", 5));
		assert_eq!(simple(".foo @bar"), result("@bar", 5));
		assert_eq!(simple(".foo img/"), result("img/", 5));
		assert_eq!(simple("текстdiv"), result("div", 10));
		assert_eq!(
			simple("foo div[foo=\"текст\" bar=текст2]"),
			result("div[foo=\"текст\" bar=текст2]", 4)
		);
	}

	#[test]
	fn test_operators() {
		assert_eq!(simple("a foo+bar.baz"), result("foo+bar.baz", 2));
		assert_eq!(simple("a foo>bar+baz*3"), result("foo>bar+baz*3", 2));
	}

	#[test]
	fn test_attributes() {
		assert_eq!(simple("a foo[bar|]"), result("foo[bar]", 2));
		assert_eq!(simple("a foo[bar=\"baz\" a b]"), result("foo[bar=\"baz\" a b]", 2));
		assert_eq!(simple("foo bar[a|] baz"), result("bar[a]", 4));
	}

	#[test]
	fn test_html_tag_boundary() {
		assert_eq!(simple("<foo>bar[a b=\"c\"]>baz"), result("bar[a b=\"c\"]>baz", 5));
		assert_eq!(simple("foo>bar"), result("foo>bar", 0));
		assert_eq!(simple("<foo>bar"), result("bar", 5));
	}

	#[test]
	fn test_stylesheet_type() {
		assert_eq!(simple("foo{bar|}"), result("foo{bar}", 0));

		let options = ExtractOptions {
			syntax: SyntaxKind::Stylesheet,
			..ExtractOptions::default()
		};
		assert_eq!(extract_at_caret("foo{bar|}", &options), result("bar", 4));
	}

	#[test]
	fn test_prefix() {
		let options = ExtractOptions {
			prefix: "<".to_string(),
			..ExtractOptions::default()
		};

		assert_eq!(
			extract_at_caret("<foo>bar[a b=\"c\"]>baz", &options),
			result_with_start("foo>bar[a b=\"c\"]>baz", 1, 0)
		);
		assert_eq!(
			extract_at_caret("<foo>bar[a b=\"<\"]>baz", &options),
			result_with_start("foo>bar[a b=\"<\"]>baz", 1, 0)
		);

		// Multiple prefix characters
		let options = ExtractOptions {
			prefix: ">>>".to_string(),
			..ExtractOptions::default()
		};
		assert_eq!(
			extract_at_caret("foo>>>bar[a b=\"c\"]>baz", &options),
			result_with_start("bar[a b=\"c\"]>baz", 6, 3)
		);

		// Absent prefix
		let options = ExtractOptions {
			prefix: "&&".to_string(),
			..ExtractOptions::default()
		};
		assert_eq!(extract_at_caret("<foo>bar[a b=\"c\"]>baz", &options), None);
	}

	#[test]
	fn test_brackets_inside_curly_braces() {
		assert_eq!(simple("foo div{[}+a{}"), result("div{[}+a{}", 4));
		assert_eq!(simple("div{}}"), None);
		assert_eq!(simple("div{{}"), result("{}", 4));
	}
}

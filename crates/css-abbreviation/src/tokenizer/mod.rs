//! Tokenizer for stylesheet abbreviations.

pub mod tokens;

use emmet_scanner::utils::{
	is_alpha, is_alpha_numeric_word, is_alpha_word, is_number, is_quote, is_space,
};
use emmet_scanner::{Scanner, ScannerError};

use tokens::{CssToken, CssTokenKind, OperatorType, QuoteKind};

/// Splits given abbreviation into a token list.
///
/// With `is_value` set, the abbreviation is tokenized as a value of an
/// existing CSS property: leading literals use the full keyword notation.
pub fn tokenize(abbr: &str, is_value: bool) -> Result<Vec<CssToken>, ScannerError> {
	let mut brackets = 0i32;
	let mut scanner = Scanner::new(abbr);
	let mut result: Vec<CssToken> = Vec::new();

	while !scanner.eof() {
		let token = field(&mut scanner)?
			.or_else(|| number_value(&mut scanner))
			.or_else(|| color_value(&mut scanner))
			.or_else(|| string_value(&mut scanner))
			.or_else(|| bracket(&mut scanner))
			.or_else(|| operator(&mut scanner))
			.or_else(|| white_space(&mut scanner))
			.or_else(|| literal(&mut scanner, brackets == 0 && !is_value));

		let Some(token) = token else {
			return Err(scanner.error("Unexpected character"));
		};

		if let CssTokenKind::Bracket { open } = token.kind {
			if brackets == 0 && open {
				merge_tokens(&scanner, &mut result);
			}

			brackets += if open { 1 } else { -1 };
			if brackets < 0 {
				return Err(scanner.error_at("Unexpected bracket", token.start.unwrap_or(0)));
			}
		}

		let consume_operator = should_consume_dash_after(&token);
		result.push(token);

		// Forcibly consume next operator after a unit-less numeric value or
		// a color: the next dash must be a value delimiter, not a sign
		if consume_operator {
			if let Some(token) = operator(&mut scanner) {
				result.push(token);
			}
		}
	}

	Ok(result)
}

fn field(scanner: &mut Scanner) -> Result<Option<CssToken>, ScannerError> {
	let start = scanner.pos;
	if scanner.eat('$') && scanner.eat('{') {
		scanner.start = scanner.pos;
		let mut index = None;
		let mut name = String::new();

		if scanner.eat_while(is_number) {
			// It’s a field
			index = scanner.current().parse().ok();
			if scanner.eat(':') {
				name = consume_placeholder(scanner)?;
			}
		} else if scanner.peek().is_some_and(is_alpha) {
			// It’s a variable
			name = consume_placeholder(scanner)?;
		}

		if scanner.eat('}') {
			return Ok(Some(CssToken::new(
				CssTokenKind::Field { index, name },
				start,
				scanner.pos,
			)));
		}

		return Err(scanner.error("Expecting }"));
	}

	// No valid field here, revert back to starting position
	scanner.pos = start;
	Ok(None)
}

/// Consumes a placeholder: the value right after `:` in a field.
fn consume_placeholder(scanner: &mut Scanner) -> Result<String, ScannerError> {
	let mut stack = Vec::new();
	scanner.start = scanner.pos;

	while !scanner.eof() {
		if scanner.eat('{') {
			stack.push(scanner.pos);
		} else if scanner.eat('}') {
			if stack.is_empty() {
				scanner.pos -= 1;
				break;
			}
			stack.pop();
		} else {
			scanner.next();
		}
	}

	if let Some(pos) = stack.pop() {
		scanner.pos = pos;
		return Err(scanner.error("Expecting }"));
	}

	Ok(scanner.current().to_string())
}

/// Consumes a literal from given scanner.
///
/// In the "short" notation only alpha characters are consumed, which is how
/// keywords are extracted from an abbreviation like `dib`; the "full"
/// notation also takes numbers and dashes.
fn literal(scanner: &mut Scanner, short: bool) -> Option<CssToken> {
	let start = scanner.pos;

	if scanner.eat(is_ident_prefix) {
		// SCSS or LESS variable. When the abbreviation itself starts with an
		// identifier prefix, consume alpha characters only to allow embedded
		// variables
		if start != 0 {
			scanner.eat_while(is_keyword);
		} else {
			scanner.eat_while(is_literal_char);
		}
	} else if scanner.eat(is_alpha_word) {
		if short {
			scanner.eat_while(is_literal_char);
		} else {
			scanner.eat_while(is_keyword);
		}
	} else {
		// Allow dots only at the beginning of a literal
		scanner.eat('.');
		scanner.eat_while(is_literal_char);
	}

	if start != scanner.pos {
		scanner.start = start;
		Some(create_literal(scanner, start, scanner.pos))
	} else {
		None
	}
}

fn create_literal(scanner: &Scanner, start: usize, end: usize) -> CssToken {
	CssToken::new(
		CssTokenKind::Literal(scanner.substring(start, end).to_string()),
		start,
		end,
	)
}

/// Consumes a numeric CSS value with an optional unit.
fn number_value(scanner: &mut Scanner) -> Option<CssToken> {
	let start = scanner.pos;
	if consume_number(scanner) {
		scanner.start = start;
		let raw = scanner.current().to_string();
		let value = raw.parse().unwrap_or(0.0);

		// Eat unit, which can be a % or an alpha word
		scanner.start = scanner.pos;
		if !scanner.eat('%') {
			scanner.eat_while(is_alpha_word);
		}
		let unit = scanner.current().to_string();

		Some(CssToken::new(
			CssTokenKind::Number { value, raw, unit },
			start,
			scanner.pos,
		))
	} else {
		None
	}
}

/// Consumes a quoted string value. Malformed strings are consumed up to the
/// end of input without an error.
fn string_value(scanner: &mut Scanner) -> Option<CssToken> {
	let ch = scanner.peek()?;
	let start = scanner.pos;
	let mut finished = false;

	if is_quote(ch) {
		scanner.next();
		while !scanner.eof() {
			if scanner.eat(ch) {
				finished = true;
				break;
			}
			scanner.next();
		}

		scanner.start = start;
		let value_start = start + 1;
		let value_end = scanner.pos - usize::from(finished);
		Some(CssToken::new(
			CssTokenKind::Str {
				value: scanner.substring(value_start, value_end).to_string(),
				quote: if ch == '\'' {
					QuoteKind::Single
				} else {
					QuoteKind::Double
				},
			},
			start,
			scanner.pos,
		))
	} else {
		None
	}
}

/// Consumes a color token from given scanner.
///
/// Supported variations: `#abc` → `#aabbcc`, `#0` → `#000000`,
/// `#fff.5` → `rgba(255, 255, 255, 0.5)`, `#t` → `transparent`.
fn color_value(scanner: &mut Scanner) -> Option<CssToken> {
	let start = scanner.pos;
	if scanner.eat('#') {
		let value_start = scanner.pos;
		let mut color = String::new();
		let mut alpha = String::new();

		if scanner.eat_while(is_hex) {
			color = scanner.substring(value_start, scanner.pos).to_string();
			alpha = color_alpha(scanner);
		} else if scanner.eat('t') {
			color = "0".to_string();
			alpha = color_alpha(scanner);
			if alpha.is_empty() {
				alpha = "0".to_string();
			}
		} else {
			alpha = color_alpha(scanner);
		}

		if !color.is_empty() || !alpha.is_empty() || scanner.eof() {
			let (r, g, b, a) = parse_color(&color, &alpha);
			Some(CssToken::new(
				CssTokenKind::Color {
					r,
					g,
					b,
					a,
					raw: scanner.substring(start + 1, scanner.pos).to_string(),
				},
				start,
				scanner.pos,
			))
		} else {
			// Consumed `#` but no actual value: not a color, treat as literal
			Some(create_literal(scanner, start, scanner.pos))
		}
	} else {
		None
	}
}

/// Consumes the alpha value of a color: `.1`.
fn color_alpha(scanner: &mut Scanner) -> String {
	let start = scanner.pos;
	if scanner.eat('.') {
		scanner.start = start;
		if scanner.eat_while(is_number) {
			return scanner.current().to_string();
		}
		return "1".to_string();
	}

	String::new()
}

fn white_space(scanner: &mut Scanner) -> Option<CssToken> {
	let start = scanner.pos;
	if scanner.eat_while(is_space) {
		Some(CssToken::new(CssTokenKind::WhiteSpace, start, scanner.pos))
	} else {
		None
	}
}

fn bracket(scanner: &mut Scanner) -> Option<CssToken> {
	let ch = scanner.peek()?;
	if ch == '(' || ch == ')' {
		let start = scanner.pos;
		scanner.next();
		Some(CssToken::new(
			CssTokenKind::Bracket { open: ch == '(' },
			start,
			scanner.pos,
		))
	} else {
		None
	}
}

fn operator(scanner: &mut Scanner) -> Option<CssToken> {
	let op = match scanner.peek()? {
		'+' => OperatorType::Sibling,
		'!' => OperatorType::Important,
		',' => OperatorType::ArgumentDelimiter,
		':' => OperatorType::PropertyDelimiter,
		'-' => OperatorType::ValueDelimiter,
		_ => return None,
	};

	let start = scanner.pos;
	scanner.next();
	Some(CssToken::new(
		CssTokenKind::Operator(op),
		start,
		scanner.pos,
	))
}

/// Eats a number from given stream: optional minus sign, integer part,
/// optional fraction. A lone `.5` is valid, a lone `-` or `.` is not.
fn consume_number(scanner: &mut Scanner) -> bool {
	let start = scanner.pos;
	scanner.eat('-');
	let after_negative = scanner.pos;

	let has_decimal = scanner.eat_while(is_number);

	let prev_pos = scanner.pos;
	if scanner.eat('.') {
		// It’s perfectly valid to have numbers like `1.`, which enforces
		// the float unit type
		let has_float = scanner.eat_while(is_number);
		if !has_decimal && !has_float {
			// Lone dot
			scanner.pos = prev_pos;
		}
	}

	// Consumed dash only: not a number, bail out
	if scanner.pos == after_negative {
		scanner.pos = start;
	}

	scanner.pos != start
}

fn is_ident_prefix(ch: char) -> bool {
	ch == '@' || ch == '$'
}

fn is_hex(ch: char) -> bool {
	ch.is_ascii_hexdigit()
}

fn is_keyword(ch: char) -> bool {
	is_alpha_numeric_word(ch) || ch == '-'
}

fn is_literal_char(ch: char) -> bool {
	is_alpha_word(ch) || ch == '%'
}

fn parse_color(value: &str, alpha: &str) -> (u8, u8, u8, f64) {
	let mut a = 1.0;
	if !alpha.is_empty() {
		a = alpha.parse().unwrap_or(1.0);
	}

	let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

	match value.len() {
		0 => (0, 0, 0, a),
		1 => {
			let c = channel(&value.repeat(2));
			(c, c, c, a)
		}
		2 => {
			let c = channel(value);
			(c, c, c, a)
		}
		3 => {
			let bytes: Vec<String> = value.chars().map(|ch| ch.to_string().repeat(2)).collect();
			(channel(&bytes[0]), channel(&bytes[1]), channel(&bytes[2]), a)
		}
		_ => {
			let value = format!("{value:0>6}");
			(
				channel(&value[0..2]),
				channel(&value[2..4]),
				channel(&value[4..6]),
				a,
			)
		}
	}
}

/// Check if the scanner must force-consume an operator after given token, so
/// the next `-` separates values instead of starting a negative number.
fn should_consume_dash_after(token: &CssToken) -> bool {
	match &token.kind {
		CssTokenKind::Color { .. } => true,
		CssTokenKind::Number { unit, .. } => unit.is_empty(),
		_ => false,
	}
}

/// Merges trailing literal and number tokens into a single literal.
///
/// Recovers function names like `scale3d` which tokenize as a literal
/// followed by a number.
fn merge_tokens(scanner: &Scanner, tokens: &mut Vec<CssToken>) {
	let mut start = 0;
	let mut end = 0;

	while let Some(token) = tokens.last() {
		match token.kind {
			CssTokenKind::Literal(_) | CssTokenKind::Number { .. } => {
				start = token.start.unwrap_or(0);
				if end == 0 {
					end = token.end.unwrap_or(0);
				}
				tokens.pop();
			}
			_ => break,
		}
	}

	if start != end {
		tokens.push(create_literal(scanner, start, end));
	}
}

#[cfg(test)]
mod tests {
	use super::tokens::{CssTokenKind, OperatorType, QuoteKind};
	use super::tokenize;

	fn kinds(abbr: &str) -> Vec<CssTokenKind> {
		tokenize(abbr, false)
			.unwrap()
			.into_iter()
			.map(|token| token.kind)
			.collect()
	}

	#[test]
	fn test_numeric_values() {
		assert_eq!(
			kinds("p10"),
			vec![
				CssTokenKind::Literal("p".into()),
				CssTokenKind::Number {
					value: 10.0,
					raw: "10".into(),
					unit: String::new(),
				},
			]
		);

		assert_eq!(
			kinds("m1.5e"),
			vec![
				CssTokenKind::Literal("m".into()),
				CssTokenKind::Number {
					value: 1.5,
					raw: "1.5".into(),
					unit: "e".into(),
				},
			]
		);

		// Lone `.5` is a valid number
		assert_eq!(
			kinds("o.5"),
			vec![
				CssTokenKind::Literal("o".into()),
				CssTokenKind::Number {
					value: 0.5,
					raw: ".5".into(),
					unit: String::new(),
				},
			]
		);
	}

	#[test]
	fn test_dash_after_unitless_number() {
		// After a unit-less number, `-` is a delimiter, not a sign
		assert_eq!(
			kinds("p10-20"),
			vec![
				CssTokenKind::Literal("p".into()),
				CssTokenKind::Number {
					value: 10.0,
					raw: "10".into(),
					unit: String::new(),
				},
				CssTokenKind::Operator(OperatorType::ValueDelimiter),
				CssTokenKind::Number {
					value: 20.0,
					raw: "20".into(),
					unit: String::new(),
				},
			]
		);

		// With a unit the dash starts a negative number
		assert_eq!(
			kinds("m10px-20"),
			vec![
				CssTokenKind::Literal("m".into()),
				CssTokenKind::Number {
					value: 10.0,
					raw: "10".into(),
					unit: "px".into(),
				},
				CssTokenKind::Number {
					value: -20.0,
					raw: "-20".into(),
					unit: String::new(),
				},
			]
		);
	}

	#[test]
	fn test_colors() {
		let tokens = kinds("c#fc0");
		assert_eq!(
			tokens[1],
			CssTokenKind::Color {
				r: 255,
				g: 204,
				b: 0,
				a: 1.0,
				raw: "fc0".into(),
			}
		);

		let tokens = kinds("c#f.5");
		assert_eq!(
			tokens[1],
			CssTokenKind::Color {
				r: 255,
				g: 255,
				b: 255,
				a: 0.5,
				raw: "f.5".into(),
			}
		);

		let tokens = kinds("bg#t");
		assert_eq!(
			tokens[1],
			CssTokenKind::Color {
				r: 0,
				g: 0,
				b: 0,
				a: 0.0,
				raw: "t".into(),
			}
		);
	}

	#[test]
	fn test_string_values() {
		assert_eq!(
			kinds("cont'foo'"),
			vec![
				CssTokenKind::Literal("cont".into()),
				CssTokenKind::Str {
					value: "foo".into(),
					quote: QuoteKind::Single,
				},
			]
		);
	}

	#[test]
	fn test_function_name_merge() {
		// `scale3d(` first tokenizes as literal + number, merged back on `(`
		let tokens = kinds("scale3d(1,2,3)");
		assert_eq!(tokens[0], CssTokenKind::Literal("scale3d".into()));
		assert_eq!(tokens[1], CssTokenKind::Bracket { open: true });
	}

	#[test]
	fn test_unbalanced_bracket() {
		assert!(tokenize("p)", false).is_err());
	}
}

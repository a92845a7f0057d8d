//! Context-sensitive tokenizer for markup abbreviations.
//!
//! Tokenization tracks a counter tuple of open groups, attribute sets,
//! expressions and the active quote: the same character may be an operator
//! at the top level and plain text inside `{…}` or a quoted region.

pub mod tokens;

use emmet_scanner::utils::{is_alpha, is_alpha_numeric_word, is_number, is_quote, is_space};
use emmet_scanner::{Scanner, ScannerError};

use tokens::{BracketType, OperatorType, Repeater, Token, TokenKind};

#[derive(Default)]
struct Context {
	group: i32,
	attribute: i32,
	expression: i32,
	quote: Option<char>,
}

/// Splits given abbreviation into a token list.
pub fn tokenize(source: &str) -> Result<Vec<Token>, ScannerError> {
	let mut scanner = Scanner::new(source);
	let mut result = Vec::new();
	let mut ctx = Context::default();

	while !scanner.eof() {
		let ch = scanner.peek().unwrap_or_default();
		let token = field(&mut scanner, &ctx)?
			.or_else(|| repeater_placeholder(&mut scanner))
			.or_else(|| repeater_number(&mut scanner))
			.or_else(|| repeater(&mut scanner))
			.or_else(|| white_space(&mut scanner))
			.or_else(|| literal(&mut scanner, &ctx))
			.or_else(|| operator(&mut scanner))
			.or_else(|| quote(&mut scanner))
			.or_else(|| bracket(&mut scanner));

		match token {
			Some(token) => {
				match &token.kind {
					TokenKind::Quote(_) => {
						ctx.quote = if Some(ch) == ctx.quote { None } else { Some(ch) };
					}
					TokenKind::Bracket { open, context } => {
						let delta = if *open { 1 } else { -1 };
						match context {
							BracketType::Group => ctx.group += delta,
							BracketType::Attribute => ctx.attribute += delta,
							BracketType::Expression => ctx.expression += delta,
						}
					}
					_ => {}
				}
				result.push(token);
			}
			None => return Err(scanner.error("Unexpected character")),
		}
	}

	Ok(result)
}

/// Consumes an escaped character: `\x` produces a literal `x`.
fn escaped(scanner: &mut Scanner) -> bool {
	if scanner.eat('\\') {
		scanner.start = scanner.pos;
		if !scanner.eof() {
			scanner.next();
		}
		return true;
	}

	false
}

fn literal(scanner: &mut Scanner, ctx: &Context) -> Option<Token> {
	let start = scanner.pos;
	let mut value = String::new();
	let mut expression = ctx.expression;

	while !scanner.eof() {
		if escaped(scanner) {
			value.push_str(scanner.current());
			continue;
		}

		let ch = scanner.peek().unwrap_or_default();

		if ch == '/' && ctx.quote.is_none() && expression == 0 && ctx.attribute == 0 {
			// Special case for `/` character between numbers in class names
			let bytes = scanner.source().as_bytes();
			let prev_digit = scanner.pos > 0 && bytes[scanner.pos - 1].is_ascii_digit();
			let next_digit = scanner.pos + 1 < scanner.end && bytes[scanner.pos + 1].is_ascii_digit();
			if prev_digit && next_digit {
				value.push(scanner.next().unwrap_or_default());
				continue;
			}
		}

		if Some(ch) == ctx.quote || ch == '$' || is_allowed_operator(ch, ctx) {
			// 1. Found matching quote
			// 2. The `$` character has special meaning in every context
			// 3. Depending on context, some characters should be treated as operators
			break;
		}

		if expression > 0 {
			if ch == '{' {
				// Nested curly braces inside expressions, e.g. `span{{foo}}`
				expression += 1;
			} else if ch == '}' {
				if expression == 1 {
					break;
				}
				expression -= 1;
			}
		}

		if ctx.quote.is_none() && expression == 0 {
			// Consuming element name
			if ctx.attribute == 0 && !is_element_name(ch) {
				break;
			}

			if is_allowed_space(ch, ctx)
				|| is_allowed_repeater(ch, ctx)
				|| is_quote(ch)
				|| bracket_type(ch).is_some()
			{
				// Stop for characters not allowed in unquoted literal
				break;
			}
		}

		value.push(scanner.next().unwrap_or_default());
	}

	if start != scanner.pos {
		scanner.start = start;
		Some(Token::new(TokenKind::Literal(value), start, scanner.pos))
	} else {
		None
	}
}

fn white_space(scanner: &mut Scanner) -> Option<Token> {
	let start = scanner.pos;
	if scanner.eat_while(is_space) {
		Some(Token::new(TokenKind::WhiteSpace, start, scanner.pos))
	} else {
		None
	}
}

fn quote(scanner: &mut Scanner) -> Option<Token> {
	let ch = scanner.peek()?;
	if is_quote(ch) {
		let start = scanner.pos;
		scanner.next();
		Some(Token::new(TokenKind::Quote(ch == '\''), start, scanner.pos))
	} else {
		None
	}
}

fn bracket(scanner: &mut Scanner) -> Option<Token> {
	let ch = scanner.peek()?;
	let context = bracket_type(ch)?;
	let start = scanner.pos;
	scanner.next();
	Some(Token::new(
		TokenKind::Bracket {
			open: is_open_bracket(ch),
			context,
		},
		start,
		scanner.pos,
	))
}

fn operator(scanner: &mut Scanner) -> Option<Token> {
	let op = operator_type(scanner.peek()?)?;
	let start = scanner.pos;
	scanner.next();
	Some(Token::new(TokenKind::Operator(op), start, scanner.pos))
}

/// Consumes a node repeat token: `*3` or a bare `*`.
fn repeater(scanner: &mut Scanner) -> Option<Token> {
	let start = scanner.pos;
	if scanner.eat('*') {
		scanner.start = scanner.pos;
		let mut count = 1;
		let mut implicit = false;

		if scanner.eat_while(is_number) {
			count = scanner.current().parse().unwrap_or(1);
		} else {
			implicit = true;
		}

		Some(Token::new(
			TokenKind::Repeater(Repeater {
				count,
				value: 0,
				implicit,
			}),
			start,
			scanner.pos,
		))
	} else {
		None
	}
}

/// Consumes the repeater placeholder `$#`.
fn repeater_placeholder(scanner: &mut Scanner) -> Option<Token> {
	let start = scanner.pos;
	if scanner.eat('$') && scanner.eat('#') {
		Some(Token::new(TokenKind::RepeaterPlaceholder, start, scanner.pos))
	} else {
		scanner.pos = start;
		None
	}
}

/// Consumes a numbering token like `$` or `$$@-3`.
fn repeater_number(scanner: &mut Scanner) -> Option<Token> {
	let start = scanner.pos;
	if scanner.eat_while('$') {
		let size = scanner.pos - start;
		let mut reverse = false;
		let mut base = 1;
		let mut parent = 0;

		if scanner.eat('@') {
			// Consume numbering modifiers
			while scanner.eat('^') {
				parent += 1;
			}

			reverse = scanner.eat('-');
			scanner.start = scanner.pos;
			if scanner.eat_while(is_number) {
				base = scanner.current().parse().unwrap_or(1);
			}
		}

		scanner.start = start;
		Some(Token::new(
			TokenKind::RepeaterNumber {
				size,
				reverse,
				base,
				parent,
			},
			start,
			scanner.pos,
		))
	} else {
		None
	}
}

fn field(scanner: &mut Scanner, ctx: &Context) -> Result<Option<Token>, ScannerError> {
	let start = scanner.pos;

	// Fields are allowed inside expressions and attributes
	if (ctx.expression > 0 || ctx.attribute > 0) && scanner.eat('$') && scanner.eat('{') {
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
			return Ok(Some(Token::new(
				TokenKind::Field { name, index },
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

/// Consumes a placeholder: the value right after `:` in a field. Could be
/// empty.
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

/// Check if given character is an operator and it’s allowed in the current
/// context.
fn is_allowed_operator(ch: char, ctx: &Context) -> bool {
	let Some(op) = operator_type(ch) else {
		return false;
	};

	if ctx.quote.is_some() || ctx.expression > 0 {
		// No operators inside quoted values or expressions
		return false;
	}

	// Inside attributes, only `equals` is allowed
	ctx.attribute == 0 || op == OperatorType::Equal
}

fn is_allowed_space(ch: char, ctx: &Context) -> bool {
	is_space(ch) && ctx.expression == 0
}

fn is_allowed_repeater(ch: char, ctx: &Context) -> bool {
	ch == '*' && ctx.attribute == 0 && ctx.expression == 0
}

fn bracket_type(ch: char) -> Option<BracketType> {
	match ch {
		'(' | ')' => Some(BracketType::Group),
		'[' | ']' => Some(BracketType::Attribute),
		'{' | '}' => Some(BracketType::Expression),
		_ => None,
	}
}

fn operator_type(ch: char) -> Option<OperatorType> {
	match ch {
		'>' => Some(OperatorType::Child),
		'+' => Some(OperatorType::Sibling),
		'^' => Some(OperatorType::Climb),
		'.' => Some(OperatorType::Class),
		'#' => Some(OperatorType::Id),
		'/' => Some(OperatorType::Close),
		'=' => Some(OperatorType::Equal),
		_ => None,
	}
}

fn is_open_bracket(ch: char) -> bool {
	matches!(ch, '{' | '[' | '(')
}

/// Check if given character is allowed in an element name.
fn is_element_name(ch: char) -> bool {
	is_alpha_numeric_word(ch) || matches!(ch, '-' | ':' | '!')
}

#[cfg(test)]
mod tests {
	use super::tokens::{BracketType, OperatorType, Repeater, TokenKind};
	use super::tokenize;

	fn kinds(abbr: &str) -> Vec<TokenKind> {
		tokenize(abbr)
			.unwrap()
			.into_iter()
			.map(|token| token.kind)
			.collect()
	}

	#[test]
	fn test_basic_abbreviations() {
		assert_eq!(
			kinds("ul>li"),
			vec![
				TokenKind::Literal("ul".into()),
				TokenKind::Operator(OperatorType::Child),
				TokenKind::Literal("li".into()),
			]
		);

		assert_eq!(
			kinds("p.cls*2"),
			vec![
				TokenKind::Literal("p".into()),
				TokenKind::Operator(OperatorType::Class),
				TokenKind::Literal("cls".into()),
				TokenKind::Repeater(Repeater {
					count: 2,
					value: 0,
					implicit: false,
				}),
			]
		);
	}

	#[test]
	fn test_repeater_number() {
		assert_eq!(
			kinds("li.item$$@-3"),
			vec![
				TokenKind::Literal("li".into()),
				TokenKind::Operator(OperatorType::Class),
				TokenKind::Literal("item".into()),
				TokenKind::RepeaterNumber {
					size: 2,
					reverse: true,
					base: 3,
					parent: 0,
				},
			]
		);
	}

	#[test]
	fn test_fields_in_attributes() {
		assert_eq!(
			kinds("[a=${1:foo}]"),
			vec![
				TokenKind::Bracket {
					open: true,
					context: BracketType::Attribute,
				},
				TokenKind::Literal("a".into()),
				TokenKind::Operator(OperatorType::Equal),
				TokenKind::Field {
					name: "foo".into(),
					index: Some(1),
				},
				TokenKind::Bracket {
					open: false,
					context: BracketType::Attribute,
				},
			]
		);

		// `$` at top level is a repeater number, not a field
		assert_eq!(
			kinds("item$"),
			vec![
				TokenKind::Literal("item".into()),
				TokenKind::RepeaterNumber {
					size: 1,
					reverse: false,
					base: 1,
					parent: 0,
				},
			]
		);
	}

	#[test]
	fn test_nested_expression_braces() {
		assert_eq!(
			kinds("span{{foo}}"),
			vec![
				TokenKind::Literal("span".into()),
				TokenKind::Bracket {
					open: true,
					context: BracketType::Expression,
				},
				TokenKind::Literal("{foo}".into()),
				TokenKind::Bracket {
					open: false,
					context: BracketType::Expression,
				},
			]
		);
	}

	#[test]
	fn test_escapes_and_digit_slash() {
		// `/` between digits stays inside the literal
		assert_eq!(
			kinds(".w1/2"),
			vec![
				TokenKind::Operator(OperatorType::Class),
				TokenKind::Literal("w1/2".into()),
			]
		);

		assert_eq!(kinds(r"a\>b"), vec![TokenKind::Literal("a>b".into())]);
	}

	#[test]
	fn test_source_ranges_cover_input() {
		let abbr = "ul>li.item$*3[title=\"x\"]";
		let tokens = tokenize(abbr).unwrap();
		let mut pos = 0;
		for token in &tokens {
			assert_eq!(token.start, Some(pos));
			pos = token.end.unwrap();
		}
		assert_eq!(pos, abbr.len());
	}
}

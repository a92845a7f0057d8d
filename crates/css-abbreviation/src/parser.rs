//! Parser producing a list of property/value structures from stylesheet
//! tokens.

use emmet_scanner::{TokenScanner, TokenScannerError};

use crate::tokenizer::tokens::{CssToken, CssTokenKind, CssValue, OperatorType};

/// Parsed CSS property with an ordered value list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CssProperty {
	pub name: Option<String>,
	pub value: Vec<CssValue>,
	pub important: bool,
}

type Result<T> = std::result::Result<T, TokenScannerError>;

/// Parses given token list into a sibling-separated property list.
pub fn parse(tokens: Vec<CssToken>, value_mode: bool) -> Result<Vec<CssProperty>> {
	let mut scanner = TokenScanner::new(tokens);
	let mut result = Vec::new();

	while scanner.readable() {
		if let Some(prop) = consume_property(&mut scanner, value_mode)? {
			result.push(prop);
		} else if !scanner.consume(|t| t.is_operator(OperatorType::Sibling)) {
			return Err(scanner.error("Unexpected token"));
		}
	}

	Ok(result)
}

/// Consumes a single CSS property.
fn consume_property(
	scanner: &mut TokenScanner<CssToken>,
	value_mode: bool,
) -> Result<Option<CssProperty>> {
	let mut name = None;
	let mut important = false;
	let mut value = Vec::new();

	if !value_mode
		&& scanner.peek().is_some_and(CssToken::is_literal)
		&& !is_function_start(scanner)
	{
		let token = scanner.next().expect("peeked above");
		name = token.as_literal().map(str::to_string);
		// Consume any following value delimiter after the property name
		scanner.consume(is_value_delimiter);
	}

	// Skip whitespace right after the property name, if any
	if value_mode {
		scanner.consume(CssToken::is_white_space);
	}

	while scanner.readable() {
		if scanner.consume(|t| t.is_operator(OperatorType::Important)) {
			important = true;
		} else if let Some(fragment) = consume_value(scanner, value_mode)? {
			value.push(fragment);
		} else if !scanner.consume(is_fragment_delimiter) {
			break;
		}
	}

	if name.is_some() || !value.is_empty() || important {
		Ok(Some(CssProperty {
			name,
			value,
			important,
		}))
	} else {
		Ok(None)
	}
}

/// Consumes a single value fragment: all value tokens before a comma.
fn consume_value(
	scanner: &mut TokenScanner<CssToken>,
	in_argument: bool,
) -> Result<Option<CssValue>> {
	let mut result = Vec::new();

	while scanner.readable() {
		let Some(token) = scanner.peek() else {
			break;
		};

		if token.is_value() {
			let token = token.clone();
			scanner.pos += 1;

			let args = if token.is_literal() {
				consume_arguments(scanner)?
			} else {
				None
			};

			match args {
				Some(arguments) => result.push(CssToken::synthetic(CssTokenKind::FunctionCall {
					name: token.as_literal().unwrap_or_default().to_string(),
					arguments,
				})),
				None => result.push(token),
			}
		} else if is_value_delimiter(token) || (in_argument && token.is_white_space()) {
			scanner.pos += 1;
		} else {
			break;
		}
	}

	Ok(if result.is_empty() {
		None
	} else {
		Some(CssValue::new(result))
	})
}

fn consume_arguments(scanner: &mut TokenScanner<CssToken>) -> Result<Option<Vec<CssValue>>> {
	if !scanner.consume(|t| t.is_bracket(Some(true))) {
		return Ok(None);
	}

	let mut args = Vec::new();

	while scanner.readable() && !scanner.consume(|t| t.is_bracket(Some(false))) {
		if let Some(value) = consume_value(scanner, true)? {
			args.push(value);
		} else if !scanner.consume(CssToken::is_white_space)
			&& !scanner.consume(|t| t.is_operator(OperatorType::ArgumentDelimiter))
		{
			return Err(scanner.error("Unexpected token"));
		}
	}

	Ok(Some(args))
}

fn is_value_delimiter(token: &CssToken) -> bool {
	token.is_operator(OperatorType::PropertyDelimiter)
		|| token.is_operator(OperatorType::ValueDelimiter)
}

fn is_fragment_delimiter(token: &CssToken) -> bool {
	token.is_operator(OperatorType::ArgumentDelimiter)
}

/// Check if the scanner is at a function call: a literal directly followed
/// by an opening bracket.
fn is_function_start(scanner: &TokenScanner<CssToken>) -> bool {
	if scanner.pos + 1 < scanner.tokens.len() {
		let t1 = &scanner.tokens[scanner.pos];
		let t2 = &scanner.tokens[scanner.pos + 1];
		t1.is_literal() && matches!(t2.kind, CssTokenKind::Bracket { .. })
	} else {
		false
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenizer::tokenize;

	fn parsed(abbr: &str) -> Vec<CssProperty> {
		parse(tokenize(abbr, false).unwrap(), false).unwrap()
	}

	#[test]
	fn test_property_with_values() {
		let props = parsed("p10-20");
		assert_eq!(props.len(), 1);
		assert_eq!(props[0].name.as_deref(), Some("p"));
		assert_eq!(props[0].value.len(), 1);
		assert_eq!(props[0].value[0].value.len(), 2);
	}

	#[test]
	fn test_siblings() {
		let props = parsed("p10+m20");
		assert_eq!(props.len(), 2);
		assert_eq!(props[0].name.as_deref(), Some("p"));
		assert_eq!(props[1].name.as_deref(), Some("m"));
	}

	#[test]
	fn test_important() {
		let props = parsed("p!");
		assert_eq!(props[0].name.as_deref(), Some("p"));
		assert!(props[0].important);
	}

	#[test]
	fn test_function_call() {
		let props = parsed("lg(to right, #0, #f00.5)");
		assert_eq!(props.len(), 1);
		assert!(props[0].name.is_none());

		let value = &props[0].value[0].value[0];
		let CssTokenKind::FunctionCall { name, arguments } = &value.kind else {
			panic!("expected function call");
		};
		assert_eq!(name, "lg");
		assert_eq!(arguments.len(), 3);
	}

	#[test]
	fn test_value_fragments() {
		// Comma separates value fragments
		let props = parsed("tt:u,l");
		assert_eq!(props[0].name.as_deref(), Some("tt"));
		assert_eq!(props[0].value.len(), 2);
	}
}

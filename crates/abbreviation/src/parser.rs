//! Recursive descent parser producing a token tree of groups, elements and
//! attributes.
//!
//! ```text
//! statements := (element | group) ((">" | "+" | "^"+) statements)*
//! group      := "(" statements ")" repeater?
//! element    := name? (repeater | text | attributes | "/")*
//! ```
//!
//! Climb operators pop the context stack one level per `^`; a child operator
//! descends into the just-parsed node.

use emmet_scanner::{TokenScanner, TokenScannerError};

use crate::tokenizer::tokens::{BracketType, OperatorType, Repeater, Token, TokenKind};

/// Attribute parsed from shorthand (`.cls`, `#id`) or an attribute set.
#[derive(Debug, Clone, Default)]
pub struct TokenAttribute {
	pub name: Option<Vec<Token>>,
	pub value: Option<Vec<Token>>,
	/// Value was a JSX expression right after `.` or `#`.
	pub expression: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TokenElement {
	pub name: Option<Vec<Token>>,
	pub attributes: Option<Vec<TokenAttribute>>,
	pub value: Option<Vec<Token>>,
	pub repeat: Option<Repeater>,
	pub self_close: bool,
	pub elements: Vec<TokenStatement>,
}

impl TokenElement {
	fn is_empty(&self) -> bool {
		self.name.is_none() && self.value.is_none() && self.attributes.is_none()
	}
}

#[derive(Debug, Clone, Default)]
pub struct TokenGroup {
	pub elements: Vec<TokenStatement>,
	pub repeat: Option<Repeater>,
}

#[derive(Debug, Clone)]
pub enum TokenStatement {
	Element(TokenElement),
	Group(TokenGroup),
}

impl TokenStatement {
	fn elements_mut(&mut self) -> &mut Vec<TokenStatement> {
		match self {
			TokenStatement::Element(elem) => &mut elem.elements,
			TokenStatement::Group(group) => &mut group.elements,
		}
	}
}

type Result<T> = std::result::Result<T, TokenScannerError>;

/// Parses given token list into a statement tree.
pub fn parse(tokens: Vec<Token>, jsx: bool) -> Result<TokenGroup> {
	let mut scanner = TokenScanner::new(tokens);
	let result = statements(&mut scanner, jsx)?;
	if scanner.readable() {
		return Err(scanner.error("Unexpected character"));
	}

	Ok(result)
}

fn statements(scanner: &mut TokenScanner<Token>, jsx: bool) -> Result<TokenGroup> {
	let mut result = TokenGroup::default();
	// Context is addressed by an index path from the root so sibling nodes
	// can be appended at any depth while the tree is being built.
	let mut path: Vec<usize> = Vec::new();
	let mut stack: Vec<Vec<usize>> = Vec::new();

	while scanner.readable() {
		let node = match element(scanner, jsx)? {
			Some(elem) => Some(TokenStatement::Element(elem)),
			None => group(scanner, jsx)?.map(TokenStatement::Group),
		};

		let Some(node) = node else {
			break;
		};

		let elements = elements_at(&mut result, &path);
		elements.push(node);
		let index = elements.len() - 1;

		if scanner.consume(|t| t.is_operator(OperatorType::Child)) {
			stack.push(path.clone());
			path.push(index);
		} else if scanner.consume(|t| t.is_operator(OperatorType::Sibling)) {
			continue;
		} else {
			while scanner.consume(|t| t.is_operator(OperatorType::Climb)) {
				if let Some(prev) = stack.pop() {
					path = prev;
				}
			}
		}
	}

	Ok(result)
}

fn elements_at<'a>(root: &'a mut TokenGroup, path: &[usize]) -> &'a mut Vec<TokenStatement> {
	let mut elements = &mut root.elements;
	for &index in path {
		elements = elements[index].elements_mut();
	}
	elements
}

/// Consumes a parenthesized group from given scanner.
fn group(scanner: &mut TokenScanner<Token>, jsx: bool) -> Result<Option<TokenGroup>> {
	if scanner.consume(|t| t.is_bracket(BracketType::Group, Some(true))) {
		let mut result = statements(scanner, jsx)?;
		let closed = scanner
			.next()
			.is_some_and(|t| t.is_bracket(BracketType::Group, Some(false)));
		if closed {
			result.repeat = repeater(scanner);
		}
		return Ok(Some(result));
	}

	Ok(None)
}

/// Consumes a single element from given scanner.
fn element(scanner: &mut TokenScanner<Token>, jsx: bool) -> Result<Option<TokenElement>> {
	let mut elem = TokenElement::default();

	if element_name(scanner, jsx) {
		elem.name = Some(scanner.slice().to_vec());
	}

	while scanner.readable() {
		scanner.start = scanner.pos;
		if elem.repeat.is_none() && !elem.is_empty() && scanner.consume(Token::is_repeater) {
			elem.repeat = repeat_of(&scanner.tokens[scanner.pos - 1]);
		} else if elem.value.is_none() && text(scanner) {
			elem.value = Some(get_text(scanner));
		} else if let Some(attrs) = attributes(scanner, jsx)? {
			match &mut elem.attributes {
				Some(existing) => existing.extend(attrs),
				None => elem.attributes = Some(attrs),
			}
		} else {
			if !elem.is_empty() && scanner.consume(|t| t.is_operator(OperatorType::Close)) {
				elem.self_close = true;
				if elem.repeat.is_none() && scanner.consume(Token::is_repeater) {
					elem.repeat = repeat_of(&scanner.tokens[scanner.pos - 1]);
				}
			}
			break;
		}
	}

	Ok(if elem.is_empty() { None } else { Some(elem) })
}

/// Consumes the next attribute shorthand or attribute set, if any.
fn attributes(scanner: &mut TokenScanner<Token>, jsx: bool) -> Result<Option<Vec<TokenAttribute>>> {
	if let Some(attr) = short_attribute(scanner, "id", OperatorType::Id, jsx)? {
		return Ok(Some(vec![attr]));
	}
	if let Some(attr) = short_attribute(scanner, "class", OperatorType::Class, jsx)? {
		return Ok(Some(vec![attr]));
	}
	attribute_set(scanner)
}

/// Consumes an `[attr …]` set from given scanner.
fn attribute_set(scanner: &mut TokenScanner<Token>) -> Result<Option<Vec<TokenAttribute>>> {
	if !scanner.consume(|t| t.is_bracket(BracketType::Attribute, Some(true))) {
		return Ok(None);
	}

	let mut attributes = Vec::new();

	while scanner.readable() {
		if let Some(attr) = attribute(scanner)? {
			attributes.push(attr);
		} else if scanner.consume(|t| t.is_bracket(BracketType::Attribute, Some(false))) {
			break;
		} else if !scanner.consume(Token::is_white_space) {
			return Err(scanner.error("Unexpected token in attribute set"));
		}
	}

	Ok(Some(attributes))
}

/// Consumes an attribute shorthand (class or id) from given scanner.
fn short_attribute(
	scanner: &mut TokenScanner<Token>,
	name: &str,
	op: OperatorType,
	jsx: bool,
) -> Result<Option<TokenAttribute>> {
	if !scanner.peek().is_some_and(|t| t.is_operator(op)) {
		return Ok(None);
	}
	scanner.pos += 1;

	let mut attr = TokenAttribute {
		name: Some(vec![Token::synthetic(TokenKind::Literal(name.to_string()))]),
		..TokenAttribute::default()
	};

	// Consume expression after shorthand start for React-like components
	if jsx && text(scanner) {
		attr.value = Some(get_text(scanner));
		attr.expression = true;
	} else if literal(scanner, false) {
		attr.value = Some(scanner.slice().to_vec());
	}

	Ok(Some(attr))
}

fn attribute(scanner: &mut TokenScanner<Token>) -> Result<Option<TokenAttribute>> {
	if quoted(scanner)? {
		// Quoted value is a value for the default attribute
		return Ok(Some(TokenAttribute {
			value: Some(scanner.slice().to_vec()),
			..TokenAttribute::default()
		}));
	}

	if literal(scanner, true) {
		let name = Some(scanner.slice().to_vec());
		let mut value = None;
		if scanner.consume(|t| t.is_operator(OperatorType::Equal))
			&& (quoted(scanner)? || literal(scanner, true))
		{
			value = Some(scanner.slice().to_vec());
		}
		return Ok(Some(TokenAttribute {
			name,
			value,
			expression: false,
		}));
	}

	Ok(None)
}

fn repeater(scanner: &mut TokenScanner<Token>) -> Option<Repeater> {
	if scanner.peek().is_some_and(Token::is_repeater) {
		let repeat = repeat_of(&scanner.tokens[scanner.pos]);
		scanner.pos += 1;
		repeat
	} else {
		None
	}
}

fn repeat_of(token: &Token) -> Option<Repeater> {
	match token.kind {
		TokenKind::Repeater(repeat) => Some(repeat),
		_ => None,
	}
}

/// Consumes a quoted value from given scanner, if possible.
fn quoted(scanner: &mut TokenScanner<Token>) -> Result<bool> {
	let start = scanner.pos;
	let Some(TokenKind::Quote(single)) = scanner.peek().map(|t| t.kind.clone()) else {
		return Ok(false);
	};

	scanner.pos += 1;
	while scanner.readable() {
		let token = scanner.next();
		if matches!(token.map(|t| &t.kind), Some(TokenKind::Quote(s)) if *s == single) {
			scanner.start = start;
			return Ok(true);
		}
	}

	Err(scanner.error_at("Unclosed quote", scanner.tokens.get(start)))
}

/// Consumes a literal (unquoted value) from given scanner.
fn literal(scanner: &mut TokenScanner<Token>, allow_brackets: bool) -> bool {
	let start = scanner.pos;
	let mut group = 0;
	let mut attribute = 0;
	let mut expression = 0;

	while let Some(token) = scanner.peek() {
		if expression > 0 {
			// Inside an expression, consume everything up to its end
			if let TokenKind::Bracket {
				open,
				context: BracketType::Expression,
			} = token.kind
			{
				expression += if open { 1 } else { -1 };
			}
		} else if token.is_quote()
			|| matches!(token.kind, TokenKind::Operator(_))
			|| token.is_white_space()
			|| token.is_repeater()
		{
			break;
		} else if let TokenKind::Bracket { open, context } = token.kind {
			if !allow_brackets {
				break;
			}

			let counter = match context {
				BracketType::Group => &mut group,
				BracketType::Attribute => &mut attribute,
				BracketType::Expression => &mut expression,
			};

			if open {
				*counter += 1;
			} else if *counter == 0 {
				// Unmatched closing bracket must be handled by the parent
				// consumer
				break;
			} else {
				*counter -= 1;
			}
		}

		scanner.pos += 1;
	}

	if start != scanner.pos {
		scanner.start = start;
		true
	} else {
		false
	}
}

/// Consumes an element name from given scanner.
fn element_name(scanner: &mut TokenScanner<Token>, jsx: bool) -> bool {
	let start = scanner.pos;

	if jsx && scanner.consume(is_capitalized_literal) {
		// Edge case: consume immediate capitalized class names for
		// React-like components, e.g. `Foo.Bar.Baz`
		while scanner.readable() {
			let pos = scanner.pos;
			if !scanner.consume(|t| t.is_operator(OperatorType::Class))
				|| !scanner.consume(is_capitalized_literal)
			{
				scanner.pos = pos;
				break;
			}
		}
	}

	while scanner.consume(is_element_name_token) {}

	if scanner.pos != start {
		scanner.start = start;
		true
	} else {
		false
	}
}

/// Consumes a `{…}` text value from given scanner.
fn text(scanner: &mut TokenScanner<Token>) -> bool {
	let start = scanner.pos;
	if scanner.consume(|t| t.is_bracket(BracketType::Expression, Some(true))) {
		let mut brackets = 0;
		while scanner.readable() {
			let Some(token) = scanner.next() else {
				break;
			};
			if let TokenKind::Bracket {
				open,
				context: BracketType::Expression,
			} = token.kind
			{
				if open {
					brackets += 1;
				} else if brackets == 0 {
					break;
				} else {
					brackets -= 1;
				}
			}
		}

		scanner.start = start;
		return true;
	}

	false
}

/// Returns the consumed text run without its enclosing brackets.
fn get_text(scanner: &TokenScanner<Token>) -> Vec<Token> {
	let mut start = scanner.start;
	let mut end = scanner.pos;

	if scanner.tokens[start].is_bracket(BracketType::Expression, Some(true)) {
		start += 1;
	}
	if scanner.tokens[end - 1].is_bracket(BracketType::Expression, Some(false)) {
		end -= 1;
	}

	scanner.slice_range(start, end).to_vec()
}

fn is_capitalized_literal(token: &Token) -> bool {
	token
		.as_literal()
		.and_then(|value| value.chars().next())
		.is_some_and(|ch| ch.is_ascii_uppercase())
}

fn is_element_name_token(token: &Token) -> bool {
	token.is_literal()
		|| matches!(
			token.kind,
			TokenKind::RepeaterNumber { .. } | TokenKind::RepeaterPlaceholder
		)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tokenizer::tokenize;

	fn parsed(abbr: &str) -> TokenGroup {
		parse(tokenize(abbr).unwrap(), false).unwrap()
	}

	fn as_element(statement: &TokenStatement) -> &TokenElement {
		match statement {
			TokenStatement::Element(elem) => elem,
			TokenStatement::Group(_) => panic!("expected element"),
		}
	}

	#[test]
	fn test_nesting() {
		let group = parsed("ul>li+li^p");
		assert_eq!(group.elements.len(), 2);

		let ul = as_element(&group.elements[0]);
		assert_eq!(ul.elements.len(), 2);

		let p = as_element(&group.elements[1]);
		assert!(p.elements.is_empty());
	}

	#[test]
	fn test_group_repeat() {
		let group = parsed("(a>b)*3");
		let TokenStatement::Group(inner) = &group.elements[0] else {
			panic!("expected group");
		};
		assert_eq!(inner.repeat.map(|r| r.count), Some(3));
	}

	#[test]
	fn test_attributes() {
		let group = parsed("div[title=\"a b\" foo bar=baz]");
		let div = as_element(&group.elements[0]);
		let attrs = div.attributes.as_ref().unwrap();
		assert_eq!(attrs.len(), 3);
		assert!(attrs[1].value.is_none());
	}

	#[test]
	fn test_self_close_with_repeat() {
		let group = parsed("img/*2");
		let img = as_element(&group.elements[0]);
		assert!(img.self_close);
		assert_eq!(img.repeat.map(|r| r.count), Some(2));
	}

	#[test]
	fn test_errors() {
		assert!(parse(tokenize("div[foo=\"bar]").unwrap(), false).is_err());
		assert!(parse(tokenize("div)").unwrap(), false).is_err());
	}

	#[test]
	fn test_jsx_names() {
		let group = parse(tokenize("Foo.Bar.Baz").unwrap(), true).unwrap();
		let elem = as_element(&group.elements[0]);
		assert_eq!(elem.name.as_ref().unwrap().len(), 5);

		// Without JSX mode, `.Bar` is a class shorthand
		let group = parse(tokenize("Foo.Bar").unwrap(), false).unwrap();
		let elem = as_element(&group.elements[0]);
		assert_eq!(elem.name.as_ref().unwrap().len(), 1);
		assert!(elem.attributes.is_some());
	}
}

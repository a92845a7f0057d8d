//! Convert pass: executes repeaters and flattens the token tree into the
//! final [`Abbreviation`] node tree.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::ast::{
	Abbreviation, AbbreviationAttribute, AbbreviationNode, AttributeValueKind, ValueToken,
	push_text,
};
use crate::parser::{TokenAttribute, TokenElement, TokenGroup, TokenStatement};
use crate::stringify::stringify;
use crate::tokenizer::tokens::{BracketType, Repeater, Token, TokenKind};

static RE_URL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:(?:https?:|ftp:|file:)?//|(?:www|ftp)\.)").unwrap());
static RE_EMAIL: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,5}$").unwrap());
static RE_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w+:").unwrap());

const DEFAULT_MAX_REPEAT: usize = 1_000_000;

/// Text the expanded abbreviation wraps: either a plain string or a list of
/// lines, each wrapped by one iteration of an implicit repeater.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextValue {
	Single(String),
	Lines(Vec<String>),
}

/// Options for the convert pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions<'a> {
	/// Text to wrap with the abbreviation.
	pub text: Option<&'a TextValue>,
	/// Variable values for `${name}` references.
	pub variables: Option<&'a FxHashMap<String, String>>,
	/// Cap on the total number of unrolled nodes.
	pub max_repeat: Option<usize>,
	/// Enable JSX element and attribute parsing rules.
	pub jsx: bool,
	/// Synthesize an `href` attribute when wrapping a URL or e-mail with
	/// `<a>`.
	pub href: bool,
}

/// Mutable state of a single convert run.
pub struct ConvertState<'a> {
	text: Option<&'a TextValue>,
	/// Non-blank wrapped lines, used for indexed access.
	clean_lines: Vec<&'a str>,
	variables: Option<&'a FxHashMap<String, String>>,
	/// Remaining node budget for repeat unrolling.
	repeat_guard: usize,
	/// Stack of repeaters being executed, innermost last.
	pub(crate) repeaters: Vec<Repeater>,
	/// A repeater placeholder consumed the wrapped text.
	pub(crate) inserted: bool,
	/// Wrapped text was consumed at least once.
	text_consumed: bool,
}

impl<'a> ConvertState<'a> {
	fn new(options: &ConvertOptions<'a>) -> Self {
		let clean_lines = match options.text {
			Some(TextValue::Lines(lines)) => lines
				.iter()
				.map(|line| line.trim())
				.filter(|line| !line.is_empty())
				.collect(),
			_ => Vec::new(),
		};

		ConvertState {
			text: options.text,
			clean_lines,
			variables: options.variables,
			repeat_guard: options.max_repeat.unwrap_or(DEFAULT_MAX_REPEAT),
			repeaters: Vec::new(),
			inserted: false,
			text_consumed: false,
		}
	}

	/// Returns wrapped text for given implicit repeater iteration, or the
	/// whole text when no iteration is given.
	pub(crate) fn text_at(&mut self, pos: Option<usize>) -> String {
		self.text_consumed = true;
		match self.text {
			Some(TextValue::Lines(lines)) => match pos {
				Some(pos) if pos < self.clean_lines.len() => self.clean_lines[pos].to_string(),
				Some(pos) => lines.get(pos).cloned().unwrap_or_default(),
				None => lines.join("\n"),
			},
			Some(TextValue::Single(text)) => text.clone(),
			None => String::new(),
		}
	}

	/// Resolves a `${name}` variable reference.
	pub(crate) fn variable(&self, name: &str) -> String {
		self.variables
			.and_then(|vars| vars.get(name))
			.cloned()
			.unwrap_or_else(|| name.to_string())
	}
}

/// Converts given token tree into a simplified and unrolled node tree.
pub fn convert(abbr: &TokenGroup, options: &ConvertOptions) -> Abbreviation {
	let mut state = ConvertState::new(options);
	let mut result = Abbreviation {
		children: convert_group(abbr, None, &mut state),
	};

	if let Some(text) = options.text {
		if !state.text_consumed {
			// Text given but no implicitly repeated elements: insert it into
			// the deepest child
			let tx = match text {
				TextValue::Lines(lines) => lines.join("\n").trim().to_string(),
				TextValue::Single(value) => value.trim().to_string(),
			};

			if let Some(deepest) = result.deepest_mut() {
				deepest.insert_text(&tx);
				if deepest.name.as_deref() == Some("a") && options.href {
					// Automatically update value of an `<a>` element when
					// inserting a URL or e-mail
					insert_href(deepest, &tx);
				}
			}
		}
	}

	result
}

fn convert_statement(statement: &TokenStatement, state: &mut ConvertState) -> Vec<AbbreviationNode> {
	let repeat = match statement {
		TokenStatement::Element(elem) => elem.repeat,
		TokenStatement::Group(group) => group.repeat,
	};

	let Some(original) = repeat else {
		return match statement {
			TokenStatement::Group(group) => convert_group(group, None, state),
			TokenStatement::Element(elem) => convert_element(elem, None, state),
		};
	};

	// Statement is repeated: create copies, supplying the repeater state to
	// numbering tokens via the repeater stack
	let mut repeat = original;
	repeat.count = if repeat.implicit && matches!(state.text, Some(TextValue::Lines(_))) {
		state.clean_lines.len()
	} else {
		repeat.count.max(1)
	};

	let mut result = Vec::new();
	state.repeaters.push(repeat);

	let mut i = 0;
	while i < repeat.count {
		repeat.value = i;
		if let Some(top) = state.repeaters.last_mut() {
			top.value = i;
		}

		let mut items = match statement {
			TokenStatement::Group(group) => convert_group(group, Some(&repeat), state),
			TokenStatement::Element(elem) => convert_element(elem, Some(&repeat), state),
		};

		if repeat.implicit && !state.inserted {
			// Implicit repeater without a placeholder inside: insert the
			// wrapped text into the deepest node of this copy
			if let Some(target) = items.last_mut() {
				let text = state.text_at(Some(repeat.value));
				target.deepest_mut().insert_text(&text);
			}
		}

		result.append(&mut items);

		// At least one repeated item is emitted even at the repeat limit
		state.repeat_guard = state.repeat_guard.saturating_sub(1);
		if state.repeat_guard == 0 {
			break;
		}

		i += 1;
	}

	state.repeaters.pop();
	if repeat.implicit {
		state.inserted = true;
	}

	result
}

fn convert_element(
	elem: &TokenElement,
	repeat: Option<&Repeater>,
	state: &mut ConvertState,
) -> Vec<AbbreviationNode> {
	let mut node = AbbreviationNode {
		name: elem
			.name
			.as_ref()
			.map(|tokens| stringify_name(tokens, state)),
		self_closing: elem.self_close,
		repeat: repeat.copied(),
		..AbbreviationNode::default()
	};

	// An empty `{}` text run produces no value at all
	node.value = elem
		.value
		.as_ref()
		.filter(|tokens| !tokens.is_empty())
		.map(|tokens| stringify_value(tokens, state));

	for child in &elem.elements {
		let mut children = convert_statement(child, state);
		node.children.append(&mut children);
	}

	if let Some(attrs) = &elem.attributes {
		node.attributes = Some(
			attrs
				.iter()
				.map(|attr| convert_attribute(attr, state))
				.collect(),
		);
	}

	// A text-only snippet without fields: hoist its children as siblings
	let hoist = node.name.is_none()
		&& node.attributes.is_none()
		&& node
			.value
			.as_ref()
			.is_some_and(|value| !value.is_empty() && !value.iter().any(ValueToken::is_field));

	if hoist {
		let children = std::mem::take(&mut node.children);
		let mut result = vec![node];
		result.extend(children);
		result
	} else {
		vec![node]
	}
}

fn convert_group(
	group: &TokenGroup,
	repeat: Option<&Repeater>,
	state: &mut ConvertState,
) -> Vec<AbbreviationNode> {
	let mut result = Vec::new();
	for child in &group.elements {
		result.extend(convert_statement(child, state));
	}

	if let Some(repeat) = repeat {
		// Nearest repeater wins: only nodes without their own repeater
		// inherit the group's one
		for item in &mut result {
			if item.repeat.is_none() {
				item.repeat = Some(*repeat);
			}
		}
	}

	result
}

fn convert_attribute(attr: &TokenAttribute, state: &mut ConvertState) -> AbbreviationAttribute {
	let mut result = create_attribute(attr, state);

	if let Some(value) = &attr.value {
		let mut tokens: &[Token] = value;

		if let Some(TokenKind::Quote(single)) = tokens.first().map(|t| &t.kind) {
			// Quoted value: remove quotes from output but mark the attribute
			// value as quoted
			result.value_kind = if *single {
				AttributeValueKind::SingleQuote
			} else {
				AttributeValueKind::DoubleQuote
			};
			tokens = &tokens[1..];
			if tokens.last().is_some_and(Token::is_quote) {
				tokens = &tokens[..tokens.len() - 1];
			}
		} else if tokens
			.first()
			.is_some_and(|t| t.is_bracket(BracketType::Expression, Some(true)))
		{
			// Expression value: remove brackets but mark the value type
			result.value_kind = AttributeValueKind::Expression;
			tokens = &tokens[1..];
			if tokens
				.last()
				.is_some_and(|t| t.is_bracket(BracketType::Expression, Some(false)))
			{
				tokens = &tokens[..tokens.len() - 1];
			}
		}

		result.value = Some(stringify_value(tokens, state));
	}

	result
}

fn create_attribute(attr: &TokenAttribute, state: &mut ConvertState) -> AbbreviationAttribute {
	let mut name = attr
		.name
		.as_ref()
		.map(|tokens| stringify_name(tokens, state));
	let mut boolean = false;
	let mut implied = false;

	if let Some(value) = &mut name {
		if value.ends_with('.') {
			boolean = true;
			value.pop();
		}
		if let Some(rest) = value.strip_prefix('!') {
			implied = true;
			*value = rest.to_string();
		}
	}

	AbbreviationAttribute {
		name,
		value: None,
		value_kind: if attr.expression {
			AttributeValueKind::Expression
		} else {
			AttributeValueKind::Raw
		},
		boolean,
		implied,
	}
}

/// Converts given token list to a string.
fn stringify_name(tokens: &[Token], state: &mut ConvertState) -> String {
	tokens
		.iter()
		.map(|token| stringify(token, state))
		.collect()
}

/// Converts given token list to a value list, keeping fields opaque.
fn stringify_value(tokens: &[Token], state: &mut ConvertState) -> Vec<ValueToken> {
	let mut result = Vec::new();

	for token in tokens {
		if let TokenKind::Field {
			index: Some(index),
			name,
		} = &token.kind
		{
			// Original fields are kept in the output so the formatter can
			// report their actual location to the editor
			result.push(ValueToken::Field {
				index: *index,
				name: name.clone(),
			});
		} else {
			push_text(&mut result, &stringify(token, state));
		}
	}

	result
}

fn insert_href(node: &mut AbbreviationNode, text: &str) {
	let href = if RE_URL.is_match(text) {
		let mut href = text.to_string();
		if !RE_SCHEME.is_match(&href) && !href.starts_with("//") {
			href = format!("http://{href}");
		}
		Some(href)
	} else if RE_EMAIL.is_match(text) {
		Some(format!("mailto:{text}"))
	} else {
		None
	};

	let Some(href) = href else {
		return;
	};

	let attrs = node.attributes.get_or_insert_with(Vec::new);
	match attrs
		.iter()
		.position(|attr| attr.name.as_deref() == Some("href"))
	{
		Some(ix) => {
			if attrs[ix].value.is_none() {
				attrs[ix].value = Some(vec![ValueToken::Text(href)]);
			}
		}
		None => attrs.insert(
			0,
			AbbreviationAttribute::new("href", vec![ValueToken::Text(href)]),
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::parse;

	fn expand_names(abbr: &str) -> Vec<String> {
		let result = parse(abbr, &ConvertOptions::default()).unwrap();
		result
			.children
			.iter()
			.map(|node| node.name.clone().unwrap_or_default())
			.collect()
	}

	#[test]
	fn test_repeat_unroll() {
		assert_eq!(expand_names("a*3"), vec!["a", "a", "a"]);

		let result = parse("ul>li.item$*2", &ConvertOptions::default()).unwrap();
		let ul = &result.children[0];
		assert_eq!(ul.children.len(), 2);
		let classes: Vec<_> = ul
			.children
			.iter()
			.map(|li| {
				li.attributes.as_ref().unwrap()[0]
					.value
					.as_ref()
					.unwrap()[0]
					.as_text()
					.unwrap()
					.to_string()
			})
			.collect();
		assert_eq!(classes, vec!["item1", "item2"]);
	}

	#[test]
	fn test_repeat_guard() {
		let options = ConvertOptions {
			max_repeat: Some(5),
			..ConvertOptions::default()
		};
		assert_eq!(parse("a*10", &options).unwrap().children.len(), 5);

		// At least one copy is always emitted
		let options = ConvertOptions {
			max_repeat: Some(0),
			..ConvertOptions::default()
		};
		assert_eq!(parse("a*10", &options).unwrap().children.len(), 1);
	}

	#[test]
	fn test_reverse_numbering() {
		let result = parse("li.item$@-*3", &ConvertOptions::default()).unwrap();
		let classes: Vec<_> = result
			.children
			.iter()
			.map(|li| {
				li.attributes.as_ref().unwrap()[0]
					.value
					.as_ref()
					.unwrap()[0]
					.as_text()
					.unwrap()
					.to_string()
			})
			.collect();
		assert_eq!(classes, vec!["item3", "item2", "item1"]);
	}

	#[test]
	fn test_wrap_text_lines() {
		let text = TextValue::Lines(vec!["foo".into(), "bar".into()]);
		let options = ConvertOptions {
			text: Some(&text),
			..ConvertOptions::default()
		};
		let result = parse("p*", &options).unwrap();
		assert_eq!(result.children.len(), 2);
		assert_eq!(
			result.children[0].value,
			Some(vec![ValueToken::Text("foo".into())])
		);
		assert_eq!(
			result.children[1].value,
			Some(vec![ValueToken::Text("bar".into())])
		);
	}

	#[test]
	fn test_insert_href() {
		let text = TextValue::Single("http://emmet.io".into());
		let options = ConvertOptions {
			text: Some(&text),
			href: true,
			..ConvertOptions::default()
		};
		let result = parse("a", &options).unwrap();
		let a = &result.children[0];
		let attrs = a.attributes.as_ref().unwrap();
		assert_eq!(attrs[0].name.as_deref(), Some("href"));
		assert_eq!(
			attrs[0].value,
			Some(vec![ValueToken::Text("http://emmet.io".into())])
		);

		// Scheme-less host gets an explicit prefix
		let text = TextValue::Single("www.emmet.io".into());
		let options = ConvertOptions {
			text: Some(&text),
			href: true,
			..ConvertOptions::default()
		};
		let result = parse("a", &options).unwrap();
		let attrs = result.children[0].attributes.as_ref().unwrap();
		assert_eq!(
			attrs[0].value,
			Some(vec![ValueToken::Text("http://www.emmet.io".into())])
		);
	}

	#[test]
	fn test_boolean_and_implied_attributes() {
		let result = parse("p[!foo bar. baz]", &ConvertOptions::default()).unwrap();
		let attrs = result.children[0].attributes.as_ref().unwrap();
		assert!(attrs[0].implied);
		assert_eq!(attrs[0].name.as_deref(), Some("foo"));
		assert!(attrs[1].boolean);
		assert_eq!(attrs[1].name.as_deref(), Some("bar"));
		assert!(!attrs[2].boolean && !attrs[2].implied);
	}

	#[test]
	fn test_variables() {
		let mut variables = FxHashMap::default();
		variables.insert("charset".to_string(), "UTF-8".to_string());
		let options = ConvertOptions {
			variables: Some(&variables),
			..ConvertOptions::default()
		};
		let result = parse("[charset=${charset}]{${charset}}", &options).unwrap();
		let node = &result.children[0];
		assert_eq!(node.value, Some(vec![ValueToken::Text("UTF-8".into())]));
	}
}

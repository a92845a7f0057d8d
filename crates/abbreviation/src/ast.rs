//! Final markup abbreviation tree produced by the convert pass.

use crate::tokenizer::tokens::Repeater;

/// A parsed, unrolled abbreviation: an ordered list of root nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Abbreviation {
	pub children: Vec<AbbreviationNode>,
}

impl Abbreviation {
	/// Returns the deepest node of the tree, following last children.
	pub fn deepest_mut(&mut self) -> Option<&mut AbbreviationNode> {
		self.children.last_mut().map(AbbreviationNode::deepest_mut)
	}
}

/// Single element of the abbreviation tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbbreviationNode {
	pub name: Option<String>,
	/// Node text: never an empty list, adjacent strings are merged.
	pub value: Option<Vec<ValueToken>>,
	/// `None` when the node should emit no attribute section at all;
	/// a (possibly empty) list otherwise.
	pub attributes: Option<Vec<AbbreviationAttribute>>,
	pub children: Vec<AbbreviationNode>,
	/// Executed repeater state for the copy this node belongs to.
	pub repeat: Option<Repeater>,
	/// Element should not contain a closing pair.
	pub self_closing: bool,
}

impl AbbreviationNode {
	/// The deepest node of this subtree, following last children.
	pub fn deepest_mut(&mut self) -> &mut AbbreviationNode {
		if self.children.is_empty() {
			return self;
		}
		self.children
			.last_mut()
			.expect("non-empty checked above")
			.deepest_mut()
	}

	/// Appends text to the node value, merging with a trailing string item.
	pub fn insert_text(&mut self, text: &str) {
		match &mut self.value {
			Some(value) => push_text(value, text),
			None => self.value = Some(vec![ValueToken::Text(text.to_string())]),
		}
	}
}

/// A single item of a node or attribute value.
///
/// Fields are editor tab-stops: they are preserved opaquely through all
/// passes so the final formatter can render them via the field hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueToken {
	Text(String),
	Field { index: usize, name: String },
}

impl ValueToken {
	pub fn is_field(&self) -> bool {
		matches!(self, ValueToken::Field { .. })
	}

	pub fn as_text(&self) -> Option<&str> {
		match self {
			ValueToken::Text(text) => Some(text),
			ValueToken::Field { .. } => None,
		}
	}
}

/// Pushes a value item into the list, merging adjacent strings.
pub fn push_token(tokens: &mut Vec<ValueToken>, token: ValueToken) {
	match (tokens.last_mut(), &token) {
		(Some(ValueToken::Text(last)), ValueToken::Text(next)) => last.push_str(next),
		_ => tokens.push(token),
	}
}

/// Pushes a text fragment into the list, merging with a trailing string.
pub fn push_text(tokens: &mut Vec<ValueToken>, text: &str) {
	push_token(tokens, ValueToken::Text(text.to_string()));
}

/// How an attribute value was authored, which drives quoting on output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttributeValueKind {
	#[default]
	Raw,
	SingleQuote,
	DoubleQuote,
	/// `{…}` value, emitted with curly braces.
	Expression,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AbbreviationAttribute {
	pub name: Option<String>,
	pub value: Option<Vec<ValueToken>>,
	pub value_kind: AttributeValueKind,
	/// Attribute is boolean: emitted as `name` or `name="name"`.
	pub boolean: bool,
	/// Attribute is implied: emitted only when it has a value.
	pub implied: bool,
}

impl AbbreviationAttribute {
	pub fn new(name: impl Into<String>, value: Vec<ValueToken>) -> Self {
		AbbreviationAttribute {
			name: Some(name.into()),
			value: Some(value),
			..AbbreviationAttribute::default()
		}
	}
}

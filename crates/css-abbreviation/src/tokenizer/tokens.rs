//! Token model for the stylesheet abbreviation tokenizer.

use emmet_scanner::SourcePos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorType {
	/// `+` separates properties.
	Sibling,
	/// `!` marks the property as important.
	Important,
	/// `,` separates value fragments and function arguments.
	ArgumentDelimiter,
	/// `-` separates values.
	ValueDelimiter,
	/// `:` separates property name and value.
	PropertyDelimiter,
}

/// Quote style of a string value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteKind {
	Single,
	Double,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CssTokenKind {
	Literal(String),
	WhiteSpace,
	Bracket { open: bool },
	Operator(OperatorType),
	Number {
		value: f64,
		/// Number exactly as written, to tell `1` and `1.` apart.
		raw: String,
		unit: String,
	},
	Color {
		r: u8,
		g: u8,
		b: u8,
		a: f64,
		/// Color value as written, without the leading `#`.
		raw: String,
	},
	Str {
		value: String,
		quote: QuoteKind,
	},
	/// `${index:placeholder}` tab-stop or `${name}` variable reference.
	Field {
		index: Option<usize>,
		name: String,
	},
	/// Produced by the parser from a literal followed by `(…)`.
	FunctionCall {
		name: String,
		arguments: Vec<CssValue>,
	},
}

/// A single stylesheet token with its source range.
#[derive(Debug, Clone, PartialEq)]
pub struct CssToken {
	pub kind: CssTokenKind,
	pub start: Option<usize>,
	pub end: Option<usize>,
}

impl CssToken {
	pub fn new(kind: CssTokenKind, start: usize, end: usize) -> Self {
		CssToken {
			kind,
			start: Some(start),
			end: Some(end),
		}
	}

	/// Creates a token with no source location.
	pub fn synthetic(kind: CssTokenKind) -> Self {
		CssToken {
			kind,
			start: None,
			end: None,
		}
	}

	pub fn is_literal(&self) -> bool {
		matches!(self.kind, CssTokenKind::Literal(_))
	}

	pub fn as_literal(&self) -> Option<&str> {
		match &self.kind {
			CssTokenKind::Literal(value) => Some(value),
			_ => None,
		}
	}

	pub fn is_operator(&self, op: OperatorType) -> bool {
		matches!(self.kind, CssTokenKind::Operator(kind) if kind == op)
	}

	pub fn is_bracket(&self, open: Option<bool>) -> bool {
		matches!(self.kind, CssTokenKind::Bracket { open: o } if open.is_none_or(|open| open == o))
	}

	pub fn is_white_space(&self) -> bool {
		matches!(self.kind, CssTokenKind::WhiteSpace)
	}

	/// Check if the token may be part of a property value.
	pub fn is_value(&self) -> bool {
		matches!(
			self.kind,
			CssTokenKind::Str { .. }
				| CssTokenKind::Color { .. }
				| CssTokenKind::Number { .. }
				| CssTokenKind::Literal(_)
				| CssTokenKind::Field { .. }
		)
	}
}

impl SourcePos for CssToken {
	fn source_start(&self) -> Option<usize> {
		self.start
	}
}

/// Single value fragment: an ordered run of value tokens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CssValue {
	pub value: Vec<CssToken>,
}

impl CssValue {
	pub fn new(value: Vec<CssToken>) -> Self {
		CssValue { value }
	}
}

//! Per-syntax output formatters for the markup abbreviation tree.

mod comment;
mod html;
mod indent;
mod template;

use emmet_abbreviation::ast::Abbreviation;

use crate::config::Config;
use indent::FormatOptions;

pub use html::html;

pub fn haml(abbr: &Abbreviation, config: &Config) -> String {
	indent::indent_format(
		abbr,
		config,
		&FormatOptions {
			before_name: "%",
			before_attribute: "(",
			after_attribute: ")",
			glue_attribute: " ",
			after_text_line: " |",
			boolean_value: "true",
			self_close: "/",
			..FormatOptions::default()
		},
	)
}

pub fn pug(abbr: &Abbreviation, config: &Config) -> String {
	indent::indent_format(
		abbr,
		config,
		&FormatOptions {
			before_attribute: "(",
			after_attribute: ")",
			glue_attribute: ", ",
			before_text_line: "| ",
			self_close: if config.options.output.self_closing_style
				== crate::config::SelfClosingStyle::Xml
			{
				"/"
			} else {
				""
			},
			..FormatOptions::default()
		},
	)
}

pub fn slim(abbr: &Abbreviation, config: &Config) -> String {
	indent::indent_format(
		abbr,
		config,
		&FormatOptions {
			before_attribute: " ",
			glue_attribute: " ",
			before_text_line: "| ",
			self_close: "/",
			..FormatOptions::default()
		},
	)
}

mod utils {
	//! Helpers shared by the formatters.

	use emmet_abbreviation::ast::{AbbreviationAttribute, AbbreviationNode, AttributeValueKind, ValueToken};

	use crate::output::OutputStream;

	/// Default caret token: an anonymous field.
	pub fn caret() -> Vec<ValueToken> {
		vec![ValueToken::Field {
			index: 0,
			name: String::new(),
		}]
	}

	/// Check if given node is a snippet: a node without name and attributes.
	pub fn is_snippet(node: &AbbreviationNode) -> bool {
		node.name.is_none() && node.attributes.is_none()
	}

	pub fn is_snippet_opt(node: Option<&AbbreviationNode>) -> bool {
		node.is_some_and(is_snippet)
	}

	/// Pushes value tokens into the output, renumbering fields with the
	/// walker's running offset so every emitted field index is unique.
	pub fn push_tokens(tokens: &[ValueToken], out: &mut OutputStream, field: &mut usize) {
		let mut largest_index: Option<usize> = None;

		for token in tokens {
			match token {
				ValueToken::Text(text) => out.push_string(text),
				ValueToken::Field { index, name } => {
					out.push_field(*field + index, name);
					if largest_index.is_none_or(|largest| *index > largest) {
						largest_index = Some(*index);
					}
				}
			}
		}

		if let Some(largest) = largest_index {
			*field += largest + 1;
		}
	}

	/// Splits given value token list by lines: each entry is a token list
	/// for a single line.
	pub fn split_by_lines(tokens: &[ValueToken]) -> Vec<Vec<ValueToken>> {
		let mut result: Vec<Vec<ValueToken>> = Vec::new();
		let mut line: Vec<ValueToken> = Vec::new();

		for token in tokens {
			match token {
				ValueToken::Text(text) => {
					let mut parts = crate::output::split_lines(text).into_iter();
					line.push(ValueToken::Text(
						parts.next().unwrap_or_default().to_string(),
					));
					for part in parts {
						result.push(std::mem::take(&mut line));
						line.push(ValueToken::Text(part.to_string()));
					}
				}
				field => line.push(field.clone()),
			}
		}

		if !line.is_empty() {
			result.push(line);
		}

		result
	}

	/// An implied attribute is emitted only with a defined value: either a
	/// non-empty one or a quoted empty one.
	pub fn should_output_attribute(attr: &AbbreviationAttribute) -> bool {
		!attr.implied || attr.value_kind != AttributeValueKind::Raw || attr.value.is_some()
	}

	/// Check if given value contains newlines.
	pub fn has_newline(token: &ValueToken) -> bool {
		match token {
			ValueToken::Text(text) => text.contains('\n') || text.contains('\r'),
			ValueToken::Field { .. } => false,
		}
	}
}

pub(crate) use utils::*;

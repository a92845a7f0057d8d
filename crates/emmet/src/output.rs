//! Indented, newline-aware output stream with live offset/line/column
//! tracking, plus small formatting helpers shared by the formatters.

use emmet_abbreviation::ast::{AbbreviationAttribute, AbbreviationNode, AttributeValueKind};

use crate::config::{Config, OutputContext, StringCase};

/// Text sink used by all formatters.
pub struct OutputStream<'a> {
	config: &'a Config,
	value: String,
	/// Current indentation level.
	pub level: usize,
	pub offset: usize,
	pub line: usize,
	pub column: usize,
}

impl<'a> OutputStream<'a> {
	pub fn new(config: &'a Config) -> Self {
		OutputStream {
			config,
			value: String::new(),
			level: 0,
			offset: 0,
			line: 0,
			column: 0,
		}
	}

	/// The accumulated output.
	pub fn into_value(self) -> String {
		self.value
	}

	pub fn context(&self) -> OutputContext {
		OutputContext {
			offset: self.offset,
			line: self.line,
			column: self.column,
		}
	}

	/// Pushes raw text into the stream without any processing.
	fn push_raw(&mut self, text: &str) {
		self.value.push_str(text);
		self.offset += text.len();
		self.column += text.len();
	}

	/// Pushes plain text through the text hook, without newline processing.
	pub fn push(&mut self, text: &str) {
		let processed = self.config.process_text(text, self.context());
		self.push_raw(&processed);
	}

	/// Pushes given text with newline splitting, keeping the line and
	/// column counters correct.
	pub fn push_string(&mut self, value: &str) {
		let mut first = true;
		for line in split_lines(value) {
			if !first {
				self.push_newline(Some(self.level));
			}
			first = false;
			self.push(line);
		}
	}

	/// Pushes a line separator followed by the base indent; with `indent`
	/// given, also pushes that many indent levels.
	pub fn push_newline(&mut self, indent: Option<usize>) {
		let newline = self.config.options.output.newline.clone();
		let base_indent = self.config.options.output.base_indent.clone();
		self.push(&format!("{newline}{base_indent}"));
		self.line += 1;
		self.column = base_indent.len();

		if let Some(size) = indent {
			self.push_indent(size);
		}
	}

	/// Adds `size` levels of indentation to the stream.
	pub fn push_indent(&mut self, size: usize) {
		let indent = self.config.options.output.indent.repeat(size);
		self.push(&indent);
	}

	/// Pushes a field through the field hook, bypassing text processing.
	pub fn push_field(&mut self, index: usize, placeholder: &str) {
		let text = self.config.format_field(index, placeholder, self.context());
		self.push_raw(&text);
	}
}

/// Splits text into lines, treating `\r\n`, `\r` and `\n` as separators.
pub(crate) fn split_lines(value: &str) -> Vec<&str> {
	let mut result = Vec::new();
	let mut start = 0;
	let bytes = value.as_bytes();
	let mut i = 0;

	while i < bytes.len() {
		if bytes[i] == b'\n' || bytes[i] == b'\r' {
			result.push(&value[start..i]);
			if bytes[i] == b'\r' && i + 1 < bytes.len() && bytes[i + 1] == b'\n' {
				i += 1;
			}
			start = i + 1;
		}
		i += 1;
	}

	// No trailing empty line when the value ends with a separator
	if start < value.len() || value.is_empty() {
		result.push(&value[start..]);
	}
	result
}

fn str_case(text: &str, case: StringCase) -> String {
	match case {
		StringCase::Keep => text.to_string(),
		StringCase::Upper => text.to_uppercase(),
		StringCase::Lower => text.to_lowercase(),
	}
}

/// Returns given tag name formatted according to config.
pub fn tag_name(name: &str, config: &Config) -> String {
	str_case(name, config.options.output.tag_case)
}

/// Returns given attribute name formatted according to config.
pub fn attr_name(name: &str, config: &Config) -> String {
	str_case(name, config.options.output.attribute_case)
}

/// Returns the character quoting the value of given attribute.
pub fn attr_quote(attr: &AbbreviationAttribute, config: &Config, is_open: bool) -> char {
	if attr.value_kind == AttributeValueKind::Expression {
		return if is_open { '{' } else { '}' };
	}

	match config.options.output.attribute_quotes {
		crate::config::AttributeQuotes::Single => '\'',
		crate::config::AttributeQuotes::Double => '"',
	}
}

/// Check if given attribute is boolean.
pub fn is_boolean_attribute(attr: &AbbreviationAttribute, config: &Config) -> bool {
	if attr.boolean {
		return true;
	}

	let name = attr.name.as_deref().unwrap_or_default().to_lowercase();
	config
		.options
		.output
		.boolean_attributes
		.iter()
		.any(|boolean| *boolean == name)
}

/// Returns the token closing a self-closing tag, depending on options.
pub fn self_close(config: &Config) -> &'static str {
	match config.options.output.self_closing_style {
		crate::config::SelfClosingStyle::Xhtml => " /",
		crate::config::SelfClosingStyle::Xml => "/",
		crate::config::SelfClosingStyle::Html => "",
	}
}

/// Check if given element name is inline-level.
pub fn is_inline_name(name: Option<&str>, config: &Config) -> bool {
	let Some(name) = name else {
		return false;
	};
	let name = name.to_lowercase();
	config
		.options
		.inline_elements
		.iter()
		.any(|inline| *inline == name)
}

/// Check if given node is inline: it has an inline-level name or is a
/// text-only node.
pub fn is_inline(node: &AbbreviationNode, config: &Config) -> bool {
	match &node.name {
		Some(name) => is_inline_name(Some(name), config),
		None => node.value.is_some() && node.attributes.is_none(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{OptionsPatch, UserConfig};
	use std::rc::Rc;

	fn config() -> Config {
		Config::default()
	}

	#[test]
	fn test_counters() {
		let config = config();
		let mut out = OutputStream::new(&config);
		out.push("foo");
		assert_eq!((out.offset, out.line, out.column), (3, 0, 3));

		out.push_string("a\nbc");
		assert_eq!(out.line, 1);
		assert_eq!(out.column, 2);
		assert_eq!(out.into_value(), "fooa\nbc");
	}

	#[test]
	fn test_indent() {
		let config = config();
		let mut out = OutputStream::new(&config);
		out.level = 2;
		out.push("a");
		out.push_newline(Some(out.level));
		out.push("b");
		assert_eq!(out.into_value(), "a\n\t\tb");
	}

	#[test]
	fn test_field_hook() {
		let user = UserConfig {
			field: Some(Rc::new(|index, placeholder: &str, _ctx| {
				if placeholder.is_empty() {
					format!("${{{index}}}")
				} else {
					format!("${{{index}:{placeholder}}}")
				}
			})),
			..UserConfig::default()
		};
		let config = Config::new(user, &Default::default());
		let mut out = OutputStream::new(&config);
		out.push_field(1, "");
		out.push_field(2, "foo");
		assert_eq!(out.into_value(), "${1}${2:foo}");
	}

	#[test]
	fn test_text_hook() {
		let user = UserConfig {
			text_processor: Some(Rc::new(|text: &str, _ctx| text.to_uppercase())),
			options: OptionsPatch::default(),
			..UserConfig::default()
		};
		let config = Config::new(user, &Default::default());
		let mut out = OutputStream::new(&config);
		out.push_string("foo");
		assert_eq!(out.into_value(), "FOO");
	}
}

//! Shared formatter for indent-based syntaxes like HAML, Pug and Slim,
//! parameterized by small syntax delimiters.

use emmet_abbreviation::ast::{Abbreviation, AbbreviationAttribute, AbbreviationNode, ValueToken};

use super::{caret, is_snippet, push_tokens, should_output_attribute, split_by_lines};
use crate::config::Config;
use crate::output::{OutputStream, attr_name, attr_quote, is_boolean_attribute};

/// Delimiters of a concrete indent-based syntax.
#[derive(Default)]
pub struct FormatOptions {
	pub before_name: &'static str,
	pub after_name: &'static str,
	pub before_attribute: &'static str,
	pub after_attribute: &'static str,
	pub glue_attribute: &'static str,
	pub before_text_line: &'static str,
	pub after_text_line: &'static str,
	pub boolean_value: &'static str,
	pub self_close: &'static str,
}

struct WalkState<'a> {
	parent: Option<&'a AbbreviationNode>,
	config: &'a Config,
	options: &'a FormatOptions,
	out: OutputStream<'a>,
	field: usize,
}

pub fn indent_format(abbr: &Abbreviation, config: &Config, options: &FormatOptions) -> String {
	let mut state = WalkState {
		parent: None,
		config,
		options,
		out: OutputStream::new(config),
		field: 1,
	};

	for (index, child) in abbr.children.iter().enumerate() {
		element(child, index, &mut state);
	}

	state.out.into_value()
}

fn element<'a>(node: &'a AbbreviationNode, index: usize, state: &mut WalkState<'a>) {
	let options = state.options;
	let (primary, secondary) = collect_attributes(node);

	// Do not indent top-level elements
	let level = if state.parent.is_some() { 1 } else { 0 };
	state.out.level += level;

	if should_format(node, index, state) {
		let indent = state.out.level;
		state.out.push_newline(Some(indent));
	}

	if let Some(name) = &node.name {
		if name.as_str() != "div" || primary.is_empty() {
			state.out.push_string(&format!(
				"{}{name}{}",
				options.before_name, options.after_name
			));
		}
	}

	push_primary_attributes(&primary, state);
	let secondary: Vec<&AbbreviationAttribute> = secondary
		.into_iter()
		.filter(|attr| should_output_attribute(attr))
		.collect();
	push_secondary_attributes(&secondary, state);

	if node.self_closing && node.value.is_none() && node.children.is_empty() {
		if !options.self_close.is_empty() {
			state.out.push_string(options.self_close);
		}
	} else {
		push_value(node, state);
		let prev = std::mem::replace(&mut state.parent, Some(node));
		for (child_ix, child) in node.children.iter().enumerate() {
			element(child, child_ix, state);
		}
		state.parent = prev;
	}

	state.out.level -= level;
}

/// Splits node attributes into `primary` (id, class — with special syntax
/// in most indent-based languages) and `secondary` (the rest).
fn collect_attributes(
	node: &AbbreviationNode,
) -> (Vec<&AbbreviationAttribute>, Vec<&AbbreviationAttribute>) {
	let mut primary = Vec::new();
	let mut secondary = Vec::new();

	if let Some(attrs) = &node.attributes {
		for attr in attrs {
			if matches!(attr.name.as_deref(), Some("class") | Some("id")) {
				primary.push(attr);
			} else {
				secondary.push(attr);
			}
		}
	}

	(primary, secondary)
}

/// Outputs id/class attributes with their shorthand syntax.
fn push_primary_attributes(attrs: &[&AbbreviationAttribute], state: &mut WalkState) {
	for attr in attrs {
		let Some(value) = &attr.value else {
			continue;
		};

		if attr.name.as_deref() == Some("class") {
			state.out.push_string(".");
			// Whitespace inside class names becomes dots
			let tokens: Vec<ValueToken> = value
				.iter()
				.map(|token| match token {
					ValueToken::Text(text) => ValueToken::Text(dot_whitespace(text)),
					field => field.clone(),
				})
				.collect();
			push_tokens(&tokens, &mut state.out, &mut state.field);
		} else {
			state.out.push_string("#");
			push_tokens(value, &mut state.out, &mut state.field);
		}
	}
}

fn push_secondary_attributes(attrs: &[&AbbreviationAttribute], state: &mut WalkState) {
	if attrs.is_empty() {
		return;
	}

	let options = state.options;
	let config = state.config;

	if !options.before_attribute.is_empty() {
		state.out.push_string(options.before_attribute);
	}

	for (i, attr) in attrs.iter().enumerate() {
		let name = attr_name(attr.name.as_deref().unwrap_or_default(), config);
		state.out.push_string(&name);

		if is_boolean_attribute(attr, config) && attr.value.is_none() {
			if !config.options.output.compact_boolean && !options.boolean_value.is_empty() {
				state
					.out
					.push_string(&format!("={}", options.boolean_value));
			}
		} else {
			let l_quote = attr_quote(attr, config, true);
			let r_quote = attr_quote(attr, config, false);
			state.out.push_string(&format!("={l_quote}"));
			match &attr.value {
				Some(value) => push_tokens(value, &mut state.out, &mut state.field),
				None => push_tokens(&caret(), &mut state.out, &mut state.field),
			}
			state.out.push_string(&r_quote.to_string());
		}

		if i != attrs.len() - 1 && !options.glue_attribute.is_empty() {
			state.out.push_string(options.glue_attribute);
		}
	}

	if !options.after_attribute.is_empty() {
		state.out.push_string(options.after_attribute);
	}
}

fn push_value(node: &AbbreviationNode, state: &mut WalkState) {
	// Output the value, or a caret for leaf nodes only
	if node.value.is_none() && !node.children.is_empty() {
		return;
	}

	let value = node.value.clone().unwrap_or_else(caret);
	let lines = split_by_lines(&value);
	let options = state.options;

	if lines.len() <= 1 {
		if node.name.is_some() || node.attributes.is_some() {
			state.out.push(" ");
		}
		push_tokens(&value, &mut state.out, &mut state.field);
	} else {
		// Multi-line value is formatted with a terminating `|` character
		// and equal line lengths
		let line_lengths: Vec<usize> = lines.iter().map(|line| value_length(line)).collect();
		let max_length = line_lengths.iter().copied().max().unwrap_or(0);

		state.out.level += 1;
		for (i, line) in lines.iter().enumerate() {
			let indent = state.out.level;
			state.out.push_newline(Some(indent));
			if !options.before_text_line.is_empty() {
				state.out.push(options.before_text_line);
			}
			push_tokens(line, &mut state.out, &mut state.field);
			if !options.after_text_line.is_empty() {
				state.out.push(&" ".repeat(max_length - line_lengths[i]));
				state.out.push(options.after_text_line);
			}
		}
		state.out.level -= 1;
	}
}

fn should_format(node: &AbbreviationNode, index: usize, state: &WalkState) -> bool {
	// Neither the first top-level element nor snippets are formatted
	if state.parent.is_none() && index == 0 {
		return false;
	}

	!is_snippet(node)
}

/// Replaces every whitespace run with a single dot.
fn dot_whitespace(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut in_space = false;

	for ch in text.chars() {
		if ch.is_whitespace() {
			if !in_space {
				result.push('.');
			}
			in_space = true;
		} else {
			result.push(ch);
			in_space = false;
		}
	}

	result
}

fn value_length(tokens: &[ValueToken]) -> usize {
	tokens
		.iter()
		.map(|token| match token {
			ValueToken::Text(text) => text.len(),
			ValueToken::Field { name, .. } => name.len(),
		})
		.sum()
}

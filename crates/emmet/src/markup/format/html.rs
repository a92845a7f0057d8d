//! HTML formatter.

use std::sync::LazyLock;

use emmet_abbreviation::ast::{
	Abbreviation, AbbreviationAttribute, AbbreviationNode, ValueToken,
};
use regex::Regex;

use super::comment::{CommentState, comment_node_after, comment_node_before};
use super::{caret, has_newline, is_snippet, is_snippet_opt, push_tokens, should_output_attribute};
use crate::config::Config;
use crate::output::{
	OutputStream, attr_name, attr_quote, is_boolean_attribute, is_inline, is_inline_name,
	self_close, tag_name,
};

static RE_HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^<([\w\-:]+)[\s>]").unwrap());

struct WalkState<'a> {
	parent: Option<&'a AbbreviationNode>,
	config: &'a Config,
	out: OutputStream<'a>,
	/// Running field offset keeping emitted tab-stop indexes unique.
	field: usize,
	comment: CommentState,
}

/// Renders the abbreviation tree as HTML.
pub fn html(abbr: &Abbreviation, config: &Config) -> String {
	let mut state = WalkState {
		parent: None,
		config,
		out: OutputStream::new(config),
		field: 1,
		comment: CommentState::new(config),
	};

	for (index, child) in abbr.children.iter().enumerate() {
		element(child, index, &abbr.children, &mut state);
	}

	state.out.into_value()
}

fn element<'a>(
	node: &'a AbbreviationNode,
	index: usize,
	items: &'a [AbbreviationNode],
	state: &mut WalkState<'a>,
) {
	let config = state.config;
	let fmt = should_format(node, index, items, state);

	// Pick the offset level for the current node
	let level = get_indent(state);
	state.out.level += level;

	if fmt {
		let indent = state.out.level;
		state.out.push_newline(Some(indent));
	}

	if let Some(node_name) = &node.name {
		let name = tag_name(node_name, config);
		comment_node_before(node, &state.comment, &mut state.out, &mut state.field);
		state.out.push_string(&format!("<{name}"));

		if let Some(attrs) = &node.attributes {
			for attr in attrs {
				if should_output_attribute(attr) {
					push_attribute(attr, state);
				}
			}
		}

		if node.self_closing && node.children.is_empty() && node.value.is_none() {
			state
				.out
				.push_string(&format!("{}>", self_close(config)));
		} else {
			state.out.push_string(">");

			if !push_snippet(node, state) {
				if let Some(value) = &node.value {
					let inner_format = value.iter().any(has_newline)
						|| starts_with_block_tag(value, config);
					if inner_format {
						state.out.level += 1;
						let indent = state.out.level;
						state.out.push_newline(Some(indent));
					}
					push_tokens(value, &mut state.out, &mut state.field);
					if inner_format {
						state.out.level -= 1;
						let indent = state.out.level;
						state.out.push_newline(Some(indent));
					}
				}

				walk_children(&node.children, node, state);

				if node.value.is_none() && node.children.is_empty() {
					let inner_format = config.options.output.format_leaf_node
						|| config
							.options
							.output
							.format_force
							.iter()
							.any(|forced| Some(forced.as_str()) == node.name.as_deref());
					if inner_format {
						state.out.level += 1;
						let indent = state.out.level;
						state.out.push_newline(Some(indent));
					}
					push_tokens(&caret(), &mut state.out, &mut state.field);
					if inner_format {
						state.out.level -= 1;
						let indent = state.out.level;
						state.out.push_newline(Some(indent));
					}
				}
			}

			state.out.push_string(&format!("</{name}>"));
			comment_node_after(node, &state.comment, &mut state.out, &mut state.field);
		}
	} else if !push_snippet(node, state) {
		if let Some(value) = &node.value {
			// A text-only node
			push_tokens(value, &mut state.out, &mut state.field);
			walk_children(&node.children, node, state);
		}
	}

	if fmt && index == items.len() - 1 && state.parent.is_some() {
		let offset = if is_snippet_opt(state.parent) { 0 } else { 1 };
		let indent = state.out.level.saturating_sub(offset);
		state.out.push_newline(Some(indent));
	}

	state.out.level -= level;
}

fn walk_children<'a>(
	children: &'a [AbbreviationNode],
	node: &'a AbbreviationNode,
	state: &mut WalkState<'a>,
) {
	let prev = std::mem::replace(&mut state.parent, Some(node));
	for (index, child) in children.iter().enumerate() {
		element(child, index, children, state);
	}
	state.parent = prev;
}

/// Outputs given attribute’s content into the output stream.
fn push_attribute(attr: &AbbreviationAttribute, state: &mut WalkState) {
	let config = state.config;

	let Some(attribute_name) = &attr.name else {
		return;
	};

	let name = attr_name(attribute_name, config);
	let l_quote = attr_quote(attr, config, true);
	let r_quote = attr_quote(attr, config, false);
	let mut value = attr.value.clone();

	if is_boolean_attribute(attr, config) && value.is_none() {
		// A boolean attribute with omitted value gets its name as the value
		// (XML style) unless compact output is enabled
		if !config.options.output.compact_boolean {
			value = Some(vec![ValueToken::Text(name.clone())]);
		}
	} else if value.is_none() {
		value = Some(caret());
	}

	state.out.push_string(&format!(" {name}"));
	match value {
		Some(value) => {
			state.out.push_string(&format!("={l_quote}"));
			push_tokens(&value, &mut state.out, &mut state.field);
			state.out.push_string(&r_quote.to_string());
		}
		None => {
			if config.options.output.self_closing_style != crate::config::SelfClosingStyle::Html {
				state.out.push_string(&format!("={l_quote}{r_quote}"));
			}
		}
	}
}

/// When a node has both a value with a field and children, the children are
/// rendered as the content of the first field.
fn push_snippet<'a>(node: &'a AbbreviationNode, state: &mut WalkState<'a>) -> bool {
	let Some(value) = &node.value else {
		return false;
	};

	if node.children.is_empty() {
		return false;
	}

	let Some(field_ix) = value.iter().position(ValueToken::is_field) else {
		return false;
	};

	push_tokens(&value[..field_ix], &mut state.out, &mut state.field);
	let line = state.out.line;
	let mut pos = field_ix + 1;

	walk_children(&node.children, node, state);

	// After a line change, trim leading whitespace for a better result
	if state.out.line != line {
		if let Some(ValueToken::Text(text)) = value.get(pos) {
			state.out.push_string(text.trim_start());
			pos += 1;
		}
	}

	push_tokens(&value[pos..], &mut state.out, &mut state.field);
	true
}

/// Check if given node should be formatted in its parent context.
fn should_format(
	node: &AbbreviationNode,
	index: usize,
	items: &[AbbreviationNode],
	state: &WalkState,
) -> bool {
	let config = state.config;

	if !config.options.output.format {
		return false;
	}

	if index == 0 && state.parent.is_none() {
		// Do not format the very first node
		return false;
	}

	// Do not format a single child of a snippet
	if is_snippet_opt(state.parent) && items.len() == 1 {
		return false;
	}

	if is_snippet(node) {
		// Adjacent text-only/snippet nodes
		let prev = index.checked_sub(1).and_then(|ix| items.get(ix));
		let fmt = is_snippet_opt(prev)
			|| is_snippet_opt(items.get(index + 1))
			|| node
				.value
				.as_ref()
				.is_some_and(|value| value.iter().any(has_newline))
			|| (node
				.value
				.as_ref()
				.is_some_and(|value| value.iter().any(ValueToken::is_field))
				&& !node.children.is_empty());

		if fmt {
			return true;
		}
	}

	if is_inline(node, config) {
		if index == 0 {
			// First node in parent: format if it is followed by a
			// block-level element
			if items.iter().any(|item| !is_inline(item, config)) {
				return true;
			}
		} else if !is_inline(&items[index - 1], config) {
			// Node right after a block-level element
			return true;
		}

		let inline_break = config.options.output.inline_break;
		if inline_break > 0 {
			// Check for adjacent inline elements before and after this one
			let mut adjacent_inline = 1;

			let mut before = index;
			while before > 0 && is_inline(&items[before - 1], config) {
				adjacent_inline += 1;
				before -= 1;
			}

			let mut after = index + 1;
			while after < items.len() && is_inline(&items[after], config) {
				adjacent_inline += 1;
				after += 1;
			}

			if adjacent_inline >= inline_break {
				return true;
			}
		}

		// Edge case: an inline node containing a node that must be formatted
		for (child_ix, child) in node.children.iter().enumerate() {
			if should_format(child, child_ix, &node.children, state) {
				return true;
			}
		}

		return false;
	}

	true
}

/// Returns the indentation offset for the current node.
fn get_indent(state: &WalkState) -> usize {
	let Some(parent) = state.parent else {
		return 0;
	};

	if is_snippet(parent)
		|| parent.name.as_ref().is_some_and(|name| {
			state
				.config
				.options
				.output
				.format_skip
				.iter()
				.any(|skip| skip == name)
		}) {
		return 0;
	}

	1
}

/// Check if given node value starts with a block-level tag.
fn starts_with_block_tag(value: &[ValueToken], config: &Config) -> bool {
	if let Some(ValueToken::Text(text)) = value.first() {
		if let Some(captures) = RE_HTML_TAG.captures(text) {
			return !is_inline_name(Some(&captures[1]), config);
		}
	}

	false
}

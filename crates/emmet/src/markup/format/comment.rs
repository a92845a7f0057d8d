//! Comment wrapping: elements with a trigger attribute are bracketed with
//! rendered comment templates.

use emmet_abbreviation::ast::AbbreviationNode;
use rustc_hash::FxHashMap;

use super::push_tokens;
use super::template::{TemplateToken, template};
use crate::config::Config;
use crate::output::OutputStream;

pub struct CommentState {
	enabled: bool,
	trigger: Vec<String>,
	before: Vec<TemplateToken>,
	after: Vec<TemplateToken>,
}

impl CommentState {
	pub fn new(config: &Config) -> Self {
		let options = &config.options.comment;
		CommentState {
			enabled: options.enabled,
			trigger: options.trigger.clone(),
			before: template(&options.before),
			after: template(&options.after),
		}
	}
}

/// Adds the comment prefix for given node, if required.
pub fn comment_node_before(
	node: &AbbreviationNode,
	comment: &CommentState,
	out: &mut OutputStream,
	field: &mut usize,
) {
	if should_comment(node, comment) && !comment.before.is_empty() {
		output(node, &comment.before, out, field);
	}
}

/// Adds the comment suffix for given node, if required.
pub fn comment_node_after(
	node: &AbbreviationNode,
	comment: &CommentState,
	out: &mut OutputStream,
	field: &mut usize,
) {
	if should_comment(node, comment) && !comment.after.is_empty() {
		output(node, &comment.after, out, field);
	}
}

/// Check if given node should be commented.
fn should_comment(node: &AbbreviationNode, comment: &CommentState) -> bool {
	if !comment.enabled || comment.trigger.is_empty() || node.name.is_none() {
		return false;
	}

	let Some(attrs) = &node.attributes else {
		return false;
	};

	attrs.iter().any(|attr| {
		attr.name
			.as_ref()
			.is_some_and(|name| comment.trigger.contains(name))
	})
}

/// Renders template tokens against the node attributes.
fn output(
	node: &AbbreviationNode,
	tokens: &[TemplateToken],
	out: &mut OutputStream,
	field: &mut usize,
) {
	// Collect the attributes payload
	let mut attrs = FxHashMap::default();
	if let Some(attributes) = &node.attributes {
		for attr in attributes {
			if let (Some(name), Some(value)) = (&attr.name, &attr.value) {
				attrs.insert(name.to_uppercase(), value);
			}
		}
	}

	for token in tokens {
		match token {
			TemplateToken::Text(text) => out.push_string(text),
			TemplateToken::Placeholder {
				before,
				after,
				name,
			} => {
				if let Some(value) = attrs.get(name) {
					out.push_string(before);
					push_tokens(value, out, field);
					out.push_string(after);
				}
			}
		}
	}
}

//! Implicit tag names: a node with attributes but no name gets one inferred
//! from its parent.

use emmet_abbreviation::ast::AbbreviationNode;

use crate::config::Config;
use crate::markup::AncestorScope;
use crate::output::is_inline_name;

/// Parent name → implied child name.
fn implicit_name(parent: &str) -> Option<&'static str> {
	let name = match parent {
		"p" => "span",
		"ul" | "ol" => "li",
		"table" | "tbody" | "thead" | "tfoot" => "tr",
		"tr" => "td",
		"colgroup" => "col",
		"select" | "optgroup" => "option",
		"audio" | "video" => "source",
		"object" => "param",
		"map" => "area",
		_ => return None,
	};
	Some(name)
}

pub fn implicit_tag(node: &mut AbbreviationNode, ancestors: &[AncestorScope], config: &Config) {
	if node.name.is_none() && node.attributes.is_some() {
		resolve_implicit_tag(node, ancestors, config);
	}
}

pub fn resolve_implicit_tag(
	node: &mut AbbreviationNode,
	ancestors: &[AncestorScope],
	config: &Config,
) {
	let parent_name = parent_element_name(ancestors, config).to_lowercase();
	node.name = Some(
		implicit_name(&parent_name)
			.map(str::to_string)
			.unwrap_or_else(|| {
				if is_inline_name(Some(&parent_name), config) {
					"span".to_string()
				} else {
					"div".to_string()
				}
			}),
	);
}

/// Name of the closest ancestor element, falling back to the context
/// element given by the editor.
fn parent_element_name(ancestors: &[AncestorScope], config: &Config) -> String {
	match ancestors.last() {
		Some(scope) => scope.name.clone().unwrap_or_default(),
		None => config
			.context
			.as_ref()
			.map(|ctx| ctx.name.clone())
			.unwrap_or_default(),
	}
}

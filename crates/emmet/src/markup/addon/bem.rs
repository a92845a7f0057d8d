//! BEM transform: expands block/element/modifier class shorthands against
//! the ancestor blocks.

use std::sync::LazyLock;

use emmet_abbreviation::ast::{AbbreviationNode, ValueToken};
use regex::Regex;

use crate::config::Config;
use crate::markup::AncestorScope;

static RE_ELEMENT: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^(-+)([a-z0-9]+[a-z0-9-]*)").unwrap());
static RE_MODIFIER: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)^(_+)([a-z0-9]+[a-z0-9-_]*)").unwrap());
static RE_BLOCK_DASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-z]-").unwrap());
static RE_BLOCK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[a-z]").unwrap());

/// BEM view of a node: its class list and the block it defines, if any.
#[derive(Debug, Clone, Default)]
pub struct BemData {
	pub class_names: Vec<String>,
	pub block: Option<String>,
}

pub fn bem(node: &mut AbbreviationNode, ancestors: &[AncestorScope], config: &Config) {
	let mut data = parse_bem(&class_value(node));
	expand_class_names(node, &mut data);
	expand_short_notation(node, &mut data, ancestors, config);
}

/// Expands existing class names in BEM notation: a `b__el_mod` class also
/// yields `b__el`.
fn expand_class_names(node: &mut AbbreviationNode, data: &mut BemData) {
	let mut class_names: Vec<String> = Vec::new();

	for class in &data.class_names {
		// Everything before the first `_` is the base element name
		match class.find('_') {
			Some(ix) if ix > 0 && !class.starts_with('-') => {
				class_names.push(class[..ix].to_string());
				class_names.push(class[ix..].to_string());
			}
			_ => class_names.push(class.clone()),
		}
	}

	if !class_names.is_empty() {
		data.class_names = unique(class_names);
		data.block = find_block_name(&data.class_names);
		update_class(node, &data.class_names.join(" "));
	}
}

/// Expands `-element` and `_modifier` shorthands against ancestor blocks.
fn expand_short_notation(
	node: &mut AbbreviationNode,
	data: &mut BemData,
	ancestors: &[AncestorScope],
	config: &Config,
) {
	let mut class_names: Vec<String> = Vec::new();
	let options = &config.options.bem;

	for class in &data.class_names {
		let mut cl = class.as_str();
		let mut prefix = String::new();

		// Element definition, could be only one
		if let Some(m) = RE_ELEMENT.captures(cl) {
			let depth = m.get(1).map_or(0, |g| g.as_str().len());
			let block = get_block_name(ancestors, data, depth, config, true);
			prefix = format!("{block}{}{}", options.element, &m[2]);
			class_names.push(prefix.clone());
			cl = &cl[m.get(0).map_or(0, |g| g.end())..];
		}

		// Modifier definitions
		if let Some(m) = RE_MODIFIER.captures(cl) {
			if prefix.is_empty() {
				let depth = m.get(1).map_or(0, |g| g.as_str().len());
				prefix = get_block_name(ancestors, data, depth, config, false);
				class_names.push(prefix.clone());
			}

			class_names.push(format!("{prefix}{}{}", options.modifier, &m[2]));
			cl = &cl[m.get(0).map_or(0, |g| g.end())..];
		}

		if cl == class.as_str() {
			// Not a BEM-specific class, add it as-is
			class_names.push(class.clone());
		}
	}

	let class_names = unique(class_names);
	if !class_names.is_empty() {
		update_class(node, &class_names.join(" "));
	}
}

/// Returns the block name for the current node by looking `depth` levels up
/// the ancestor chain.
fn get_block_name(
	ancestors: &[AncestorScope],
	data: &BemData,
	depth: usize,
	config: &Config,
	use_context: bool,
) -> String {
	// The lookup path is the ancestor chain with the current node appended
	let path_len = ancestors.len() + 1;
	let mut ix = path_len.saturating_sub(depth);

	loop {
		let block = if ix == path_len - 1 {
			data.block.as_ref()
		} else {
			ancestors.get(ix).and_then(|scope| scope.bem.block.as_ref())
		};

		if let Some(block) = block {
			return block.clone();
		}

		if ix == 0 {
			break;
		}
		ix -= 1;
	}

	if use_context {
		if let Some(context) = &config.context {
			let class = context.attributes.get("class").cloned().unwrap_or_default();
			if let Some(block) = parse_bem(&class).block {
				return block;
			}
		}
	}

	String::new()
}

/// Parses BEM data from given class attribute value.
pub fn parse_bem(class_value: &str) -> BemData {
	let class_names: Vec<String> = class_value
		.split_whitespace()
		.map(str::to_string)
		.collect();
	let block = find_block_name(&class_names);
	BemData { class_names, block }
}

fn find_block_name(class_names: &[String]) -> Option<String> {
	find(class_names, &RE_BLOCK_DASH).or_else(|| find(class_names, &RE_BLOCK))
}

fn find(class_names: &[String], matcher: &Regex) -> Option<String> {
	for class in class_names {
		if RE_ELEMENT.is_match(class) || RE_MODIFIER.is_match(class) {
			break;
		}

		if matcher.is_match(class) {
			return Some(class.clone());
		}
	}

	None
}

fn update_class(node: &mut AbbreviationNode, value: &str) {
	if let Some(attrs) = &mut node.attributes {
		if let Some(attr) = attrs
			.iter_mut()
			.find(|attr| attr.name.as_deref() == Some("class"))
		{
			attr.value = Some(vec![ValueToken::Text(value.to_string())]);
		}
	}
}

/// Class attribute value of given node; fields contribute their
/// placeholder.
pub fn class_value(node: &AbbreviationNode) -> String {
	let Some(attrs) = &node.attributes else {
		return String::new();
	};

	attrs
		.iter()
		.find(|attr| attr.name.as_deref() == Some("class"))
		.and_then(|attr| attr.value.as_ref())
		.map(|value| {
			value
				.iter()
				.map(|token| match token {
					ValueToken::Text(text) => text.as_str(),
					ValueToken::Field { name, .. } => name.as_str(),
				})
				.collect()
		})
		.unwrap_or_default()
}

fn unique(items: Vec<String>) -> Vec<String> {
	let mut seen = Vec::new();
	for item in items {
		if !seen.contains(&item) {
			seen.push(item);
		}
	}
	seen
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{Config, GlobalConfig, OptionsPatch, UserConfig};
	use emmet_abbreviation::ast::AbbreviationAttribute;

	fn bem_config() -> Config {
		Config::new(
			UserConfig {
				options: OptionsPatch {
					bem_enabled: Some(true),
					..OptionsPatch::default()
				},
				..UserConfig::default()
			},
			&GlobalConfig::default(),
		)
	}

	fn node_with_class(class: &str) -> AbbreviationNode {
		AbbreviationNode {
			name: Some("div".to_string()),
			attributes: Some(vec![AbbreviationAttribute::new(
				"class",
				vec![ValueToken::Text(class.to_string())],
			)]),
			..AbbreviationNode::default()
		}
	}

	#[test]
	fn test_modifier_expansion() {
		let config = bem_config();
		let mut node = node_with_class("b_m");
		bem(&mut node, &[], &config);
		assert_eq!(class_value(&node), "b b_m");
	}

	#[test]
	fn test_idempotent() {
		let config = bem_config();
		let mut node = node_with_class("b_m");
		bem(&mut node, &[], &config);
		let first = class_value(&node);
		bem(&mut node, &[], &config);
		assert_eq!(class_value(&node), first);
	}
}


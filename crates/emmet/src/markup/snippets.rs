//! Markup snippet resolution: nodes whose name matches a snippet key are
//! replaced with the parsed snippet tree.

use emmet_abbreviation::ast::{Abbreviation, AbbreviationNode};
use emmet_abbreviation::{ConvertOptions, parse};

use crate::config::Config;
use crate::error::Error;

/// Finds matching snippets and resolves them into parsed abbreviations.
///
/// A snippet is an alias to another abbreviation: a predefined set of name
/// and attributes, possibly a complex tree with multiple elements. The
/// snippet is parsed and recursively resolved, then the host node contents
/// are moved into the new tree.
pub fn resolve_snippets(abbr: &mut Abbreviation, config: &Config) -> Result<(), Error> {
	let mut stack: Vec<String> = Vec::new();
	resolve_children(&mut abbr.children, config, &mut stack)
}

fn resolve_children(
	children: &mut Vec<AbbreviationNode>,
	config: &Config,
	stack: &mut Vec<String>,
) -> Result<(), Error> {
	let mut i = 0;
	while i < children.len() {
		match resolve_node(&mut children[i], config, stack)? {
			Some(replacement) => {
				// Replacement nodes are already fully resolved
				let count = replacement.len();
				children.splice(i..=i, replacement);
				i += count;
			}
			None => {
				resolve_children(&mut children[i].children, config, stack)?;
				i += 1;
			}
		}
	}

	Ok(())
}

/// Resolves a single node against the snippet registry. Returns the nodes
/// that should replace it, or `None` when the node is left as-is.
fn resolve_node(
	node: &mut AbbreviationNode,
	config: &Config,
	stack: &mut Vec<String>,
) -> Result<Option<Vec<AbbreviationNode>>, Error> {
	let Some(name) = &node.name else {
		return Ok(None);
	};

	let Some(snippet) = config.snippets.get(name) else {
		return Ok(None);
	};

	// A snippet on the stack means a circular reference. It can be either a
	// user error or a perfectly valid snippet like `"img": "img[src alt]/"`,
	// an element with a predefined shape. Keep the element as-is.
	if stack.contains(snippet) {
		return Ok(None);
	}

	log::trace!("resolving snippet {name:?}");

	let options = ConvertOptions {
		variables: Some(&config.variables),
		max_repeat: config.max_repeat,
		jsx: config.options.jsx.enabled,
		href: config.options.markup.href,
		..ConvertOptions::default()
	};
	let mut parsed = parse(snippet, &options).map_err(Error::from_markup)?;

	let snippet = snippet.clone();
	stack.push(snippet);
	resolve_children(&mut parsed.children, config, stack)?;
	stack.pop();

	// Resolve the host's own children before re-parenting them
	resolve_children(&mut node.children, config, stack)?;

	// Move current node contents into the new tree: the host value, repeat
	// and self-closing flag land on the deepest element, the host children
	// are re-parented under it
	if let Some(deepest) = parsed.deepest_mut() {
		if node.self_closing {
			deepest.self_closing = true;
		}
		if node.value.is_some() {
			deepest.value = node.value.take();
		}
		if node.repeat.is_some() {
			deepest.repeat = node.repeat.take();
		}
		deepest.children.append(&mut node.children);
	}

	// Attributes from the host node go into every top-level node of the
	// parsed abbreviation
	if let Some(host_attrs) = node.attributes.take() {
		for top_node in &mut parsed.children {
			let own = top_node.attributes.take().unwrap_or_default();
			let merged = if config.options.output.reverse_attributes {
				let mut merged = host_attrs.clone();
				merged.extend(own);
				merged
			} else {
				let mut merged = own;
				merged.extend(host_attrs.iter().cloned());
				merged
			};
			top_node.attributes = Some(merged);
		}
	}

	Ok(Some(parsed.children))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::{Config, GlobalConfig, UserConfig};
	use emmet_abbreviation::ValueToken;
	use indexmap::IndexMap;

	fn config_with(snippets: &[(&str, &str)]) -> Config {
		let snippets: IndexMap<String, String> = snippets
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		Config::new(
			UserConfig {
				snippets,
				..UserConfig::default()
			},
			&GlobalConfig::default(),
		)
	}

	fn resolved(abbr: &str, config: &Config) -> Abbreviation {
		let mut abbr = parse(abbr, &ConvertOptions::default()).unwrap();
		resolve_snippets(&mut abbr, config).unwrap();
		abbr
	}

	#[test]
	fn test_self_referential_snippet() {
		// `img` resolves to a single element with merged attributes and no
		// infinite recursion
		let config = Config::default();
		let abbr = resolved("img", &config);
		assert_eq!(abbr.children.len(), 1);

		let img = &abbr.children[0];
		assert_eq!(img.name.as_deref(), Some("img"));
		assert!(img.self_closing);
		let attrs = img.attributes.as_ref().unwrap();
		assert_eq!(attrs[0].name.as_deref(), Some("src"));
		assert_eq!(attrs[1].name.as_deref(), Some("alt"));
	}

	#[test]
	fn test_host_attributes_appended() {
		let config = config_with(&[("foo", ".foo[bar=baz]")]);
		let abbr = resolved("foo#main", &config);

		let node = &abbr.children[0];
		let attrs = node.attributes.as_ref().unwrap();
		let names: Vec<_> = attrs
			.iter()
			.map(|attr| attr.name.as_deref().unwrap_or(""))
			.collect();
		assert_eq!(names, vec!["class", "bar", "id"]);
	}

	#[test]
	fn test_children_reparented_under_deepest() {
		let config = config_with(&[("wrap", "div>ul")]);
		let abbr = resolved("wrap>p", &config);

		let div = &abbr.children[0];
		assert_eq!(div.name.as_deref(), Some("div"));
		let ul = &div.children[0];
		assert_eq!(ul.name.as_deref(), Some("ul"));
		assert_eq!(ul.children[0].name.as_deref(), Some("p"));
	}

	#[test]
	fn test_value_moves_to_deepest() {
		let config = Config::default();
		let abbr = resolved("a{foo}", &config);

		let a = &abbr.children[0];
		assert_eq!(a.name.as_deref(), Some("a"));
		assert_eq!(a.value, Some(vec![ValueToken::Text("foo".into())]));
		assert!(a.attributes.is_some());
	}

	#[test]
	fn test_nested_snippet_resolution() {
		// `link:css` builds on the `link` snippet
		let config = Config::default();
		let abbr = resolved("link:css", &config);

		let link = &abbr.children[0];
		assert_eq!(link.name.as_deref(), Some("link"));
		let attrs = link.attributes.as_ref().unwrap();
		let names: Vec<_> = attrs
			.iter()
			.map(|attr| attr.name.as_deref().unwrap_or(""))
			.collect();
		// `rel`/`href` from the base snippet plus `href` from the alias
		assert_eq!(names, vec!["rel", "href", "href"]);
	}
}

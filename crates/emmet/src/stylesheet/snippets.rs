//! Parsed stylesheet snippet index with the shorthand→longhand dependency
//! graph.

use std::sync::LazyLock;

use emmet_css_abbreviation::{CssToken, CssTokenKind, CssValue, parse};
use indexmap::IndexMap;
use regex::Regex;

static RE_PROPERTY: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^([a-z-]+)(?:\s*:\s*([^\n\r;]+?);*)?$").unwrap());

/// Raw text snippet: an arbitrary template, possibly with `${N}`
/// placeholders.
#[derive(Debug, Clone)]
pub struct CssSnippetRaw {
	pub key: String,
	pub value: String,
}

/// CSS property snippet with parsed value alternatives.
#[derive(Debug, Clone)]
pub struct CssSnippetProperty {
	pub key: String,
	pub property: String,
	/// Value alternatives, one token list per `|`-separated variant.
	pub value: Vec<Vec<CssValue>>,
	/// Keywords from the alternatives, addressable by fuzzy match.
	pub keywords: IndexMap<String, CssToken>,
	/// More specific properties nested under this one, as indices into the
	/// snippet index.
	pub dependencies: Vec<usize>,
}

#[derive(Debug, Clone)]
pub enum CssSnippet {
	Raw(CssSnippetRaw),
	Property(Box<CssSnippetProperty>),
}

impl CssSnippet {
	pub fn key(&self) -> &str {
		match self {
			CssSnippet::Raw(raw) => &raw.key,
			CssSnippet::Property(prop) => &prop.key,
		}
	}

	pub fn as_property(&self) -> Option<&CssSnippetProperty> {
		match self {
			CssSnippet::Property(prop) => Some(prop),
			CssSnippet::Raw(_) => None,
		}
	}
}

/// Parsed snippet catalog, sorted by key, with the property dependency
/// graph resolved.
#[derive(Debug, Clone, Default)]
pub struct CssSnippetIndex {
	pub snippets: Vec<CssSnippet>,
}

impl CssSnippetIndex {
	pub fn get(&self, index: usize) -> &CssSnippet {
		&self.snippets[index]
	}
}

/// Converts raw snippet definitions into the internal representation.
pub fn convert_snippets<'a>(
	snippets: impl IntoIterator<Item = (&'a String, &'a String)>,
) -> CssSnippetIndex {
	let mut result: Vec<CssSnippet> = snippets
		.into_iter()
		.map(|(key, value)| create_snippet(key, value))
		.collect();

	result.sort_by(|a, b| a.key().cmp(b.key()));
	nest(&mut result);

	CssSnippetIndex { snippets: result }
}

/// Creates the parsed form of a single raw snippet.
///
/// A snippet is either a CSS property with `|`-separated value alternatives
/// or an arbitrary text template.
pub fn create_snippet(key: &str, value: &str) -> CssSnippet {
	let Some(captures) = RE_PROPERTY.captures(value) else {
		return CssSnippet::Raw(CssSnippetRaw {
			key: key.to_string(),
			value: value.to_string(),
		});
	};

	let property = captures.get(1).map_or("", |m| m.as_str()).to_string();
	let mut keywords = IndexMap::new();
	let mut parsed = Vec::new();

	if let Some(alternatives) = captures.get(2) {
		for alternative in alternatives.as_str().split('|') {
			if let Some(values) = parse_value(alternative) {
				for css_value in &values {
					collect_keywords(css_value, &mut keywords);
				}
				parsed.push(values);
			}
		}
	}

	CssSnippet::Property(Box::new(CssSnippetProperty {
		key: key.to_string(),
		property,
		value: parsed,
		keywords,
		dependencies: Vec::new(),
	}))
}

/// Builds the dependency graph between sorted property snippets:
/// `background` → `background-position` → `background-position-x`.
fn nest(snippets: &mut [CssSnippet]) {
	let mut stack: Vec<usize> = Vec::new();
	let mut links: Vec<(usize, usize)> = Vec::new();

	for index in 0..snippets.len() {
		let Some(cur) = snippets[index].as_property() else {
			continue;
		};

		// Since the list is sorted, shorthand properties align right before
		// their more specific variants
		while let Some(&top) = stack.last() {
			let prev = snippets[top]
				.as_property()
				.expect("only properties are stacked");

			let is_dependency = cur.property.starts_with(&prev.property)
				&& cur.property.len() > prev.property.len()
				&& cur.property.as_bytes()[prev.property.len()] == b'-';

			if is_dependency {
				links.push((top, index));
				stack.push(index);
				break;
			}

			stack.pop();
		}

		if stack.is_empty() {
			stack.push(index);
		}
	}

	for (parent, child) in links {
		if let CssSnippet::Property(prop) = &mut snippets[parent] {
			prop.dependencies.push(child);
		}
	}
}

fn parse_value(value: &str) -> Option<Vec<CssValue>> {
	let parsed = parse(value.trim(), true).ok()?;
	parsed.into_iter().next().map(|prop| prop.value)
}

fn collect_keywords(css_value: &CssValue, dest: &mut IndexMap<String, CssToken>) {
	for token in &css_value.value {
		match &token.kind {
			CssTokenKind::Literal(value) => {
				dest.insert(value.clone(), token.clone());
			}
			CssTokenKind::FunctionCall { name, .. } => {
				dest.insert(name.clone(), token.clone());
			}
			CssTokenKind::Field { name, .. } => {
				// A named field contributes its placeholder as a literal
				let value = name.trim();
				if !value.is_empty() {
					dest.insert(
						value.to_string(),
						CssToken::synthetic(CssTokenKind::Literal(value.to_string())),
					);
				}
			}
			_ => {}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use indexmap::IndexMap;

	fn index(entries: &[(&str, &str)]) -> CssSnippetIndex {
		let map: IndexMap<String, String> = entries
			.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect();
		convert_snippets(&map)
	}

	#[test]
	fn test_classify() {
		let index = index(&[
			("p", "padding"),
			("d", "display:block|none"),
			("@kf", "@keyframes ${1:identifier} {\n\t${2}\n}"),
		]);

		assert!(matches!(
			index.snippets.iter().find(|s| s.key() == "@kf").unwrap(),
			CssSnippet::Raw(_)
		));

		let d = index
			.snippets
			.iter()
			.find(|s| s.key() == "d")
			.and_then(CssSnippet::as_property)
			.unwrap();
		assert_eq!(d.property, "display");
		assert_eq!(d.value.len(), 2);
		assert!(d.keywords.contains_key("block"));

		let p = index
			.snippets
			.iter()
			.find(|s| s.key() == "p")
			.and_then(CssSnippet::as_property)
			.unwrap();
		assert!(p.value.is_empty());
	}

	#[test]
	fn test_dependency_graph() {
		let idx = index(&[
			("bg", "background:#000"),
			("bgp", "background-position:0 0"),
			("bgpx", "background-position-x"),
			("c", "color:#000"),
		]);

		let bg_pos = idx
			.snippets
			.iter()
			.position(|s| s.as_property().is_some_and(|p| p.property == "background"))
			.unwrap();
		let bg = idx.snippets[bg_pos].as_property().unwrap();
		assert_eq!(bg.dependencies.len(), 1);

		let dep = idx.snippets[bg.dependencies[0]].as_property().unwrap();
		assert_eq!(dep.property, "background-position");
		assert_eq!(dep.dependencies.len(), 1);

		let dep2 = idx.snippets[dep.dependencies[0]].as_property().unwrap();
		assert_eq!(dep2.property, "background-position-x");
	}

	#[test]
	fn test_function_keywords() {
		let idx = index(&[("trf", "transform:scale(${1:x}, ${2:y})|rotate(${1:angle})")]);
		let trf = idx.snippets[0].as_property().unwrap();
		assert!(trf.keywords.contains_key("scale"));
		assert!(trf.keywords.contains_key("rotate"));
	}
}

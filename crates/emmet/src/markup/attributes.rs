//! Attribute merging: de-duplicates attributes with the same name and
//! concatenates class names.

use emmet_abbreviation::ast::{AbbreviationAttribute, AbbreviationNode, AttributeValueKind, push_text};

use crate::config::Config;

/// Merges attributes in the current node.
pub fn merge_attributes(node: &mut AbbreviationNode, config: &Config) {
	let Some(attrs) = node.attributes.take() else {
		return;
	};

	let mut attributes: Vec<AbbreviationAttribute> = Vec::with_capacity(attrs.len());

	for attr in attrs {
		let Some(name) = attr.name.clone() else {
			attributes.push(attr);
			continue;
		};

		match attributes
			.iter()
			.position(|existing| existing.name.as_deref() == Some(name.as_str()))
		{
			Some(ix) => {
				let prev = &mut attributes[ix];
				if name == "class" {
					prev.value = merge_value(prev.value.take(), attr.value, " ");
				} else {
					merge_declarations(prev, attr, config);
				}
			}
			None => attributes.push(attr),
		}
	}

	node.attributes = Some(attributes);
}

/// Merges two token lists into one; adjacent strings are merged together.
fn merge_value(
	prev_value: Option<Vec<emmet_abbreviation::ValueToken>>,
	next_value: Option<Vec<emmet_abbreviation::ValueToken>>,
	glue: &str,
) -> Option<Vec<emmet_abbreviation::ValueToken>> {
	match (prev_value, next_value) {
		(Some(mut prev), Some(next)) => {
			if !prev.is_empty() && !glue.is_empty() {
				push_text(&mut prev, glue);
			}
			for token in next {
				emmet_abbreviation::ast::push_token(&mut prev, token);
			}
			Some(prev)
		}
		(prev, next) => prev.or(next),
	}
}

/// Merges data from the `src` attribute into `dest`.
fn merge_declarations(
	dest: &mut AbbreviationAttribute,
	src: AbbreviationAttribute,
	config: &Config,
) {
	dest.name = src.name;

	if !config.options.output.reverse_attributes {
		dest.value = src.value;
	}

	// Keep high-priority properties
	if !dest.implied {
		dest.implied = src.implied;
	}
	if !dest.boolean {
		dest.boolean = src.boolean;
	}

	if dest.value_kind != AttributeValueKind::Expression {
		dest.value_kind = src.value_kind;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use emmet_abbreviation::ValueToken;

	fn attr(name: &str, value: &str) -> AbbreviationAttribute {
		AbbreviationAttribute::new(name, vec![ValueToken::Text(value.to_string())])
	}

	#[test]
	fn test_class_concat() {
		let mut node = AbbreviationNode {
			attributes: Some(vec![attr("class", "a"), attr("class", "b")]),
			..AbbreviationNode::default()
		};
		merge_attributes(&mut node, &Config::default());

		let attrs = node.attributes.unwrap();
		assert_eq!(attrs.len(), 1);
		assert_eq!(attrs[0].value, Some(vec![ValueToken::Text("a b".into())]));
	}

	#[test]
	fn test_overwrite() {
		let mut node = AbbreviationNode {
			attributes: Some(vec![attr("href", "a"), attr("href", "b")]),
			..AbbreviationNode::default()
		};
		merge_attributes(&mut node, &Config::default());

		let attrs = node.attributes.unwrap();
		assert_eq!(attrs.len(), 1);
		assert_eq!(attrs[0].value, Some(vec![ValueToken::Text("b".into())]));
	}
}

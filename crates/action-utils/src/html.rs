//! HTML context tag and item selection models.

use std::ops::ControlFlow;

use emmet_html_matcher::utils::{ElementType, ScannerOptions};
use emmet_html_matcher::{AttributeToken, get_attributes, parse_attributes, scan};
use emmet_scanner::utils::is_quote;
use serde::Serialize;

use crate::{SelectItemModel, push_range, token_list};

/// Open or self-closing tag under a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContextTag {
	pub name: String,
	#[serde(rename = "type")]
	pub kind: ElementType,
	pub start: usize,
	pub end: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub attributes: Option<Vec<AttributeToken>>,
}

/// Check if there’s an open or self-closing tag under given location. If
/// found, returns its name, range and parsed attributes.
pub fn get_open_tag(code: &str, pos: usize) -> Option<ContextTag> {
	let options = ScannerOptions::default();
	let mut tag = None;

	scan(
		code,
		|name, elem_type, start, end| {
			if start < pos && pos < end {
				let attributes = match elem_type {
					ElementType::Open | ElementType::SelfClose => {
						Some(get_attributes(code, start, end, name))
					}
					ElementType::Close => None,
				};
				tag = Some(ContextTag {
					name: name.to_string(),
					kind: elem_type,
					start,
					end,
					attributes,
				});
				return ControlFlow::Break(());
			}
			if end > pos {
				return ControlFlow::Break(());
			}

			ControlFlow::Continue(())
		},
		&options.special,
	);

	tag
}

/// Returns item ranges for the Select Next/Previous Item action.
pub fn select_item_html(code: &str, pos: usize, is_prev: bool) -> Option<SelectItemModel> {
	if is_prev {
		select_previous_item(code, pos)
	} else {
		select_next_item(code, pos)
	}
}

/// Returns the selection model for the next open or self-closing tag.
fn select_next_item(code: &str, pos: usize) -> Option<SelectItemModel> {
	let options = ScannerOptions::default();
	let mut result = None;

	scan(
		code,
		|name, elem_type, start, end| {
			if elem_type != ElementType::Close && end > pos {
				result = Some(get_tag_selection_model(code, name, start, end));
				return ControlFlow::Break(());
			}
			ControlFlow::Continue(())
		},
		&options.special,
	);

	result
}

/// Returns the selection model for the closest open or self-closing tag
/// left of given position.
fn select_previous_item(code: &str, pos: usize) -> Option<SelectItemModel> {
	let options = ScannerOptions::default();
	let mut last: Option<(String, usize, usize)> = None;

	scan(
		code,
		|name, elem_type, start, end| {
			if start >= pos {
				return ControlFlow::Break(());
			}

			if elem_type != ElementType::Close {
				last = Some((name.to_string(), start, end));
			}

			ControlFlow::Continue(())
		},
		&options.special,
	);

	last.map(|(name, start, end)| get_tag_selection_model(code, &name, start, end))
}

/// Parses an open or self-closing tag in the `start..end` range and returns
/// its selection model: the tag name, attributes, attribute values and
/// class-name tokens.
fn get_tag_selection_model(code: &str, name: &str, start: usize, end: usize) -> SelectItemModel {
	// Tag name range
	let mut ranges = vec![(start + 1, start + 1 + name.len())];

	// Attribute ranges
	let tag_src = &code[start..end];
	for attr in parse_attributes(tag_src, Some(name)) {
		if let (Some(value), Some(value_start), Some(value_end)) =
			(&attr.value, attr.value_start, attr.value_end)
		{
			push_range(&mut ranges, (start + attr.name_start, start + value_end));

			// Unquoted value range
			let val = value_range(value, value_start, value_end);
			if val.0 != val.1 {
				push_range(&mut ranges, (start + val.0, start + val.1));

				if attr.name == "class" {
					// Split the class value into space-separated tokens
					for token in token_list(&tag_src[val.0..val.1], start + val.0) {
						push_range(&mut ranges, token);
					}
				}
			}
		} else {
			// Boolean attribute
			push_range(&mut ranges, (start + attr.name_start, start + attr.name_end));
		}
	}

	SelectItemModel { start, end, ranges }
}

/// Returns the value range of an attribute without its quotes or expression
/// braces.
fn value_range(value: &str, value_start: usize, value_end: usize) -> (usize, usize) {
	let first = value.chars().next().unwrap_or_default();
	let last = value.chars().last().unwrap_or_default();

	if is_quote(first) {
		return (
			value_start + 1,
			value_end - usize::from(last == first),
		);
	}

	if first == '{' && last == '}' {
		return (value_start + 1, value_end - 1);
	}

	(value_start, value_end)
}

#[cfg(test)]
mod tests {
	use super::*;

	const DOC: &str = "<div class=\"a b\"><img src=\"pic.png\" alt></div>";

	#[test]
	fn test_get_open_tag() {
		let tag = get_open_tag(DOC, 3).unwrap();
		assert_eq!(tag.name, "div");
		assert_eq!(tag.kind, ElementType::Open);
		let attrs = tag.attributes.unwrap();
		assert_eq!(attrs[0].name, "class");

		assert!(get_open_tag(DOC, 17).is_none());
	}

	#[test]
	fn test_select_next() {
		let model = select_item_html(DOC, 0, false).unwrap();
		assert_eq!(model.start, 0);
		assert_eq!(model.end, 17);
		// name, class attr, class value, two class tokens
		assert_eq!(model.ranges.len(), 5);
		assert_eq!(&DOC[model.ranges[0].0..model.ranges[0].1], "div");
		assert_eq!(&DOC[model.ranges[2].0..model.ranges[2].1], "a b");
	}

	#[test]
	fn test_select_previous() {
		let model = select_item_html(DOC, 45, true).unwrap();
		assert_eq!(&DOC[model.start..model.end], "<img src=\"pic.png\" alt>");
	}
}

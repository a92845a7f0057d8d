//! Tag matching and balancing over HTML/XML source for "balanced select"
//! editor actions.

pub mod attributes;
pub mod scan;
pub mod utils;

use std::ops::ControlFlow;

use serde::Serialize;

pub use attributes::{AttributeToken, attributes as parse_attributes, get_attribute_value};
pub use scan::scan;
pub use utils::{ElementType, ScannerOptions};

/// Source range as a `(start, end)` byte offset pair.
pub type TextRange = (usize, usize);

/// Tag matched around a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedTag {
	/// Name of the matched tag.
	pub name: String,
	/// List of tag attributes.
	pub attributes: Vec<AttributeToken>,
	/// Range of the opening tag.
	pub open: TextRange,
	/// Range of the closing tag. Absent for self-closing tags.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub close: Option<TextRange>,
}

/// Tag pair (or self-closing tag) found while balancing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalancedTag {
	pub name: String,
	pub open: TextRange,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub close: Option<TextRange>,
}

struct Tag {
	name: String,
	start: usize,
	end: usize,
}

struct InwardTag {
	name: String,
	ranges: Vec<usize>,
	first_child: Option<Box<InwardTag>>,
}

/// Finds the tag that contains given `pos` location in `source`.
pub fn match_tag(source: &str, pos: usize, options: &ScannerOptions) -> Option<MatchedTag> {
	let mut stack: Vec<Tag> = Vec::new();
	let mut result = None;

	scan(
		source,
		|name, elem_type, start, end| {
			let elem_type = if elem_type == ElementType::Open && is_self_close(name, options) {
				// Empty element in HTML mode is self-closing
				ElementType::SelfClose
			} else {
				elem_type
			};

			match elem_type {
				ElementType::Open => {
					stack.push(Tag {
						name: name.to_string(),
						start,
						end,
					});
				}
				ElementType::SelfClose => {
					if start < pos && pos < end {
						// Matched given self-closing tag
						result = Some(MatchedTag {
							name: name.to_string(),
							attributes: get_attributes(source, start, end, name),
							open: (start, end),
							close: None,
						});
						return ControlFlow::Break(());
					}
				}
				ElementType::Close => {
					if let Some(tag) = stack.last() {
						if tag.name == name {
							// Matching closing tag found
							if tag.start < pos && pos < end {
								result = Some(MatchedTag {
									name: name.to_string(),
									attributes: get_attributes(source, tag.start, tag.end, name),
									open: (tag.start, tag.end),
									close: Some((start, end)),
								});
								return ControlFlow::Break(());
							}

							stack.pop();
						}
					}
				}
			}

			ControlFlow::Continue(())
		},
		&options.special,
	);

	result
}

/// Returns a list of all tag pairs that could match given location when
/// moving in outward direction.
pub fn balanced_outward(source: &str, pos: usize, options: &ScannerOptions) -> Vec<BalancedTag> {
	let mut stack: Vec<Tag> = Vec::new();
	let mut result = Vec::new();

	scan(
		source,
		|name, elem_type, start, end| {
			match elem_type {
				ElementType::Close => {
					if let Some(tag) = stack.last() {
						if tag.name == name {
							// Matching closing tag found, check if the pair
							// is an outward balancing candidate
							if tag.start < pos && pos < end {
								result.push(BalancedTag {
									name: name.to_string(),
									open: (tag.start, tag.end),
									close: Some((start, end)),
								});
							}
							stack.pop();
						}
					}
				}
				_ if elem_type == ElementType::SelfClose || is_self_close(name, options) => {
					if start < pos && pos < end {
						// Matched a self-closed tag
						result.push(BalancedTag {
							name: name.to_string(),
							open: (start, end),
							close: None,
						});
					}
				}
				_ => stack.push(Tag {
					name: name.to_string(),
					start,
					end,
				}),
			}

			ControlFlow::Continue(())
		},
		&options.special,
	);

	result
}

/// Returns a list of all tag pairs that could match given location when
/// moving in inward direction.
pub fn balanced_inward(source: &str, pos: usize, options: &ScannerOptions) -> Vec<BalancedTag> {
	// Store the first child of every matched tag until the one that matches
	// given location is found
	let mut stack: Vec<InwardTag> = Vec::new();
	let mut result = Vec::new();

	scan(
		source,
		|name, elem_type, start, end| {
			match elem_type {
				ElementType::Close => {
					let Some(tag) = stack.last() else {
						// Lone closing tag, ignore it
						return ControlFlow::Continue(());
					};

					if tag.name == name {
						if tag.ranges[0] <= pos && pos <= end {
							// Matching pair found
							let mut tag = stack.pop().expect("peeked above");
							result.push(BalancedTag {
								name: name.to_string(),
								open: (tag.ranges[0], tag.ranges[1]),
								close: Some((start, end)),
							});

							while let Some(child) = tag.first_child.take() {
								let close = if child.ranges.len() > 2 {
									Some((child.ranges[2], child.ranges[3]))
								} else {
									None
								};
								result.push(BalancedTag {
									name: child.name.clone(),
									open: (child.ranges[0], child.ranges[1]),
									close,
								});
								tag = *child;
							}

							return ControlFlow::Break(());
						}

						let mut tag = stack.pop().expect("peeked above");
						if let Some(parent) = stack.last_mut() {
							if parent.first_child.is_none() {
								// Store the closed tag as the parent's first
								// child
								tag.ranges.push(start);
								tag.ranges.push(end);
								parent.first_child = Some(Box::new(tag));
							}
						}
					}
				}
				_ if elem_type == ElementType::SelfClose || is_self_close(name, options) => {
					if start < pos && pos < end {
						// Matched a self-closed tag, no need to look further
						result.push(BalancedTag {
							name: name.to_string(),
							open: (start, end),
							close: None,
						});
						return ControlFlow::Break(());
					}

					if let Some(parent) = stack.last_mut() {
						if parent.first_child.is_none() {
							parent.first_child = Some(Box::new(InwardTag {
								name: name.to_string(),
								ranges: vec![start, end],
								first_child: None,
							}));
						}
					}
				}
				_ => stack.push(InwardTag {
					name: name.to_string(),
					ranges: vec![start, end],
					first_child: None,
				}),
			}

			ControlFlow::Continue(())
		},
		&options.special,
	);

	result
}

/// Returns parsed attributes of a tag in the `start..end` source range.
pub fn get_attributes(source: &str, start: usize, end: usize, name: &str) -> Vec<AttributeToken> {
	let mut attrs = parse_attributes(&source[start..end], Some(name));
	for attr in &mut attrs {
		attr.name_start += start;
		attr.name_end += start;
		if attr.value.is_some() {
			attr.value_start = attr.value_start.map(|v| v + start);
			attr.value_end = attr.value_end.map(|v| v + start);
		}
	}

	attrs
}

/// Check if given tag is self-closing in the current parsing context.
fn is_self_close(name: &str, options: &ScannerOptions) -> bool {
	!options.xml && options.empty.iter().any(|empty| empty == name)
}

#[cfg(test)]
mod tests {
	use super::*;

	const DOC: &str = "<ul><li><a href=\"\">item 1</a></li><li>item 2</li></ul>";

	#[test]
	fn test_match_tag() {
		let options = ScannerOptions::default();

		let tag = match_tag(DOC, 12, &options).unwrap();
		assert_eq!(tag.name, "a");
		assert_eq!(tag.open, (8, 19));
		assert_eq!(tag.close, Some((25, 29)));
		assert_eq!(tag.attributes.len(), 1);
		assert_eq!(tag.attributes[0].name, "href");

		let tag = match_tag(DOC, 40, &options).unwrap();
		assert_eq!(tag.name, "li");
		assert_eq!(tag.open, (34, 38));
		assert_eq!(tag.close, Some((44, 49)));

		assert!(match_tag(DOC, 0, &options).is_none());
	}

	#[test]
	fn test_self_closing_match() {
		let options = ScannerOptions::default();
		let source = "<p><img src=\"1.png\"></p>";
		let tag = match_tag(source, 5, &options).unwrap();
		assert_eq!(tag.name, "img");
		assert_eq!(tag.close, None);
	}

	#[test]
	fn test_balanced_outward() {
		let options = ScannerOptions::default();
		let tags = balanced_outward(DOC, 12, &options);
		let names: Vec<_> = tags.iter().map(|tag| tag.name.as_str()).collect();
		assert_eq!(names, vec!["a", "li", "ul"]);
	}

	#[test]
	fn test_balanced_inward() {
		let options = ScannerOptions::default();
		let tags = balanced_inward(DOC, 0, &options);
		let names: Vec<_> = tags.iter().map(|tag| tag.name.as_str()).collect();
		assert_eq!(names, vec!["ul", "li", "a"]);
	}
}

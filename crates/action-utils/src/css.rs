//! CSS context section and item selection models.

use std::ops::ControlFlow;

use emmet_css_matcher::{TokenType, scan, split_value};
use serde::Serialize;

use crate::{SelectItemModel, TextRange, push_range};

/// Context CSS section around a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssSection {
	pub start: usize,
	pub end: usize,
	pub body_start: usize,
	pub body_end: usize,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub properties: Option<Vec<CssSectionProperty>>,
}

/// Parsed property inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssSectionProperty {
	pub name: TextRange,
	pub value: TextRange,
	pub value_tokens: Vec<TextRange>,
	/// End of the previous token, e.g. where the full property text begins.
	pub before: usize,
	/// Position right after the value terminator.
	pub after: usize,
}

#[derive(Clone, Copy)]
struct Pending {
	start: usize,
	end: usize,
	delimiter: Option<usize>,
}

/// Returns the context CSS section for given location in the source code;
/// with `parse_properties` set, its inner properties are parsed as well.
pub fn get_css_section(code: &str, pos: usize, parse_props: bool) -> Option<CssSection> {
	let mut stack: Vec<Pending> = Vec::new();
	let mut result = None;

	scan(code, |kind, start, end, delimiter| {
		if start > pos && stack.is_empty() {
			return ControlFlow::Break(());
		}

		match kind {
			TokenType::Selector => stack.push(Pending {
				start,
				end,
				delimiter,
			}),
			TokenType::BlockEnd => {
				if let Some(sel) = stack.pop() {
					if sel.start <= pos && pos <= end {
						result = Some(CssSection {
							start: sel.start,
							end,
							body_start: sel.delimiter.map_or(sel.end, |d| d + 1),
							body_end: start,
							properties: None,
						});
						return ControlFlow::Break(());
					}
				}
			}
			_ => {}
		}

		ControlFlow::Continue(())
	});

	let mut section = result?;
	if parse_props {
		section.properties = Some(parse_properties(code, section.body_start, section.body_end));
	}

	Some(section)
}

/// Returns item ranges for the Select Next/Previous CSS Item action.
pub fn select_item_css(code: &str, pos: usize, is_prev: bool) -> Option<SelectItemModel> {
	if is_prev {
		select_previous_item(code, pos)
	} else {
		select_next_item(code, pos)
	}
}

/// Returns regions for selecting the next item in CSS.
fn select_next_item(code: &str, pos: usize) -> Option<SelectItemModel> {
	let mut result = None;
	let mut pending_property: Option<Pending> = None;

	scan(code, |kind, start, end, delimiter| {
		if start < pos {
			return ControlFlow::Continue(());
		}

		match kind {
			TokenType::Selector => {
				result = Some(SelectItemModel {
					start,
					end,
					ranges: vec![(start, end)],
				});
				ControlFlow::Break(())
			}
			TokenType::PropertyName => {
				pending_property = Some(Pending {
					start,
					end,
					delimiter,
				});
				ControlFlow::Continue(())
			}
			TokenType::PropertyValue => {
				let mut section = SelectItemModel {
					start,
					end: delimiter.map_or(end, |d| d + 1),
					ranges: Vec::new(),
				};

				if let Some(prop) = pending_property {
					// Full property range
					section.start = prop.start;
					push_range(&mut section.ranges, (prop.start, section.end));
				}

				// Full value range
				push_range(&mut section.ranges, (start, end));

				// Value fragments
				for range in split_value(&code[start..end], start) {
					push_range(&mut section.ranges, range);
				}

				result = Some(section);
				ControlFlow::Break(())
			}
			TokenType::BlockEnd => {
				if let Some(prop) = pending_property {
					result = Some(SelectItemModel {
						start: prop.start,
						end: prop.end,
						ranges: vec![(prop.start, prop.end)],
					});
					ControlFlow::Break(())
				} else {
					ControlFlow::Continue(())
				}
			}
		}
	});

	result
}

/// Returns regions for selecting the previous item in CSS.
fn select_previous_item(code: &str, pos: usize) -> Option<SelectItemModel> {
	let mut kind: Option<TokenType> = None;
	let mut token = (0, 0);
	let mut value: Option<Pending> = None;

	// Accumulate context until the given position is reached
	scan(code, |token_type, start, end, delimiter| {
		if start >= pos && token_type != TokenType::PropertyValue {
			return ControlFlow::Break(());
		}

		match token_type {
			TokenType::Selector | TokenType::PropertyName => {
				kind = Some(token_type);
				token = (start, end);
				value = None;
			}
			TokenType::PropertyValue => {
				value = Some(Pending {
					start,
					end,
					delimiter,
				});
			}
			TokenType::BlockEnd => {}
		}

		ControlFlow::Continue(())
	});

	match kind? {
		TokenType::Selector => Some(SelectItemModel {
			start: token.0,
			end: token.1,
			ranges: vec![token],
		}),
		TokenType::PropertyName => {
			let mut result = SelectItemModel {
				start: token.0,
				end: token.1,
				ranges: Vec::new(),
			};

			if let Some(value) = value {
				result.end = value.delimiter.map_or(value.end, |d| d + 1);
				// Full property range
				push_range(&mut result.ranges, (token.0, result.end));
				// Full value range
				push_range(&mut result.ranges, (value.start, value.end));
				// Value fragments
				for range in split_value(&code[value.start..value.end], value.start) {
					push_range(&mut result.ranges, range);
				}
			} else {
				push_range(&mut result.ranges, token);
			}

			Some(result)
		}
		_ => None,
	}
}

/// Parses properties in the `from..to` fragment of `code`. The bounds must
/// point inside a section body; properties of nested sections are ignored.
pub fn parse_properties(code: &str, parse_from: usize, parse_to: usize) -> Vec<CssSectionProperty> {
	let fragment = &code[parse_from..parse_to];
	let mut result = Vec::new();
	let mut pending_name: Option<Pending> = None;
	let mut nested = 0;
	let mut before = parse_from;

	scan(fragment, |kind, start, end, delimiter| {
		match kind {
			TokenType::Selector => nested += 1,
			TokenType::BlockEnd => {
				nested -= 1;
				before = parse_from + end;
			}
			TokenType::PropertyName if nested == 0 => {
				if let Some(name) = pending_name.take() {
					// Previous name without a value: emit an empty property
					let value_pos = name.delimiter.map_or(name.end, |d| d);
					result.push(make_property(
						fragment, name, before, value_pos, value_pos, value_pos, parse_from,
					));
					before = parse_from + start;
				}
				pending_name = Some(Pending {
					start,
					end,
					delimiter,
				});
			}
			TokenType::PropertyValue if nested == 0 => {
				if let Some(name) = pending_name.take() {
					let terminator = delimiter.unwrap_or(end);
					result.push(make_property(
						fragment, name, before, start, end, terminator, parse_from,
					));
					before = parse_from + terminator + 1;
				}
			}
			_ => {}
		}

		ControlFlow::Continue(())
	});

	result
}

fn make_property(
	fragment: &str,
	name: Pending,
	before: usize,
	value_start: usize,
	value_end: usize,
	terminator: usize,
	offset: usize,
) -> CssSectionProperty {
	CssSectionProperty {
		name: (offset + name.start, offset + name.end),
		value: (offset + value_start, offset + value_end),
		value_tokens: split_value(&fragment[value_start..value_end], offset + value_start),
		before,
		after: offset + terminator + 1,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const DOC: &str = "a { b: c; d: e f; } g { h: i; }";

	#[test]
	fn test_get_section() {
		let section = get_css_section(DOC, 5, false).unwrap();
		assert_eq!(&DOC[section.start..section.end], "a { b: c; d: e f; }");
		assert_eq!(&DOC[section.body_start..section.body_end], " b: c; d: e f; ");
	}

	#[test]
	fn test_section_properties() {
		let section = get_css_section(DOC, 5, true).unwrap();
		let props = section.properties.unwrap();
		assert_eq!(props.len(), 2);
		assert_eq!(&DOC[props[0].name.0..props[0].name.1], "b");
		assert_eq!(&DOC[props[0].value.0..props[0].value.1], "c");
		assert_eq!(&DOC[props[1].value.0..props[1].value.1], "e f");
		assert_eq!(props[1].value_tokens.len(), 2);
	}

	#[test]
	fn test_select_next() {
		let model = select_item_css(DOC, 0, false).unwrap();
		assert_eq!(&DOC[model.start..model.end], "a");

		let model = select_item_css(DOC, 2, false).unwrap();
		assert_eq!(&DOC[model.start..model.end], "b: c;");
		assert_eq!(model.ranges.len(), 2);
	}

	#[test]
	fn test_select_previous() {
		let model = select_item_css(DOC, 10, true).unwrap();
		assert_eq!(&DOC[model.start..model.end], "b: c;");
	}
}

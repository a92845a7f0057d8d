//! Section and property matching over stylesheet source for "balanced
//! select" editor actions.

pub mod parse;
pub mod scan;

use std::ops::ControlFlow;

use serde::Serialize;

pub use parse::split_value;
pub use scan::{TokenType, scan};

/// Source range as a `(start, end)` byte offset pair.
pub type TextRange = (usize, usize);

/// Kind of a matched region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchType {
	Selector,
	Property,
}

/// Region matched around a source position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
	#[serde(rename = "type")]
	pub kind: MatchType,
	pub start: usize,
	pub end: usize,
	pub body_start: usize,
	pub body_end: usize,
}

#[derive(Clone, Copy)]
struct PendingRange {
	start: usize,
	end: usize,
	delimiter: Option<usize>,
}

struct InwardRange {
	start: usize,
	end: usize,
	delimiter: Option<usize>,
	first_child: Option<Box<InwardRange>>,
}

/// Finds the section or property that contains given `pos` location.
pub fn match_css(source: &str, pos: usize) -> Option<MatchResult> {
	let mut stack: Vec<PendingRange> = Vec::new();
	let mut pending_property: Option<PendingRange> = None;
	let mut result = None;

	scan(source, |kind, start, end, delimiter| {
		match kind {
			TokenType::Selector => {
				pending_property = None;
				stack.push(PendingRange {
					start,
					end,
					delimiter,
				});
			}
			TokenType::BlockEnd => {
				pending_property = None;
				if let Some(parent) = stack.pop() {
					if parent.start < pos && pos < end {
						result = Some(MatchResult {
							kind: MatchType::Selector,
							start: parent.start,
							end,
							body_start: parent.delimiter.map_or(parent.end, |d| d + 1),
							body_end: start,
						});
						return ControlFlow::Break(());
					}
				}
			}
			TokenType::PropertyName => {
				pending_property = Some(PendingRange {
					start,
					end,
					delimiter,
				});
			}
			TokenType::PropertyValue => {
				if let Some(pending) = pending_property {
					if pending.start < pos && pos < end {
						result = Some(MatchResult {
							kind: MatchType::Property,
							start: pending.start,
							end: delimiter.map_or(end, |d| d + 1),
							body_start: start,
							body_end: end,
						});
						return ControlFlow::Break(());
					}
				}
				pending_property = None;
			}
		}

		ControlFlow::Continue(())
	});

	result
}

/// Returns all ranges that could match given location when moving in
/// outward direction.
pub fn balanced_outward(source: &str, pos: usize) -> Vec<TextRange> {
	let mut stack: Vec<PendingRange> = Vec::new();
	let mut prop: Option<PendingRange> = None;
	let mut result: Vec<TextRange> = Vec::new();

	scan(source, |kind, start, end, delimiter| {
		match kind {
			TokenType::Selector => {
				stack.push(PendingRange {
					start,
					end,
					delimiter,
				});
			}
			TokenType::BlockEnd => {
				if let Some(left) = stack.pop() {
					if left.start < pos && pos < end {
						// Matching section found
						let body_start = left.delimiter.map_or(left.end, |d| d + 1);
						if let Some(inner) = inner_range(source, body_start, start) {
							push(&mut result, inner);
						}
						push(&mut result, (left.start, end));
					}
				}
				if stack.is_empty() {
					return ControlFlow::Break(());
				}
			}
			TokenType::PropertyName => {
				prop = Some(PendingRange {
					start,
					end,
					delimiter,
				});
			}
			TokenType::PropertyValue => {
				if let Some(p) = prop {
					if p.start < pos && pos < delimiter.map_or(end, |d| d.max(end)) {
						// Push the full property and value ranges
						push(&mut result, (start, end));
						push(&mut result, (p.start, delimiter.map_or(end, |d| d + 1)));
					}
				}
			}
		}

		if kind != TokenType::PropertyName {
			prop = None;
		}

		ControlFlow::Continue(())
	});

	result
}

/// Returns all ranges that could match given location when moving in inward
/// direction.
pub fn balanced_inward(source: &str, pos: usize) -> Vec<TextRange> {
	// Store the first child of every matched selector until the one that
	// matches given location is found
	let mut stack: Vec<InwardRange> = Vec::new();
	let mut pending_property: Option<InwardRange> = None;
	let mut result: Vec<TextRange> = Vec::new();

	scan(source, |kind, start, end, delimiter| {
		match kind {
			TokenType::BlockEnd => {
				pending_property = None;

				let Some(range) = stack.pop() else {
					// Some sort of lone closing brace, ignore it
					return ControlFlow::Continue(());
				};

				if range.start <= pos && pos <= end {
					// Matching selector found: add it and its inner range
					push(&mut result, (range.start, end));
					let body_start = range.delimiter.map_or(range.end, |d| d + 1);
					if let Some(inner) = inner_range(source, body_start, start) {
						push(&mut result, inner);
					}

					let mut current = range.first_child;
					while let Some(child) = current {
						let body_start = child.delimiter.map_or(child.end, |d| d + 1);
						push(&mut result, (child.start, child.end));
						if let Some(inner) = inner_range(source, body_start, child.end.saturating_sub(1)) {
							push(&mut result, inner);
						}
						current = child.first_child;
					}

					return ControlFlow::Break(());
				}

				if let Some(parent) = stack.last_mut() {
					if parent.first_child.is_none() {
						// No first child in the parent: store this selector
						let mut range = range;
						range.end = end;
						parent.first_child = Some(Box::new(range));
					}
				}
			}
			TokenType::PropertyName => {
				pending_property = Some(InwardRange {
					start,
					end,
					delimiter,
					first_child: None,
				});
				if let Some(parent) = stack.last_mut() {
					if parent.first_child.is_none() {
						parent.first_child = Some(Box::new(InwardRange {
							start,
							end,
							delimiter,
							first_child: None,
						}));
					}
				}
			}
			TokenType::PropertyValue => {
				if let Some(p) = &pending_property {
					if p.start <= pos && pos <= end {
						// Direct hit into a property, no need to look further
						push(&mut result, (p.start, delimiter.map_or(end, |d| d + 1)));
						push(&mut result, (start, end));
						return ControlFlow::Break(());
					}

					let full_end = delimiter.map_or(end, |d| d + 1);
					if let Some(parent) = stack.last_mut() {
						if let Some(first_child) = &mut parent.first_child {
							if first_child.start == p.start {
								// First child is the expected property name,
								// extend its range to include the value
								first_child.end = full_end;
							}
						}
					}

					pending_property = None;
				}
			}
			TokenType::Selector => {
				stack.push(InwardRange {
					start,
					end,
					delimiter,
					first_child: None,
				});
				pending_property = None;
			}
		}

		ControlFlow::Continue(())
	});

	result
}

/// Narrows given bounds to the first non-empty region; returns `None` when
/// the result is empty.
fn inner_range(source: &str, mut start: usize, mut end: usize) -> Option<TextRange> {
	let bytes = source.as_bytes();
	while start < end && (bytes[start] as char).is_ascii_whitespace() {
		start += 1;
	}

	while end > start && (bytes[end - 1] as char).is_ascii_whitespace() {
		end -= 1;
	}

	if start != end { Some((start, end)) } else { None }
}

/// Pushes a non-empty range, skipping duplicates of the last pushed one.
fn push(ranges: &mut Vec<TextRange>, range: TextRange) {
	if range.0 == range.1 {
		return;
	}

	if let Some(prev) = ranges.last() {
		if *prev == range {
			return;
		}
	}

	ranges.push(range);
}

#[cfg(test)]
mod tests {
	use super::*;

	const DOC: &str = "a { b: c; } d { e: f; g: h; }";

	#[test]
	fn test_match_selector() {
		let m = match_css(DOC, 5).unwrap();
		assert_eq!(m.kind, MatchType::Property);
		assert_eq!(&DOC[m.start..m.end], "b: c;");
		assert_eq!(&DOC[m.body_start..m.body_end], "c");

		let m = match_css(DOC, 2).unwrap();
		assert_eq!(m.kind, MatchType::Selector);
		assert_eq!(&DOC[m.start..m.end], "a { b: c; }");
	}

	#[test]
	fn test_balanced_outward() {
		let ranges = balanced_outward(DOC, 5);
		let texts: Vec<_> = ranges
			.iter()
			.map(|&(start, end)| &DOC[start..end])
			.collect();
		assert_eq!(texts, vec!["c", "b: c;", "a { b: c; }"]);
	}

	#[test]
	fn test_balanced_inward() {
		let ranges = balanced_inward(DOC, 13);
		let texts: Vec<_> = ranges
			.iter()
			.map(|&(start, end)| &DOC[start..end])
			.collect();
		assert_eq!(texts, vec!["d { e: f; g: h; }", "e: f; g: h;", "e: f;", "f"]);
	}
}

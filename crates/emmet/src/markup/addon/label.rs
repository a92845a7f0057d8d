//! Label wiring: a `<label>` wrapping a form control needs no empty `for`
//! and `id` attributes.

use emmet_abbreviation::ast::{AbbreviationAttribute, AbbreviationNode, ValueToken};

pub fn label(node: &mut AbbreviationNode) {
	if node.name.as_deref() != Some("label") {
		return;
	}

	if find_control(&node.children).is_none() {
		return;
	}

	// Remove the empty `for` attribute
	if let Some(attrs) = &mut node.attributes {
		attrs.retain(|attr| !(attr.name.as_deref() == Some("for") && is_empty_attribute(attr)));
	}

	// Remove the empty `id` attribute from the wrapped control
	if let Some(input) = find_control_mut(&mut node.children) {
		if let Some(attrs) = &mut input.attributes {
			attrs.retain(|attr| !(attr.name.as_deref() == Some("id") && is_empty_attribute(attr)));
		}
	}
}

fn is_control(node: &AbbreviationNode) -> bool {
	matches!(node.name.as_deref(), Some("input") | Some("textarea"))
}

fn find_control(children: &[AbbreviationNode]) -> Option<&AbbreviationNode> {
	for child in children {
		if is_control(child) {
			return Some(child);
		}
		if let Some(found) = find_control(&child.children) {
			return Some(found);
		}
	}
	None
}

fn find_control_mut(children: &mut [AbbreviationNode]) -> Option<&mut AbbreviationNode> {
	for child in children {
		if is_control(child) {
			return Some(child);
		}
		if let Some(found) = find_control_mut(&mut child.children) {
			return Some(found);
		}
	}
	None
}

fn is_empty_attribute(attr: &AbbreviationAttribute) -> bool {
	let Some(value) = &attr.value else {
		return true;
	};

	if value.len() == 1 {
		if let ValueToken::Field { name, .. } = &value[0] {
			// Attribute contains a bare field
			return name.is_empty();
		}
	}

	false
}

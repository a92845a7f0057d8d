//! JSX transformer: React uses `className` and `htmlFor` attribute names.

use emmet_abbreviation::ast::AbbreviationNode;

pub fn jsx(node: &mut AbbreviationNode) {
	let Some(attrs) = &mut node.attributes else {
		return;
	};

	for attr in attrs {
		match attr.name.as_deref() {
			Some("class") => attr.name = Some("className".to_string()),
			Some("for") => attr.name = Some("htmlFor".to_string()),
			_ => {}
		}
	}
}

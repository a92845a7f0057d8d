//! XSL transformer: drops `select` attributes from nodes that already carry
//! content.

use emmet_abbreviation::ast::AbbreviationNode;

pub fn xsl(node: &mut AbbreviationNode) {
	let matches_name = matches!(
		node.name.as_deref(),
		Some("xsl:variable") | Some("xsl:with-param")
	);

	if matches_name && (!node.children.is_empty() || node.value.is_some()) {
		if let Some(attrs) = &mut node.attributes {
			attrs.retain(|attr| attr.name.as_deref() != Some("select"));
		}
	}
}

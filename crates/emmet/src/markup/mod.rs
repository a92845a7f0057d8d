//! Markup abbreviation pipeline: parse, resolve snippets, apply transforms
//! and format.

pub mod addon;
pub mod attributes;
pub mod format;
pub mod implicit_tag;
pub mod lorem;
pub mod snippets;

use emmet_abbreviation::ast::Abbreviation;
use emmet_abbreviation::ast::AbbreviationNode;
use emmet_abbreviation::tokenizer::tokens::Repeater;
use emmet_abbreviation::{ConvertOptions, parse as abbreviation};
use rand::RngCore;

use crate::config::Config;
use crate::error::Error;
use addon::bem::{BemData, parse_bem};

/// Snapshot of an already-transformed ancestor node, captured while walking
/// down the tree.
pub struct AncestorScope {
	pub name: Option<String>,
	pub repeat: Option<Repeater>,
	pub bem: BemData,
}

/// Parses given abbreviation into a final tree with all transformations
/// applied.
pub fn parse(abbr: &str, config: &Config) -> Result<Abbreviation, Error> {
	let options = ConvertOptions {
		text: config.text.as_ref(),
		variables: Some(&config.variables),
		max_repeat: config.max_repeat,
		jsx: config.options.jsx.enabled,
		href: config.options.markup.href,
	};

	let mut abbr = abbreviation(abbr, &options).map_err(Error::from_markup)?;

	// Resolve in two passes: first map nodes to snippets, which are
	// abbreviations themselves and may produce multiple nodes; then
	// transform every resolved node
	snippets::resolve_snippets(&mut abbr, config)?;

	let mut rng = rand::rng();
	let mut ancestors = Vec::new();
	walk_transform(&mut abbr.children, &mut ancestors, config, &mut rng);

	Ok(abbr)
}

/// Converts given abbreviation to a string according to config.
pub fn stringify(abbr: &Abbreviation, config: &Config) -> String {
	match config.syntax.as_str() {
		"haml" => format::haml(abbr, config),
		"pug" => format::pug(abbr, config),
		"slim" => format::slim(abbr, config),
		_ => format::html(abbr, config),
	}
}

fn walk_transform(
	children: &mut Vec<AbbreviationNode>,
	ancestors: &mut Vec<AncestorScope>,
	config: &Config,
	rng: &mut dyn RngCore,
) {
	for node in children.iter_mut() {
		transform(node, ancestors, config, rng);
		ancestors.push(scope_of(node));
		walk_transform(&mut node.children, ancestors, config, rng);
		ancestors.pop();
	}
}

/// Modifies given node and prepares it for output.
fn transform(
	node: &mut AbbreviationNode,
	ancestors: &[AncestorScope],
	config: &Config,
	rng: &mut dyn RngCore,
) {
	implicit_tag::implicit_tag(node, ancestors, config);
	attributes::merge_attributes(node, config);
	lorem::lorem(node, ancestors, config, rng);

	if config.syntax == "xsl" {
		addon::xsl::xsl(node);
	}

	if config.options.jsx.enabled {
		addon::jsx::jsx(node);
	}

	if config.options.bem.enabled {
		addon::bem::bem(node, ancestors, config);
	}

	addon::label::label(node);
}

fn scope_of(node: &AbbreviationNode) -> AncestorScope {
	AncestorScope {
		name: node.name.clone(),
		repeat: node.repeat,
		bem: parse_bem(&addon::bem::class_value(node)),
	}
}

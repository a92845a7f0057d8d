//! Stylesheet abbreviation resolver: matches parsed properties against the
//! snippet catalog, resolves keywords, units, gradients and colors.

pub mod color;
pub mod format;
pub mod score;
pub mod snippets;

use std::rc::Rc;

use emmet_css_abbreviation::{CssProperty, CssToken, CssTokenKind, CssValue, parse as abbreviation};

use crate::config::Config;
use crate::error::Error;
use color::color as format_color;
use score::calculate_score;
use snippets::{CssSnippet, CssSnippetIndex, CssSnippetProperty, convert_snippets};

const GRADIENT_NAME: &str = "lg";

/// CSS abbreviation scope sentinels used in `context.name`.
pub mod scope {
	/// Include all possible snippets in match.
	pub const GLOBAL: &str = "@@global";
	/// Include raw snippets only in abbreviation match.
	pub const SECTION: &str = "@@section";
	/// Include properties only in abbreviation match.
	pub const PROPERTY: &str = "@@property";
	/// Resolve the abbreviation in the context of a CSS property value.
	pub const VALUE: &str = "@@value";
}

/// Property with its resolution result; `snippet` is `None` when the
/// abbreviation did not match any snippet.
#[derive(Debug, Clone)]
pub struct ResolvedProperty {
	pub node: CssProperty,
	/// Index of the matched snippet, or the gradient marker.
	pub snippet: Option<SnippetRef>,
}

/// What a property resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetRef {
	/// Index into the snippet catalog.
	Index(usize),
	/// The `lg` gradient shortcut.
	Gradient,
}

/// Parses given stylesheet abbreviation and resolves it against the snippet
/// catalog from config.
pub fn parse(abbr: &str, config: &Config) -> Result<Vec<ResolvedProperty>, Error> {
	let index = snippet_index(config);
	let properties = abbreviation(abbr, is_value_scope(config)).map_err(Error::from_css)?;
	parse_properties(properties, &index, config)
}

/// Resolves already-parsed properties; exposed for value-mode re-entry.
fn parse_properties(
	properties: Vec<CssProperty>,
	index: &CssSnippetIndex,
	config: &Config,
) -> Result<Vec<ResolvedProperty>, Error> {
	let filtered = snippets_for_scope(index, config);

	Ok(properties
		.into_iter()
		.map(|node| resolve_node(node, index, &filtered, config))
		.collect())
}

/// Returns the snippet index from the config cache, filling it on first
/// use, or builds a fresh one.
fn snippet_index(config: &Config) -> Rc<CssSnippetIndex> {
	if let Some(cache) = &config.cache {
		if let Some(index) = cache.get() {
			return index;
		}

		let index = Rc::new(convert_snippets(&config.snippets));
		cache.set(index.clone());
		return index;
	}

	Rc::new(convert_snippets(&config.snippets))
}

/// Resolves a single node: finds the matching snippet using fuzzy match and
/// resolves keyword aliases from the node value.
fn resolve_node(
	mut node: CssProperty,
	index: &CssSnippetIndex,
	filtered: &[usize],
	config: &Config,
) -> ResolvedProperty {
	let mut snippet = None;

	if resolve_gradient(&mut node, config) {
		snippet = Some(SnippetRef::Gradient);
	} else {
		let min_score = config.options.stylesheet.fuzzy_search_min_score;

		if is_value_scope(config) {
			// Resolve as a value of the property from the context
			let property_name = config
				.context
				.as_ref()
				.map(|ctx| ctx.name.as_str())
				.unwrap_or_default();
			let matched = index.snippets.iter().position(|s| {
				s.as_property()
					.is_some_and(|prop| prop.property == property_name)
			});

			resolve_value_keywords(&mut node, matched, index, config, min_score);
			snippet = matched.map(SnippetRef::Index);
		} else if let Some(name) = node.name.clone() {
			let matched = find_best_match(&name, filtered, index, min_score, true);

			if let Some(matched_ix) = matched {
				log::debug!("fuzzy match: {name:?} -> {:?}", index.get(matched_ix).key());
				snippet = Some(SnippetRef::Index(matched_ix));
				match index.get(matched_ix) {
					CssSnippet::Property(_) => {
						if !resolve_as_property(&mut node, matched_ix, index, config) {
							snippet = None;
						}
					}
					CssSnippet::Raw(_) => resolve_as_snippet(&mut node, matched_ix, index),
				}
			}
		}
	}

	if node.name.is_some() || config.context.is_some() {
		// Resolve numeric values for CSS properties only
		resolve_numeric_value(&mut node, config);
	}

	ResolvedProperty { node, snippet }
}

/// Resolves the CSS gradient shortcut from given property, if possible.
fn resolve_gradient(node: &mut CssProperty, config: &Config) -> bool {
	let mut gradient_args = None;

	if node.value.len() == 1 && node.value[0].value.len() == 1 {
		if let CssTokenKind::FunctionCall { name, arguments } = &node.value[0].value[0].kind {
			if name == GRADIENT_NAME {
				gradient_args = Some(arguments.clone());
			}
		}
	}

	if gradient_args.is_none() && node.name.as_deref() != Some(GRADIENT_NAME) {
		return false;
	}

	let arguments = gradient_args.unwrap_or_else(|| {
		vec![CssValue::new(vec![CssToken::synthetic(
			CssTokenKind::Field {
				index: Some(0),
				name: String::new(),
			},
		)])]
	});

	if config.context.is_none() {
		node.name = Some("background-image".to_string());
	}

	node.value = vec![CssValue::new(vec![CssToken::synthetic(
		CssTokenKind::FunctionCall {
			name: "linear-gradient".to_string(),
			arguments,
		},
	)])];

	true
}

/// Resolves given node as a CSS property snippet. Returns `false` when the
/// match should be discarded.
fn resolve_as_property(
	node: &mut CssProperty,
	snippet_ix: usize,
	index: &CssSnippetIndex,
	config: &Config,
) -> bool {
	let abbr = node.name.clone().unwrap_or_default();
	let (key, property) = {
		let snippet = index.get(snippet_ix).as_property().expect("property snippet");
		(snippet.key.clone(), snippet.property.clone())
	};

	// For example, in the `dib` abbreviation the matched part is `d` and
	// `ib` should be considered an inline value. If an explicit value
	// exists, or the unmatched fragment does not resolve to a keyword, the
	// matched snippet is invalid
	let inline_value = get_unmatched_part(&abbr, &key);
	node.name = Some(property);

	if !inline_value.is_empty() {
		if !node.value.is_empty() {
			// Already has a value: the unmatched part invalidates the match
			return true;
		}

		let min_score = config.options.stylesheet.fuzzy_search_min_score;
		match resolve_keyword(&inline_value, Some(snippet_ix), index, config, min_score) {
			Some(keyword) => node.value.push(CssValue::new(vec![keyword])),
			None => {
				if config.options.stylesheet.skip_unmatched {
					return false;
				}
				return true;
			}
		}
	}

	if !node.value.is_empty() {
		// Replace keyword aliases in the node value with matched keywords
		resolve_value_keywords(node, Some(snippet_ix), index, config, 0.0);
	} else {
		let snippet = index.get(snippet_ix).as_property().expect("property snippet");
		if !snippet.value.is_empty() {
			let default_value = &snippet.value[0];

			// Auto-select the inserted value only when there is a single
			// choice or it already carries fields
			if snippet.value.len() == 1 || default_value.iter().any(has_field) {
				node.value = default_value.clone();
			} else {
				let mut state = WrapState { index: 1 };
				node.value = default_value
					.iter()
					.map(|value| wrap_with_field(value, config, &mut state))
					.collect();
			}
		}
	}

	true
}

fn resolve_value_keywords(
	node: &mut CssProperty,
	snippet_ix: Option<usize>,
	index: &CssSnippetIndex,
	config: &Config,
	min_score: f64,
) {
	for css_value in &mut node.value {
		let mut value = Vec::with_capacity(css_value.value.len());

		for token in css_value.value.drain(..) {
			match &token.kind {
				CssTokenKind::Literal(literal) => {
					match resolve_keyword(literal, snippet_ix, index, config, min_score) {
						Some(keyword) => value.push(keyword),
						None => value.push(token),
					}
				}
				CssTokenKind::FunctionCall { name, arguments } => {
					// Find a matching function call and merge arguments:
					// host arguments take priority, snippet arguments fill
					// the tail
					let matched = resolve_keyword(name, snippet_ix, index, config, min_score);
					if let Some(CssToken {
						kind:
							CssTokenKind::FunctionCall {
								name: match_name,
								arguments: match_args,
							},
						..
					}) = matched
					{
						let mut merged = arguments.clone();
						if match_args.len() > merged.len() {
							merged.extend(match_args[merged.len()..].iter().cloned());
						}
						value.push(CssToken::synthetic(CssTokenKind::FunctionCall {
							name: match_name,
							arguments: merged,
						}));
					} else {
						value.push(token);
					}
				}
				_ => value.push(token),
			}
		}

		css_value.value = value;
	}
}

/// Resolves given node as a raw snippet: replaces `${N}` placeholders with
/// field tokens, consuming input values into them when given.
fn resolve_as_snippet(node: &mut CssProperty, snippet_ix: usize, index: &CssSnippetIndex) {
	static RE_FIELD: std::sync::LazyLock<regex::Regex> = std::sync::LazyLock::new(|| {
		regex::Regex::new(r"\$\{(\d+)(:[^}]+)?\}").unwrap()
	});

	let CssSnippet::Raw(snippet) = index.get(snippet_ix) else {
		return;
	};

	let mut input_tokens = node
		.value
		.first()
		.map(|value| value.value.clone())
		.unwrap_or_default()
		.into_iter();

	let mut output = Vec::new();
	let mut offset = 0;

	for captures in RE_FIELD.captures_iter(&snippet.value) {
		let whole = captures.get(0).expect("group 0 always present");
		if offset != whole.start() {
			output.push(CssToken::synthetic(CssTokenKind::Literal(
				snippet.value[offset..whole.start()].to_string(),
			)));
		}
		offset = whole.end();

		match input_tokens.next() {
			Some(token) => output.push(token),
			None => {
				let field_index = captures
					.get(1)
					.and_then(|m| m.as_str().parse().ok());
				let name = captures
					.get(2)
					.map(|m| m.as_str()[1..].to_string())
					.unwrap_or_default();
				output.push(CssToken::synthetic(CssTokenKind::Field {
					index: field_index,
					name,
				}));
			}
		}
	}

	if offset < snippet.value.len() {
		output.push(CssToken::synthetic(CssTokenKind::Literal(
			snippet.value[offset..].to_string(),
		)));
	}

	node.name = None;
	node.value = vec![CssValue::new(output)];
}

/// Finds the best matching snippet for given abbreviation; ties break by
/// catalog order, an exact match wins immediately.
fn find_best_match(
	abbr: &str,
	candidates: &[usize],
	index: &CssSnippetIndex,
	min_score: f64,
	partial_match: bool,
) -> Option<usize> {
	let mut max_score = 0.0;
	let mut matched = None;

	for &candidate in candidates {
		let score = calculate_score(abbr, index.get(candidate).key(), partial_match);

		if score == 1.0 {
			// Direct hit, no need to look further
			return Some(candidate);
		}

		if score > 0.0 && score >= max_score {
			max_score = score;
			matched = Some(candidate);
		}
	}

	if max_score >= min_score { matched } else { None }
}

/// Returns the part of `abbr` that was not matched against `text`: for
/// `poas` against `position` the unmatched part is `as`.
fn get_unmatched_part(abbr: &str, text: &str) -> String {
	let mut last_pos = 0;
	let text_chars: Vec<char> = text.chars().collect();

	for (i, ch) in abbr.chars().enumerate() {
		let found = text_chars[last_pos..].iter().position(|&c| c == ch);
		match found {
			Some(pos) => last_pos += pos + 1,
			None => return abbr.chars().skip(i).collect(),
		}
	}

	String::new()
}

/// Resolves a keyword shorthand into a snippet keyword, walking the snippet
/// dependency chain and the global keywords.
fn resolve_keyword(
	keyword: &str,
	snippet_ix: Option<usize>,
	index: &CssSnippetIndex,
	config: &Config,
	min_score: f64,
) -> Option<CssToken> {
	if let Some(snippet_ix) = snippet_ix {
		if let Some(snippet) = index.get(snippet_ix).as_property() {
			if let Some(token) = match_keyword_map(keyword, snippet, min_score) {
				return Some(token);
			}

			for &dep in &snippet.dependencies {
				if let Some(dep_snippet) = index.get(dep).as_property() {
					if let Some(token) = match_keyword_map(keyword, dep_snippet, min_score) {
						return Some(token);
					}
				}
			}
		}
	}

	let global = &config.options.stylesheet.keywords;
	let matched = best_keyword(keyword, global.iter().map(String::as_str), min_score)?;
	Some(CssToken::synthetic(CssTokenKind::Literal(matched)))
}

fn match_keyword_map(
	keyword: &str,
	snippet: &CssSnippetProperty,
	min_score: f64,
) -> Option<CssToken> {
	let matched = best_keyword(keyword, snippet.keywords.keys().map(String::as_str), min_score)?;
	snippet.keywords.get(&matched).cloned()
}

fn best_keyword<'a>(
	keyword: &str,
	candidates: impl Iterator<Item = &'a str>,
	min_score: f64,
) -> Option<String> {
	let mut max_score = 0.0;
	let mut matched = None;

	for candidate in candidates {
		let score = calculate_score(keyword, candidate, false);
		if score == 1.0 {
			return Some(candidate.to_string());
		}
		if score > 0.0 && score >= max_score {
			max_score = score;
			matched = Some(candidate.to_string());
		}
	}

	if max_score >= min_score && max_score > 0.0 {
		matched
	} else {
		None
	}
}

/// Resolves numeric values in given node: unit aliases, default int/float
/// units, and the unitless property set.
fn resolve_numeric_value(node: &mut CssProperty, config: &Config) {
	let options = &config.options.stylesheet;
	let unitless = options
		.unitless
		.iter()
		.any(|name| Some(name.as_str()) == node.name.as_deref());

	for value in &mut node.value {
		for token in &mut value.value {
			if let CssTokenKind::Number { value, raw, unit } = &mut token.kind {
				if !unit.is_empty() {
					if let Some(alias) = options.unit_aliases.get(unit) {
						*unit = alias.clone();
					}
				} else if *value != 0.0 && !unitless {
					*unit = if raw.contains('.') {
						options.float_unit.clone()
					} else {
						options.int_unit.clone()
					};
				}
			}
		}
	}
}

/// Check if given value contains fields, recursively through function
/// calls.
fn has_field(value: &CssValue) -> bool {
	value.value.iter().any(|token| match &token.kind {
		CssTokenKind::Field { .. } => true,
		CssTokenKind::FunctionCall { arguments, .. } => arguments.iter().any(has_field),
		_ => false,
	})
}

struct WrapState {
	index: usize,
}

impl WrapState {
	fn next(&mut self) -> usize {
		let index = self.index;
		self.index += 1;
		index
	}
}

/// Wraps every token of a value alternative in a field, so the editor can
/// tab through the suggested values.
fn wrap_with_field(value: &CssValue, config: &Config, state: &mut WrapState) -> CssValue {
	let mut result = Vec::new();

	for token in &value.value {
		match &token.kind {
			CssTokenKind::Color { r, g, b, a, .. } => {
				let text = format_color(*r, *g, *b, *a, config.options.stylesheet.short_hex);
				result.push(field_token(state.next(), text));
			}
			CssTokenKind::Literal(text) => {
				result.push(field_token(state.next(), text.clone()));
			}
			CssTokenKind::Number { value, unit, .. } => {
				let text = format!("{}{unit}", color::frac(*value, 4));
				result.push(field_token(state.next(), text));
			}
			CssTokenKind::Str { value, quote } => {
				let q = match quote {
					emmet_css_abbreviation::QuoteKind::Single => '\'',
					emmet_css_abbreviation::QuoteKind::Double => '"',
				};
				result.push(field_token(state.next(), format!("{q}{value}{q}")));
			}
			CssTokenKind::FunctionCall { name, arguments } => {
				result.push(field_token(state.next(), name.clone()));
				result.push(CssToken::synthetic(CssTokenKind::Literal("(".to_string())));

				for (i, argument) in arguments.iter().enumerate() {
					result.extend(wrap_with_field(argument, config, state).value);
					if i != arguments.len() - 1 {
						result.push(CssToken::synthetic(CssTokenKind::Literal(", ".to_string())));
					}
				}

				result.push(CssToken::synthetic(CssTokenKind::Literal(")".to_string())));
			}
			_ => result.push(token.clone()),
		}
	}

	CssValue::new(result)
}

fn field_token(index: usize, name: String) -> CssToken {
	CssToken::synthetic(CssTokenKind::Field {
		index: Some(index),
		name,
	})
}

/// Check if the abbreviation should be expanded in CSS value context.
pub fn is_value_scope(config: &Config) -> bool {
	match &config.context {
		Some(context) => context.name == scope::VALUE || !context.name.starts_with("@@"),
		None => false,
	}
}

/// Returns indices of the snippets available in the configured scope.
fn snippets_for_scope(index: &CssSnippetIndex, config: &Config) -> Vec<usize> {
	let context_name = config.context.as_ref().map(|ctx| ctx.name.as_str());

	(0..index.snippets.len())
		.filter(|&ix| match context_name {
			Some(scope::SECTION) => matches!(index.get(ix), CssSnippet::Raw(_)),
			Some(scope::PROPERTY) => matches!(index.get(ix), CssSnippet::Property(_)),
			_ => true,
		})
		.collect()
}

//! Expansion configuration: composes default, syntax, global and user
//! layers into a single resolved [`Config`].

pub mod options;

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

pub use emmet_abbreviation::TextValue;
pub use options::{
	AttributeQuotes, BemOptions, CommentOptions, JsxOptions, MarkupOptions, Options, OptionsPatch,
	OutputOptions, SelfClosingStyle, StringCase, StylesheetOptions,
};

use crate::snippets;
use crate::stylesheet::snippets::CssSnippetIndex;

/// Abbreviation family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SyntaxType {
	#[default]
	Markup,
	Stylesheet,
}

/// Default syntax name for each abbreviation family.
fn default_syntax(syntax_type: SyntaxType) -> &'static str {
	match syntax_type {
		SyntaxType::Markup => "html",
		SyntaxType::Stylesheet => "css",
	}
}

/// Position and column context passed to output hooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputContext {
	pub offset: usize,
	pub line: usize,
	pub column: usize,
}

/// Hook producing editor tab-stop syntax for a field:
/// `(index, placeholder, context)`.
pub type FieldHook = dyn Fn(usize, &str, OutputContext) -> String;

/// Hook post-processing every raw text chunk before output.
pub type TextHook = dyn Fn(&str, OutputContext) -> String;

/// Element context the abbreviation is expanded in; the stylesheet resolver
/// also reads `@@`-prefixed scope sentinels from `name`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbbreviationContext {
	pub name: String,
	#[serde(default)]
	pub attributes: FxHashMap<String, String>,
}

/// Caller-owned cache for the parsed stylesheet snippet index. The resolver
/// reads it if filled and fills it if empty; sharing across threads is the
/// caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct SnippetCache {
	index: Rc<RefCell<Option<Rc<CssSnippetIndex>>>>,
}

impl SnippetCache {
	pub fn new() -> Self {
		SnippetCache::default()
	}

	pub fn get(&self) -> Option<Rc<CssSnippetIndex>> {
		self.index.borrow().clone()
	}

	pub fn set(&self, index: Rc<CssSnippetIndex>) {
		*self.index.borrow_mut() = Some(index);
	}
}

/// Raw, sparse configuration supplied by the caller.
#[derive(Default, Clone)]
pub struct UserConfig {
	pub syntax_type: Option<SyntaxType>,
	pub syntax: Option<String>,
	pub variables: FxHashMap<String, String>,
	pub snippets: IndexMap<String, String>,
	pub options: OptionsPatch,
	/// Text to wrap with the abbreviation.
	pub text: Option<TextValue>,
	/// Cap on the total number of unrolled nodes.
	pub max_repeat: Option<usize>,
	pub context: Option<AbbreviationContext>,
	pub cache: Option<SnippetCache>,
	pub field: Option<Rc<FieldHook>>,
	pub text_processor: Option<Rc<TextHook>>,
}

/// Per-syntax (or per-family) overrides in a global configuration.
#[derive(Default, Clone)]
pub struct ConfigOverride {
	pub variables: FxHashMap<String, String>,
	pub snippets: IndexMap<String, String>,
	pub options: OptionsPatch,
}

/// Configuration shared across calls, keyed by syntax name or family name
/// (`markup` / `stylesheet`).
#[derive(Default, Clone)]
pub struct GlobalConfig(pub FxHashMap<String, ConfigOverride>);

/// Fully resolved expansion configuration.
#[derive(Clone)]
pub struct Config {
	pub syntax_type: SyntaxType,
	pub syntax: String,
	pub variables: FxHashMap<String, String>,
	pub snippets: IndexMap<String, String>,
	pub options: Options,
	pub text: Option<TextValue>,
	pub max_repeat: Option<usize>,
	pub context: Option<AbbreviationContext>,
	pub cache: Option<SnippetCache>,
	pub field: Option<Rc<FieldHook>>,
	pub text_processor: Option<Rc<TextHook>>,
}

impl Default for Config {
	fn default() -> Self {
		Config::new(UserConfig::default(), &GlobalConfig::default())
	}
}

impl Config {
	/// Resolves the final configuration from user input and global
	/// overrides: defaults, then family defaults, then syntax defaults,
	/// then global family/syntax overrides, then the user layer.
	pub fn new(user: UserConfig, global: &GlobalConfig) -> Self {
		let syntax_type = user.syntax_type.unwrap_or_default();
		let syntax = user
			.syntax
			.clone()
			.unwrap_or_else(|| default_syntax(syntax_type).to_string());
		let type_name = match syntax_type {
			SyntaxType::Markup => "markup",
			SyntaxType::Stylesheet => "stylesheet",
		};

		let mut variables = snippets::variables();
		let mut merged_snippets = IndexMap::new();
		let mut options = Options::new();

		for layer in [type_name, syntax.as_str()] {
			if let Some(layer_snippets) = builtin_snippets(layer) {
				extend_snippets(&mut merged_snippets, layer_snippets);
			}
			if let Some(patch) = builtin_options(layer) {
				patch.apply(&mut options);
			}
		}

		for layer in [type_name, syntax.as_str()] {
			if let Some(overrides) = global.0.get(layer) {
				variables.extend(overrides.variables.clone());
				extend_snippets(&mut merged_snippets, &overrides.snippets);
				overrides.options.apply(&mut options);
			}
		}

		variables.extend(user.variables.clone());
		extend_snippets(&mut merged_snippets, &user.snippets);
		user.options.apply(&mut options);

		Config {
			syntax_type,
			syntax,
			variables,
			snippets: merged_snippets,
			options,
			text: user.text,
			max_repeat: user.max_repeat,
			context: user.context,
			cache: user.cache,
			field: user.field,
			text_processor: user.text_processor,
		}
	}

	/// Renders a field through the configured hook, or its placeholder when
	/// no hook is set.
	pub fn format_field(&self, index: usize, placeholder: &str, context: OutputContext) -> String {
		match &self.field {
			Some(hook) => hook(index, placeholder, context),
			None => placeholder.to_string(),
		}
	}

	/// Passes raw output text through the configured hook, if any.
	pub fn process_text(&self, text: &str, context: OutputContext) -> String {
		match &self.text_processor {
			Some(hook) => hook(text, context),
			None => text.to_string(),
		}
	}
}

/// Splits multi-name keys (`"btn|button"`) and merges the entries.
fn extend_snippets(dest: &mut IndexMap<String, String>, source: &IndexMap<String, String>) {
	for (key, value) in source {
		for name in key.split('|') {
			dest.insert(name.to_string(), value.clone());
		}
	}
}

/// Built-in snippet catalog for given syntax or family name.
fn builtin_snippets(name: &str) -> Option<&'static IndexMap<String, String>> {
	match name {
		"markup" => Some(snippets::markup_snippets()),
		"stylesheet" => Some(snippets::stylesheet_snippets()),
		"xsl" => Some(snippets::xsl_snippets()),
		"pug" => Some(snippets::pug_snippets()),
		_ => None,
	}
}

/// Built-in option overrides for given syntax name.
fn builtin_options(name: &str) -> Option<OptionsPatch> {
	match name {
		"xhtml" => Some(OptionsPatch {
			output_self_closing_style: Some(SelfClosingStyle::Xhtml),
			..OptionsPatch::default()
		}),
		"xml" | "xsl" => Some(OptionsPatch {
			output_self_closing_style: Some(SelfClosingStyle::Xml),
			..OptionsPatch::default()
		}),
		"jsx" => Some(OptionsPatch {
			jsx_enabled: Some(true),
			..OptionsPatch::default()
		}),
		"sass" => Some(OptionsPatch {
			stylesheet_after: Some(String::new()),
			..OptionsPatch::default()
		}),
		"stylus" => Some(OptionsPatch {
			stylesheet_between: Some(" ".to_string()),
			stylesheet_after: Some(String::new()),
			..OptionsPatch::default()
		}),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layering() {
		let config = Config::default();
		assert_eq!(config.syntax, "html");
		assert!(config.snippets.contains_key("img"));
		assert_eq!(config.variables.get("charset").map(String::as_str), Some("UTF-8"));

		// Syntax layer overrides the family layer
		let config = Config::new(
			UserConfig {
				syntax: Some("xsl".to_string()),
				..UserConfig::default()
			},
			&GlobalConfig::default(),
		);
		assert_eq!(config.options.output.self_closing_style, SelfClosingStyle::Xml);
		assert!(config.snippets.contains_key("tmatch"));
		// Markup snippets stay available
		assert!(config.snippets.contains_key("img"));
	}

	#[test]
	fn test_user_overrides_win() {
		let mut user_snippets = IndexMap::new();
		user_snippets.insert("img".to_string(), "img[src]/".to_string());

		let mut global = GlobalConfig::default();
		global.0.insert(
			"html".to_string(),
			ConfigOverride {
				options: OptionsPatch {
					output_indent: Some("    ".to_string()),
					..OptionsPatch::default()
				},
				..ConfigOverride::default()
			},
		);

		let config = Config::new(
			UserConfig {
				snippets: user_snippets,
				options: OptionsPatch {
					output_indent: Some(" ".to_string()),
					..OptionsPatch::default()
				},
				..UserConfig::default()
			},
			&global,
		);

		assert_eq!(config.snippets.get("img").map(String::as_str), Some("img[src]/"));
		assert_eq!(config.options.output.indent, " ");
	}

	#[test]
	fn test_multi_key_snippets() {
		let config = Config::default();
		// `"btn|button"` style keys are split at load
		assert_eq!(config.snippets.get("btn"), config.snippets.get("button"));
	}

	#[test]
	fn test_stylesheet_type() {
		let config = Config::new(
			UserConfig {
				syntax_type: Some(SyntaxType::Stylesheet),
				..UserConfig::default()
			},
			&GlobalConfig::default(),
		);
		assert_eq!(config.syntax, "css");
		assert!(config.snippets.contains_key("bd"));
	}
}

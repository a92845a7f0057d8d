//! Emmet abbreviation engine.
//!
//! Expands compact shorthand into fully formed source code: markup
//! abbreviations like `ul>li.item$*3` become HTML (or HAML/Pug/Slim), and
//! stylesheet abbreviations like `bd1-s#fc0` become CSS properties.
//!
//! ```
//! use emmet::{UserConfig, expand};
//!
//! let html = expand("ul>li.item$*2", UserConfig::default()).unwrap();
//! assert_eq!(
//!     html,
//!     "<ul>\n\t<li class=\"item1\"></li>\n\t<li class=\"item2\"></li>\n</ul>"
//! );
//! ```
//!
//! The [`extract`] helper locates an abbreviation inside a longer host line
//! so editors can expand at the caret; the re-exported matcher modules
//! provide tag/section lookup for "balanced select" actions.

pub mod config;
pub mod error;
pub mod markup;
pub mod output;
pub mod snippets;
pub mod stylesheet;

pub use config::{
	AbbreviationContext, Config, ConfigOverride, GlobalConfig, Options, OptionsPatch,
	SnippetCache, SyntaxType, TextValue, UserConfig,
};
pub use error::{Error, Result};

pub use emmet_abbreviation::ast::{
	Abbreviation, AbbreviationAttribute, AbbreviationNode, AttributeValueKind, ValueToken,
};
pub use emmet_extract_abbreviation::{
	ExtractOptions, ExtractedAbbreviation, SyntaxKind, extract,
};

// Document matchers and editor action helpers
pub use emmet_action_utils as action_utils;
pub use emmet_css_matcher as css_matcher;
pub use emmet_html_matcher as html_matcher;
pub use emmet_math_expression as math_expression;

pub use stylesheet::snippets::{CssSnippet, CssSnippetIndex, convert_snippets as parse_stylesheet_snippets};

/// Expands given abbreviation into a code snippet.
pub fn expand(abbr: &str, user_config: UserConfig) -> Result<String> {
	expand_with_global(abbr, user_config, &GlobalConfig::default())
}

/// Expands given abbreviation with an extra layer of global configuration.
pub fn expand_with_global(
	abbr: &str,
	user_config: UserConfig,
	global_config: &GlobalConfig,
) -> Result<String> {
	let config = Config::new(user_config, global_config);
	expand_with_config(abbr, &config)
}

/// Expands given abbreviation against an already resolved configuration.
pub fn expand_with_config(abbr: &str, config: &Config) -> Result<String> {
	match config.syntax_type {
		SyntaxType::Stylesheet => expand_stylesheet(abbr, config),
		SyntaxType::Markup => expand_markup(abbr, config),
	}
}

/// Expands a *markup* abbreviation (a regular Emmet abbreviation producing
/// structured output like HTML) according to the options in config.
pub fn expand_markup(abbr: &str, config: &Config) -> Result<String> {
	let abbr = markup::parse(abbr, config)?;
	Ok(markup::stringify(&abbr, config))
}

/// Expands a *stylesheet* abbreviation (designed for stylesheet languages
/// like CSS or SCSS) according to the options in config.
pub fn expand_stylesheet(abbr: &str, config: &Config) -> Result<String> {
	let abbr = stylesheet::parse(abbr, config)?;
	Ok(stylesheet::format::stringify(&abbr, config))
}

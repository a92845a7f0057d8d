//! Built-in snippet catalogs and variables.
//!
//! Raw tables may carry multiple names per entry separated by `|`
//! (`"btn|button"`); the config layer splits them into a one-to-one map.

mod css;
mod html;
mod pug;
mod xsl;

use std::sync::LazyLock;

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

fn to_map(entries: &[(&str, &str)]) -> IndexMap<String, String> {
	entries
		.iter()
		.map(|(key, value)| (key.to_string(), value.to_string()))
		.collect()
}

/// Markup (HTML) snippet catalog.
pub fn markup_snippets() -> &'static IndexMap<String, String> {
	static MAP: LazyLock<IndexMap<String, String>> = LazyLock::new(|| to_map(html::SNIPPETS));
	&MAP
}

/// Stylesheet (CSS) snippet catalog.
pub fn stylesheet_snippets() -> &'static IndexMap<String, String> {
	static MAP: LazyLock<IndexMap<String, String>> = LazyLock::new(|| to_map(css::SNIPPETS));
	&MAP
}

/// XSL snippet catalog.
pub fn xsl_snippets() -> &'static IndexMap<String, String> {
	static MAP: LazyLock<IndexMap<String, String>> = LazyLock::new(|| to_map(xsl::SNIPPETS));
	&MAP
}

/// Pug snippet overrides.
pub fn pug_snippets() -> &'static IndexMap<String, String> {
	static MAP: LazyLock<IndexMap<String, String>> = LazyLock::new(|| to_map(pug::SNIPPETS));
	&MAP
}

/// Default variable values for `${name}` references.
pub fn variables() -> FxHashMap<String, String> {
	[
		("lang", "en"),
		("locale", "en-US"),
		("charset", "UTF-8"),
		("indentation", "\t"),
		("newline", "\n"),
	]
	.iter()
	.map(|(key, value)| (key.to_string(), value.to_string()))
	.collect()
}

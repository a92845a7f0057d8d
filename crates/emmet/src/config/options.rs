//! Typed expansion options and the patch type used for layered merging.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Case transform applied to tag or attribute names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StringCase {
	#[default]
	#[strum(serialize = "")]
	#[serde(rename = "")]
	Keep,
	Upper,
	Lower,
}

/// Quote style for attribute values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttributeQuotes {
	Single,
	#[default]
	Double,
}

/// How self-closing elements terminate their tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SelfClosingStyle {
	/// `<br>`
	#[default]
	Html,
	/// `<br />`
	Xhtml,
	/// `<br/>`
	Xml,
}

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputOptions {
	/// String for one level of indentation.
	pub indent: String,
	/// String prepended to every line.
	pub base_indent: String,
	/// Line separator.
	pub newline: String,
	pub tag_case: StringCase,
	pub attribute_case: StringCase,
	pub attribute_quotes: AttributeQuotes,
	/// Produce pretty-printed output with newlines and indentation.
	pub format: bool,
	/// Insert a formatted line break inside leaf elements.
	pub format_leaf_node: bool,
	/// Elements that do not add an indent level for their children.
	pub format_skip: Vec<String>,
	/// Elements always formatted with an inner line break.
	pub format_force: Vec<String>,
	/// Number of adjacent inline elements that forces line breaks; `0`
	/// keeps them on one line.
	pub inline_break: usize,
	/// Emit boolean attributes without a value.
	pub compact_boolean: bool,
	/// Attribute names always treated as boolean.
	pub boolean_attributes: Vec<String>,
	/// Merge repeated attributes in reverse order.
	pub reverse_attributes: bool,
	pub self_closing_style: SelfClosingStyle,
}

impl Default for OutputOptions {
	fn default() -> Self {
		OutputOptions {
			indent: "\t".to_string(),
			base_indent: String::new(),
			newline: "\n".to_string(),
			tag_case: StringCase::Keep,
			attribute_case: StringCase::Keep,
			attribute_quotes: AttributeQuotes::Double,
			format: true,
			format_leaf_node: false,
			format_skip: vec!["html".to_string()],
			format_force: vec!["body".to_string()],
			inline_break: 3,
			compact_boolean: false,
			boolean_attributes: [
				"contenteditable",
				"seamless",
				"async",
				"autofocus",
				"autoplay",
				"checked",
				"controls",
				"defer",
				"disabled",
				"formnovalidate",
				"hidden",
				"ismap",
				"loop",
				"multiple",
				"muted",
				"novalidate",
				"readonly",
				"required",
				"reversed",
				"selected",
				"typemustmatch",
			]
			.iter()
			.map(|s| s.to_string())
			.collect(),
			reverse_attributes: false,
			self_closing_style: SelfClosingStyle::Html,
		}
	}
}

/// Markup-specific behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkupOptions {
	/// Synthesize an `href` attribute when wrapping a URL or e-mail with
	/// `<a>`.
	pub href: bool,
}

impl Default for MarkupOptions {
	fn default() -> Self {
		MarkupOptions { href: true }
	}
}

/// HTML comment wrapping around elements with trigger attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentOptions {
	pub enabled: bool,
	/// Attributes whose presence triggers commenting.
	pub trigger: Vec<String>,
	/// Template emitted before the element.
	pub before: String,
	/// Template emitted after the element.
	pub after: String,
}

impl Default for CommentOptions {
	fn default() -> Self {
		CommentOptions {
			enabled: false,
			trigger: vec!["id".to_string(), "class".to_string()],
			before: String::new(),
			after: "\n<!-- /[#ID][.CLASS] -->".to_string(),
		}
	}
}

/// BEM class expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BemOptions {
	pub enabled: bool,
	/// Block/element separator.
	pub element: String,
	/// Modifier separator.
	pub modifier: String,
}

impl Default for BemOptions {
	fn default() -> Self {
		BemOptions {
			enabled: false,
			element: "__".to_string(),
			modifier: "_".to_string(),
		}
	}
}

/// JSX output mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsxOptions {
	pub enabled: bool,
}

/// Stylesheet resolving and formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StylesheetOptions {
	/// Keywords resolvable in any property value.
	pub keywords: Vec<String>,
	/// Properties whose numeric values take no default unit.
	pub unitless: Vec<String>,
	/// Emit 3-digit hex colors when possible.
	pub short_hex: bool,
	/// Separator between a property name and its value.
	pub between: String,
	/// String appended after a property.
	pub after: String,
	/// Default unit for integer values.
	pub int_unit: String,
	/// Default unit for float values.
	pub float_unit: String,
	/// Unit shortcuts, e.g. `p` for `%`.
	pub unit_aliases: FxHashMap<String, String>,
	/// Produce CSS-in-JS output.
	pub json: bool,
	pub json_double_quotes: bool,
	/// Minimum fuzzy score for an abbreviation to match a snippet.
	pub fuzzy_search_min_score: f64,
	/// Drop properties that failed to match any snippet.
	pub skip_unmatched: bool,
}

impl Default for StylesheetOptions {
	fn default() -> Self {
		let mut unit_aliases = FxHashMap::default();
		unit_aliases.insert("e".to_string(), "em".to_string());
		unit_aliases.insert("p".to_string(), "%".to_string());
		unit_aliases.insert("x".to_string(), "ex".to_string());
		unit_aliases.insert("r".to_string(), "rem".to_string());

		StylesheetOptions {
			keywords: ["auto", "inherit", "unset"]
				.iter()
				.map(|s| s.to_string())
				.collect(),
			unitless: [
				"z-index",
				"line-height",
				"opacity",
				"font-weight",
				"zoom",
				"flex",
				"flex-grow",
				"flex-shrink",
			]
			.iter()
			.map(|s| s.to_string())
			.collect(),
			short_hex: true,
			between: ": ".to_string(),
			after: ";".to_string(),
			int_unit: "px".to_string(),
			float_unit: "em".to_string(),
			unit_aliases,
			json: false,
			json_double_quotes: false,
			fuzzy_search_min_score: 0.0,
			skip_unmatched: true,
		}
	}
}

/// Fully resolved expansion options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
	/// HTML elements considered inline-level.
	pub inline_elements: Vec<String>,
	pub output: OutputOptions,
	pub markup: MarkupOptions,
	pub comment: CommentOptions,
	pub bem: BemOptions,
	pub jsx: JsxOptions,
	pub stylesheet: StylesheetOptions,
}

impl Default for Options {
	fn default() -> Self {
		Options::new()
	}
}

impl Options {
	pub fn new() -> Self {
		Options {
			inline_elements: [
				"a", "abbr", "acronym", "applet", "b", "basefont", "bdo", "big", "br", "button",
				"cite", "code", "del", "dfn", "em", "font", "i", "iframe", "img", "input", "ins",
				"kbd", "label", "map", "object", "q", "s", "samp", "select", "small", "span",
				"strike", "strong", "sub", "sup", "textarea", "tt", "u", "var",
			]
			.iter()
			.map(|s| s.to_string())
			.collect(),
			output: OutputOptions::default(),
			markup: MarkupOptions::default(),
			comment: CommentOptions::default(),
			bem: BemOptions::default(),
			jsx: JsxOptions::default(),
			stylesheet: StylesheetOptions::default(),
		}
	}
}

/// Sparse option overrides, keyed the way user configs spell them
/// (`output.indent`, `bem.enabled`, …). Unset fields keep the value from
/// the layer below.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionsPatch {
	#[serde(rename = "inlineElements", skip_serializing_if = "Option::is_none")]
	pub inline_elements: Option<Vec<String>>,

	#[serde(rename = "output.indent", skip_serializing_if = "Option::is_none")]
	pub output_indent: Option<String>,
	#[serde(rename = "output.baseIndent", skip_serializing_if = "Option::is_none")]
	pub output_base_indent: Option<String>,
	#[serde(rename = "output.newline", skip_serializing_if = "Option::is_none")]
	pub output_newline: Option<String>,
	#[serde(rename = "output.tagCase", skip_serializing_if = "Option::is_none")]
	pub output_tag_case: Option<StringCase>,
	#[serde(rename = "output.attributeCase", skip_serializing_if = "Option::is_none")]
	pub output_attribute_case: Option<StringCase>,
	#[serde(rename = "output.attributeQuotes", skip_serializing_if = "Option::is_none")]
	pub output_attribute_quotes: Option<AttributeQuotes>,
	#[serde(rename = "output.format", skip_serializing_if = "Option::is_none")]
	pub output_format: Option<bool>,
	#[serde(rename = "output.formatLeafNode", skip_serializing_if = "Option::is_none")]
	pub output_format_leaf_node: Option<bool>,
	#[serde(rename = "output.formatSkip", skip_serializing_if = "Option::is_none")]
	pub output_format_skip: Option<Vec<String>>,
	#[serde(rename = "output.formatForce", skip_serializing_if = "Option::is_none")]
	pub output_format_force: Option<Vec<String>>,
	#[serde(rename = "output.inlineBreak", skip_serializing_if = "Option::is_none")]
	pub output_inline_break: Option<usize>,
	#[serde(rename = "output.compactBoolean", skip_serializing_if = "Option::is_none")]
	pub output_compact_boolean: Option<bool>,
	#[serde(rename = "output.booleanAttributes", skip_serializing_if = "Option::is_none")]
	pub output_boolean_attributes: Option<Vec<String>>,
	#[serde(rename = "output.reverseAttributes", skip_serializing_if = "Option::is_none")]
	pub output_reverse_attributes: Option<bool>,
	#[serde(rename = "output.selfClosingStyle", skip_serializing_if = "Option::is_none")]
	pub output_self_closing_style: Option<SelfClosingStyle>,

	#[serde(rename = "markup.href", skip_serializing_if = "Option::is_none")]
	pub markup_href: Option<bool>,

	#[serde(rename = "comment.enabled", skip_serializing_if = "Option::is_none")]
	pub comment_enabled: Option<bool>,
	#[serde(rename = "comment.trigger", skip_serializing_if = "Option::is_none")]
	pub comment_trigger: Option<Vec<String>>,
	#[serde(rename = "comment.before", skip_serializing_if = "Option::is_none")]
	pub comment_before: Option<String>,
	#[serde(rename = "comment.after", skip_serializing_if = "Option::is_none")]
	pub comment_after: Option<String>,

	#[serde(rename = "bem.enabled", skip_serializing_if = "Option::is_none")]
	pub bem_enabled: Option<bool>,
	#[serde(rename = "bem.element", skip_serializing_if = "Option::is_none")]
	pub bem_element: Option<String>,
	#[serde(rename = "bem.modifier", skip_serializing_if = "Option::is_none")]
	pub bem_modifier: Option<String>,

	#[serde(rename = "jsx.enabled", skip_serializing_if = "Option::is_none")]
	pub jsx_enabled: Option<bool>,

	#[serde(rename = "stylesheet.keywords", skip_serializing_if = "Option::is_none")]
	pub stylesheet_keywords: Option<Vec<String>>,
	#[serde(rename = "stylesheet.unitless", skip_serializing_if = "Option::is_none")]
	pub stylesheet_unitless: Option<Vec<String>>,
	#[serde(rename = "stylesheet.shortHex", skip_serializing_if = "Option::is_none")]
	pub stylesheet_short_hex: Option<bool>,
	#[serde(rename = "stylesheet.between", skip_serializing_if = "Option::is_none")]
	pub stylesheet_between: Option<String>,
	#[serde(rename = "stylesheet.after", skip_serializing_if = "Option::is_none")]
	pub stylesheet_after: Option<String>,
	#[serde(rename = "stylesheet.intUnit", skip_serializing_if = "Option::is_none")]
	pub stylesheet_int_unit: Option<String>,
	#[serde(rename = "stylesheet.floatUnit", skip_serializing_if = "Option::is_none")]
	pub stylesheet_float_unit: Option<String>,
	#[serde(rename = "stylesheet.unitAliases", skip_serializing_if = "Option::is_none")]
	pub stylesheet_unit_aliases: Option<FxHashMap<String, String>>,
	#[serde(rename = "stylesheet.json", skip_serializing_if = "Option::is_none")]
	pub stylesheet_json: Option<bool>,
	#[serde(rename = "stylesheet.jsonDoubleQuotes", skip_serializing_if = "Option::is_none")]
	pub stylesheet_json_double_quotes: Option<bool>,
	#[serde(
		rename = "stylesheet.fuzzySearchMinScore",
		skip_serializing_if = "Option::is_none"
	)]
	pub stylesheet_fuzzy_search_min_score: Option<f64>,
	#[serde(rename = "stylesheet.skipUnmatched", skip_serializing_if = "Option::is_none")]
	pub stylesheet_skip_unmatched: Option<bool>,
}

macro_rules! apply_field {
	($self:ident, $options:ident, $($patch:ident => $($target:ident).+),+ $(,)?) => {
		$(
			if let Some(value) = &$self.$patch {
				$options.$($target).+ = value.clone();
			}
		)+
	};
}

impl OptionsPatch {
	/// Applies the set fields of this patch on top of given options.
	pub fn apply(&self, options: &mut Options) {
		apply_field!(self, options,
			inline_elements => inline_elements,
			output_indent => output.indent,
			output_base_indent => output.base_indent,
			output_newline => output.newline,
			output_tag_case => output.tag_case,
			output_attribute_case => output.attribute_case,
			output_attribute_quotes => output.attribute_quotes,
			output_format => output.format,
			output_format_leaf_node => output.format_leaf_node,
			output_format_skip => output.format_skip,
			output_format_force => output.format_force,
			output_inline_break => output.inline_break,
			output_compact_boolean => output.compact_boolean,
			output_boolean_attributes => output.boolean_attributes,
			output_reverse_attributes => output.reverse_attributes,
			output_self_closing_style => output.self_closing_style,
			markup_href => markup.href,
			comment_enabled => comment.enabled,
			comment_trigger => comment.trigger,
			comment_before => comment.before,
			comment_after => comment.after,
			bem_enabled => bem.enabled,
			bem_element => bem.element,
			bem_modifier => bem.modifier,
			jsx_enabled => jsx.enabled,
			stylesheet_keywords => stylesheet.keywords,
			stylesheet_unitless => stylesheet.unitless,
			stylesheet_short_hex => stylesheet.short_hex,
			stylesheet_between => stylesheet.between,
			stylesheet_after => stylesheet.after,
			stylesheet_int_unit => stylesheet.int_unit,
			stylesheet_float_unit => stylesheet.float_unit,
			stylesheet_unit_aliases => stylesheet.unit_aliases,
			stylesheet_json => stylesheet.json,
			stylesheet_json_double_quotes => stylesheet.json_double_quotes,
			stylesheet_fuzzy_search_min_score => stylesheet.fuzzy_search_min_score,
			stylesheet_skip_unmatched => stylesheet.skip_unmatched,
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_patch_apply() {
		let mut options = Options::new();
		let patch = OptionsPatch {
			output_indent: Some("  ".to_string()),
			bem_enabled: Some(true),
			..OptionsPatch::default()
		};
		patch.apply(&mut options);

		assert_eq!(options.output.indent, "  ");
		assert!(options.bem.enabled);
		// Untouched fields keep their defaults
		assert_eq!(options.output.newline, "\n");
	}

	#[test]
	fn test_patch_dotted_keys() {
		let json = r#"{"output.selfClosingStyle": "xhtml", "stylesheet.shortHex": false}"#;
		let patch: OptionsPatch = serde_json::from_str(json).unwrap();
		assert_eq!(patch.output_self_closing_style, Some(SelfClosingStyle::Xhtml));
		assert_eq!(patch.stylesheet_short_hex, Some(false));
	}
}

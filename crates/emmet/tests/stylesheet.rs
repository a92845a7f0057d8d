//! End-to-end stylesheet expansion tests.

use std::rc::Rc;

use pretty_assertions::assert_eq;

use emmet::config::OptionsPatch;
use emmet::{AbbreviationContext, SnippetCache, SyntaxType, UserConfig, expand};

fn field_hook() -> Rc<emmet::config::FieldHook> {
	Rc::new(|index, placeholder: &str, _ctx| {
		if placeholder.is_empty() {
			format!("${{{index}}}")
		} else {
			format!("${{{index}:{placeholder}}}")
		}
	})
}

fn css_config() -> UserConfig {
	UserConfig {
		syntax_type: Some(SyntaxType::Stylesheet),
		..UserConfig::default()
	}
}

fn css(abbr: &str) -> String {
	expand(abbr, css_config()).unwrap()
}

#[test]
fn test_keyword_values() {
	assert_eq!(css("bd1-s#fc0"), "border: 1px solid #fc0;");
	assert_eq!(css("dib"), "display: inline-block;");
	assert_eq!(css("p10"), "padding: 10px;");
	assert_eq!(css("m10-20"), "margin: 10px 20px;");
	assert_eq!(css("m-10--20"), "margin: -10px -20px;");
	assert_eq!(css("fl"), "float: left;");
	assert_eq!(css("poa"), "position: absolute;");
}

#[test]
fn test_colors() {
	assert_eq!(css("c#f.5"), "color: rgba(255, 255, 255, 0.5);");
	assert_eq!(css("c#fc0"), "color: #fc0;");
	assert_eq!(css("bg#t"), "background: transparent;");

	let long_hex = UserConfig {
		options: OptionsPatch {
			stylesheet_short_hex: Some(false),
			..OptionsPatch::default()
		},
		..css_config()
	};
	assert_eq!(expand("c#fc0", long_hex).unwrap(), "color: #ffcc00;");
}

#[test]
fn test_units() {
	assert_eq!(css("w100p"), "width: 100%;");
	assert_eq!(css("m1.5"), "margin: 1.5em;");
	assert_eq!(css("m1.5r"), "margin: 1.5rem;");
	// Unitless properties take no default unit
	assert_eq!(css("z10"), "z-index: 10;");
	assert_eq!(css("lh2"), "line-height: 2;");
}

#[test]
fn test_important() {
	assert_eq!(css("p10!"), "padding: 10px !important;");
}

#[test]
fn test_raw_snippets() {
	let config = UserConfig {
		field: Some(field_hook()),
		..css_config()
	};
	assert_eq!(expand("@k-name", config).unwrap(), "@keyframes name {\n\t${2}\n}");

	let config = UserConfig {
		field: Some(field_hook()),
		..css_config()
	};
	assert_eq!(
		expand("@kf", config).unwrap(),
		"@keyframes ${1:identifier} {\n\t${2}\n}"
	);
}

#[test]
fn test_gradient() {
	assert_eq!(
		css("lg(to right, #0, #f00.5)"),
		"background-image: linear-gradient(to right, #000, rgba(255, 0, 0, 0.5));"
	);
}

#[test]
fn test_multiple_properties() {
	assert_eq!(css("p10+m20"), "padding: 10px;\nmargin: 20px;");

	let unformatted = UserConfig {
		options: OptionsPatch {
			output_format: Some(false),
			..OptionsPatch::default()
		},
		..css_config()
	};
	assert_eq!(expand("p10+m20", unformatted).unwrap(), "padding: 10px;margin: 20px;");
}

#[test]
fn test_skip_unmatched() {
	// Unknown abbreviation is dropped by default
	assert_eq!(css("p10+ffffff"), "padding: 10px;");

	let keep = UserConfig {
		options: OptionsPatch {
			stylesheet_skip_unmatched: Some(false),
			..OptionsPatch::default()
		},
		..css_config()
	};
	// The closest snippet still renames the property; the unmatched tail
	// is dropped silently
	assert_eq!(expand("ffffff", keep).unwrap(), "font-family: ;");
}

#[test]
fn test_syntax_separators() {
	let sass = UserConfig {
		syntax: Some("sass".to_string()),
		..css_config()
	};
	assert_eq!(expand("p10", sass).unwrap(), "padding: 10px");

	let stylus = UserConfig {
		syntax: Some("stylus".to_string()),
		..css_config()
	};
	assert_eq!(expand("p10", stylus).unwrap(), "padding 10px");
}

#[test]
fn test_json_output() {
	let json = || UserConfig {
		options: OptionsPatch {
			stylesheet_json: Some(true),
			..OptionsPatch::default()
		},
		..css_config()
	};

	assert_eq!(expand("p10", json()).unwrap(), "padding: 10,");
	assert_eq!(expand("fl", json()).unwrap(), "float: 'left',");
	assert_eq!(expand("bgc", json()).unwrap(), "backgroundColor: '#fff',");
}

#[test]
fn test_custom_snippets() {
	let config = UserConfig {
		snippets: [
			("mten".to_string(), "margin: 10px;".to_string()),
			("fsz".to_string(), "font-size".to_string()),
		]
		.into_iter()
		.collect(),
		..css_config()
	};
	assert_eq!(expand("fsz12", config).unwrap(), "font-size: 12px;");
}

#[test]
fn test_value_context() {
	// Resolve as a value of an existing property
	let config = UserConfig {
		context: Some(AbbreviationContext {
			name: "display".to_string(),
			..AbbreviationContext::default()
		}),
		..css_config()
	};
	assert_eq!(expand("ib", config).unwrap(), "inline-block");
}

#[test]
fn test_snippet_cache() {
	let cache = SnippetCache::new();

	let config = UserConfig {
		cache: Some(cache.clone()),
		..css_config()
	};
	assert_eq!(expand("p10", config).unwrap(), "padding: 10px;");

	// The second call reuses the parsed snippet index
	assert!(cache.get().is_some());
	let config = UserConfig {
		cache: Some(cache.clone()),
		..css_config()
	};
	assert_eq!(expand("m20", config).unwrap(), "margin: 20px;");
}

#[test]
fn test_default_value_fields() {
	let config = UserConfig {
		field: Some(field_hook()),
		..css_config()
	};
	// Multiple value alternatives are offered as a tab-stop
	assert_eq!(expand("d", config).unwrap(), "display: ${1:block};");

	let config = UserConfig {
		field: Some(field_hook()),
		..css_config()
	};
	// A single alternative with fields is inserted as-is
	assert_eq!(expand("bd", config).unwrap(), "border: ${1:1px} ${2:solid} ${3:#000};");
}

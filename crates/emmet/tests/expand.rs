//! End-to-end markup expansion tests.

use std::rc::Rc;

use indexmap::IndexMap;
use pretty_assertions::assert_eq;

use emmet::config::OptionsPatch;
use emmet::{TextValue, UserConfig, expand};

fn field_hook() -> Rc<emmet::config::FieldHook> {
	Rc::new(|index, placeholder: &str, _ctx| {
		if placeholder.is_empty() {
			format!("${{{index}}}")
		} else {
			format!("${{{index}:{placeholder}}}")
		}
	})
}

fn snippets(entries: &[(&str, &str)]) -> IndexMap<String, String> {
	entries
		.iter()
		.map(|(k, v)| (k.to_string(), v.to_string()))
		.collect()
}

fn simple(abbr: &str) -> String {
	expand(abbr, UserConfig::default()).unwrap()
}

#[test]
fn test_basic() {
	assert_eq!(
		simple("input[value=\"text$\"]*2"),
		"<input type=\"text\" value=\"text1\"><input type=\"text\" value=\"text2\">"
	);
	assert_eq!(
		simple("ul>.item$*2"),
		"<ul>\n\t<li class=\"item1\"></li>\n\t<li class=\"item2\"></li>\n</ul>"
	);
	assert_eq!(
		simple("ul>li.item$*2"),
		"<ul>\n\t<li class=\"item1\"></li>\n\t<li class=\"item2\"></li>\n</ul>"
	);

	// Insert wrapped text into the abbreviation, skipping blank lines
	let config = UserConfig {
		text: Some(TextValue::Lines(vec![
			"foo".to_string(),
			String::new(),
			"bar".to_string(),
			String::new(),
		])),
		..UserConfig::default()
	};
	assert_eq!(
		expand("ul>.item$*", config).unwrap(),
		"<ul>\n\t<li class=\"item1\">foo</li>\n\t<li class=\"item2\">bar</li>\n</ul>"
	);

	// TextMate-style fields in the output
	let config = UserConfig {
		field: Some(field_hook()),
		..UserConfig::default()
	};
	assert_eq!(
		expand("ul>.item$*2", config).unwrap(),
		"<ul>\n\t<li class=\"item1\">${1}</li>\n\t<li class=\"item2\">${2}</li>\n</ul>"
	);
}

#[test]
fn test_attribute_merge() {
	assert_eq!(simple("a.test"), "<a href=\"\" class=\"test\"></a>");

	let reverse = UserConfig {
		options: OptionsPatch {
			output_reverse_attributes: Some(true),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(
		expand("a.test", reverse).unwrap(),
		"<a class=\"test\" href=\"\"></a>"
	);
}

#[test]
fn test_custom_snippet_attributes() {
	let config = || UserConfig {
		snippets: snippets(&[("test", "test[!foo bar. baz={}]")]),
		..UserConfig::default()
	};

	assert_eq!(expand("test", config()).unwrap(), "<test bar=\"bar\" baz={}></test>");
	assert_eq!(
		expand("test[foo]", config()).unwrap(),
		"<test bar=\"bar\" baz={}></test>"
	);
	assert_eq!(
		expand("test[baz=a foo=1]", config()).unwrap(),
		"<test foo=\"1\" bar=\"bar\" baz={a}></test>"
	);
}

#[test]
fn test_expressions() {
	assert_eq!(simple("span{{foo}}"), "<span>{foo}</span>");
	assert_eq!(simple("span{foo}"), "<span>foo</span>");
	assert_eq!(simple("span[foo={bar}]"), "<span foo={bar}></span>");
	assert_eq!(simple("span[foo={{bar}}]"), "<span foo={{bar}}></span>");
}

#[test]
fn test_numbering() {
	assert_eq!(
		simple("ul>li.item$@-*5"),
		"<ul>\n\t<li class=\"item5\"></li>\n\t<li class=\"item4\"></li>\n\t<li class=\"item3\"></li>\n\t<li class=\"item2\"></li>\n\t<li class=\"item1\"></li>\n</ul>"
	);
}

#[test]
fn test_syntax() {
	let slim = UserConfig {
		syntax: Some("slim".to_string()),
		..UserConfig::default()
	};
	assert_eq!(
		expand("ul>.item$*2", slim).unwrap(),
		"ul\n\tli.item1 \n\tli.item2 "
	);

	let xsl = UserConfig {
		syntax: Some("xsl".to_string()),
		..UserConfig::default()
	};
	assert_eq!(
		expand("xsl:variable[name=a select=b]>div", xsl).unwrap(),
		"<xsl:variable name=\"a\">\n\t<div></div>\n</xsl:variable>"
	);
}

#[test]
fn test_self_closing_styles() {
	assert_eq!(simple("img"), "<img src=\"\" alt=\"\">");

	let xhtml = UserConfig {
		options: OptionsPatch {
			output_self_closing_style: Some(emmet::config::SelfClosingStyle::Xhtml),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(expand("img", xhtml).unwrap(), "<img src=\"\" alt=\"\" />");

	let xml = UserConfig {
		options: OptionsPatch {
			output_self_closing_style: Some(emmet::config::SelfClosingStyle::Xml),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(expand("img[src]/", xml).unwrap(), "<img src=\"\" alt=\"\"/>");
}

#[test]
fn test_custom_variables() {
	assert_eq!(
		simple("[charset=${charset}]{${charset}}"),
		"<div charset=\"UTF-8\">UTF-8</div>"
	);

	let config = UserConfig {
		variables: [("charset".to_string(), "ru-RU".to_string())]
			.into_iter()
			.collect(),
		..UserConfig::default()
	};
	assert_eq!(
		expand("[charset=${charset}]{${charset}}", config).unwrap(),
		"<div charset=\"ru-RU\">ru-RU</div>"
	);
}

#[test]
fn test_custom_snippets() {
	let custom = snippets(&[
		("link", "link[foo=bar href]/"),
		("foo", ".foo[bar=baz]"),
		("repeat", "div>ul>li{Hello World}*3"),
	]);

	let config = UserConfig {
		snippets: custom.clone(),
		..UserConfig::default()
	};
	assert_eq!(
		expand("foo", config).unwrap(),
		"<div class=\"foo\" bar=\"baz\"></div>"
	);

	// `link:css` builds on `link`, so changing the base snippet alters the
	// derived one
	assert_eq!(
		simple("link:css"),
		"<link rel=\"stylesheet\" href=\"style.css\">"
	);
	let config = UserConfig {
		snippets: custom.clone(),
		..UserConfig::default()
	};
	assert_eq!(
		expand("link:css", config).unwrap(),
		"<link foo=\"bar\" href=\"style.css\">"
	);

	// Repeated content inside a snippet
	let config = UserConfig {
		snippets: custom,
		..UserConfig::default()
	};
	assert_eq!(
		expand("repeat", config).unwrap(),
		"<div>\n\t<ul>\n\t\t<li>Hello World</li>\n\t\t<li>Hello World</li>\n\t\t<li>Hello World</li>\n\t</ul>\n</div>"
	);
}

#[test]
fn test_jsx() {
	let jsx = || UserConfig {
		syntax: Some("jsx".to_string()),
		..UserConfig::default()
	};

	assert_eq!(
		expand("div#foo.bar", jsx()).unwrap(),
		"<div id=\"foo\" className=\"bar\"></div>"
	);
	assert_eq!(
		expand("label[for=a]", jsx()).unwrap(),
		"<label htmlFor=\"a\"></label>"
	);
	assert_eq!(expand("Foo.Bar", jsx()).unwrap(), "<Foo.Bar></Foo.Bar>");
	assert_eq!(
		expand("div.{theme.style}", jsx()).unwrap(),
		"<div className={theme.style}></div>"
	);
}

#[test]
fn test_wrap_with_abbreviation() {
	let wrap = |abbr: &str, text: TextValue| {
		expand(
			abbr,
			UserConfig {
				text: Some(text),
				..UserConfig::default()
			},
		)
		.unwrap()
	};

	assert_eq!(
		wrap(
			"img[src=\"$#\"]*",
			TextValue::Lines(vec!["foo.jpg".to_string(), "bar.jpg".to_string()])
		),
		"<img src=\"foo.jpg\" alt=\"\"><img src=\"bar.jpg\" alt=\"\">"
	);

	assert_eq!(
		wrap(
			"div>ul",
			TextValue::Lines(vec!["<div>line1</div>\n<div>line2</div>".to_string()])
		),
		"<div>\n\t<ul>\n\t\t<div>line1</div>\n\t\t<div>line2</div>\n\t</ul>\n</div>"
	);

	assert_eq!(
		wrap("a", TextValue::Single("foo".to_string())),
		"<a href=\"\">foo</a>"
	);
	assert_eq!(
		wrap("a", TextValue::Single("http://emmet.io".to_string())),
		"<a href=\"http://emmet.io\">http://emmet.io</a>"
	);
	assert_eq!(
		wrap("a", TextValue::Single("//emmet.io".to_string())),
		"<a href=\"//emmet.io\">//emmet.io</a>"
	);
	assert_eq!(
		wrap("a", TextValue::Single("www.emmet.io".to_string())),
		"<a href=\"http://www.emmet.io\">www.emmet.io</a>"
	);
	assert_eq!(
		wrap("a", TextValue::Single("emmet.io".to_string())),
		"<a href=\"\">emmet.io</a>"
	);
	assert_eq!(
		wrap("a", TextValue::Single("info@emmet.io".to_string())),
		"<a href=\"mailto:info@emmet.io\">info@emmet.io</a>"
	);
	assert_eq!(
		wrap("a", TextValue::Single("emmet//io".to_string())),
		"<a href=\"\">emmet//io</a>"
	);
}

#[test]
fn test_comment_wrapping() {
	let config = UserConfig {
		options: OptionsPatch {
			comment_enabled: Some(true),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(
		expand("ul>li.item", config).unwrap(),
		"<ul>\n\t<li class=\"item\"></li>\n\t<!-- /.item -->\n</ul>"
	);

	let config = UserConfig {
		options: OptionsPatch {
			comment_enabled: Some(true),
			comment_after: Some(" { [%ID] }".to_string()),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(
		expand("div>ul>li.item#foo", config).unwrap(),
		"<div>\n\t<ul>\n\t\t<li class=\"item\" id=\"foo\"></li> { %foo }\n\t</ul>\n</div>"
	);
}

#[test]
fn test_bem() {
	let bem = || UserConfig {
		options: OptionsPatch {
			bem_enabled: Some(true),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};

	assert_eq!(expand(".b_m", bem()).unwrap(), "<div class=\"b b_m\"></div>");
	assert_eq!(
		expand("div.b_m1._m2", bem()).unwrap(),
		"<div class=\"b b_m1 b_m2\"></div>"
	);
	assert_eq!(
		expand("div.b>div.-e", bem()).unwrap(),
		"<div class=\"b\">\n\t<div class=\"b__e\"></div>\n</div>"
	);
	assert_eq!(
		expand("div.b>div._m", bem()).unwrap(),
		"<div class=\"b\">\n\t<div class=\"b b_m\"></div>\n</div>"
	);
}

#[test]
fn test_inline_elements_formatting() {
	assert_eq!(simple("p>i"), "<p><i></i></p>");
	assert_eq!(simple("p>i*2"), "<p><i></i><i></i></p>");
	assert_eq!(simple("p>i*3"), "<p>\n\t<i></i>\n\t<i></i>\n\t<i></i>\n</p>");

	let keep_inline = UserConfig {
		options: OptionsPatch {
			output_inline_break: Some(0),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(expand("p>i*3", keep_inline).unwrap(), "<p><i></i><i></i><i></i></p>");

	assert_eq!(simple("i*2"), "<i></i><i></i>");
	assert_eq!(simple("i*3"), "<i></i>\n<i></i>\n<i></i>");
	assert_eq!(simple("i{a}+i{b}"), "<i>a</i><i>b</i>");
}

#[test]
fn test_mixed_content() {
	assert_eq!(simple("div{foo}"), "<div>foo</div>");
	assert_eq!(simple("div>{foo}"), "<div>foo</div>");
	assert_eq!(simple("div>{foo}+{bar}"), "<div>\n\tfoo\n\tbar\n</div>");
	assert_eq!(
		simple("div>{foo}+p+{bar}"),
		"<div>\n\tfoo\n\t<p></p>\n\tbar\n</div>"
	);
	assert_eq!(simple("div>{<!-- ${0} -->}"), "<div><!--  --></div>");
	assert_eq!(
		simple("div>{<!-- ${0} -->}>p"),
		"<div>\n\t<!-- <p></p> -->\n</div>"
	);
}

#[test]
fn test_no_formatting() {
	let profile = || UserConfig {
		options: OptionsPatch {
			output_format: Some(false),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};

	assert_eq!(expand("div>p", profile()).unwrap(), "<div><p></p></div>");
	assert_eq!(
		expand("div>{foo}>p", profile()).unwrap(),
		"<div>foo<p></p></div>"
	);
}

#[test]
fn test_boolean_attributes() {
	let compact = UserConfig {
		options: OptionsPatch {
			output_compact_boolean: Some(true),
			..OptionsPatch::default()
		},
		..UserConfig::default()
	};
	assert_eq!(expand("p[contenteditable]", compact).unwrap(), "<p contenteditable></p>");

	assert_eq!(
		simple("p[contenteditable]"),
		"<p contenteditable=\"contenteditable\"></p>"
	);
	assert_eq!(simple("p[b.]"), "<p b=\"b\"></p>");
}

#[test]
fn test_document_template() {
	let config = UserConfig {
		field: Some(field_hook()),
		..UserConfig::default()
	};
	assert_eq!(
		expand(
			"{<!DOCTYPE html>}+html>(head>meta[charset=${charset}]/+title{${1:Document}})+body",
			config
		)
		.unwrap(),
		"<!DOCTYPE html>\n<html>\n<head>\n\t<meta charset=\"UTF-8\">\n\t<title>${2:Document}</title>\n</head>\n<body>\n\t${3}\n</body>\n</html>"
	);
}

#[test]
fn test_repeat_guard() {
	let config = UserConfig {
		max_repeat: Some(5),
		..UserConfig::default()
	};
	assert_eq!(expand("b*10", config).unwrap().matches("<b>").count(), 5);
}

#[test]
fn test_lorem() {
	let output = simple("lorem");
	assert!(output.starts_with("Lorem"));
	assert!(output.split(' ').count() > 20);

	let output = simple("lorem5");
	assert!(output.starts_with("Lorem"));
	assert_eq!(output.split(' ').count(), 5);

	let output = simple("lorem5-10");
	let count = output.split(' ').count();
	assert!((5..=10).contains(&count));

	let output = simple("p>lorem4");
	assert!(output.starts_with("<p>Lorem"));

	// Only the first repeated copy starts with the common opening
	let output = simple("ul>lorem4*3");
	let lines: Vec<&str> = output.lines().collect();
	assert_eq!(lines.len(), 5);
	assert!(lines[1].starts_with("\t<li>Lorem"));
	assert!(!lines[2].starts_with("\t<li>Lorem"));
}

#[test]
fn test_label_wiring() {
	// A label wrapping a control drops the empty `for`/`id` pair
	let output = simple("label>input");
	assert!(!output.contains("for="));

	let output = simple("label+input");
	assert!(output.contains("for=\"\""));
}

#[test]
fn test_malformed_abbreviation() {
	let err = expand("div[foo=\"bar]", UserConfig::default()).unwrap_err();
	assert!(err.to_string().contains("Unclosed quote"));
}

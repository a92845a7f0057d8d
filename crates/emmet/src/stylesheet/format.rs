//! Stylesheet output formatter.

use emmet_css_abbreviation::{CssProperty, CssToken, CssTokenKind, CssValue, QuoteKind};

use crate::config::Config;
use crate::output::OutputStream;
use crate::stylesheet::ResolvedProperty;
use crate::stylesheet::color::{color, frac};

/// Converts given resolved abbreviation to a string according to config.
pub fn stringify(abbr: &[ResolvedProperty], config: &Config) -> String {
	let mut out = OutputStream::new(config);
	let format = config.options.output.format;

	let filtered: Vec<&ResolvedProperty> = if config.options.stylesheet.skip_unmatched {
		// Filter out unmatched abbreviations
		abbr.iter()
			.filter(|prop| prop.snippet.is_some() || prop.node.important)
			.collect()
	} else {
		abbr.iter().collect()
	};

	for (i, prop) in filtered.iter().enumerate() {
		if format && i != 0 {
			out.push_newline(Some(out.level));
		}
		css_property(&prop.node, &mut out, config);
	}

	out.into_value()
}

/// Outputs given abbreviation node into the output stream.
fn css_property(node: &CssProperty, out: &mut OutputStream, config: &Config) {
	let is_json = config.options.stylesheet.json;

	if let Some(name) = &node.name {
		// It’s a CSS property
		let name = if is_json {
			to_camel_case(name)
		} else {
			name.clone()
		};
		out.push_string(&format!("{name}{}", config.options.stylesheet.between));

		if node.value.is_empty() {
			out.push_field(0, "");
		} else {
			css_property_value(node, out, config);
		}

		if is_json {
			// CSS-in-JS always finalizes a property with a comma;
			// `!important` is not available there
			out.push(",");
		} else {
			output_important(node, out, true);
			let after = config.options.stylesheet.after.clone();
			out.push(&after);
		}
	} else {
		// A regular snippet: output plain tokens without any additional
		// formatting
		for css_value in &node.value {
			for token in &css_value.value {
				output_token(token, out, config);
			}
		}
		output_important(node, out, !node.value.is_empty());
	}
}

fn css_property_value(node: &CssProperty, out: &mut OutputStream, config: &Config) {
	let is_json = config.options.stylesheet.json;
	let num = if is_json { single_numeric(node) } else { None };

	if let Some((value, unit)) = num {
		if unit.is_empty() || unit == "px" {
			// A single px-ish numeric value becomes a JS number
			out.push(&frac(value, 4));
			return;
		}
	}

	let quote = json_quote(config);
	if is_json {
		out.push(&quote.to_string());
	}

	for (i, value) in node.value.iter().enumerate() {
		if i != 0 {
			out.push(", ");
		}
		output_value(value, out, config);
	}

	if is_json {
		out.push(&quote.to_string());
	}
}

fn output_important(node: &CssProperty, out: &mut OutputStream, separator: bool) {
	if node.important {
		if separator {
			out.push(" ");
		}
		out.push("!important");
	}
}

fn output_value(value: &CssValue, out: &mut OutputStream, config: &Config) {
	let mut prev_end: Option<usize> = None;

	for (i, token) in value.value.iter().enumerate() {
		// A field written right after the previous token, like `foo${bar}`,
		// takes no delimiter
		let is_adjacent_field =
			matches!(token.kind, CssTokenKind::Field { .. }) && token.start == prev_end;

		if i != 0 && !is_adjacent_field {
			out.push(" ");
		}

		output_token(token, out, config);
		prev_end = token.end;
	}
}

fn output_token(token: &CssToken, out: &mut OutputStream, config: &Config) {
	match &token.kind {
		CssTokenKind::Color { r, g, b, a, .. } => {
			out.push(&color(*r, *g, *b, *a, config.options.stylesheet.short_hex));
		}
		CssTokenKind::Literal(value) => out.push_string(value),
		CssTokenKind::Number { value, unit, .. } => {
			out.push_string(&format!("{}{unit}", frac(*value, 4)));
		}
		CssTokenKind::Str { value, quote } => {
			let q = match quote {
				QuoteKind::Double => '"',
				QuoteKind::Single => '\'',
			};
			out.push_string(&format!("{q}{value}{q}"));
		}
		CssTokenKind::Field { index, name } => {
			out.push_field(index.unwrap_or(0), name);
		}
		CssTokenKind::FunctionCall { name, arguments } => {
			out.push(&format!("{name}("));
			for (i, argument) in arguments.iter().enumerate() {
				if i != 0 {
					out.push(", ");
				}
				output_value(argument, out, config);
			}
			out.push(")");
		}
		CssTokenKind::WhiteSpace | CssTokenKind::Bracket { .. } | CssTokenKind::Operator(_) => {}
	}
}

/// If the value of given property is a single numeric token, returns it.
fn single_numeric(node: &CssProperty) -> Option<(f64, String)> {
	if node.value.len() == 1 && node.value[0].value.len() == 1 {
		if let CssTokenKind::Number { value, unit, .. } = &node.value[0].value[0].kind {
			return Some((*value, unit.clone()));
		}
	}

	None
}

/// Converts a kebab-case property name to camelCase.
fn to_camel_case(text: &str) -> String {
	let mut result = String::with_capacity(text.len());
	let mut upper_next = false;

	for ch in text.chars() {
		if ch == '-' {
			upper_next = true;
		} else if upper_next {
			result.extend(ch.to_uppercase());
			upper_next = false;
		} else {
			result.push(ch);
		}
	}

	result
}

fn json_quote(config: &Config) -> char {
	if config.options.stylesheet.json_double_quotes {
		'"'
	} else {
		'\''
	}
}

#[cfg(test)]
mod tests {
	use super::to_camel_case;

	#[test]
	fn test_camel_case() {
		assert_eq!(to_camel_case("background-position-x"), "backgroundPositionX");
		assert_eq!(to_camel_case("color"), "color");
	}
}

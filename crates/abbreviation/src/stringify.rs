//! Token stringification against the current repeater stack.

use crate::convert::ConvertState;
use crate::tokenizer::tokens::{BracketType, OperatorType, Token, TokenKind};

/// Converts given token to its string representation.
///
/// Repeater numbers and placeholders are substituted against the repeater
/// stack of the convert state; variable fields are resolved against the
/// configured variables.
pub fn stringify(token: &Token, state: &mut ConvertState) -> String {
	match &token.kind {
		TokenKind::Literal(value) => value.clone(),
		TokenKind::Quote(single) => if *single { "'" } else { "\"" }.to_string(),
		TokenKind::Bracket { open, context } => match (context, open) {
			(BracketType::Attribute, true) => "[",
			(BracketType::Attribute, false) => "]",
			(BracketType::Expression, true) => "{",
			(BracketType::Expression, false) => "}",
			(BracketType::Group, true) => "(",
			(BracketType::Group, false) => ")",
		}
		.to_string(),
		TokenKind::Operator(op) => match op {
			OperatorType::Child => ">",
			OperatorType::Class => ".",
			OperatorType::Climb => "^",
			OperatorType::Id => "#",
			OperatorType::Equal => "=",
			OperatorType::Close => "/",
			OperatorType::Sibling => "+",
		}
		.to_string(),
		TokenKind::Field { index, name } => match index {
			// By default, return a TextMate-compatible field
			Some(index) if name.is_empty() => format!("${{{index}}}"),
			Some(index) => format!("${{{index}:{name}}}"),
			// A variable reference
			None if !name.is_empty() => state.variable(name),
			None => String::new(),
		},
		TokenKind::RepeaterPlaceholder => {
			// Replaced with the wrapped text of the closest implicit repeater
			let value = state
				.repeaters
				.iter()
				.rev()
				.find(|repeater| repeater.implicit)
				.map(|repeater| repeater.value);
			state.inserted = true;
			match value {
				Some(pos) => state.text_at(Some(pos)),
				None => String::new(),
			}
		}
		TokenKind::RepeaterNumber {
			size,
			reverse,
			base,
			parent,
		} => {
			let mut value = 1;
			if !state.repeaters.is_empty() {
				let last_ix = state.repeaters.len() - 1;
				let repeater = state.repeaters[last_ix];
				value = if *reverse {
					base + repeater.count - repeater.value - 1
				} else {
					base + repeater.value
				};

				if *parent > 0 {
					let parent_ix = last_ix.saturating_sub(*parent);
					if parent_ix != last_ix {
						value += repeater.count * state.repeaters[parent_ix].value;
					}
				}
			}

			let width = *size;
			format!("{value:0width$}")
		}
		TokenKind::WhiteSpace => " ".to_string(),
		TokenKind::Repeater(_) => String::new(),
	}
}

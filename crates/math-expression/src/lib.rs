//! Math expression support for editor actions like "Evaluate Math
//! Expression": a shunting-yard parser, a postfix evaluator and a backward
//! extractor that finds the expression ending at the caret.

pub mod extract;
pub mod parser;

pub use extract::extract;
pub use parser::{MathExpressionError, parse};

use parser::{MathToken, MathTokenKind, Operator};

/// Parses and evaluates given expression.
pub fn evaluate(expr: &str) -> Result<f64, MathExpressionError> {
	evaluate_tokens(&parse(expr)?)
}

/// Evaluates an expression already parsed into postfix order.
pub fn evaluate_tokens(tokens: &[MathToken]) -> Result<f64, MathExpressionError> {
	let mut stack: Vec<f64> = Vec::new();
	let invalid = || MathExpressionError {
		message: "Invalid expression".to_string(),
		pos: None,
	};

	for token in tokens {
		match token.kind {
			MathTokenKind::Number(value) => stack.push(value),
			MathTokenKind::Op2(op) => {
				let n2 = stack.pop().ok_or_else(invalid)?;
				let n1 = stack.pop().ok_or_else(invalid)?;
				stack.push(match op {
					Operator::Plus => n1 + n2,
					Operator::Minus => n1 - n2,
					Operator::Multiply => n1 * n2,
					Operator::Divide => n1 / n2,
					Operator::IntDivide => (n1 / n2).floor(),
				});
			}
			MathTokenKind::Op1 => {
				let n1 = stack.pop().ok_or_else(invalid)?;
				stack.push(-n1);
			}
			MathTokenKind::Null => return Err(invalid()),
		}
	}

	if stack.len() != 1 {
		return Err(MathExpressionError {
			message: "Invalid expression (parity)".to_string(),
			pos: None,
		});
	}

	Ok(stack[0])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_evaluate() {
		assert_eq!(evaluate("1+2").unwrap(), 3.0);
		assert_eq!(evaluate("2*3+4").unwrap(), 10.0);
		assert_eq!(evaluate("2*(3+4)").unwrap(), 14.0);
		assert_eq!(evaluate("-5+6").unwrap(), 1.0);
		assert_eq!(evaluate("10/4").unwrap(), 2.5);
		assert_eq!(evaluate(r"10\4").unwrap(), 2.0);
		assert_eq!(evaluate("2 + 2 * 2").unwrap(), 6.0);
		assert_eq!(evaluate(".5 * 4").unwrap(), 2.0);
	}

	#[test]
	fn test_errors() {
		assert!(evaluate("2+").is_err());
		assert!(evaluate("(2+3").is_err());
		assert!(evaluate("a+b").is_err());
	}

	#[test]
	fn test_extract_and_evaluate() {
		let (start, end) = extract("foo 2*4", None, &Default::default()).unwrap();
		assert_eq!(evaluate(&"foo 2*4"[start..end]).unwrap(), 8.0);
	}
}

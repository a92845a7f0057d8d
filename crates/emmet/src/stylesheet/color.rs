//! Color formatting for stylesheet output.

/// Formats a color as `#rrggbb`, a 3-digit short form, `rgba(…)` when it
/// has alpha, or `transparent`.
pub fn color(r: u8, g: u8, b: u8, a: f64, short_hex: bool) -> String {
	if r == 0 && g == 0 && b == 0 && a == 0.0 {
		return "transparent".to_string();
	}

	if a == 1.0 {
		as_hex(r, g, b, short_hex)
	} else {
		as_rgb(r, g, b, a)
	}
}

/// Outputs given color as a hex value; `short` produces `#fff` instead of
/// `#ffffff` when every channel allows it.
fn as_hex(r: u8, g: u8, b: u8, short: bool) -> String {
	if short && is_short_hex(r) && is_short_hex(g) && is_short_hex(b) {
		format!("#{:x}{:x}{:x}", r >> 4, g >> 4, b >> 4)
	} else {
		format!("#{r:02x}{g:02x}{b:02x}")
	}
}

fn as_rgb(r: u8, g: u8, b: u8, a: f64) -> String {
	if a != 1.0 {
		format!("rgba({r}, {g}, {b}, {})", frac(a, 8))
	} else {
		format!("rgb({r}, {g}, {b})")
	}
}

/// Formats a number with up to `digits` decimals, trimming trailing zeros
/// and a lone trailing dot.
pub fn frac(num: f64, digits: usize) -> String {
	let text = format!("{num:.digits$}");
	if text.contains('.') {
		let trimmed = text.trim_end_matches('0').trim_end_matches('.');
		trimmed.to_string()
	} else {
		text
	}
}

fn is_short_hex(value: u8) -> bool {
	value % 17 == 0
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_hex() {
		assert_eq!(color(255, 204, 0, 1.0, true), "#fc0");
		assert_eq!(color(255, 204, 0, 1.0, false), "#ffcc00");
		assert_eq!(color(255, 205, 0, 1.0, true), "#ffcd00");
	}

	#[test]
	fn test_rgba_and_transparent() {
		assert_eq!(color(255, 255, 255, 0.5, true), "rgba(255, 255, 255, 0.5)");
		assert_eq!(color(0, 0, 0, 0.0, true), "transparent");
	}

	#[test]
	fn test_frac() {
		assert_eq!(frac(1.0, 4), "1");
		assert_eq!(frac(1.25, 4), "1.25");
		assert_eq!(frac(0.5, 8), "0.5");
		assert_eq!(frac(10.123456, 4), "10.1235");
	}
}

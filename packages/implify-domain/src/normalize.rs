use serde_json::Value;

/// Absolute tolerance for dimensional attributes (millimetres, degrees, grams).
pub const NUMERIC_TOLERANCE: f64 = 0.05;

/// Parses a decimal number. Empty, non-numeric, and non-finite input yields `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
	let trimmed = raw.trim();

	if trimmed.is_empty() {
		return None;
	}

	trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Reads a catalog value as a number. Numeric strings are accepted.
pub fn value_number(value: &Value) -> Option<f64> {
	match value {
		Value::Number(number) => number.as_f64().filter(|value| value.is_finite()),
		Value::String(text) => parse_number(text),
		_ => None,
	}
}

/// Reads a catalog value as text. Numbers and booleans are rendered; everything else is absent.
pub fn value_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Number(number) => Some(number.to_string()),
		Value::Bool(flag) => Some(flag.to_string()),
		_ => None,
	}
}

pub fn eq_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
	haystack.unwrap_or_default().to_lowercase() == needle.to_lowercase()
}

pub fn contains_ignore_case(haystack: Option<&str>, needle: &str) -> bool {
	haystack.unwrap_or_default().to_lowercase().contains(&needle.to_lowercase())
}

/// Tolerance-bounded equality. Fails closed when either side is missing or unparseable.
pub fn approx_eq(actual: Option<f64>, wanted: &str) -> bool {
	match (actual, parse_number(wanted)) {
		(Some(actual), Some(wanted)) => (actual - wanted).abs() <= NUMERIC_TOLERANCE,
		_ => false,
	}
}

/// Exact numeric equality after parsing. Fails closed like [`approx_eq`].
pub fn exact_eq(actual: Option<f64>, wanted: &str) -> bool {
	match (actual, parse_number(wanted)) {
		(Some(actual), Some(wanted)) => actual == wanted,
		_ => false,
	}
}

/// Renders a number the shortest way, so `4.0` becomes `4` and `4.1` stays `4.1`.
pub fn format_number(value: f64) -> String {
	value.to_string()
}

use crate::concat_string;

/// Quotes `value` as a double-quoted JavaScript string literal.
///
/// JSON string syntax is a subset of JavaScript string syntax, except for the two line terminators
/// U+2028 and U+2029 which older engines reject inside string literals.
pub fn js_string_literal(value: &str) -> String {
  serde_json::Value::String(value.to_string())
    .to_string()
    .replace('\u{2028}', "\\u2028")
    .replace('\u{2029}', "\\u2029")
}

/// `obj["prop"]` with `prop` quoted as a string literal.
pub fn computed_member_str(obj: &str, prop: &str) -> String {
  concat_string!(obj, "[", js_string_literal(prop), "]")
}

#[test]
fn test_js_string_literal() {
  assert_eq!(js_string_literal("main"), "\"main\"");
  assert_eq!(js_string_literal("a\"b"), "\"a\\\"b\"");
  assert_eq!(js_string_literal("line\nbreak"), "\"line\\nbreak\"");
  assert_eq!(js_string_literal("\u{2028}"), "\"\\u2028\"");
}

#[test]
fn test_computed_member_str() {
  assert_eq!(computed_member_str("__modules", "utils/math"), "__modules[\"utils/math\"]");
}

//! Interpretation of documented default values.
//!
//! A default is written as free text (`default: \`["a", "b"]\``) and read
//! according to the option's type annotation. The result is a closed
//! [`serde_json::Value`]; `None` means no usable default was documented.

use serde_json::{Number, Value};

use super::types::{TypeAnnotation, strip_code};

/// Largest integer an `f64` represents exactly.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse the text following `default:` under the given type annotation.
///
/// Without a type annotation the trimmed text is returned verbatim. Otherwise
/// inline code and one layer of surrounding double quotes are stripped before
/// the value is read. Text that cannot be read as the declared type yields `None`.
///
/// # Examples
///
/// ```
/// use lintdoc::parser::value::parse_value;
/// use serde_json::json;
///
/// assert_eq!(parse_value("`true`", Some("`boolean`")), Some(json!(true)));
/// assert_eq!(parse_value("`[\"a\"]`", Some("`array`")), Some(json!(["a"])));
/// assert_eq!(parse_value("`[a`", Some("`array`")), None);
/// ```
pub fn parse_value(raw: &str, type_annotation: Option<&str>) -> Option<Value> {
    let Some(type_annotation) = type_annotation else {
        return Some(Value::String(raw.trim().to_string()));
    };

    let annotation = TypeAnnotation::parse(type_annotation);
    let stripped = strip_code(raw);
    let text = unquote(stripped.trim());

    match annotation {
        TypeAnnotation::Boolean => Some(Value::Bool(text == "true")),
        TypeAnnotation::Number | TypeAnnotation::Integer => parse_number(text),
        _ if annotation.is_collection() || looks_like_collection(text) => {
            serde_json::from_str(text).ok()
        }
        _ if text == "null" => Some(Value::Null),
        _ => Some(Value::String(text.to_string())),
    }
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(text)
}

fn looks_like_collection(text: &str) -> bool {
    (text.starts_with('[') && text.ends_with(']')) || (text.starts_with('{') && text.ends_with('}'))
}

/// Read a numeric literal, keeping integral values as JSON integers.
fn parse_number(text: &str) -> Option<Value> {
    let text = text.trim();
    if text.is_empty() {
        return Some(Value::from(0));
    }
    if let Ok(int) = text.parse::<i64>() {
        return Some(Value::from(int));
    }

    let float = text.parse::<f64>().ok().filter(|f| f.is_finite())?;
    if float.fract() == 0.0 && float.abs() <= MAX_SAFE_INTEGER {
        return Some(Value::from(float as i64));
    }
    Number::from_f64(float).map(Value::Number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_without_type_returns_raw_text() {
        assert_eq!(
            parse_value("  `whatever`  ", None),
            Some(json!("`whatever`"))
        );
    }

    #[test]
    fn test_boolean() {
        assert_eq!(parse_value("`true`", Some("`boolean`")), Some(json!(true)));
        assert_eq!(parse_value("`false`", Some("`boolean`")), Some(json!(false)));
        assert_eq!(parse_value("yes", Some("boolean")), Some(json!(false)));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(parse_value("`2`", Some("`number`")), Some(json!(2)));
        assert_eq!(parse_value("`-1`", Some("`integer`")), Some(json!(-1)));
        assert_eq!(parse_value("`2.0`", Some("`number`")), Some(json!(2)));
        assert_eq!(parse_value("`0.5`", Some("`number`")), Some(json!(0.5)));
        assert_eq!(parse_value("`\"3\"`", Some("`number`")), Some(json!(3)));
    }

    #[test]
    fn test_unparseable_number_is_absent() {
        assert_eq!(parse_value("`many`", Some("`number`")), None);
        assert_eq!(parse_value("`Infinity`", Some("`number`")), None);
    }

    #[test]
    fn test_collections() {
        assert_eq!(
            parse_value(r#"`["a","b"]`"#, Some("`array`")),
            Some(json!(["a", "b"]))
        );
        assert_eq!(parse_value("`[]`", Some("`string[]`")), Some(json!([])));
        assert_eq!(
            parse_value(r#"`{"a": 1}`"#, Some("`Record<string, number>`")),
            Some(json!({ "a": 1 }))
        );
        assert_eq!(parse_value("`{}`", Some("`object`")), Some(json!({})));
    }

    #[test]
    fn test_malformed_collection_is_absent() {
        assert_eq!(parse_value("`[a,b`", Some("`array`")), None);
        assert_eq!(parse_value("`{ a: 1 }`", Some("`object`")), None);
    }

    #[test]
    fn test_collection_literal_under_other_type() {
        assert_eq!(
            parse_value(r#"`["x"]`"#, Some("`string | string[]`")),
            Some(json!(["x"]))
        );
    }

    #[test]
    fn test_strings_and_null() {
        assert_eq!(
            parse_value(r#"`"always"`"#, Some(r#"`"always" | "never"`"#)),
            Some(json!("always"))
        );
        assert_eq!(parse_value("`'single'`", Some("`string`")), Some(json!("'single'")));
        assert_eq!(parse_value("`null`", Some("`string`")), Some(Value::Null));
        assert_eq!(parse_value("`\"\"`", Some("`string`")), Some(json!("")));
    }

    #[test]
    fn test_unquote_requires_matching_pair() {
        assert_eq!(unquote("\""), "\"");
        assert_eq!(unquote("\"a'"), "\"a'");
        assert_eq!(unquote("'a'"), "'a'");
        assert_eq!(unquote("\"a\""), "a");
    }
}

//! JavaScript object-literal encoding of option values.
//!
//! The output is not JSON: keys are bare when they are identifiers, strings
//! use single quotes and [`RawCode`](crate::RawCode) goes out verbatim.
//!
//! Entries that fail to encode are logged and dropped at the enclosing
//! mapping (key included), so the encoder never leaves a dangling
//! separator behind. Failed list elements become `null` to keep indices.

use std::fmt::Write;

use tracing::warn;

use crate::error::EncodeError;
use crate::value::{OptionMap, OptionValue};

const ENTRY_SEPARATOR: &str = ", ";

/// Encode a value, downgrading nested failures.
///
/// A failure of `value` itself (e.g. a top-level NaN) yields an empty string.
pub fn encode_value(value: &OptionValue) -> String {
    match encode_lenient(value) {
        Ok(text) => text,
        Err(err) => {
            warn!(error = %err, kind = value.kind_name(), "dropping option value");
            String::new()
        }
    }
}

/// Encode a mapping as `{key: value, ...}`.
pub fn encode_map(map: &OptionMap) -> String {
    let mut out = String::with_capacity(map.len() * 16);
    out.push('{');
    write_entries(&mut out, map);
    out.push('}');
    out
}

/// Encode the entries of a mapping without the enclosing braces.
///
/// Returns `None` when no entry survives encoding.
pub fn encode_entries(map: &OptionMap) -> Option<String> {
    let mut out = String::new();
    write_entries(&mut out, map);
    if out.is_empty() {
        None
    } else {
        Some(out)
    }
}

/// Encode a value, failing on the first node that cannot be encoded.
pub(crate) fn encode_value_strict(value: &OptionValue) -> Result<String, EncodeError> {
    match value {
        OptionValue::Map(map) => {
            let mut parts = Vec::with_capacity(map.len());
            for (key, value) in map {
                parts.push(format!("{}: {}", encode_key(key)?, encode_value_strict(value)?));
            }
            Ok(format!("{{{}}}", parts.join(ENTRY_SEPARATOR)))
        }
        OptionValue::List(items) => {
            let parts = items
                .iter()
                .map(encode_value_strict)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!("[{}]", parts.join(ENTRY_SEPARATOR)))
        }
        scalar => encode_scalar(scalar),
    }
}

/// Encode a string as a single-quoted literal.
pub fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('\'');
    for c in text.chars() {
        match c {
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\'');
    out
}

/// Encode a mapping key: bare when it is an identifier or an index.
pub fn encode_key(key: &str) -> Result<String, EncodeError> {
    if key.is_empty() {
        return Err(EncodeError::EmptyKey);
    }
    if is_bare_key(key) {
        Ok(key.to_string())
    } else {
        Ok(quote(key))
    }
}

fn is_bare_key(key: &str) -> bool {
    if key.chars().all(|c| c.is_ascii_digit()) {
        // Leading zeros would read as a legacy octal literal.
        return key == "0" || !key.starts_with('0');
    }
    let mut chars = key.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let valid_start = unicode_ident::is_xid_start(first) || first == '_' || first == '$';
    valid_start && chars.all(|c| unicode_ident::is_xid_continue(c) || c == '$')
}

fn encode_lenient(value: &OptionValue) -> Result<String, EncodeError> {
    match value {
        OptionValue::Map(map) => Ok(encode_map(map)),
        OptionValue::List(items) => {
            let mut out = String::from("[");
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(ENTRY_SEPARATOR);
                }
                match encode_lenient(item) {
                    Ok(text) if !text.is_empty() => out.push_str(&text),
                    Ok(_) => out.push_str("null"),
                    Err(err) => {
                        warn!(error = %err, index = i, "writing null for list element");
                        out.push_str("null");
                    }
                }
            }
            out.push(']');
            Ok(out)
        }
        scalar => encode_scalar(scalar),
    }
}

fn encode_scalar(value: &OptionValue) -> Result<String, EncodeError> {
    match value {
        OptionValue::Null => Ok(String::new()),
        OptionValue::Bool(b) => Ok(b.to_string()),
        OptionValue::Integer(i) => Ok(i.to_string()),
        OptionValue::Float(f) if f.is_finite() => Ok(f.to_string()),
        OptionValue::Float(f) => Err(EncodeError::NonFiniteNumber(f.to_string())),
        OptionValue::Raw(code) if code.is_blank() => Err(EncodeError::BlankRawCode),
        OptionValue::Raw(code) => Ok(code.as_str().to_string()),
        OptionValue::Label(label) => Ok(quote(label.as_str())),
        OptionValue::String(s) => Ok(quote(s)),
        OptionValue::List(_) | OptionValue::Map(_) => encode_value_strict(value),
    }
}

fn write_entries(out: &mut String, map: &OptionMap) {
    let mut first = true;
    for (key, value) in map {
        let key_text = match encode_key(key) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "dropping option entry");
                continue;
            }
        };
        let value_text = match encode_lenient(value) {
            Ok(text) if !text.is_empty() => text,
            // null
            Ok(_) => continue,
            Err(err) => {
                warn!(error = %err, key = %key, kind = value.kind_name(), "dropping option entry");
                continue;
            }
        };
        if !first {
            out.push_str(ENTRY_SEPARATOR);
        }
        first = false;
        let _ = write!(out, "{}: {}", key_text, value_text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{ChartType, ZoomType};

    fn map_of(entries: Vec<(&str, OptionValue)>) -> OptionMap {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn scalars() {
        assert_eq!(encode_value(&OptionValue::Bool(true)), "true");
        assert_eq!(encode_value(&OptionValue::Integer(42)), "42");
        assert_eq!(encode_value(&OptionValue::Float(2.5)), "2.5");
        assert_eq!(encode_value(&OptionValue::from("line")), "'line'");
        assert_eq!(encode_value(&OptionValue::Null), "");
    }

    #[test]
    fn labels_are_quoted() {
        assert_eq!(encode_value(&ZoomType::XY.into()), "'xy'");
        assert_eq!(encode_value(&ChartType::Column.into()), "'column'");
    }

    #[test]
    fn raw_code_is_verbatim() {
        let v = OptionValue::raw("function(){return 1;}");
        assert_eq!(encode_value(&v), "function(){return 1;}");
    }

    #[test]
    fn strings_are_escaped() {
        assert_eq!(quote("it's"), r"'it\'s'");
        assert_eq!(quote("a\\b"), r"'a\\b'");
        assert_eq!(quote("two\nlines"), r"'two\nlines'");
    }

    #[test]
    fn nested_map_and_list() {
        let inner = map_of(vec![
            ("enabled", true.into()),
            ("radius", 4.into()),
        ]);
        let outer = map_of(vec![
            ("marker", OptionValue::Map(inner)),
            ("data", vec![1, 2, 3].into()),
            ("categories", vec!["a", "b"].into()),
        ]);
        assert_eq!(
            encode_map(&outer),
            "{marker: {enabled: true, radius: 4}, data: [1, 2, 3], categories: ['a', 'b']}"
        );
    }

    #[test]
    fn empty_containers() {
        assert_eq!(encode_value(&OptionValue::map()), "{}");
        assert_eq!(encode_value(&OptionValue::list()), "[]");
        assert_eq!(encode_entries(&OptionMap::new()), None);
    }

    #[test]
    fn keys_that_are_not_identifiers_get_quoted() {
        let m = map_of(vec![
            ("0", 1.into()),
            ("$ref", 2.into()),
            ("font-size", "12px".into()),
        ]);
        assert_eq!(encode_map(&m), "{0: 1, $ref: 2, 'font-size': '12px'}");
    }

    #[test]
    fn zero_padded_index_keys_get_quoted() {
        let m = map_of(vec![
            ("010", 1.into()),
            ("10", 2.into()),
            ("00", 3.into()),
        ]);
        assert_eq!(encode_map(&m), "{'010': 1, 10: 2, '00': 3}");
    }

    #[test]
    fn line_separators_are_escaped() {
        assert_eq!(quote("a\u{2028}b\u{2029}c"), "'a\\u2028b\\u2029c'");
    }

    #[test]
    fn failed_entries_are_dropped_without_separator() {
        let m = map_of(vec![
            ("a", 1.into()),
            ("bad", f64::NAN.into()),
            ("handler", OptionValue::raw("  ")),
            ("", 3.into()),
            ("b", 2.into()),
        ]);
        assert_eq!(encode_map(&m), "{a: 1, b: 2}");
    }

    #[test]
    fn null_entries_are_skipped() {
        let m = map_of(vec![("a", OptionValue::Null), ("b", 2.into())]);
        assert_eq!(encode_map(&m), "{b: 2}");
    }

    #[test]
    fn empty_zoom_label_is_kept() {
        let m = map_of(vec![("zoomType", ZoomType::None.into())]);
        assert_eq!(encode_map(&m), "{zoomType: ''}");
    }

    #[test]
    fn failed_list_elements_become_null() {
        let v = OptionValue::List(vec![1.into(), f64::INFINITY.into(), 3.into()]);
        assert_eq!(encode_value(&v), "[1, null, 3]");
    }

    #[test]
    fn strict_encoding_reports_failures() {
        let v = OptionValue::List(vec![1.into(), f64::NAN.into()]);
        assert!(matches!(
            encode_value_strict(&v),
            Err(EncodeError::NonFiniteNumber(_))
        ));
        assert_eq!(
            encode_value_strict(&OptionValue::raw("")),
            Err(EncodeError::BlankRawCode)
        );
        assert_eq!(encode_value_strict(&vec![1, 2].into()).unwrap(), "[1, 2]");
    }

    #[test]
    fn top_level_failure_is_empty() {
        assert_eq!(encode_value(&OptionValue::Float(f64::NAN)), "");
    }

    #[test]
    fn encoding_is_deterministic() {
        let m = map_of(vec![("z", 1.into()), ("a", 2.into())]);
        assert_eq!(encode_map(&m), encode_map(&m));
        assert_eq!(encode_map(&m), "{z: 1, a: 2}");
    }
}

//! Case- and punctuation-insensitive lookup over free-form records.
//!
//! `"Member ID Key"`, `"member_id_key"` and `"MemberIdKey"` all normalise to
//! `"memberidkey"`, so any of them answers a lookup for that alias.

use serde_json::{Map, Value};
use std::collections::HashMap;

/// Rendered when no alias matches a non-empty value.
pub const PLACEHOLDER: &str = "-";

/// Keep ASCII alphanumerics, lower-cased.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Normalised-key view of a record, built once per record.
#[derive(Debug, Default)]
pub struct FieldIndex<'a> {
    entries: HashMap<String, &'a Value>,
}

impl<'a> FieldIndex<'a> {
    /// When several source keys normalise to the same key, the first one with
    /// a non-empty value is kept.
    pub fn from_record(record: &'a Map<String, Value>) -> Self {
        let mut entries: HashMap<String, &'a Value> = HashMap::with_capacity(record.len());
        for (key, value) in record {
            let normalized = normalize_key(key);
            match entries.get(&normalized) {
                Some(existing) if value_text(existing).is_some() => {}
                _ => {
                    entries.insert(normalized, value);
                }
            }
        }
        Self { entries }
    }

    /// First alias whose value is present and non-empty, as raw JSON.
    pub fn get(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases
            .iter()
            .filter_map(|alias| self.entries.get(&normalize_key(alias)).copied())
            .find(|value| value_text(value).is_some())
    }

    /// First alias whose value is present and non-empty, trimmed, or
    /// [`PLACEHOLDER`].
    pub fn find_val(&self, aliases: &[&str]) -> String {
        self.get(aliases)
            .and_then(value_text)
            .unwrap_or_else(|| PLACEHOLDER.to_string())
    }
}

/// One-off lookup; build a [`FieldIndex`] when reading several fields.
pub fn find_val(record: &Map<String, Value>, aliases: &[&str]) -> String {
    FieldIndex::from_record(record).find_val(aliases)
}

/// Display text of a scalar, `None` when null, blank or structured.
fn value_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

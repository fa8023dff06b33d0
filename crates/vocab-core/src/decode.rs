use serde::de::DeserializeOwned;
use serde_json::Value;
use vocab_types::{Entry, EntryShape, WordEntry, WordEntryDetailed};

use crate::error::EntryError;

/// Keys only the detailed shape carries, used by [`EntryShape::Auto`]
const DETAILED_KEYS: &[&str] = &[
    "us",
    "uk",
    "pronunciationUS",
    "pronunciationUK",
    "phrases",
    "sentences",
];

/// Decode an untyped record into the basic entry shape
pub fn decode_word(record: &Value) -> Result<WordEntry, EntryError> {
    let entry: WordEntry = decode_record(record)?;
    check_headword(&entry.headword)?;
    Ok(entry)
}

/// Decode an untyped record into the detailed entry shape.
///
/// Missing pronunciations decode as empty strings and missing phrase or
/// sentence lists as empty lists.
pub fn decode_detailed(record: &Value) -> Result<WordEntryDetailed, EntryError> {
    let entry: WordEntryDetailed = decode_record(record)?;
    check_headword(&entry.headword)?;
    Ok(entry)
}

pub fn decode_entry(record: &Value, shape: EntryShape) -> Result<Entry, EntryError> {
    match resolve_shape(record, shape) {
        EntryShape::Detailed => decode_detailed(record).map(Entry::Detailed),
        _ => decode_word(record).map(Entry::Basic),
    }
}

fn resolve_shape(record: &Value, shape: EntryShape) -> EntryShape {
    match shape {
        EntryShape::Auto => {
            let detailed = record
                .as_object()
                .is_some_and(|obj| DETAILED_KEYS.iter().any(|k| obj.contains_key(*k)));
            if detailed {
                EntryShape::Detailed
            } else {
                EntryShape::Basic
            }
        }
        explicit => explicit,
    }
}

fn decode_record<T: DeserializeOwned>(record: &Value) -> Result<T, EntryError> {
    if !record.is_object() {
        return Err(EntryError::MalformedEntry(format!(
            "expected an object, found {}",
            value_kind(record)
        )));
    }

    T::deserialize(record).map_err(|e| EntryError::MalformedEntry(e.to_string()))
}

fn check_headword(headword: &str) -> Result<(), EntryError> {
    if headword.trim().is_empty() {
        return Err(EntryError::MalformedEntry("empty headword".to_string()));
    }
    Ok(())
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

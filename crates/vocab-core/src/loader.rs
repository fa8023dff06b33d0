use std::path::Path;

use serde_json::Value;
use vocab_types::{Entry, EntryShape};

use crate::decode::decode_entry;
use crate::error::LoadError;

pub struct EntryLoader;

impl EntryLoader {
    /// Decode a JSON array of word records. The first malformed record
    /// fails the whole load.
    pub fn from_json(json: &str, shape: EntryShape) -> Result<Vec<Entry>, LoadError> {
        let data: Value = serde_json::from_str(json)?;
        let Value::Array(records) = data else {
            return Err(LoadError::NotAnArray);
        };

        let entries = records
            .iter()
            .enumerate()
            .map(|(index, record)| {
                decode_entry(record, shape).map_err(|source| {
                    tracing::error!("Rejected record {index}: {source}");
                    LoadError::Entry { index, source }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        tracing::info!("Decoded {} word entries", entries.len());
        Ok(entries)
    }

    /// Load word records from a JSON file
    pub fn load_from_file(path: &Path, shape: EntryShape) -> Result<Vec<Entry>, LoadError> {
        tracing::info!("Loading word entries from file: {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, shape)
    }
}

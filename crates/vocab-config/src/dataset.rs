use std::env;

use serde::{Deserialize, Serialize};
use vocab_types::EntryShape;

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON file holding an array of word records
    pub path: Option<String>,
    pub shape: EntryShape,
}

impl DatasetConfig {
    pub fn new() -> Self {
        let path = env::var("VOCAB_DATASET").ok().filter(|p| !p.is_empty());

        let shape = env::var("VOCAB_ENTRY_SHAPE")
            .ok()
            .and_then(|v| {
                v.parse::<EntryShape>()
                    .map_err(|e| tracing::warn!("Ignoring VOCAB_ENTRY_SHAPE: {e}"))
                    .ok()
            })
            .unwrap_or_default();

        Self { path, shape }
    }
}

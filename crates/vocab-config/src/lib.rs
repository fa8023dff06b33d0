use std::env;

use serde::{Deserialize, Serialize};

use self::dataset::DatasetConfig;
use self::ui::UiConfig;

pub mod dataset;
pub mod ui;

fn default_log_filter() -> String {
    "vocab=info".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub dataset: DatasetConfig,

    /// `EnvFilter` directives used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Emit logs as JSON lines instead of human readable text
    pub json_logs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            dataset: DatasetConfig::default(),
            log_filter: default_log_filter(),
            json_logs: false,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let log_filter = env::var("RUST_LOG").unwrap_or_else(|_| default_log_filter());

        let json_logs = env::var("VOCAB_JSON_LOGS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Config {
            ui: UiConfig::new(),
            dataset: DatasetConfig::new(),

            log_filter,
            json_logs,
        }
    }
}

#[cfg(test)]
mod tests;

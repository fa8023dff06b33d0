use std::env;

use serde::{Deserialize, Serialize};

/// Window size used when no size is configured and no terminal is attached
pub const FALLBACK_WINDOW_WIDTH: u32 = 1024;
pub const FALLBACK_WINDOW_HEIGHT: u32 = 768;

fn default_navbar_height() -> u32 {
    45
}

fn default_line_height() -> u32 {
    24
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Height reserved for the navigation bar above every panel
    #[serde(default = "default_navbar_height")]
    pub navbar_height: u32,
    /// Height of one rendered line in the vocabulary panel
    #[serde(default = "default_line_height")]
    pub line_height: u32,
    /// Fixed window width; measured from the host when unset
    pub window_width: Option<u32>,
    /// Fixed window height; measured from the host when unset
    pub window_height: Option<u32>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            navbar_height: default_navbar_height(),
            line_height: default_line_height(),
            window_width: None,
            window_height: None,
        }
    }
}

impl UiConfig {
    pub fn new() -> Self {
        let navbar_height = env::var("VOCAB_NAVBAR_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_navbar_height);

        let line_height = env::var("VOCAB_LINE_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_line_height);

        let window_width = env::var("VOCAB_WINDOW_WIDTH")
            .ok()
            .and_then(|v| v.parse().ok());

        let window_height = env::var("VOCAB_WINDOW_HEIGHT")
            .ok()
            .and_then(|v| v.parse().ok());

        Self {
            navbar_height,
            line_height,
            window_width,
            window_height,
        }
    }

    /// True when either window dimension is pinned by configuration
    pub fn has_fixed_size(&self) -> bool {
        self.window_width.is_some() || self.window_height.is_some()
    }

    /// Configured size with fallbacks for unset dimensions
    pub fn fixed_size(&self) -> (u32, u32) {
        (
            self.window_width.unwrap_or(FALLBACK_WINDOW_WIDTH),
            self.window_height.unwrap_or(FALLBACK_WINDOW_HEIGHT),
        )
    }
}

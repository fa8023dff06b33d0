use std::env;
use std::sync::{Mutex, MutexGuard, PoisonError};

use vocab_types::EntryShape;

use crate::Config;
use crate::dataset::DatasetConfig;
use crate::ui::UiConfig;

const VARS: &[&str] = &[
    "RUST_LOG",
    "VOCAB_JSON_LOGS",
    "VOCAB_NAVBAR_HEIGHT",
    "VOCAB_LINE_HEIGHT",
    "VOCAB_WINDOW_WIDTH",
    "VOCAB_WINDOW_HEIGHT",
    "VOCAB_DATASET",
    "VOCAB_ENTRY_SHAPE",
];

/// Tests in this module mutate process-wide environment variables
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    for var in VARS {
        // SAFETY: every test touching these variables holds ENV_LOCK
        unsafe { env::remove_var(var) };
    }
    guard
}

fn set(var: &str, value: &str) {
    // SAFETY: callers hold ENV_LOCK
    unsafe { env::set_var(var, value) };
}

#[test]
fn test_empty_env_uses_defaults() {
    let _guard = clean_env();

    let config = Config::new();
    assert_eq!(config.log_filter, "vocab=info");
    assert!(!config.json_logs);
    assert_eq!(config.ui.navbar_height, 45);
    assert_eq!(config.ui.line_height, 24);
    assert!(!config.ui.has_fixed_size());
    assert!(config.dataset.path.is_none());
    assert_eq!(config.dataset.shape, EntryShape::Auto);
}

#[test]
fn test_ui_env_overrides() {
    let _guard = clean_env();
    set("VOCAB_NAVBAR_HEIGHT", "60");
    set("VOCAB_LINE_HEIGHT", "20");
    set("VOCAB_WINDOW_WIDTH", "1280");

    let ui = UiConfig::new();
    assert_eq!(ui.navbar_height, 60);
    assert_eq!(ui.line_height, 20);
    assert_eq!(ui.window_width, Some(1280));
    assert_eq!(ui.window_height, None);
    assert_eq!(ui.fixed_size(), (1280, 768));
}

#[test]
fn test_unparsable_numbers_fall_back() {
    let _guard = clean_env();
    set("VOCAB_NAVBAR_HEIGHT", "tall");
    set("VOCAB_WINDOW_HEIGHT", "-1");

    let ui = UiConfig::new();
    assert_eq!(ui.navbar_height, 45);
    assert_eq!(ui.window_height, None);
}

#[test]
fn test_entry_shape_env_ignores_case() {
    let _guard = clean_env();

    for (value, expected) in [
        ("Detailed", EntryShape::Detailed),
        ("BASIC", EntryShape::Basic),
        ("auto", EntryShape::Auto),
        ("sideways", EntryShape::Auto),
    ] {
        set("VOCAB_ENTRY_SHAPE", value);
        assert_eq!(DatasetConfig::new().shape, expected, "VOCAB_ENTRY_SHAPE={value}");
    }
}

#[test]
fn test_dataset_and_logging_env() {
    let _guard = clean_env();
    set("VOCAB_DATASET", "words.json");
    set("VOCAB_JSON_LOGS", "TRUE");
    set("RUST_LOG", "vocab_core=debug");

    let config = Config::new();
    assert_eq!(config.dataset.path.as_deref(), Some("words.json"));
    assert!(config.json_logs);
    assert_eq!(config.log_filter, "vocab_core=debug");

    set("VOCAB_DATASET", "");
    assert!(DatasetConfig::new().path.is_none());
}

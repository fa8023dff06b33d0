use vocab_config::ui::UiConfig;
use vocab_core::{DisplaySource, FixedDisplay, ViewportStore};

use crate::display::{HostDisplay, TerminalDisplay, cells_to_dimensions};

#[test]
fn test_cells_scale_with_line_height() {
    assert_eq!(cells_to_dimensions(80, 24, 24), (960, 576));
    assert_eq!(cells_to_dimensions(120, 40, 20), (1200, 800));
    assert_eq!(cells_to_dimensions(80, 24, 0), (80, 24));
}

#[test]
fn test_terminal_rows_map_to_panel_rows() {
    let ui = UiConfig::default();
    let (width, height) = cells_to_dimensions(100, 40, ui.line_height);

    let store = ViewportStore::new(ui.navbar_height);
    let insets = store.initialize(&FixedDisplay::new(width, height));

    // navbar takes two 24-unit rows out of 40
    assert_eq!(insets.panel_height / ui.line_height, 38);
}

#[test]
fn test_attached_terminal_is_measured() {
    let display = HostDisplay::select(&UiConfig::default(), true);
    assert!(matches!(display, HostDisplay::Terminal(_)));
}

#[test]
fn test_no_terminal_uses_fallback_size() {
    let display = HostDisplay::select(&UiConfig::default(), false);
    assert!(matches!(display, HostDisplay::Fixed(_)));
    assert_eq!(display.dimensions(), (1024, 768));
}

#[test]
fn test_configured_size_beats_terminal() {
    let ui = UiConfig {
        window_height: Some(600),
        ..UiConfig::default()
    };

    let display = HostDisplay::select(&ui, true);
    assert!(matches!(display, HostDisplay::Fixed(_)));
    assert_eq!(display.dimensions(), (1024, 600));
}

#[test]
fn test_terminal_display_always_reports_a_size() {
    // Under a test harness stdout may or may not be a terminal
    let display = TerminalDisplay::new(24, FixedDisplay::new(1024, 768));
    let (width, height) = display.dimensions();
    assert!(width > 0 && height > 0);
}

use crossterm::terminal;
use vocab_config::ui::UiConfig;
use vocab_core::{DisplaySource, FixedDisplay};

/// The attached terminal. Cells are scaled so one row is one `line_height`
/// and one column is half of it.
#[derive(Debug, Clone, Copy)]
pub struct TerminalDisplay {
    line_height: u32,
    fallback: FixedDisplay,
}

impl TerminalDisplay {
    pub fn new(line_height: u32, fallback: FixedDisplay) -> Self {
        Self {
            line_height,
            fallback,
        }
    }
}

impl DisplaySource for TerminalDisplay {
    fn dimensions(&self) -> (u32, u32) {
        match terminal::size() {
            Ok((cols, rows)) if cols > 0 && rows > 0 => {
                tracing::debug!("Terminal is {cols}x{rows} cells");
                cells_to_dimensions(cols, rows, self.line_height)
            }
            Ok(_) => {
                tracing::warn!("Terminal reported an empty size, using fallback dimensions");
                self.fallback.dimensions()
            }
            Err(e) => {
                tracing::warn!("Could not measure terminal, using fallback dimensions: {e}");
                self.fallback.dimensions()
            }
        }
    }
}

/// Convert a terminal size in cells to display units
pub fn cells_to_dimensions(cols: u16, rows: u16, line_height: u32) -> (u32, u32) {
    let line_height = line_height.max(1);
    let cell_width = (line_height / 2).max(1);
    (u32::from(cols) * cell_width, u32::from(rows) * line_height)
}

/// Where the viewport store takes its measurements from
#[derive(Debug, Clone, Copy)]
pub enum HostDisplay {
    Terminal(TerminalDisplay),
    Fixed(FixedDisplay),
}

impl HostDisplay {
    /// Configured sizes win; otherwise measure the terminal when one is
    /// attached, and fall back to the default window size when not.
    pub fn select(ui: &UiConfig, terminal_attached: bool) -> Self {
        let (width, height) = ui.fixed_size();
        let fixed = FixedDisplay::new(width, height);

        if ui.has_fixed_size() || !terminal_attached {
            HostDisplay::Fixed(fixed)
        } else {
            HostDisplay::Terminal(TerminalDisplay::new(ui.line_height, fixed))
        }
    }
}

impl DisplaySource for HostDisplay {
    fn dimensions(&self) -> (u32, u32) {
        match self {
            HostDisplay::Terminal(display) => display.dimensions(),
            HostDisplay::Fixed(display) => display.dimensions(),
        }
    }
}

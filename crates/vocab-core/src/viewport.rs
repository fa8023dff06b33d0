use std::sync::{PoisonError, RwLock};

use vocab_types::ViewportInsets;

use crate::error::ViewportError;

/// Host display that can report its current size
pub trait DisplaySource {
    /// Current (width, height) of the display area
    fn dimensions(&self) -> (u32, u32);
}

/// Display with known dimensions, e.g. from config or CLI flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDisplay {
    pub width: u32,
    pub height: u32,
}

impl FixedDisplay {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl DisplaySource for FixedDisplay {
    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Session-scoped viewport measurements.
///
/// Starts uninitialized; `initialize` publishes a complete snapshot in a
/// single write so readers never see a partial triple.
#[derive(Debug)]
pub struct ViewportStore {
    navbar_height: u32,
    insets: RwLock<Option<ViewportInsets>>,
}

impl ViewportStore {
    pub fn new(navbar_height: u32) -> Self {
        Self {
            navbar_height,
            insets: RwLock::new(None),
        }
    }

    /// Measure the display and store the result. A second call overwrites
    /// the first.
    pub fn initialize(&self, display: &dyn DisplaySource) -> ViewportInsets {
        let (window_width, window_height) = display.dimensions();
        let insets = ViewportInsets {
            window_height,
            window_width,
            panel_height: window_height.saturating_sub(self.navbar_height),
        };

        let mut slot = self.insets.write().unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            tracing::warn!("Viewport store initialized again, replacing previous measurements");
        }
        *slot = Some(insets);
        drop(slot);

        tracing::debug!(
            window_width,
            window_height,
            panel_height = insets.panel_height,
            "Viewport measured"
        );
        insets
    }

    pub fn read(&self) -> Result<ViewportInsets, ViewportError> {
        let insets = *self.insets.read().unwrap_or_else(PoisonError::into_inner);
        insets.ok_or(ViewportError::NotInitialized)
    }

    pub fn is_initialized(&self) -> bool {
        self.read().is_ok()
    }
}

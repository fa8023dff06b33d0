use vocab_config::Config;

use crate::error::RouteError;
use crate::router::{RouteTable, ViewId};
use crate::viewport::{DisplaySource, ViewportStore};

/// Everything a mounted view may read: config, viewport and routes
pub struct AppState {
    pub config: Config,
    pub viewport: ViewportStore,
    pub routes: RouteTable,
}

impl AppState {
    /// Build the store and router, measuring the display once
    pub fn bootstrap(config: Config, display: &dyn DisplaySource) -> Self {
        let viewport = ViewportStore::new(config.ui.navbar_height);
        viewport.initialize(display);

        Self {
            config,
            viewport,
            routes: RouteTable::new(),
        }
    }

    pub fn mount(&self, path: &str) -> Result<ViewId, RouteError> {
        let route = self
            .routes
            .resolve(path)
            .ok_or_else(|| RouteError::NotFound(path.to_string()))?;

        tracing::info!("Mounted route {} ({}) -> {}", route.name, route.path, route.view.as_str());
        Ok(route.view)
    }
}

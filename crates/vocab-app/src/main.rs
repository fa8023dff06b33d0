use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use vocab_core::{AppState, EntryLoader, ViewId};
use vocab_types::EntryShape;

pub mod display;
pub mod logging;
pub mod profile;
pub mod view;

use self::display::HostDisplay;
use self::view::VocabularyView;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ShapeArg {
    Basic,
    Detailed,
    Auto,
}

impl From<ShapeArg> for EntryShape {
    fn from(shape: ShapeArg) -> Self {
        match shape {
            ShapeArg::Basic => EntryShape::Basic,
            ShapeArg::Detailed => EntryShape::Detailed,
            ShapeArg::Auto => EntryShape::Auto,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "vocab", version, about = "Vocabulary list viewer")]
struct Cli {
    /// JSON file with an array of word records
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON config file; environment variables are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Record shape to decode
    #[arg(long, value_enum)]
    shape: Option<ShapeArg>,

    /// Window width override; the terminal is measured when no size is given
    #[arg(long)]
    width: Option<u32>,

    /// Window height override; the terminal is measured when no size is given
    #[arg(long)]
    height: Option<u32>,

    /// Route to mount
    #[arg(long, default_value = "/")]
    route: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (mut config, source) = profile::load_config(cli.config.as_deref())?;
    if let Some(data) = &cli.data {
        config.dataset.path = Some(data.display().to_string());
    }
    if let Some(shape) = cli.shape {
        config.dataset.shape = shape.into();
    }
    if let Some(width) = cli.width {
        config.ui.window_width = Some(width);
    }
    if let Some(height) = cli.height {
        config.ui.window_height = Some(height);
    }

    logging::init(&config);
    tracing::info!("vocab v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Config loaded from {source}");

    let host_display = HostDisplay::select(&config.ui, atty::is(atty::Stream::Stdout));
    tracing::debug!("Display source: {host_display:?}");
    let state = AppState::bootstrap(config, &host_display);

    match state.mount(&cli.route)? {
        ViewId::Vocabulary => show_vocabulary(&state)?,
    }

    Ok(())
}

fn show_vocabulary(state: &AppState) -> anyhow::Result<()> {
    let entries = match &state.config.dataset.path {
        Some(path) => EntryLoader::load_from_file(Path::new(path), state.config.dataset.shape)
            .with_context(|| format!("loading word list {path}"))?,
        None => {
            tracing::warn!("No dataset configured, showing an empty list");
            Vec::new()
        }
    };

    let insets = state.viewport.read()?;
    let view = VocabularyView::new(&insets, &state.config.ui);
    tracing::debug!("Rendering {} entries into {} rows", entries.len(), view.rows());

    for line in view.render(&entries) {
        println!("{line}");
    }

    Ok(())
}

#[cfg(test)]
mod tests;

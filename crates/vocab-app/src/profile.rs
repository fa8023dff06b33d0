use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use vocab_config::Config;

/// Where the running config came from, reported once logging is up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Environment { dotenv: Option<PathBuf> },
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "file {}", path.display()),
            ConfigSource::Environment { dotenv: Some(path) } => {
                write!(f, "environment (with {})", path.display())
            }
            ConfigSource::Environment { dotenv: None } => write!(f, "environment"),
        }
    }
}

/// Load a JSON config file; absent fields keep their defaults
pub fn load_config_file(path: &Path) -> anyhow::Result<Config> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(config)
}

/// Config from the given file, or from the environment (after `.env`)
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, ConfigSource)> {
    match path {
        Some(path) => {
            let config = load_config_file(path)?;
            Ok((config, ConfigSource::File(path.to_path_buf())))
        }
        None => {
            let dotenv = dotenvy::dotenv().ok();
            Ok((Config::new(), ConfigSource::Environment { dotenv }))
        }
    }
}

use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use derive_setters::Setters;
use tracing::debug;

use crate::settings::RawConfig;
use crate::{LogwinConfig, Result};

const DEFAULT_CONFIG: &str = include_str!("logwin.toml");
const ENV_PREFIX: &str = "LOGWIN";

/// Loads [`LogwinConfig`] from layered sources.
///
/// Later layers override earlier ones:
/// 1. built-in defaults
/// 2. the user config file, if it exists
/// 3. an explicitly requested file, which must exist
/// 4. `LOGWIN_<SECTION>__<KEY>` environment variables
#[derive(Debug, Clone, Setters)]
#[setters(strip_option, into)]
pub struct ConfigReader {
    user_file: Option<PathBuf>,
    file: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigReader {
    fn default() -> Self {
        Self { user_file: default_user_file(), file: None, env_prefix: ENV_PREFIX.to_string() }
    }
}

impl ConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skips the per-user config file.
    pub fn without_user_file(mut self) -> Self {
        self.user_file = None;
        self
    }

    pub fn read(&self) -> Result<LogwinConfig> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(user_file) = &self.user_file {
            debug!(path = %user_file.display(), "Layering user config");
            builder = builder.add_source(
                File::from(user_file.as_path())
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        if let Some(file) = &self.file {
            debug!(path = %file.display(), "Layering config file");
            builder = builder.add_source(
                File::from(file.as_path())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let raw: RawConfig = builder.build()?.try_deserialize()?;
        raw.try_into()
    }
}

fn default_user_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("logwin").join("config.toml"))
}

use std::str::FromStr;

use derive_setters::Setters;
use logwin_domain::{FilterMode, PairingPolicy};
use serde::Deserialize;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

use crate::{ConfigError, Result};

/// How search results are written to stdout.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    /// Human-readable listing of pairs and unpaired markers
    #[default]
    Text,
    /// The full search result as JSON
    Json,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Setters)]
pub struct SearchConfig {
    pub policy: PairingPolicy,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Setters)]
pub struct FilterConfig {
    pub mode: FilterMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Setters)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::default(), color: true }
    }
}

/// Validated application settings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Setters)]
pub struct LogwinConfig {
    pub search: SearchConfig,
    pub filter: FilterConfig,
    pub output: OutputConfig,
}

/// Settings as they appear in TOML or the environment, before validation.
#[derive(Debug, Deserialize)]
pub(crate) struct RawConfig {
    search: RawSearch,
    filter: RawFilter,
    output: RawOutput,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    policy: String,
}

#[derive(Debug, Deserialize)]
struct RawFilter {
    mode: String,
}

#[derive(Debug, Deserialize)]
struct RawOutput {
    format: String,
    color: bool,
}

impl TryFrom<RawConfig> for LogwinConfig {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self> {
        Ok(Self {
            search: SearchConfig { policy: parse("search.policy", &raw.search.policy)? },
            filter: FilterConfig { mode: parse("filter.mode", &raw.filter.mode)? },
            output: OutputConfig {
                format: parse("output.format", &raw.output.format)?,
                color: raw.output.color,
            },
        })
    }
}

/// Parses one enumerated setting, listing the accepted values on failure.
fn parse<T>(key: &'static str, value: &str) -> Result<T>
where
    T: FromStr + IntoEnumIterator + ToString,
{
    T::from_str(value.trim()).map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
        expected: T::iter()
            .map(|variant| variant.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use luach_daf_yomi::MasechtaNames;

/// Top-level Luach configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// Holiday schedule settings.
    #[serde(default)]
    pub calendar: CalendarToml,

    /// Tractate name overrides.
    #[serde(default)]
    pub names: NamesToml,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default)]
    pub in_israel: bool,
    #[serde(default)]
    pub use_modern_holidays: bool,
}

/// Each list replaces the whole default table and must name every tractate.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NamesToml {
    #[serde(default)]
    pub bavli: Option<Vec<String>>,
    #[serde(default)]
    pub yerushalmi: Option<Vec<String>>,
}

impl LuachConfig {
    /// Reads the config at `path`, falling back to defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Builds the tractate name tables, applying any overrides.
    pub fn masechta_names(&self) -> Result<MasechtaNames> {
        let mut names = MasechtaNames::default();
        if let Some(bavli) = &self.names.bavli {
            names = names
                .with_bavli(bavli.clone())
                .context("invalid [names].bavli")?;
        }
        if let Some(yerushalmi) = &self.names.yerushalmi {
            names = names
                .with_yerushalmi(yerushalmi.clone())
                .context("invalid [names].yerushalmi")?;
        }
        Ok(names)
    }
}

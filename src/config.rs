use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::tonic::{DEFAULT_TONIC_HZ, TonicDirective};

/// Everything needed to build a [`crate::Tuning`].
///
/// ```toml
/// scale = ["9/8", "5/4", "4/3", "3/2", "5/3", "15/8", "2/1"]
/// tonic = { hz = 440.0, index = 5 }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TuningConfig {
    pub scale: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tonic: Option<TonicDirective>,
    pub default_tonic_hz: f64,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            scale: Vec::new(),
            tonic: None,
            default_tonic_hz: DEFAULT_TONIC_HZ,
        }
    }
}

impl TuningConfig {
    pub fn new<S: AsRef<str>>(scale: &[S]) -> Self {
        Self {
            scale: scale.iter().map(|s| s.as_ref().to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn tonic(mut self, tonic: impl Into<TonicDirective>) -> Self {
        self.tonic = Some(tonic.into());
        self
    }

    pub fn default_tonic_hz(mut self, hz: f64) -> Self {
        self.default_tonic_hz = hz;
        self
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_ron_str(content: &str) -> Result<Self> {
        Ok(ron::from_str(content)?)
    }

    pub fn to_ron_string(&self) -> Result<String> {
        let config = ron::ser::PrettyConfig::new()
            .depth_limit(2)
            .indentor("  ".to_string());
        Ok(ron::ser::to_string_pretty(self, config)?)
    }

    /// Reads a config file, as RON when the extension is `.ron` and as TOML
    /// otherwise.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("ron") => Self::from_ron_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        log::debug!(
            "loaded tuning config {} ({} degrees)",
            path.display(),
            config.scale.len()
        );
        Ok(config)
    }

    /// Like [`TuningConfig::load`], but a missing file yields the default
    /// config. Other failures are still returned.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::warn!("{} not found, using default tuning config", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::foundation::error::{CardError, CardResult};

/// Environment variable prepending a regular-weight font candidate.
pub const ENV_FONT: &str = "BUILDCARD_FONT";
/// Environment variable prepending a bold font candidate.
pub const ENV_FONT_BOLD: &str = "BUILDCARD_FONT_BOLD";

/// Engine-wide settings shared by every render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Ordered font candidates.
    pub fonts: FontConfig,
    /// Brand mark drawn by every single-card style.
    pub brand: String,
    /// Monogram drawn inside the series badge.
    pub brand_short: String,
}

/// Ordered font file candidates per weight. The built-in font always follows the last entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular: Vec<PathBuf>,
    pub bold: Vec<PathBuf>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular: [
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
                "/System/Library/Fonts/Helvetica.ttc",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            bold: [
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
                "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
                "C:\\Windows\\Fonts\\arialbd.ttf",
                "/System/Library/Fonts/Helvetica.ttc",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
        }
    }
}

impl FontConfig {
    /// Candidate list for one weight.
    pub fn candidates(&self, bold: bool) -> &[PathBuf] {
        if bold { &self.bold } else { &self.regular }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fonts: FontConfig::default(),
            brand: "ПАРТМАРТ".to_owned(),
            brand_short: "PM".to_owned(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config; absent keys keep their defaults.
    pub fn from_json_str(s: &str) -> CardResult<Self> {
        serde_json::from_str(s).map_err(|e| CardError::config(format!("parse config json: {e}")))
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> CardResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))
            .map_err(|e| CardError::config(format!("{e:#}")))?;
        Self::from_json_str(&text)
    }

    /// Apply [`ENV_FONT`] and [`ENV_FONT_BOLD`] from the process environment.
    pub fn with_env_overrides(self) -> Self {
        let regular = std::env::var_os(ENV_FONT).map(PathBuf::from);
        let bold = std::env::var_os(ENV_FONT_BOLD).map(PathBuf::from);
        self.with_font_overrides(regular, bold)
    }

    /// Prepend explicit font candidates. Empty paths are ignored.
    pub fn with_font_overrides(mut self, regular: Option<PathBuf>, bold: Option<PathBuf>) -> Self {
        if let Some(p) = regular.filter(|p| !p.as_os_str().is_empty()) {
            self.fonts.regular.insert(0, p);
        }
        if let Some(p) = bold.filter(|p| !p.as_os_str().is_empty()) {
            self.fonts.bold.insert(0, p);
        }
        self
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;

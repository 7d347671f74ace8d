use anyhow::{Context, Result};
use icon_core::{Background, Color, IconSpec};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::encoder::OutputFormat;

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "icongen.json";

/// One icon to generate: a size and the formats to write it in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconTarget {
    /// Edge length in pixels. Signed so bad values reach validation instead of
    /// failing inside the JSON parser.
    pub size: i64,
    /// File stem, e.g. "icon-192" for icons/icon-192.png
    pub name: String,
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,
}

impl IconTarget {
    pub fn new(size: i64, name: &str, formats: &[OutputFormat]) -> Self {
        Self {
            size,
            name: name.to_string(),
            formats: formats.to_vec(),
        }
    }
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Png]
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("icons")
}

fn default_foreground() -> Color {
    Color::WHITE
}

fn default_targets() -> Vec<IconTarget> {
    use crate::encoder::OutputFormat::{Html, Png, Svg};
    vec![
        IconTarget::new(512, "icon-512", &[Png, Svg, Html]),
        IconTarget::new(192, "icon-192", &[Png, Svg, Html]),
        IconTarget::new(180, "apple-touch-icon-180", &[Png]),
        IconTarget::new(32, "favicon-32", &[Png]),
        // Referenced by the manifest and the service worker cache list
        IconTarget::new(144, "icon-144", &[Png, Svg, Html]),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_targets")]
    pub targets: Vec<IconTarget>,
    #[serde(default)]
    pub background: Background,
    #[serde(default = "default_foreground")]
    pub foreground: Color,
    /// Draw the decorative sound-wave arcs beside the mic
    #[serde(default)]
    pub sound_waves: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            targets: default_targets(),
            background: Background::default(),
            foreground: default_foreground(),
            sound_waves: false,
        }
    }
}

impl Config {
    /// Load config from an explicit path, or from `icongen.json` in the
    /// working directory, or fall back to the built-in defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.exists() {
                    Self::load_from(local)
                } else {
                    info!("No {} found, using built-in icon set", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Save config to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Validate every target up front. Any bad size, gradient or name
    /// rejects the whole run before a single file is written.
    pub fn build_specs(&self) -> Result<Vec<(IconTarget, IconSpec)>> {
        if self.targets.is_empty() {
            anyhow::bail!("Config lists no icon targets");
        }

        let mut names = HashSet::new();
        let mut specs = Vec::with_capacity(self.targets.len());
        for target in &self.targets {
            if target.name.trim().is_empty() {
                anyhow::bail!("Icon target of size {} has an empty name", target.size);
            }
            if target.name.contains(['/', '\\']) {
                anyhow::bail!("Icon target name {:?} must be a plain file stem", target.name);
            }
            if !names.insert(target.name.as_str()) {
                anyhow::bail!("Icon target name {:?} is listed twice", target.name);
            }
            if target.formats.is_empty() {
                warn!("Icon target {} requests no formats, skipping", target.name);
            }

            let spec = IconSpec::new(target.size, self.background.clone(), self.foreground)
                .with_context(|| format!("Invalid icon target {:?}", target.name))?
                .with_sound_waves(self.sound_waves);
            specs.push((target.clone(), spec));
        }

        Ok(specs)
    }
}

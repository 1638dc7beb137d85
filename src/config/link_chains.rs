use crate::link::LinkOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LinkChainsConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub binarize: BinarizeConfig,
    #[serde(default)]
    pub link: LinkOptions,
    pub output: LinkOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BinarizeConfig {
    /// Gray levels at or above this value count as edge pixels.
    pub threshold: u8,
}

impl Default for BinarizeConfig {
    fn default() -> Self {
        Self { threshold: 128 }
    }
}

#[derive(Debug, Deserialize)]
pub struct LinkOutputConfig {
    #[serde(rename = "labels_image")]
    pub labels_image: PathBuf,
    #[serde(rename = "chains_json")]
    pub chains_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<LinkChainsConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

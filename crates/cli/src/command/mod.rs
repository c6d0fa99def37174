pub mod correct;
pub mod divide;
pub mod pages;
pub mod questions;
pub mod trials;

use anyhow::{Context, Result};
use readtrace_repair::RepairConfig;
use std::path::Path;

/// Load a repair configuration, or defaults when no file is given
pub fn load_config(path: Option<&Path>) -> Result<RepairConfig> {
    let Some(path) = path else {
        return Ok(RepairConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    RepairConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

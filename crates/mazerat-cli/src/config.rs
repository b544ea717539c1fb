//! Configuration management for the mazerat CLI.

use anyhow::{Context, Result};
use mazerat::prelude::SimulationConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "mazerat.toml";

/// Project configuration, read from `mazerat.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub rats: RatsConfig,
}

/// Which rats `mazerat run` adds when no flags say otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatsConfig {
    #[serde(default = "default_policy")]
    pub policy: String,
    #[serde(default = "default_count")]
    pub count: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_policy() -> String { "wall-follower".to_string() }
fn default_count() -> usize { 1 }

impl Default for RatsConfig {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            count: default_count(),
            seed: None,
        }
    }
}

impl Config {
    /// Load config from mazerat.toml in the current or parent directories.
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => Self::load_from(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    /// Save config to the specified path.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

/// Find mazerat.toml in current or parent directories.
fn find_config_file() -> Option<PathBuf> {
    let dir = std::env::current_dir().ok()?;
    find_config_from(&dir)
}

fn find_config_from(start: &Path) -> Option<PathBuf> {
    let mut dir = start.to_path_buf();
    loop {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.simulation.stuck_limit, 3);
        assert_eq!(config.rats.policy, "wall-follower");
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [simulation]
            step_delay_ms = 50

            [rats]
            policy = "smelling-v2"
            seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.step_delay_ms, 50);
        assert_eq!(config.simulation.starvation_multiplier, 3);
        assert_eq!(config.rats.policy, "smelling-v2");
        assert_eq!(config.rats.count, 1);
        assert_eq!(config.rats.seed, Some(9));
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let mut config = Config::default();
        config.rats.count = 4;
        config.save(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn config_is_found_in_a_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        Config::default().save(&dir.path().join(CONFIG_FILE)).unwrap();

        let found = find_config_from(&nested).unwrap();
        assert_eq!(found, dir.path().join(CONFIG_FILE));
    }
}

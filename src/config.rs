use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CompgenError, Result};

const CONFIG_DIR: &str = "compgen";
const CONFIG_FILE: &str = "config.toml";
const LOCAL_CONFIG_FILE: &str = ".compgen.toml";

/// Settings read from `.compgen.toml` or the global config file.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CompgenConfig {
    pub hooks: HooksConfig,
}

/// Commands run after generation. An empty argv disables the hook.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HooksConfig {
    pub format: Vec<String>,
    pub lint: Vec<String>,
}

impl Default for HooksConfig {
    fn default() -> Self {
        Self {
            format: vec!["pnpm".into(), "run".into(), "format:file".into()],
            lint: vec!["pnpm".into(), "run".into(), "lint:file".into()],
        }
    }
}

/// Path of the per-project config inside the target directory.
pub fn local_config_path(target_dir: &Path) -> PathBuf {
    target_dir.join(LOCAL_CONFIG_FILE)
}

/// Path of the user-wide config under `$XDG_CONFIG_HOME`.
pub fn global_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let config_home = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| home.join(".config"));
    config_home.join(CONFIG_DIR).join(CONFIG_FILE)
}

/// Uses the local config if present, then the global one, then defaults.
pub fn load_config(target_dir: &Path) -> Result<CompgenConfig> {
    let local = local_config_path(target_dir);
    if local.exists() {
        return read_config(&local);
    }
    read_config(&global_config_path())
}

/// Reads config from disk, returning defaults if missing.
pub fn read_config(path: &Path) -> Result<CompgenConfig> {
    if !path.exists() {
        return Ok(CompgenConfig::default());
    }
    let content = std::fs::read_to_string(path).map_err(|err| CompgenError::at(path, err))?;
    parse_config(&content)
        .map_err(|err| CompgenError::Config(format!("{}: {}", path.display(), err)))
}

fn parse_config(content: &str) -> std::result::Result<CompgenConfig, toml::de::Error> {
    toml::from_str(content)
}

use anyhow::{Context, Result};
use rn_smoke_env::domain::ProvisionerConfig;
use std::fs;
use std::path::{Path, PathBuf};

pub const ENV_ARTIFACTS_DIR: &str = "RN_SMOKE_ARTIFACTS_DIR";
pub const ENV_IOS_SIMULATOR: &str = "RN_SMOKE_IOS_SIMULATOR";
pub const ENV_IOS_SIMULATOR_UDID: &str = "RN_SMOKE_IOS_SIMULATOR_UDID";

/// `~/.rn-smoke-env/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".rn-smoke-env").join("config.toml"))
}

/// Defaults, then the TOML file, then environment overrides.
///
/// An explicitly given file must exist; the default location is optional.
pub fn load(explicit: Option<&Path>, env: impl Fn(&str) -> Option<String>) -> Result<ProvisionerConfig> {
    let mut config = match explicit {
        Some(path) => read_file(path)?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => read_file(&path)?,
            None => ProvisionerConfig::default(),
        },
    };

    apply_env(&mut config, env);
    Ok(config)
}

fn read_file(path: &Path) -> Result<ProvisionerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn apply_env(config: &mut ProvisionerConfig, env: impl Fn(&str) -> Option<String>) {
    if let Some(dir) = env(ENV_ARTIFACTS_DIR) {
        config.artifacts_dir = PathBuf::from(dir);
    }
    if let Some(name) = env(ENV_IOS_SIMULATOR) {
        config.ios_simulator.name = name;
    }
    if let Some(udid) = env(ENV_IOS_SIMULATOR_UDID) {
        config.ios_simulator.udid = udid;
    }
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::system::HostPlatform;

pub const DEFAULT_VERSIONS_URL: &str = "https://exp.host/--/api/v2/versions";
pub const COMMANDS_LOG_FILE_NAME: &str = "SetupEnvironmentCommandsLogs.txt";

/// Everything the provisioner needs to know about the host and the tools on it.
///
/// All fields have defaults so a partial TOML file is enough to override a
/// single value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvisionerConfig {
    /// `npm` executable name (`npm.cmd` on Windows)
    pub npm_command: String,
    /// `npx` executable name (`npx.cmd` on Windows)
    pub npx_command: String,
    /// Gradle wrapper script inside `<workspace>/android`
    pub gradle_wrapper: String,
    /// Android package of the Expo client
    pub expo_package_name: String,
    /// iOS bundle identifier of the Expo client
    pub expo_bundle_id: String,
    /// Where Expo caches simulator builds of its client
    pub ios_expo_apps_cache_dir: PathBuf,
    /// Directory that receives the commands log artifact
    pub artifacts_dir: PathBuf,
    /// Endpoint listing Expo SDK versions
    pub versions_url: String,
    pub ios_simulator: IosSimulatorConfig,
    /// Delay after booting a simulator before it is considered usable
    #[serde(with = "seconds")]
    pub simulator_settle_delay: Duration,
    pub expo_client: ExpoClientArtifacts,
}

/// Identity of the simulator used for iOS runs
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IosSimulatorConfig {
    pub name: String,
    pub udid: String,
}

/// Locally available Expo Go builds
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpoClientArtifacts {
    pub android_apk: Option<PathBuf>,
    pub ios_app: Option<PathBuf>,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self::for_platform(HostPlatform::current())
    }
}

impl ProvisionerConfig {
    pub fn for_platform(platform: HostPlatform) -> Self {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            npm_command: platform.node_shim("npm"),
            npx_command: platform.node_shim("npx"),
            gradle_wrapper: platform.gradle_wrapper().to_string(),
            expo_package_name: "host.exp.exponent".to_string(),
            expo_bundle_id: "host.exp.Exponent".to_string(),
            ios_expo_apps_cache_dir: home.join(".expo").join("ios-simulator-app-cache"),
            artifacts_dir: PathBuf::from("artifacts"),
            versions_url: DEFAULT_VERSIONS_URL.to_string(),
            ios_simulator: IosSimulatorConfig::default(),
            simulator_settle_delay: Duration::from_secs(15),
            expo_client: ExpoClientArtifacts::default(),
        }
    }

    /// Log file that collects the output of every setup command
    pub fn commands_log_file(&self) -> PathBuf {
        self.artifacts_dir.join(COMMANDS_LOG_FILE_NAME)
    }
}

mod seconds {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_platform() {
        let config = ProvisionerConfig::for_platform(HostPlatform::Windows);
        assert_eq!(config.npm_command, "npm.cmd");
        assert_eq!(config.npx_command, "npx.cmd");
        assert_eq!(config.simulator_settle_delay, Duration::from_secs(15));
        assert!(config
            .ios_expo_apps_cache_dir
            .ends_with(".expo/ios-simulator-app-cache"));
    }

    #[test]
    fn test_commands_log_lives_in_artifacts() {
        let mut config = ProvisionerConfig::for_platform(HostPlatform::Linux);
        config.artifacts_dir = PathBuf::from("/tmp/smoke-artifacts");
        assert_eq!(
            config.commands_log_file(),
            PathBuf::from("/tmp/smoke-artifacts/SetupEnvironmentCommandsLogs.txt")
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ProvisionerConfig = serde_json::from_str(
            r#"{ "simulator_settle_delay": 3, "ios_simulator": { "name": "iPhone 15" } }"#,
        )
        .unwrap();
        assert_eq!(config.simulator_settle_delay, Duration::from_secs(3));
        assert_eq!(config.ios_simulator.name, "iPhone 15");
        assert_eq!(config.versions_url, DEFAULT_VERSIONS_URL);
    }
}

use async_trait::async_trait;
use domain::config::ExpoClientArtifacts;
use domain::entities::device::{AndroidDevice, IosSimulator};
use domain::ports::{CommandRunner, CommandSpec, ExpoClientInstaller, PortError};
use std::path::Path;
use std::sync::Arc;

use super::process::run_blocking;

/// Installs locally available Expo Go builds with adb / simctl
pub struct ExpoGoInstaller {
    runner: Arc<dyn CommandRunner>,
    artifacts: ExpoClientArtifacts,
    bundle_id: String,
}

impl ExpoGoInstaller {
    /// `bundle_id` identifies the iOS client once installed
    pub fn new(runner: Arc<dyn CommandRunner>, artifacts: ExpoClientArtifacts, bundle_id: impl Into<String>) -> Self {
        Self {
            runner,
            artifacts,
            bundle_id: bundle_id.into(),
        }
    }

    async fn run(&self, spec: CommandSpec) -> Result<(), PortError> {
        let output = run_blocking(self.runner.clone(), spec.clone()).await?;
        if !output.is_success() {
            return Err(PortError::Device(format!(
                "'{}' failed: {}",
                spec,
                output.stderr.trim()
            )));
        }
        Ok(())
    }

    fn artifact<'a>(artifact: Option<&'a Path>, kind: &str) -> Result<&'a Path, PortError> {
        artifact.ok_or_else(|| PortError::Device(format!("Expo client {} is not configured", kind)))
    }
}

#[async_trait]
impl ExpoClientInstaller for ExpoGoInstaller {
    async fn install_on_android(&self, device: &AndroidDevice) -> Result<(), PortError> {
        let apk = Self::artifact(self.artifacts.android_apk.as_deref(), "APK")?;
        let spec = CommandSpec::new("adb")
            .args(["-s", device.id.as_str(), "install", "-r"])
            .arg(apk.display().to_string());
        self.run(spec).await
    }

    async fn install_on_ios(&self, simulator: &IosSimulator) -> Result<(), PortError> {
        let app = Self::artifact(self.artifacts.ios_app.as_deref(), "app bundle")?;
        let target = if simulator.udid.is_empty() {
            simulator.name.as_str()
        } else {
            simulator.udid.as_str()
        };
        let install = CommandSpec::new("xcrun")
            .args(["simctl", "install", target])
            .arg(app.display().to_string());
        self.run(install).await?;

        // simctl install exits 0 for bundles it silently skips
        let installed =
            CommandSpec::new("xcrun").args(["simctl", "get_app_container", target, self.bundle_id.as_str()]);
        self.run(installed).await
    }
}

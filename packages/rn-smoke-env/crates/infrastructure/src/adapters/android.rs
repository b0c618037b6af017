use async_trait::async_trait;
use domain::entities::device::{parse_adb_devices, AndroidDevice};
use domain::ports::{AndroidEmulator, CommandRunner, CommandSpec, PortError};
use std::sync::Arc;

use super::process::run_blocking;

/// Android emulator control through `adb`
pub struct AdbEmulator {
    runner: Arc<dyn CommandRunner>,
    adb: String,
}

impl AdbEmulator {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            runner,
            adb: "adb".to_string(),
        }
    }

    async fn adb(&self, spec: CommandSpec) -> Result<String, PortError> {
        let output = run_blocking(self.runner.clone(), spec.clone()).await?;
        if !output.is_success() {
            return Err(PortError::Device(format!(
                "'{}' failed: {}",
                spec,
                output.stderr.trim()
            )));
        }
        Ok(output.stdout)
    }
}

#[async_trait]
impl AndroidEmulator for AdbEmulator {
    async fn online_devices(&self) -> Result<Vec<AndroidDevice>, PortError> {
        let stdout = self.adb(CommandSpec::new(&self.adb).arg("devices")).await?;
        Ok(parse_adb_devices(&stdout)
            .into_iter()
            .filter(|device| device.is_online)
            .collect())
    }

    async fn enable_draw_permit(&self, device: &AndroidDevice, package: &str) -> Result<(), PortError> {
        tracing::info!("*** Enabling permission for drawing over apps for {}", package);
        self.adb(CommandSpec::new(&self.adb).args([
            "-s",
            device.id.as_str(),
            "shell",
            "appops",
            "set",
            package,
            "SYSTEM_ALERT_WINDOW",
            "allow",
        ]))
        .await
        .map(|_| ())
    }
}

use async_trait::async_trait;
use domain::ports::{CommandRunner, CommandSpec, IosSimulatorControl, PortError};
use std::sync::Arc;

use super::process::run_blocking;

/// Simulator lifecycle through `xcrun simctl`
pub struct SimctlSimulator {
    runner: Arc<dyn CommandRunner>,
}

impl SimctlSimulator {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }

    fn simctl(action: &str, device: &str) -> CommandSpec {
        CommandSpec::new("xcrun").args(["simctl", action, device])
    }

    async fn run(&self, action: &str, device: &str) -> Result<(), PortError> {
        let spec = Self::simctl(action, device);
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
}

#[async_trait]
impl IosSimulatorControl for SimctlSimulator {
    async fn shutdown(&self, device: &str) -> Result<(), PortError> {
        tracing::info!("*** Shutting down iOS simulator '{}'", device);
        // simctl refuses to shut down a simulator that is not booted
        if let Err(e) = self.run("shutdown", device).await {
            tracing::warn!("{}", e);
        }
        Ok(())
    }

    async fn erase(&self, device: &str) -> Result<(), PortError> {
        tracing::info!("*** Erasing iOS simulator '{}'", device);
        self.run("erase", device).await
    }

    async fn boot(&self, device: &str) -> Result<(), PortError> {
        tracing::info!("*** Executing iOS simulator with 'xcrun simctl boot \"{}\"' command...", device);
        self.run("boot", device).await
    }
}

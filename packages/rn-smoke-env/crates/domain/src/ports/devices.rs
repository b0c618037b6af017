use async_trait::async_trait;

use super::PortError;
use crate::entities::device::{AndroidDevice, IosSimulator};

/// Android emulator helpers (adb)
#[async_trait]
pub trait AndroidEmulator: Send + Sync {
    /// Devices currently attached and online, in adb order
    async fn online_devices(&self) -> Result<Vec<AndroidDevice>, PortError>;

    /// Allow `package` to draw over other apps
    async fn enable_draw_permit(&self, device: &AndroidDevice, package: &str) -> Result<(), PortError>;
}

/// iOS simulator lifecycle (simctl)
#[async_trait]
pub trait IosSimulatorControl: Send + Sync {
    async fn shutdown(&self, device: &str) -> Result<(), PortError>;
    async fn erase(&self, device: &str) -> Result<(), PortError>;
    async fn boot(&self, device: &str) -> Result<(), PortError>;
}

/// Installs the Expo client application on a device
#[async_trait]
pub trait ExpoClientInstaller: Send + Sync {
    async fn install_on_android(&self, device: &AndroidDevice) -> Result<(), PortError>;
    async fn install_on_ios(&self, simulator: &IosSimulator) -> Result<(), PortError>;
}

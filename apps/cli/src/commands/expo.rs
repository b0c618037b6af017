use clap::{Parser, Subcommand};
use rn_smoke_env::application::EnvironmentProvisioner;
use std::path::PathBuf;

use crate::core::CliError;

/// Print the React Native version matching an Expo SDK
#[derive(Parser, Debug)]
pub struct RnVersionCommand {
    /// Expo SDK major version; newest SDK when omitted
    #[arg(long)]
    pub sdk: Option<u64>,
}

impl RnVersionCommand {
    pub async fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        let version = provisioner
            .get_latest_supported_rn_version_for_expo(self.sdk)
            .await?;
        println!("{}", version);
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct AddExpoCommand {
    #[arg(long)]
    pub workspace: PathBuf,

    /// Expo package version
    #[arg(long)]
    pub version: Option<String>,
}

impl AddExpoCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        provisioner.add_expo_dependency_to_rn_project(&self.workspace, self.version.as_deref())?;
        cliclack::log::success("Expo added as a dev dependency")?;
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct InstallXdlCommand {
    /// Extension directory receiving @expo/xdl
    #[arg(long)]
    pub extension_dir: PathBuf,

    #[arg(long)]
    pub version: String,
}

impl InstallXdlCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        provisioner.install_expo_xdl_package_to_extension_dir(&self.extension_dir, &self.version)?;
        cliclack::log::success(format!("@expo/xdl@{} installed", self.version))?;
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct PatchExpoSettingsCommand {
    /// Expo application root
    #[arg(long)]
    pub app: PathBuf,
}

impl PatchExpoSettingsCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        provisioner.patch_expo_settings_file(&self.app)?;
        Ok(())
    }
}

/// Install the Expo client on a device
#[derive(Subcommand, Debug)]
pub enum InstallExpoCommand {
    /// First online Android emulator
    Android,
    /// Configured iOS simulator
    Ios,
}

impl InstallExpoCommand {
    pub async fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        match self {
            InstallExpoCommand::Android => provisioner.install_expo_app_on_android().await?,
            InstallExpoCommand::Ios => provisioner.install_expo_app_on_ios().await?,
        }
        cliclack::log::success("Expo client installed")?;
        Ok(())
    }
}

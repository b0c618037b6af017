use clap::Parser;
use rn_smoke_env::application::EnvironmentProvisioner;
use std::path::PathBuf;

use crate::core::CliError;

#[derive(Parser, Debug)]
pub struct PatchMetroCommand {
    /// Application root containing metro.config.js
    #[arg(long)]
    pub app: PathBuf,
}

impl PatchMetroCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        provisioner.patch_metro_config(&self.app)?;
        Ok(())
    }
}

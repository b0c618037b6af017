use clap::Parser;
use rn_smoke_env::application::EnvironmentProvisioner;

use crate::core::CliError;

#[derive(Parser, Debug)]
pub struct TerminateMacosAppCommand {
    /// Application bundle name without `.app`
    pub app_name: String,
}

impl TerminateMacosAppCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        provisioner.terminate_macos_app(&self.app_name)?;
        Ok(())
    }
}

use clap::{Parser, Subcommand};
use rn_smoke_env::application::EnvironmentProvisioner;
use std::path::PathBuf;

use crate::core::CliError;

#[derive(Subcommand, Debug)]
pub enum SimulatorCommand {
    /// Shut down, erase and boot the configured simulator
    Run,
    /// Shut the configured simulator down
    Terminate,
}

impl SimulatorCommand {
    pub async fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        match self {
            SimulatorCommand::Run => {
                let spinner = cliclack::spinner();
                spinner.start("Booting a clean simulator...");
                if let Err(e) = provisioner.run_ios_simulator().await {
                    spinner.error("Simulator failed to start");
                    return Err(e.into());
                }
                spinner.stop("Simulator ready");
            }
            SimulatorCommand::Terminate => provisioner.terminate_ios_simulator().await?,
        }
        Ok(())
    }
}

#[derive(Parser, Debug)]
pub struct SetIosTargetCommand {
    #[arg(long)]
    pub workspace: PathBuf,

    /// Launch configuration name
    #[arg(long, default_value = "Debug iOS")]
    pub config_name: String,

    /// Target to set; the field is removed when omitted
    #[arg(long)]
    pub target: Option<String>,
}

impl SetIosTargetCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        provisioner.set_ios_target_to_launch_json(
            &self.workspace,
            &self.config_name,
            self.target.as_deref(),
        )?;
        Ok(())
    }
}

use clap::Parser;
use rn_smoke_env::application::{CleanUpPaths, EnvironmentProvisioner};
use std::path::PathBuf;

use crate::core::CliError;

#[derive(Parser, Debug)]
pub struct CleanUpCommand {
    /// Downloaded VS Code under test
    #[arg(long)]
    pub test_dir: PathBuf,

    /// Temporary VS Code user data directory
    #[arg(long)]
    pub user_data_dir: PathBuf,

    #[arg(long)]
    pub logs_dir: PathBuf,

    /// Test application to delete (repeatable)
    #[arg(long = "workspace")]
    pub workspaces: Vec<PathBuf>,

    /// Expo simulator app cache [default: from config]
    #[arg(long)]
    pub expo_cache_dir: Option<PathBuf>,
}

impl CleanUpCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        let paths = CleanUpPaths {
            test_dir: self.test_dir,
            user_data_dir: self.user_data_dir,
            test_logs_dir: self.logs_dir,
            workspace_paths: self.workspaces,
            expo_cache_dir: self
                .expo_cache_dir
                .unwrap_or_else(|| provisioner.config().ios_expo_apps_cache_dir.clone()),
        };
        provisioner.clean_up(&paths)?;
        cliclack::log::success("Clean up complete")?;
        Ok(())
    }
}

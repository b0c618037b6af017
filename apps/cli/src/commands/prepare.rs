use clap::{Args, Subcommand};
use rn_smoke_env::application::{EnvironmentProvisioner, TestApp};
use std::path::PathBuf;

use crate::core::CliError;

#[derive(Args, Debug, Clone)]
pub struct AppArgs {
    /// Fixture directory; scaffold commands run from here
    #[arg(long)]
    pub resources: PathBuf,

    /// Name passed to the scaffold command
    #[arg(long)]
    pub app_name: String,

    /// Generated project root [default: <resources>/<app-name>]
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Entry point to overwrite [default: App.js, or App.tsx for Expo, in the workspace]
    #[arg(long)]
    pub entry_file: Option<PathBuf>,
}

impl AppArgs {
    pub fn into_test_app(self, default_entry: &str) -> TestApp {
        let workspace_dir = self
            .workspace
            .unwrap_or_else(|| self.resources.join(&self.app_name));
        let workspace_file = self
            .entry_file
            .unwrap_or_else(|| workspace_dir.join(default_entry));
        TestApp {
            workspace_file,
            resources_dir: self.resources,
            workspace_dir,
            app_name: self.app_name,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum PrepareCommand {
    /// Plain React Native app via `react-native init`
    Rn {
        #[command(flatten)]
        app: AppArgs,
        /// Fixture folder holding the replacement App.js
        #[arg(long)]
        entry_point_folder: String,
        /// React Native version to scaffold
        #[arg(long)]
        version: Option<String>,
    },
    /// Switch an existing RN app to the Hermes fixtures
    Hermes {
        #[command(flatten)]
        app: AppArgs,
        #[arg(long)]
        entry_point_folder: String,
    },
    /// Expo app from the tabs template
    Expo {
        #[command(flatten)]
        app: AppArgs,
        /// Expo SDK major version of the template
        #[arg(long)]
        sdk: Option<String>,
    },
    /// Add React Native for macOS to an existing workspace
    Macos {
        #[arg(long)]
        workspace: PathBuf,
    },
    /// React Native for Windows app
    Rnw {
        #[command(flatten)]
        app: AppArgs,
        #[arg(long)]
        entry_point_folder: String,
        /// React Native version range for the template
        #[arg(long)]
        version: Option<String>,
    },
}

impl PrepareCommand {
    pub fn execute(self, provisioner: &EnvironmentProvisioner) -> Result<(), CliError> {
        cliclack::intro("Preparing test application")?;

        match self {
            PrepareCommand::Rn {
                app,
                entry_point_folder,
                version,
            } => provisioner.prepare_react_native_application(
                &app.into_test_app("App.js"),
                &entry_point_folder,
                version.as_deref(),
            )?,
            PrepareCommand::Hermes {
                app,
                entry_point_folder,
            } => provisioner.prepare_hermes_react_native_application(
                &app.into_test_app("App.js"),
                &entry_point_folder,
            )?,
            PrepareCommand::Expo { app, sdk } => {
                provisioner.prepare_expo_application(&app.into_test_app("App.tsx"), sdk.as_deref())?
            }
            PrepareCommand::Macos { workspace } => provisioner.prepare_macos_application(&workspace)?,
            PrepareCommand::Rnw {
                app,
                entry_point_folder,
                version,
            } => provisioner.prepare_rnw_application(
                &app.into_test_app("App.js"),
                &entry_point_folder,
                version.as_deref(),
            )?,
        }

        cliclack::outro("Application ready")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_defaults_under_resources() {
        let app = AppArgs {
            resources: PathBuf::from("/res"),
            app_name: "latestRNApp".to_string(),
            workspace: None,
            entry_file: None,
        }
        .into_test_app("App.tsx");

        assert_eq!(app.workspace_dir, PathBuf::from("/res/latestRNApp"));
        assert_eq!(app.workspace_file, PathBuf::from("/res/latestRNApp/App.tsx"));
    }

    #[test]
    fn test_explicit_paths_win() {
        let app = AppArgs {
            resources: PathBuf::from("/res"),
            app_name: "app".to_string(),
            workspace: Some(PathBuf::from("/elsewhere")),
            entry_file: Some(PathBuf::from("/elsewhere/index.js")),
        }
        .into_test_app("App.js");

        assert_eq!(app.workspace_dir, PathBuf::from("/elsewhere"));
        assert_eq!(app.workspace_file, PathBuf::from("/elsewhere/index.js"));
    }
}

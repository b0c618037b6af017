use rn_smoke_env::application::ProvisionError;
use rn_smoke_env::domain::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Returns a themed, actionable suggestion for the error.
    pub fn suggestion(&self) -> Option<String> {
        match self {
            CliError::Config(_) => {
                Some("Check your config.toml for syntax errors or wrong value types.".to_string())
            }
            CliError::Provision(ProvisionError::CommandFailed { .. }) => Some(
                "See the commands log in the artifacts directory for the tool output.".to_string(),
            ),
            CliError::Provision(ProvisionError::NoOnlineAndroidDevice) => {
                Some("Start an emulator and check that `adb devices` lists it as 'device'.".to_string())
            }
            CliError::Provision(ProvisionError::IosSimulatorNotConfigured) => Some(
                "Set [ios_simulator] name in the config file or RN_SMOKE_IOS_SIMULATOR.".to_string(),
            ),
            CliError::Provision(ProvisionError::Domain(DomainError::ConfigurationNotFound(_))) => {
                Some("Check the configuration names in .vscode/launch.json.".to_string())
            }
            _ => None,
        }
    }

    pub fn render(&self) {
        eprintln!("\n{} {}", console::style("Error:").red().bold(), self);
        if let Some(s) = self.suggestion() {
            eprintln!("{} {}", console::style("  help:").dim(), s);
        }
    }
}

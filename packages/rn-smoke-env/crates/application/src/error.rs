use domain::{DomainError, PortError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Command '{command}' failed with exit code {code:?}")]
    CommandFailed { command: String, code: Option<i32> },

    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("No online Android emulator found")]
    NoOnlineAndroidDevice,

    #[error("iOS simulator is not configured")]
    IosSimulatorNotConfigured,
}

pub type Result<T, E = ProvisionError> = std::result::Result<T, E>;

pub mod command_runner;
pub mod devices;
pub mod file_store;
pub mod http;

use std::path::PathBuf;
use thiserror::Error;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec, OutputMode};
pub use devices::{AndroidEmulator, ExpoClientInstaller, IosSimulatorControl};
pub use file_store::FileStore;
pub use http::HttpClient;

#[derive(Error, Debug)]
pub enum PortError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Device error: {0}")]
    Device(String),
}

impl PortError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PortError::Io {
            path: path.into(),
            source,
        }
    }
}

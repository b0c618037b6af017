pub mod config;
pub mod entities;
pub mod error;
pub mod ports;
pub mod system;

pub use config::ProvisionerConfig;
pub use entities::{LaunchDocument, VersionManifest};
pub use error::DomainError;
pub use ports::{CommandRunner, FileStore, HttpClient, PortError};

pub mod error;
pub mod provisioner;

pub use error::ProvisionError;
pub use provisioner::{CleanUpPaths, EnvironmentProvisioner, Ports, TestApp};

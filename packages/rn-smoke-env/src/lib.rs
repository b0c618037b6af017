//! Facade over the provisioning layers.

pub use application;
pub use domain;
pub use infrastructure;

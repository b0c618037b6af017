pub mod device;
pub mod expo_settings;
pub mod launch;
pub mod metro;
pub mod process_list;
pub mod scaffold;
pub mod versions;

pub use device::{AndroidDevice, IosSimulator};
pub use launch::LaunchDocument;
pub use versions::{SdkSelection, VersionManifest};

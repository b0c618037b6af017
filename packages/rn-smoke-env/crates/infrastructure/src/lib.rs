pub mod adapters;

pub use adapters::android::AdbEmulator;
pub use adapters::expo_client::ExpoGoInstaller;
pub use adapters::fs::LocalFileStore;
pub use adapters::http::ReqwestClient;
pub use adapters::ios::SimctlSimulator;
pub use adapters::process::SystemCommandRunner;

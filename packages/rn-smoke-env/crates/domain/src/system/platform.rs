use serde::{Deserialize, Serialize};
use std::fmt;

/// Host operating system, as far as tool naming is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HostPlatform {
    MacOS,
    Linux,
    Windows,
    Unknown,
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostPlatform::MacOS => write!(f, "macOS"),
            HostPlatform::Linux => write!(f, "Linux"),
            HostPlatform::Windows => write!(f, "Windows"),
            HostPlatform::Unknown => write!(f, "Unknown"),
        }
    }
}

impl HostPlatform {
    /// Detect the platform this binary was built for
    pub fn current() -> Self {
        Self::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "macos" => HostPlatform::MacOS,
            "linux" => HostPlatform::Linux,
            "windows" => HostPlatform::Windows,
            _ => HostPlatform::Unknown,
        }
    }

    /// Name of a Node.js shim executable (`npm`, `npx`) on this platform.
    /// Windows installs them as `.cmd` batch wrappers.
    pub fn node_shim(&self, name: &str) -> String {
        match self {
            HostPlatform::Windows => format!("{}.cmd", name),
            _ => name.to_string(),
        }
    }

    /// Name of the Gradle wrapper script generated inside `android/`
    pub fn gradle_wrapper(&self) -> &'static str {
        match self {
            HostPlatform::Windows => "gradlew.bat",
            _ => "gradlew",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_uses_cmd_shims() {
        let windows = HostPlatform::from_os("windows");
        assert_eq!(windows.node_shim("npx"), "npx.cmd");
        assert_eq!(windows.gradle_wrapper(), "gradlew.bat");
    }

    #[test]
    fn test_unix_uses_bare_names() {
        for os in ["macos", "linux"] {
            let platform = HostPlatform::from_os(os);
            assert_eq!(platform.node_shim("npm"), "npm");
            assert_eq!(platform.gradle_wrapper(), "gradlew");
        }
        assert_eq!(HostPlatform::from_os("haiku"), HostPlatform::Unknown);
    }
}

//! Builders for every external command the provisioner runs.
//!
//! Each builder fixes program and arguments only; callers choose working
//! directory and output handling.

use crate::ports::CommandSpec;

/// `react-native init <app> [--version <v>]`
pub fn react_native_init(app_name: &str, version: Option<&str>) -> CommandSpec {
    let spec = CommandSpec::new("react-native").args(["init", app_name]);
    match version {
        Some(version) => spec.args(["--version", version]),
        None => spec,
    }
}

/// `<npx> --ignore-existing react-native init <app> --template react-native@^<v>`
///
/// Without a version the template is plain `react-native`.
pub fn react_native_windows_template_init(npx: &str, app_name: &str, version: Option<&str>) -> CommandSpec {
    let template = match version {
        Some(version) => format!("react-native@^{}", version),
        None => "react-native".to_string(),
    };
    CommandSpec::new(npx)
        .args(["--ignore-existing", "react-native", "init", app_name, "--template"])
        .arg(template)
}

/// `<npx> react-native-windows-init --overwrite`
pub fn react_native_windows_init(npx: &str) -> CommandSpec {
    CommandSpec::new(npx).args(["react-native-windows-init", "--overwrite"])
}

/// `expo init -t tabs[@sdk-<n>] --name <app> <app>`, answering the
/// interactive prompt with a newline.
pub fn expo_init(app_name: &str, sdk_major_version: Option<&str>) -> CommandSpec {
    let template = match sdk_major_version {
        Some(sdk) => format!("tabs@sdk-{}", sdk),
        None => "tabs".to_string(),
    };
    CommandSpec::new("expo")
        .args(["init", "-t"])
        .arg(template)
        .args(["--name", app_name, app_name])
        .stdin("\n")
}

/// `npx react-native-macos-init`
pub fn react_native_macos_init(npx: &str) -> CommandSpec {
    CommandSpec::new(npx).arg("react-native-macos-init")
}

/// `<npm> install expo[@<v>] --save-dev`
pub fn install_expo_dependency(npm: &str, version: Option<&str>) -> CommandSpec {
    let package = match version {
        Some(version) => format!("expo@{}", version),
        None => "expo".to_string(),
    };
    CommandSpec::new(npm).arg("install").arg(package).arg("--save-dev")
}

/// `<npm> install @expo/xdl@<v> --no-save`
pub fn install_expo_xdl(npm: &str, version: &str) -> CommandSpec {
    CommandSpec::new(npm)
        .arg("install")
        .arg(format!("@expo/xdl@{}", version))
        .arg("--no-save")
}

/// `<wrapper> clean`, with `wrapper` an absolute path to the Gradle wrapper
pub fn gradle_clean(wrapper: &str) -> CommandSpec {
    CommandSpec::new(wrapper).arg("clean")
}

/// `ps -ax`
pub fn list_processes() -> CommandSpec {
    CommandSpec::new("ps").arg("-ax")
}

/// `kill <pid>`
pub fn terminate_process(pid: u32) -> CommandSpec {
    CommandSpec::new("kill").arg(pid.to_string())
}

use regex::Regex;
use std::sync::OnceLock;

static PID_BEFORE_TTY: OnceLock<Regex> = OnceLock::new();

fn pid_pattern() -> &'static Regex {
    // `ps -ax` prints "<pid> <tty> <time> <command>"; GUI apps have no tty ("??").
    PID_BEFORE_TTY.get_or_init(|| Regex::new(r"^\s*(\d+)\s+\?\?").expect("static regex"))
}

/// Find the PID of the macOS application bundle `<app_name>.app` in `ps -ax`
/// output. Only the first line mentioning the bundle is considered.
pub fn find_macos_app_pid(ps_output: &str, app_name: &str) -> Option<u32> {
    let bundle = format!("{}.app", app_name);
    let line = ps_output.lines().find(|line| line.contains(&bundle))?;
    pid_pattern()
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|pid| pid.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PS_OUTPUT: &str = "\
40943 ??         4:13.97 node /Users/user/Documents/rn_for_mac_proj/node_modules/.bin/react-native start --port 8081
40959 ??         0:10.36 /Users/user/.nvm/versions/node/v10.19.0/bin/node /Users/user/Documents/rn_for_mac_proj/node_modules/metro/node_modules/jest-worker/build/workers/processChild.js
41004 ??         0:21.34 /Users/user/Library/Developer/Xcode/DerivedData/rn_for_mac_proj-ghuavabiztosiqfqkrityjoxqfmv/Build/Products/Debug/rn_for_mac_proj.app/Contents/MacOS/rn_for_mac_proj
75514 ttys007    0:00.00 grep --color=auto rn_for_mac_proj";

    #[test]
    fn test_finds_bundle_process() {
        assert_eq!(find_macos_app_pid(PS_OUTPUT, "rn_for_mac_proj"), Some(41004));
    }

    #[test]
    fn test_no_bundle_no_pid() {
        assert_eq!(find_macos_app_pid(PS_OUTPUT, "other_app"), None);
        assert_eq!(find_macos_app_pid("", "rn_for_mac_proj"), None);
    }

    #[test]
    fn test_padded_pid() {
        let output = "  412 ??         0:01.00 /Applications/Demo.app/Contents/MacOS/Demo";
        assert_eq!(find_macos_app_pid(output, "Demo"), Some(412));
    }

    #[test]
    fn test_bundle_on_terminal_line_is_ignored() {
        let output = "75514 ttys007    0:00.00 open Demo.app";
        assert_eq!(find_macos_app_pid(output, "Demo"), None);
    }
}

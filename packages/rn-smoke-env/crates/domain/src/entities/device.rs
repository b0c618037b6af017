/// A device reported by `adb devices`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AndroidDevice {
    pub id: String,
    pub is_online: bool,
}

/// A simulator as the Expo installer needs to see it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IosSimulator {
    pub name: String,
    pub udid: String,
}

/// Parse the output of `adb devices`.
///
/// ```text
/// List of devices attached
/// emulator-5554   device
/// emulator-5556   offline
/// ```
pub fn parse_adb_devices(output: &str) -> Vec<AndroidDevice> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("List of devices") && !line.starts_with('*'))
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let id = parts.next()?;
            let state = parts.next()?;
            Some(AndroidDevice {
                id: id.to_string(),
                is_online: state == "device",
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_adb_devices() {
        let output = "* daemon started successfully\nList of devices attached\nemulator-5554\tdevice\nemulator-5556\toffline\n\n";
        let devices = parse_adb_devices(output);

        assert_eq!(devices.len(), 2);
        assert_eq!(devices[0].id, "emulator-5554");
        assert!(devices[0].is_online);
        assert!(!devices[1].is_online);
    }

    #[test]
    fn test_parse_adb_devices_empty() {
        assert!(parse_adb_devices("List of devices attached\n").is_empty());
    }
}

use serde_json::Value;

use crate::error::DomainError;

pub const EXPO_DIR: &str = ".expo";
pub const SETTINGS_FILE: &str = "settings.json";

/// Drop an `"https": false` entry from an Expo settings document.
///
/// Returns `true` when the document changed. Any other value of `https`,
/// including `true`, is left alone.
pub fn remove_disabled_https(settings: &mut Value) -> bool {
    let Some(object) = settings.as_object_mut() else {
        return false;
    };
    if object.get("https") == Some(&Value::Bool(false)) {
        object.remove("https");
        return true;
    }
    false
}

/// Patch serialized settings. `Ok(None)` means nothing needs to be written.
pub fn patch_settings(content: &str) -> Result<Option<String>, DomainError> {
    let mut settings: Value = serde_json::from_str(content)?;
    if !remove_disabled_https(&mut settings) {
        return Ok(None);
    }
    Ok(Some(serde_json::to_string_pretty(&settings)?))
}

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use crate::error::DomainError;

pub const VSCODE_DIR: &str = ".vscode";
pub const LAUNCH_FILE: &str = "launch.json";

/// A `launch.json` document.
///
/// Kept as raw JSON so fields this tool does not know about survive a
/// rewrite in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDocument {
    root: Value,
}

impl LaunchDocument {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        Ok(Self {
            root: serde_json::from_str(content)?,
        })
    }

    fn configurations_mut(&mut self) -> impl Iterator<Item = &mut Map<String, Value>> {
        self.root
            .get_mut("configurations")
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
    }

    /// Set `target` on every configuration called `name`, or remove it when
    /// `target` is `None`.
    pub fn set_target(&mut self, name: &str, target: Option<&str>) -> Result<(), DomainError> {
        let mut found = false;
        for config in self.configurations_mut() {
            if config.get("name").and_then(Value::as_str) != Some(name) {
                continue;
            }
            found = true;
            match target {
                Some(target) => {
                    config.insert("target".to_string(), Value::String(target.to_string()));
                }
                None => {
                    config.remove("target");
                }
            }
        }

        if !found {
            return Err(DomainError::ConfigurationNotFound(name.to_string()));
        }
        Ok(())
    }

    /// `target` of the first configuration called `name`
    pub fn target(&self, name: &str) -> Option<&str> {
        self.root
            .get("configurations")?
            .as_array()?
            .iter()
            .find(|c| c.get("name").and_then(Value::as_str) == Some(name))?
            .get("target")?
            .as_str()
    }

    /// Serialize with four-space indentation
    pub fn to_pretty_string(&self) -> Result<String, DomainError> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.root.serialize(&mut serializer)?;
        // serde_json only ever emits UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAUNCH: &str = r#"{
        "version": "0.2.0",
        "configurations": [
            { "name": "Debug Android", "type": "reactnative", "request": "launch", "platform": "android" },
            { "name": "Debug iOS", "type": "reactnative", "request": "launch", "platform": "ios", "target": "device" }
        ]
    }"#;

    #[test]
    fn test_set_target() {
        let mut doc = LaunchDocument::parse(LAUNCH).unwrap();
        doc.set_target("Debug Android", Some("simulator")).unwrap();
        assert_eq!(doc.target("Debug Android"), Some("simulator"));
    }

    #[test]
    fn test_clear_target_removes_field() {
        let mut doc = LaunchDocument::parse(LAUNCH).unwrap();
        doc.set_target("Debug iOS", None).unwrap();

        assert_eq!(doc.target("Debug iOS"), None);
        assert!(!doc.to_pretty_string().unwrap().contains("\"target\""));
    }

    #[test]
    fn test_unknown_configuration_fails() {
        let mut doc = LaunchDocument::parse(LAUNCH).unwrap();
        let err = doc.set_target("Attach to packager", Some("x")).unwrap_err();

        assert!(matches!(err, DomainError::ConfigurationNotFound(ref n) if n == "Attach to packager"));
        assert_eq!(err.to_string(), "Couldn't find \"Attach to packager\" configuration");
    }

    #[test]
    fn test_document_without_configurations_fails() {
        let mut doc = LaunchDocument::parse(r#"{ "version": "0.2.0" }"#).unwrap();
        assert!(doc.set_target("Debug iOS", None).is_err());
    }

    #[test]
    fn test_pretty_output_keeps_order_and_indent() {
        let mut doc = LaunchDocument::parse(LAUNCH).unwrap();
        doc.set_target("Debug iOS", Some("iPhone 15")).unwrap();
        let out = doc.to_pretty_string().unwrap();

        assert!(out.starts_with("{\n    \"version\": \"0.2.0\",\n    \"configurations\": ["));
        let name = out.find("\"Debug iOS\"").unwrap();
        let platform = out[name..].find("\"platform\"").unwrap();
        let target = out[name..].find("\"target\": \"iPhone 15\"").unwrap();
        assert!(platform < target);
    }
}

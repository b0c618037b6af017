use semver::Version;
use serde::Deserialize;
use serde_json::Map;

use crate::error::DomainError;

/// Response of the Expo versions endpoint. Only the fields used here are
/// modeled; everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionManifest {
    #[serde(default)]
    pub sdk_versions: Option<Map<String, serde_json::Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SdkVersionEntry {
    #[serde(default)]
    facebook_react_native_version: Option<String>,
}

/// Which SDK version of the manifest was picked, and what RN it maps to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkSelection {
    pub sdk_version: String,
    pub react_native_version: String,
    /// A major version was requested but the manifest had none matching
    pub fell_back_to_latest: bool,
}

impl VersionManifest {
    pub fn parse(content: &str) -> Result<Self, DomainError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Pick the SDK matching `requested_major`, or the highest SDK version
    /// when no major is given or none matches, and return the React Native
    /// version it is built against.
    ///
    /// Keys are compared as semver; keys that do not parse are skipped.
    pub fn select(&self, requested_major: Option<u64>) -> Result<SdkSelection, DomainError> {
        let sdk_versions = self
            .sdk_versions
            .as_ref()
            .ok_or(DomainError::IncorrectVersionManifest)?;

        let parsed: Vec<(&String, Version)> = sdk_versions
            .keys()
            .filter_map(|key| Version::parse(key).ok().map(|v| (key, v)))
            .collect();

        let requested = requested_major.and_then(|major| {
            parsed
                .iter()
                .find(|(_, version)| version.major == major)
                .map(|(key, _)| *key)
        });
        let fell_back_to_latest = requested_major.is_some() && requested.is_none();

        let key = match requested {
            Some(key) => key,
            None => {
                parsed
                    .iter()
                    .max_by(|(_, a), (_, b)| a.cmp(b))
                    .ok_or(DomainError::IncorrectVersionManifest)?
                    .0
            }
        };

        let entry: SdkVersionEntry = sdk_versions
            .get(key)
            .cloned()
            .map(serde_json::from_value::<SdkVersionEntry>)
            .transpose()
            .map_err(|_| DomainError::IncorrectVersionManifest)?
            .unwrap_or_default();

        let react_native_version = entry
            .facebook_react_native_version
            .filter(|v| !v.is_empty())
            .ok_or(DomainError::IncorrectVersionManifest)?;

        Ok(SdkSelection {
            sdk_version: key.clone(),
            react_native_version,
            fell_back_to_latest,
        })
    }
}

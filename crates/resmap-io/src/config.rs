// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Runtime settings for locating the resource manifest.

use crate::error::SettingsError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Runtime configuration for locating the resource manifest.
///
/// Missing fields fall back to their defaults, so `{}` is a valid settings
/// file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// The directory the manifest addresses are relative to.
    pub resources_root: PathBuf,
    /// The file name of the manifest inside `resources_root`.
    pub manifest_file_name: String,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            resources_root: PathBuf::from("Assets/Resources"),
            manifest_file_name: "resources.txt".to_string(),
        }
    }
}

impl AssetSettings {
    /// The full path of the manifest file.
    pub fn manifest_path(&self) -> PathBuf {
        self.resources_root.join(&self.manifest_file_name)
    }

    /// Load settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Save settings to a JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_manifest_path() {
        let settings = AssetSettings::default();
        assert_eq!(
            settings.manifest_path(),
            Path::new("Assets/Resources").join("resources.txt")
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = AssetSettings::from_json(r#"{ "resources_root": "Bundle" }"#).unwrap();
        assert_eq!(settings.resources_root, PathBuf::from("Bundle"));
        assert_eq!(settings.manifest_file_name, "resources.txt");
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = AssetSettings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Serde(_)));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("assets.json");
        let settings = AssetSettings {
            resources_root: PathBuf::from("Game/Resources"),
            manifest_file_name: "index.txt".to_string(),
        };

        settings.to_file(&path).unwrap();
        assert_eq!(AssetSettings::from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = AssetSettings::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}

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

use resmap_io::builder::RESOURCES_DIRECTORY_NAME;
use serde::Deserialize;
use std::path::PathBuf;

/// The `Resources.toml` configuration of the manifest generator.
#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct ResourcesConfig {
    /// The project directory scanned for `Resources` directories.
    pub project_root: PathBuf,
    /// The file name of the generated manifest.
    pub manifest_file_name: String,
}

impl Default for ResourcesConfig {
    /// Provides a default configuration if `Resources.toml` is not found.
    ///
    /// Scans `Assets` and writes `Assets/Resources/resources.txt`, which is
    /// where the runtime `AssetSettings` look by default.
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("Assets"),
            manifest_file_name: "resources.txt".to_string(),
        }
    }
}

impl ResourcesConfig {
    /// Where the generated manifest is written.
    pub fn manifest_path(&self) -> PathBuf {
        self.project_root
            .join(RESOURCES_DIRECTORY_NAME)
            .join(&self.manifest_file_name)
    }
}

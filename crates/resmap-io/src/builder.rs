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

//! Build-time generation of the resource manifest.
//!
//! The builder scans every `Resources` directory of a project, classifies each
//! file by its extension and writes one `"<type>|<address>"` record per file.
//! Addresses are relative to their `Resources` directory and always use
//! forward slashes. The output is regenerated from scratch on every run.

use crate::error::ManifestIoError;
use resmap_core::asset::AssetKind;
use resmap_core::manifest::RECORD_SEPARATOR;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The name of the directories whose contents are bundled.
pub const RESOURCES_DIRECTORY_NAME: &str = "Resources";

/// One record of the generated manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ManifestEntry {
    /// The forward-slash address relative to the `Resources` directory.
    pub address: String,
    /// The manifest type name the file is imported as.
    pub type_name: String,
}

impl ManifestEntry {
    /// Formats the entry as a manifest line (without line ending).
    pub fn to_record(&self) -> String {
        format!("{}{}{}", self.type_name, RECORD_SEPARATOR, self.address)
    }
}

/// Collects manifest entries from `Resources` directories and writes the
/// manifest file.
#[derive(Debug, Clone)]
pub struct ManifestBuilder {
    manifest_file_name: String,
    entries: Vec<ManifestEntry>,
}

impl ManifestBuilder {
    /// Creates a builder. Files named `manifest_file_name` are never listed,
    /// so a previous manifest does not index itself.
    pub fn new(manifest_file_name: impl Into<String>) -> Self {
        Self {
            manifest_file_name: manifest_file_name.into(),
            entries: Vec::new(),
        }
    }

    /// Finds every directory named `Resources` under `project_root`.
    ///
    /// A `Resources` directory nested inside another one is already covered by
    /// its parent and is not reported separately.
    pub fn find_resources_directories(project_root: &Path) -> Vec<PathBuf> {
        let mut found = Vec::new();
        let mut walker = WalkDir::new(project_root)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter();

        while let Some(entry) = walker.next() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable project entry: {}", err);
                    continue;
                }
            };
            if entry.file_type().is_dir() && entry.file_name() == RESOURCES_DIRECTORY_NAME {
                found.push(entry.into_path());
                walker.skip_current_dir();
            }
        }

        found
    }

    /// Adds an entry for every classifiable file under `resources_dir`,
    /// recursively. Returns the number of entries added.
    pub fn scan(&mut self, resources_dir: &Path) -> usize {
        let before = self.entries.len();

        for entry in WalkDir::new(resources_dir).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    log::warn!("Skipping unreadable resource entry: {}", err);
                    continue;
                }
            };
            if !entry.file_type().is_file()
                || entry.file_name() == self.manifest_file_name.as_str()
            {
                continue;
            }

            let Some(kind) = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .and_then(AssetKind::main_kind_for_extension)
            else {
                log::trace!("No asset type for '{}'", entry.path().display());
                continue;
            };

            let Ok(relative) = entry.path().strip_prefix(resources_dir) else {
                continue;
            };

            self.entries.push(ManifestEntry {
                address: relative.to_string_lossy().replace('\\', "/"),
                type_name: kind.type_name().to_string(),
            });
        }

        self.entries.len() - before
    }

    /// Scans every `Resources` directory of the project. Returns the number of
    /// entries added.
    pub fn scan_project(&mut self, project_root: &Path) -> usize {
        Self::find_resources_directories(project_root)
            .iter()
            .map(|dir| self.scan(dir))
            .sum()
    }

    /// The entries collected so far, in scan order.
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// The records to write: sorted by address then type, duplicates removed.
    fn unique_entries(&self) -> Vec<&ManifestEntry> {
        let mut entries: Vec<&ManifestEntry> = self.entries.iter().collect();
        entries.sort();
        entries.dedup();
        entries
    }

    /// Renders the manifest text: one record per line, sorted by address then
    /// type, duplicates removed, `\n` line endings.
    pub fn to_text(&self) -> String {
        render(&self.unique_entries())
    }

    /// Writes the manifest to `path`, replacing any previous file and creating
    /// the parent directory if needed. Returns the number of records written.
    pub fn write(&self, path: &Path) -> Result<usize, ManifestIoError> {
        let to_error = |source| ManifestIoError::Write {
            path: path.to_path_buf(),
            source,
        };

        let entries = self.unique_entries();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(to_error)?;
        }
        std::fs::write(path, render(&entries)).map_err(to_error)?;

        log::info!(
            "Wrote {} manifest records to '{}'",
            entries.len(),
            path.display()
        );
        Ok(entries.len())
    }
}

fn render(entries: &[&ManifestEntry]) -> String {
    let mut text = String::new();
    for entry in entries {
        text.push_str(&entry.to_record());
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest_file::load_manifest;
    use resmap_core::asset::TypeRegistry;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn test_scan_single_resources_directory() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("Resources");
        touch(&resources, "Sprites/icon.png");
        touch(&resources, "Sprites/ui/back.png");
        touch(&resources, "Audio/hit.ogg");
        touch(&resources, "notes.md");
        touch(&resources, "resources.txt");

        let mut builder = ManifestBuilder::new("resources.txt");
        assert_eq!(builder.scan(&resources), 3);
        assert_eq!(
            builder.to_text(),
            "AudioClip|Audio/hit.ogg\nTexture2D|Sprites/icon.png\nTexture2D|Sprites/ui/back.png\n"
        );
    }

    #[test]
    fn test_find_resources_directories_skips_nested() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Resources/a.png");
        touch(dir.path(), "Resources/Inner/Resources/b.png");
        touch(dir.path(), "Plugins/Vendor/Resources/c.ttf");
        touch(dir.path(), "Scripts/player.rs");

        let found = ManifestBuilder::find_resources_directories(dir.path());
        assert_eq!(
            found,
            vec![
                dir.path().join("Plugins/Vendor/Resources"),
                dir.path().join("Resources"),
            ]
        );
    }

    #[test]
    fn test_scan_project_merges_directories() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "Resources/Data/config.json");
        touch(dir.path(), "Plugins/Resources/Fonts/main.ttf");

        let mut builder = ManifestBuilder::new("resources.txt");
        assert_eq!(builder.scan_project(dir.path()), 2);
        assert_eq!(
            builder.to_text(),
            "TextAsset|Data/config.json\nFont|Fonts/main.ttf\n"
        );
    }

    #[test]
    fn test_write_regenerates_and_parses_back() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("Resources");
        touch(&resources, "Sprites/icon.png");
        let manifest_path = resources.join("resources.txt");
        fs::write(&manifest_path, "stale|content\n").unwrap();

        let mut builder = ManifestBuilder::new("resources.txt");
        builder.scan(&resources);
        builder.write(&manifest_path).unwrap();

        let text = fs::read_to_string(&manifest_path).unwrap();
        assert_eq!(text, "Texture2D|Sprites/icon.png\n");

        let manifest = load_manifest(&manifest_path, &TypeRegistry::with_builtin_kinds()).unwrap();
        assert_eq!(manifest.len(), 1);
        assert_eq!(
            manifest.types_at("Sprites/icon.png"),
            Some(&[Some(AssetKind::Texture2D.asset_type())][..])
        );
    }

    #[test]
    fn test_duplicate_entries_are_written_once() {
        let dir = tempdir().unwrap();
        let resources = dir.path().join("Resources");
        touch(&resources, "a.wav");

        let mut builder = ManifestBuilder::new("resources.txt");
        builder.scan(&resources);
        builder.scan(&resources);
        assert_eq!(builder.entries().len(), 2);
        assert_eq!(builder.to_text(), "AudioClip|a.wav\n");

        let written = builder.write(&resources.join("resources.txt")).unwrap();
        assert_eq!(written, 1);
    }
}

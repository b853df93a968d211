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

use crate::commands::manifest_config::ResourcesConfig;
use crate::helpers::*;
use anyhow::{Context, Result};
use resmap_io::ManifestBuilder;
use std::fs;
use std::path::Path;

pub fn generate(config_path: &Path) -> Result<()> {
    print_task_start("Generating Resource Manifest", PACKAGE, MAGENTA);

    let config = load_config(config_path)?;
    if !config.project_root.is_dir() {
        print_error(&format!(
            "Project root '{}' does not exist. Nothing to index.",
            config.project_root.display()
        ));
        return Ok(());
    }

    let resources_dirs = ManifestBuilder::find_resources_directories(&config.project_root);
    if resources_dirs.is_empty() {
        print_error("No Resources directories found. Nothing to index.");
        return Ok(());
    }

    println!(
        "{}🔎 Found:{} {} Resources director{}.",
        BOLD,
        RESET,
        resources_dirs.len(),
        if resources_dirs.len() == 1 { "y" } else { "ies" }
    );

    let mut builder = ManifestBuilder::new(config.manifest_file_name.as_str());
    for dir in &resources_dirs {
        let added = builder.scan(dir);
        log::info!("{} entries from '{}'", added, dir.display());
    }

    let manifest_path = config.manifest_path();
    let written = builder
        .write(&manifest_path)
        .with_context(|| format!("Failed to generate '{}'", manifest_path.display()))?;

    print_success(&format!(
        "Indexed {} files into '{}'",
        written,
        manifest_path.display()
    ));
    Ok(())
}

/// Loads `Resources.toml`, or the default configuration if it does not exist.
fn load_config(path: &Path) -> Result<ResourcesConfig> {
    if !path.exists() {
        print_info(&format!(
            "No '{}' found. Using default configuration.",
            path.display()
        ));
        return Ok(ResourcesConfig::default());
    }

    print_info(&format!("Found '{}'. Loading configuration.", path.display()));
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at '{}'", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from '{}'", path.display()))
}

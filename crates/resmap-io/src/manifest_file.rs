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

//! Reading the manifest resource from disk.

use crate::error::ManifestIoError;
use resmap_core::asset::TypeResolver;
use resmap_core::Manifest;
use std::path::Path;

/// Reads the raw manifest text at `path`.
pub fn read_manifest_text(path: &Path) -> Result<String, ManifestIoError> {
    std::fs::read_to_string(path).map_err(|source| ManifestIoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads and parses the manifest at `path`.
pub fn load_manifest<R>(path: &Path, resolver: &R) -> Result<Manifest, ManifestIoError>
where
    R: TypeResolver + ?Sized,
{
    log::debug!("Reading resource manifest from '{}'", path.display());
    let text = read_manifest_text(path)?;
    Ok(Manifest::parse(&text, resolver))
}

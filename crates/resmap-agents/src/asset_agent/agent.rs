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

//! The [`AssetAgent`] and its single-asset operations.

use anyhow::{Context, Result};
use resmap_core::asset::{address, AssetType, RawAssetLoader, ResourceDestroyer, TypeResolver};
use resmap_core::{AssetError, Manifest};
use resmap_data::assets::CacheTable;
use resmap_io::{load_manifest, AssetSettings};

/// Loads, caches and releases the assets of one resource domain.
///
/// The backend is the engine's loader and destroyer. The agent is its only
/// caller for loads, and every handle the agent drops is routed back to it.
pub struct AssetAgent<B: RawAssetLoader> {
    pub(super) manifest: Manifest,
    pub(super) cache: CacheTable<B::Handle>,
    pub(super) backend: B,
}

impl<B> AssetAgent<B>
where
    B: RawAssetLoader + ResourceDestroyer<B::Handle>,
{
    /// Creates an agent over an already built manifest.
    pub fn new(manifest: Manifest, backend: B) -> Self {
        Self {
            manifest,
            cache: CacheTable::new(),
            backend,
        }
    }

    /// Creates an agent by parsing raw manifest text.
    pub fn from_manifest_text<R>(raw_text: &str, resolver: &R, backend: B) -> Self
    where
        R: TypeResolver + ?Sized,
    {
        Self::new(Manifest::parse(raw_text, resolver), backend)
    }

    /// Creates an agent from the manifest file named by `settings`.
    pub fn from_settings<R>(settings: &AssetSettings, resolver: &R, backend: B) -> Result<Self>
    where
        R: TypeResolver + ?Sized,
    {
        let path = settings.manifest_path();
        let manifest = load_manifest(&path, resolver).with_context(|| {
            format!(
                "Failed to initialize the resource manifest from '{}'",
                path.display()
            )
        })?;
        Ok(Self::new(manifest, backend))
    }

    /// Re-initializes the agent from raw manifest text.
    ///
    /// Every cached handle is destroyed first, then the manifest is rebuilt.
    pub fn setup<R>(&mut self, raw_text: &str, resolver: &R)
    where
        R: TypeResolver + ?Sized,
    {
        let released = self.cache.len();
        self.cache.clear(&mut self.backend);
        self.manifest = Manifest::parse(raw_text, resolver);
        log::info!(
            "AssetAgent: setup complete ({} addresses, {} cached assets released)",
            self.manifest.len(),
            released
        );
    }

    /// Returns `true` if `address` is declared in the manifest.
    pub fn has_asset(&self, address: &str) -> bool {
        self.manifest.has_address(address)
    }

    /// Returns `true` if any declared address starts with `prefix`.
    pub fn has_directory(&self, prefix: &str) -> bool {
        self.manifest.has_directory_prefix(prefix)
    }

    /// Addresses are already relative to the resources root.
    pub fn global_path<'a>(&self, address: &'a str) -> &'a str {
        address
    }

    /// Loads the asset at `address` as `asset_type`.
    ///
    /// The first successful load of an `(address, type)` pair is cached and
    /// every later request returns the same handle without touching the
    /// backend. A failed load is reported as-is: nothing is cached, logged or
    /// retried.
    ///
    /// The backend receives the address without its extension. Only the last
    /// path segment is inspected, so `Sprites/icon.png` is requested as
    /// `Sprites/icon` while `v1.2/readme` is passed unchanged.
    ///
    /// # Errors
    /// - [`AssetError::NotInManifest`] if the address is not declared.
    /// - [`AssetError::LoadFailed`] if the backend returned no asset.
    pub fn load(&mut self, address: &str, asset_type: &AssetType) -> Result<B::Handle, AssetError> {
        if !self.manifest.has_address(address) {
            return Err(AssetError::NotInManifest {
                address: address.to_string(),
            });
        }

        self.fetch(address, asset_type)
            .ok_or_else(|| AssetError::LoadFailed {
                address: address.to_string(),
                asset_type: asset_type.clone(),
            })
    }

    /// Drops every cached asset loaded from `address`, whatever its type, and
    /// destroys it through the backend. Returns the number of assets released.
    ///
    /// The manifest is unaffected; a later load goes back to the backend.
    pub fn unload(&mut self, address: &str) -> usize {
        let removed = self.cache.remove_all_by_address(address, &mut self.backend);
        log::debug!("Unloaded {} cached asset(s) at '{}'", removed, address);
        removed
    }

    /// Returns the cached handle for `(address, asset_type)`, loading and
    /// caching it on a miss. Returns `None` if the backend has no such asset.
    pub(super) fn fetch(&mut self, address: &str, asset_type: &AssetType) -> Option<B::Handle> {
        if let Some(index) = self.cache.find(address, asset_type) {
            log::trace!("Cache hit for '{}' as {}", address, asset_type);
            return self.cache.get(index).cloned();
        }

        let path = address::strip_extension(address);
        log::debug!("Loading '{}' as {}", path, asset_type);
        let handle = self.backend.load(path, asset_type)?;
        self.backend.set_name(&handle, &address::normalize(address));
        self.cache.insert(address, asset_type.clone(), handle.clone());
        Some(handle)
    }

    /// The resource manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// The number of cached `(address, type)` entries.
    pub fn cached_count(&self) -> usize {
        self.cache.len()
    }

    /// The engine backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The engine backend, mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

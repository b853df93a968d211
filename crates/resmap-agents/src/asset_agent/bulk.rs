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

//! Directory-scoped bulk loading.

use super::AssetAgent;
use resmap_core::asset::{address, AssetKind, AssetType, RawAssetLoader, ResourceDestroyer};
use resmap_core::AssetError;

/// How deep a bulk load looks below its directory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchDepth {
    /// Only assets directly inside the prefix directory.
    #[default]
    TopLevel,
    /// The whole subtree under the prefix.
    Recursive,
}

impl From<bool> for SearchDepth {
    /// `true` means recursive.
    fn from(recursive: bool) -> Self {
        if recursive {
            SearchDepth::Recursive
        } else {
            SearchDepth::TopLevel
        }
    }
}

impl<B> AssetAgent<B>
where
    B: RawAssetLoader + ResourceDestroyer<B::Handle>,
{
    /// Loads every manifest asset under `prefix` as `asset_type`.
    ///
    /// Only the built-in [`AssetKind`]s can be bulk loaded; see
    /// [`load_all_kind`](Self::load_all_kind) for the selection rules.
    ///
    /// # Errors
    /// - [`AssetError::UnsupportedKind`] if `asset_type` is not a built-in kind.
    ///   Nothing is loaded.
    /// - [`AssetError::LoadFailed`] from a recursive load, see
    ///   [`load_all_kind`](Self::load_all_kind).
    pub fn load_all(
        &mut self,
        asset_type: &AssetType,
        prefix: &str,
        depth: SearchDepth,
    ) -> Result<Vec<B::Handle>, AssetError> {
        let kind =
            AssetKind::from_asset_type(asset_type).ok_or_else(|| AssetError::UnsupportedKind {
                asset_type: asset_type.clone(),
            })?;
        self.load_all_kind(kind, prefix, depth)
    }

    /// Loads every manifest asset of `kind` under `prefix`.
    ///
    /// An address is selected if it starts with `prefix` (a literal string
    /// prefix) and ends with one of the kind's extensions. With
    /// [`SearchDepth::TopLevel`] it must also sit directly inside the prefix
    /// directory. Each selected asset is served from the cache or loaded and
    /// cached, exactly like [`load`](Self::load). Results follow manifest
    /// order.
    ///
    /// The two depths treat a backend miss differently. A top-level load
    /// logs a warning, skips the asset and returns the rest. A recursive load
    /// stops at the first miss and returns [`AssetError::LoadFailed`]; assets
    /// loaded before the miss stay cached.
    pub fn load_all_kind(
        &mut self,
        kind: AssetKind,
        prefix: &str,
        depth: SearchDepth,
    ) -> Result<Vec<B::Handle>, AssetError> {
        let asset_type = kind.asset_type();
        let addresses: Vec<String> = self
            .manifest
            .iter_prefix(prefix)
            .map(|(address, _)| address)
            .filter(|address| kind.accepts(address))
            .filter(|address| {
                depth == SearchDepth::Recursive || address::is_direct_child(address, prefix)
            })
            .map(str::to_string)
            .collect();

        let mut handles = Vec::with_capacity(addresses.len());
        for address in &addresses {
            match self.fetch(address, &asset_type) {
                Some(handle) => handles.push(handle),
                None if depth == SearchDepth::TopLevel => {
                    log::warn!("Load failed: '{}' as {}", address, asset_type);
                }
                None => {
                    return Err(AssetError::LoadFailed {
                        address: address.clone(),
                        asset_type,
                    });
                }
            }
        }

        log::debug!(
            "Bulk loaded {} {} asset(s) under '{}' ({:?})",
            handles.len(),
            kind.type_name(),
            prefix,
            depth
        );
        Ok(handles)
    }
}

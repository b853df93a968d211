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

use super::AssetType;

/// Resolves a manifest type name into an [`AssetType`].
///
/// Used only while building the manifest. A name that cannot be resolved is
/// recorded as an absent type rather than rejected.
pub trait TypeResolver {
    /// Returns the type named `type_name`, or `None` if it is unknown.
    fn resolve(&self, type_name: &str) -> Option<AssetType>;
}

impl<F> TypeResolver for F
where
    F: Fn(&str) -> Option<AssetType>,
{
    fn resolve(&self, type_name: &str) -> Option<AssetType> {
        self(type_name)
    }
}

/// The engine-supplied loader that turns a path into a live asset.
///
/// The loader owns the loaded data; the handles it returns are references the
/// cache tracks and hands back on every subsequent request.
pub trait RawAssetLoader {
    /// An opaque reference to a loaded asset. Cloning must yield a handle to
    /// the same instance.
    type Handle: Clone;

    /// Loads the asset at `path` (an address without its extension) as
    /// `asset_type`. Returns `None` if nothing loadable exists there.
    fn load(&mut self, path: &str, asset_type: &AssetType) -> Option<Self::Handle>;

    /// Assigns the display name of a loaded asset.
    fn set_name(&mut self, handle: &Self::Handle, name: &str);
}

/// Releases the resources behind a handle once the cache drops it.
pub trait ResourceDestroyer<H> {
    /// Destroys the asset behind `handle`. Called once per removed cache entry.
    fn destroy(&mut self, handle: H);
}

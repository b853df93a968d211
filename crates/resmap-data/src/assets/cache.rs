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

//! The table of loaded asset handles, keyed by address and requested type.

use resmap_core::asset::{AssetType, ResourceDestroyer};

/// A cache of loaded assets keyed by `(address, requested type)`.
///
/// Entries are stored as three parallel arrays and looked up by a linear scan.
/// Working sets are small and every hit saves a load, so the scan is cheap
/// relative to what it memoizes.
///
/// The table tracks handles it did not create: removing an entry routes the
/// handle back to a [`ResourceDestroyer`] so the engine can release it.
///
/// At most one entry should exist per `(address, type)` pair. [`insert`]
/// does not enforce this; callers must [`find`] first.
///
/// [`insert`]: CacheTable::insert
/// [`find`]: CacheTable::find
#[derive(Debug, Clone)]
pub struct CacheTable<H> {
    addresses: Vec<String>,
    types: Vec<AssetType>,
    handles: Vec<H>,
}

impl<H> Default for CacheTable<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> CacheTable<H> {
    /// Creates a new, empty table.
    pub fn new() -> Self {
        Self {
            addresses: Vec::new(),
            types: Vec::new(),
            handles: Vec::new(),
        }
    }

    /// Returns the index of the first entry matching both `address` and
    /// `asset_type`, or `None`.
    pub fn find(&self, address: &str, asset_type: &AssetType) -> Option<usize> {
        self.addresses
            .iter()
            .zip(&self.types)
            .position(|(a, t)| a == address && t == asset_type)
    }

    /// The handle stored at `index`.
    pub fn get(&self, index: usize) -> Option<&H> {
        self.handles.get(index)
    }

    /// Appends an entry and returns its index.
    pub fn insert(&mut self, address: &str, asset_type: AssetType, handle: H) -> usize {
        self.addresses.push(address.to_string());
        self.types.push(asset_type);
        self.handles.push(handle);
        self.handles.len() - 1
    }

    /// Removes every entry stored under `address`, whatever its type, and
    /// destroys each removed handle. Returns the number of entries removed.
    pub fn remove_all_by_address<D>(&mut self, address: &str, destroyer: &mut D) -> usize
    where
        D: ResourceDestroyer<H> + ?Sized,
    {
        let mut removed = 0;
        // Walk backwards so removals never shift an index still to be visited.
        for index in (0..self.addresses.len()).rev() {
            if self.addresses[index] == address {
                self.addresses.remove(index);
                self.types.remove(index);
                let handle = self.handles.remove(index);
                destroyer.destroy(handle);
                removed += 1;
            }
        }
        removed
    }

    /// Removes and destroys every entry.
    pub fn clear<D>(&mut self, destroyer: &mut D)
    where
        D: ResourceDestroyer<H> + ?Sized,
    {
        self.addresses.clear();
        self.types.clear();
        for handle in self.handles.drain(..) {
            destroyer.destroy(handle);
        }
    }

    /// Iterates over every `(address, type, handle)` entry in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetType, &H)> + '_ {
        self.addresses
            .iter()
            .zip(&self.types)
            .zip(&self.handles)
            .map(|((address, asset_type), handle)| (address.as_str(), asset_type, handle))
    }

    /// Returns the number of cached entries.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

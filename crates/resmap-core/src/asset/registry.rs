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

//! A name-keyed registry of known asset types.

use super::{AssetKind, AssetType, TypeResolver};
use std::collections::HashMap;

/// The default [`TypeResolver`]: a map from type names to [`AssetType`]s.
///
/// A registry created with [`TypeRegistry::with_builtin_kinds`] knows every
/// [`AssetKind`]. Projects register their own types on top.
///
/// A fully-qualified name resolves if either the whole name or its last
/// `.`-separated segment is registered, so `Engine.Texture2D` in a manifest
/// resolves to the built-in `Texture2D` type.
#[derive(Debug, Default, Clone)]
pub struct TypeRegistry {
    types: HashMap<String, AssetType>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Creates a registry that knows every built-in [`AssetKind`].
    pub fn with_builtin_kinds() -> Self {
        let mut registry = Self::new();
        for kind in AssetKind::ALL {
            registry.register(kind.asset_type());
        }
        registry
    }

    /// Registers a type under its name. Re-registering a name replaces it.
    pub fn register(&mut self, asset_type: AssetType) {
        self.types.insert(asset_type.name().to_string(), asset_type);
    }

    /// Returns `true` if a type with exactly this name is registered.
    pub fn contains(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no types are registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl TypeResolver for TypeRegistry {
    fn resolve(&self, type_name: &str) -> Option<AssetType> {
        if let Some(asset_type) = self.types.get(type_name) {
            return Some(asset_type.clone());
        }
        let short = type_name.rsplit_once('.').map(|(_, short)| short)?;
        self.types.get(short).cloned()
    }
}

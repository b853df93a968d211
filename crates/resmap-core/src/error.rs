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

//! Defines the error type shared by the asset system.

use crate::asset::AssetType;
use thiserror::Error;

/// An error raised by an asset request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetError {
    /// The address is not declared in the resource manifest.
    #[error("Asset '{address}' is not declared in the resource manifest")]
    NotInManifest {
        /// The requested address.
        address: String,
    },
    /// The raw loader returned no asset for the address and type.
    #[error("Failed to load asset '{address}' as {asset_type}")]
    LoadFailed {
        /// The requested address.
        address: String,
        /// The requested type.
        asset_type: AssetType,
    },
    /// Bulk loading was requested for a type outside the supported kinds.
    #[error("Bulk loading is not supported for asset type {asset_type}")]
    UnsupportedKind {
        /// The requested type.
        asset_type: AssetType,
    },
}

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

//! Provides the foundational types and contracts for the resource asset system.
//!
//! This module defines the "common language" shared by the manifest, the cache
//! and the loading facade. It has no knowledge of how assets are stored on disk
//! or decoded; that work belongs to the engine, which plugs in through the
//! collaborator traits defined here.
//!
//! The key components are:
//! - [`AssetType`]: the identity of a requested or declared asset type.
//! - [`AssetKind`]: the closed set of kinds that support bulk loading, each
//!   carrying its accepted file extensions.
//! - [`TypeResolver`], [`RawAssetLoader`] and [`ResourceDestroyer`]: the
//!   engine-supplied collaborators.
//! - [`TypeRegistry`]: a ready-made resolver for the built-in kinds.
//! - The [`address`] helpers used to turn manifest addresses into load paths.

pub mod address;
mod asset_type;
mod kind;
mod loader;
mod registry;

pub use asset_type::*;
pub use kind::*;
pub use loader::*;
pub use registry::*;

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

//! # Resmap IO
//!
//! File-backed services around the resource manifest: runtime settings,
//! reading the manifest resource from disk, and regenerating it from the
//! project's `Resources` directories at build time.

#![warn(missing_docs)]

pub mod builder;
pub mod config;
pub mod error;
pub mod manifest_file;

pub use builder::{ManifestBuilder, ManifestEntry};
pub use config::AssetSettings;
pub use error::{ManifestIoError, SettingsError};
pub use manifest_file::{load_manifest, read_manifest_text};

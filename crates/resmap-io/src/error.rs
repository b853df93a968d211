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

//! Error types for manifest and settings I/O.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// An error raised while reading or writing the manifest resource.
#[derive(Debug, Error)]
pub enum ManifestIoError {
    /// The manifest file could not be read.
    #[error("Failed to read resource manifest '{}'", .path.display())]
    Read {
        /// The manifest path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The manifest file could not be written.
    #[error("Failed to write resource manifest '{}'", .path.display())]
    Write {
        /// The manifest path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// An error raised while loading or saving [`AssetSettings`](crate::AssetSettings).
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file could not be read or written.
    #[error("Failed to access settings file '{}'", .path.display())]
    Io {
        /// The settings path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The settings could not be (de)serialized.
    #[error("Invalid asset settings: {0}")]
    Serde(#[from] serde_json::Error),
}

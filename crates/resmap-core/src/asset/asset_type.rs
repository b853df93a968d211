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

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// The identity of an asset type, as named in the resource manifest.
///
/// Two `AssetType`s are the same type if and only if their fully-qualified
/// names are equal. The cache keys every entry on `(address, AssetType)`, so
/// the same file requested as two different types is tracked twice.
///
/// # Examples
///
/// ```
/// use resmap_core::asset::AssetType;
///
/// const LEVEL: AssetType = AssetType::from_static("Game.Level");
/// assert_eq!(LEVEL, AssetType::new("Game.Level"));
/// assert_eq!(LEVEL.short_name(), "Level");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetType(Cow<'static, str>);

impl AssetType {
    /// Creates an `AssetType` from a static name, usable in `const` contexts.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an `AssetType` from an owned or borrowed name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The fully-qualified name of this type.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The last `.`-separated segment of the name (`Engine.Texture2D` -> `Texture2D`).
    pub fn short_name(&self) -> &str {
        match self.0.rfind('.') {
            Some(index) => &self.0[index + 1..],
            None => &self.0,
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for AssetType {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

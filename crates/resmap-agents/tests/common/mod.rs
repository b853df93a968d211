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

#![allow(dead_code)]

use resmap_core::asset::{AssetType, RawAssetLoader, ResourceDestroyer};
use std::collections::{HashMap, HashSet};

/// A handle to a fake asset: just an id unique per successful load.
pub type FakeHandle = u32;

/// An in-memory backend that records every call the agent makes.
#[derive(Default)]
pub struct FakeBackend {
    next_id: FakeHandle,
    /// Every `(path, type)` the agent asked to load, in order.
    pub loads: Vec<(String, AssetType)>,
    /// Display names assigned per handle.
    pub names: HashMap<FakeHandle, String>,
    /// Handles destroyed, in order.
    pub destroyed: Vec<FakeHandle>,
    /// Extension-less paths that fail to load.
    pub missing: HashSet<String>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_missing(paths: &[&str]) -> Self {
        Self {
            missing: paths.iter().map(|p| p.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn load_count(&self) -> usize {
        self.loads.len()
    }
}

impl RawAssetLoader for FakeBackend {
    type Handle = FakeHandle;

    fn load(&mut self, path: &str, asset_type: &AssetType) -> Option<FakeHandle> {
        self.loads.push((path.to_string(), asset_type.clone()));
        if self.missing.contains(path) {
            return None;
        }
        self.next_id += 1;
        Some(self.next_id)
    }

    fn set_name(&mut self, handle: &FakeHandle, name: &str) {
        self.names.insert(*handle, name.to_string());
    }
}

impl ResourceDestroyer<FakeHandle> for FakeBackend {
    fn destroy(&mut self, handle: FakeHandle) {
        self.destroyed.push(handle);
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

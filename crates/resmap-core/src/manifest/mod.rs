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

//! The resource manifest: the in-memory index of every bundled asset.
//!
//! The manifest is generated at build time as a flat text resource with one
//! record per line, `"<type name>|<address>"`. At startup it is parsed once
//! into a [`Manifest`], which answers existence and directory queries without
//! touching the disk. It is immutable after it has been built.

use crate::asset::{AssetType, TypeResolver};
use std::collections::BTreeMap;
use std::ops::Bound;

/// The separator between the type name and the address of a record.
pub const RECORD_SEPARATOR: char = '|';

/// The runtime representation of the resource manifest.
///
/// Maps every declared address to the set of types declared for it. A type
/// name the resolver did not recognize is kept as `None`; such an entry still
/// counts for existence queries but never matches a requested type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Ordered by address so directory queries are range scans.
    entries: BTreeMap<String, Vec<Option<AssetType>>>,
}

impl Manifest {
    /// Creates an empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses manifest text into a `Manifest`.
    ///
    /// Accepts `\n`, `\r\n` and `\r` line endings and skips blank lines. A
    /// line without a `|` separator is skipped with a warning; fields after the
    /// address are ignored. An address declared on several lines accumulates
    /// every distinct type.
    pub fn parse<R>(raw_text: &str, resolver: &R) -> Self
    where
        R: TypeResolver + ?Sized,
    {
        let mut manifest = Self::new();

        for line in raw_text
            .split(|c: char| c == '\n' || c == '\r')
            .filter(|line| !line.is_empty())
        {
            let mut fields = line.split(RECORD_SEPARATOR);
            let (Some(type_name), Some(address)) = (fields.next(), fields.next()) else {
                log::warn!("Skipping malformed manifest record: {:?}", line);
                continue;
            };

            let asset_type = resolver.resolve(type_name);
            if asset_type.is_none() {
                log::debug!(
                    "Manifest type '{}' for '{}' could not be resolved",
                    type_name,
                    address
                );
            }
            manifest.insert(address, asset_type);
        }

        log::info!("Resource manifest built with {} addresses", manifest.len());
        manifest
    }

    /// Declares `asset_type` at `address`, creating the address if absent.
    pub fn insert(&mut self, address: &str, asset_type: Option<AssetType>) {
        let types = self.entries.entry(address.to_string()).or_default();
        if !types.contains(&asset_type) {
            types.push(asset_type);
        }
    }

    /// Returns `true` if `address` is declared. Exact string match.
    pub fn has_address(&self, address: &str) -> bool {
        self.entries.contains_key(address)
    }

    /// Returns `true` if any declared address starts with `prefix`.
    ///
    /// This is a literal string prefix test, not path-segment aware.
    pub fn has_directory_prefix(&self, prefix: &str) -> bool {
        self.iter_prefix(prefix).next().is_some()
    }

    /// The types declared at `address`, or `None` if it is not declared.
    pub fn types_at(&self, address: &str) -> Option<&[Option<AssetType>]> {
        self.entries.get(address).map(Vec::as_slice)
    }

    /// Iterates over every `(address, types)` entry.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Option<AssetType>])> + '_ {
        self.entries
            .iter()
            .map(|(address, types)| (address.as_str(), types.as_slice()))
    }

    /// Iterates over the entries whose address starts with `prefix`.
    pub fn iter_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a [Option<AssetType>])> + 'a {
        // Addresses sharing a prefix sort contiguously, starting at the prefix itself.
        self.entries
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(address, _)| address.starts_with(prefix))
            .map(|(address, types)| (address.as_str(), types.as_slice()))
    }

    /// Returns the number of declared addresses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no address is declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

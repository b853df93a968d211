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

//! Helpers for working with manifest addresses.
//!
//! An address is a root-relative file path as written in the manifest, e.g.
//! `Sprites/ui/back.png`. The raw loader expects the same path without its
//! extension, and loaded assets are named after the normalized address.

/// The path separator used by manifest addresses.
pub const SEPARATOR: char = '/';

/// Converts backslashes to forward slashes.
pub fn normalize(address: &str) -> String {
    address.replace('\\', "/")
}

/// Strips the file extension (the text from the last `.` of the final path
/// segment) from `address`.
///
/// An address whose final segment has no `.` is returned unchanged.
pub fn strip_extension(address: &str) -> &str {
    let segment_start = address
        .rfind(|c: char| c == '/' || c == '\\')
        .map_or(0, |index| index + 1);
    match address[segment_start..].rfind('.') {
        Some(dot) => &address[..segment_start + dot],
        None => address,
    }
}

/// Returns `true` if `address` starts with `prefix` and lives directly inside
/// it rather than in a nested subdirectory.
///
/// `prefix` is matched as a literal string, not path-segment aware. After it,
/// at most one separator is skipped; the remainder must then contain no
/// further separator.
pub fn is_direct_child(address: &str, prefix: &str) -> bool {
    let Some(rest) = address.strip_prefix(prefix) else {
        return false;
    };
    let rest = rest.strip_prefix(SEPARATOR).unwrap_or(rest);
    !rest.is_empty() && !rest.contains(SEPARATOR)
}

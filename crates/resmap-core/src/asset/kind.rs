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

use super::AssetType;
use serde::{Deserialize, Serialize};

const IMAGE_EXTENSIONS: &[&str] = &[".png", ".jpg"];
const AUDIO_EXTENSIONS: &[&str] = &[".wav", ".mp3", ".ogg"];
const TEXT_EXTENSIONS: &[&str] = &[".txt", ".json", ".ini"];
const FONT_EXTENSIONS: &[&str] = &[".otf", ".ttf"];
const RICH_TEXT_FONT_EXTENSIONS: &[&str] = &[".asset"];

/// The closed set of asset kinds that can be bulk loaded from a directory.
///
/// Each kind carries the manifest type name it answers to and the file
/// extensions a manifest address must end with to be picked up by a bulk
/// load of that kind. Single loads are not limited to these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// An image decoded as a 2D texture.
    Texture2D,
    /// An image decoded as a generic texture.
    Texture,
    /// An image decoded as a sprite.
    Sprite,
    /// A decoded audio clip.
    AudioClip,
    /// Plain text or data (`.txt`, `.json`, `.ini`).
    TextAsset,
    /// A legacy font.
    Font,
    /// A pre-baked rich-text font asset.
    RichTextFont,
}

/// One row of the kind table.
struct KindDescriptor {
    type_name: &'static str,
    extensions: &'static [&'static str],
}

/// Indexed by `AssetKind as usize`.
const KIND_TABLE: [KindDescriptor; 7] = [
    KindDescriptor {
        type_name: "Texture2D",
        extensions: IMAGE_EXTENSIONS,
    },
    KindDescriptor {
        type_name: "Texture",
        extensions: IMAGE_EXTENSIONS,
    },
    KindDescriptor {
        type_name: "Sprite",
        extensions: IMAGE_EXTENSIONS,
    },
    KindDescriptor {
        type_name: "AudioClip",
        extensions: AUDIO_EXTENSIONS,
    },
    KindDescriptor {
        type_name: "TextAsset",
        extensions: TEXT_EXTENSIONS,
    },
    KindDescriptor {
        type_name: "Font",
        extensions: FONT_EXTENSIONS,
    },
    KindDescriptor {
        type_name: "RichTextFont",
        extensions: RICH_TEXT_FONT_EXTENSIONS,
    },
];

impl AssetKind {
    /// Every kind, in table order.
    pub const ALL: [AssetKind; 7] = [
        AssetKind::Texture2D,
        AssetKind::Texture,
        AssetKind::Sprite,
        AssetKind::AudioClip,
        AssetKind::TextAsset,
        AssetKind::Font,
        AssetKind::RichTextFont,
    ];

    fn descriptor(self) -> &'static KindDescriptor {
        &KIND_TABLE[self as usize]
    }

    /// The manifest type name of this kind.
    pub fn type_name(self) -> &'static str {
        self.descriptor().type_name
    }

    /// The [`AssetType`] requested from the raw loader for this kind.
    pub fn asset_type(self) -> AssetType {
        AssetType::from_static(self.type_name())
    }

    /// The file extensions (including the leading dot) accepted by this kind.
    pub fn extensions(self) -> &'static [&'static str] {
        self.descriptor().extensions
    }

    /// Returns `true` if `address` ends with one of this kind's extensions.
    ///
    /// The comparison is a literal, case-sensitive suffix test.
    pub fn accepts(self, address: &str) -> bool {
        self.extensions().iter().any(|ext| address.ends_with(ext))
    }

    /// Maps a requested asset type onto a bulk-loadable kind.
    ///
    /// Returns `None` for types outside the closed set, which bulk loading
    /// reports as unsupported.
    pub fn from_asset_type(asset_type: &AssetType) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.type_name() == asset_type.name())
    }

    /// The kind a file is imported as by default, judged by its extension
    /// (without the leading dot).
    ///
    /// Images default to [`AssetKind::Texture2D`]; the texture and sprite
    /// views of the same file are only reachable by requesting them.
    pub fn main_kind_for_extension(extension: &str) -> Option<Self> {
        match extension {
            "png" | "jpg" => Some(AssetKind::Texture2D),
            "wav" | "mp3" | "ogg" => Some(AssetKind::AudioClip),
            "txt" | "json" | "ini" => Some(AssetKind::TextAsset),
            "otf" | "ttf" => Some(AssetKind::Font),
            "asset" => Some(AssetKind::RichTextFont),
            _ => None,
        }
    }
}

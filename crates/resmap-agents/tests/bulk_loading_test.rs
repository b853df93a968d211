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

mod common;

use common::{init_logging, FakeBackend, FakeHandle};
use resmap_agents::{AssetAgent, SearchDepth};
use resmap_core::asset::{AssetKind, AssetType, TypeRegistry};
use resmap_core::AssetError;

fn agent_from(manifest: &str, backend: FakeBackend) -> AssetAgent<FakeBackend> {
    init_logging();
    AssetAgent::from_manifest_text(manifest, &TypeRegistry::with_builtin_kinds(), backend)
}

/// The display names of `handles`, sorted.
fn names(agent: &AssetAgent<FakeBackend>, handles: &[FakeHandle]) -> Vec<String> {
    let mut names: Vec<String> = handles
        .iter()
        .map(|handle| agent.backend().names[handle].clone())
        .collect();
    names.sort();
    names
}

#[test]
fn test_top_level_and_recursive_sprites() {
    let mut agent = agent_from(
        "Texture2D|Sprites/icon.png\nTexture2D|Sprites/ui/back.png",
        FakeBackend::new(),
    );
    let texture = AssetKind::Texture2D.asset_type();

    let top = agent
        .load_all(&texture, "Sprites", SearchDepth::TopLevel)
        .unwrap();
    assert_eq!(names(&agent, &top), vec!["Sprites/icon.png"]);

    let all = agent
        .load_all(&texture, "Sprites", SearchDepth::Recursive)
        .unwrap();
    assert_eq!(
        names(&agent, &all),
        vec!["Sprites/icon.png", "Sprites/ui/back.png"]
    );

    // icon.png was already cached by the first call.
    assert_eq!(agent.backend().load_count(), 2);
    assert!(all.contains(&top[0]));
}

#[test]
fn test_top_level_never_returns_nested_assets() {
    let mut agent = agent_from(
        "Texture2D|Ui/a.png\n\
         Texture2D|Ui/b.jpg\n\
         Texture2D|Ui/icons/c.png\n\
         Texture2D|Ui/icons/deep/d.png\n\
         Texture2D|Uix/e.png\n\
         Texture2D|Other/f.png",
        FakeBackend::new(),
    );

    let handles = agent
        .load_all_kind(AssetKind::Sprite, "Ui", SearchDepth::TopLevel)
        .unwrap();
    let found = names(&agent, &handles);
    assert_eq!(found, vec!["Ui/a.png", "Ui/b.jpg"]);
    for name in &found {
        let rest = name.strip_prefix("Ui/").unwrap();
        assert!(!rest.contains('/'));
    }

    let recursive = agent
        .load_all_kind(AssetKind::Sprite, "Ui/", SearchDepth::Recursive)
        .unwrap();
    assert_eq!(
        names(&agent, &recursive),
        vec![
            "Ui/a.png",
            "Ui/b.jpg",
            "Ui/icons/c.png",
            "Ui/icons/deep/d.png"
        ]
    );
}

#[test]
fn test_extension_filter_per_kind() {
    let mut agent = agent_from(
        "AudioClip|Sfx/hit.wav\n\
         AudioClip|Sfx/music.mp3\n\
         AudioClip|Sfx/wind.ogg\n\
         TextAsset|Sfx/credits.txt\n\
         Texture2D|Sfx/cover.png",
        FakeBackend::new(),
    );

    let clips = agent
        .load_all_kind(AssetKind::AudioClip, "Sfx", SearchDepth::TopLevel)
        .unwrap();
    assert_eq!(
        names(&agent, &clips),
        vec!["Sfx/hit.wav", "Sfx/music.mp3", "Sfx/wind.ogg"]
    );

    let texts = agent
        .load_all_kind(AssetKind::TextAsset, "Sfx", SearchDepth::TopLevel)
        .unwrap();
    assert_eq!(names(&agent, &texts), vec!["Sfx/credits.txt"]);

    assert!(agent
        .load_all_kind(AssetKind::RichTextFont, "Sfx", SearchDepth::Recursive)
        .unwrap()
        .is_empty());
}

#[test]
fn test_font_and_data_extensions() {
    let mut agent = agent_from(
        "Font|F/a.otf\n\
         Font|F/e.ttf\n\
         RichTextFont|F/b.asset\n\
         TextAsset|F/c.ini\n\
         TextAsset|F/d.json",
        FakeBackend::new(),
    );

    let fonts = agent
        .load_all_kind(AssetKind::Font, "F", SearchDepth::TopLevel)
        .unwrap();
    assert_eq!(names(&agent, &fonts), vec!["F/a.otf", "F/e.ttf"]);

    let rich = agent
        .load_all_kind(AssetKind::RichTextFont, "F", SearchDepth::TopLevel)
        .unwrap();
    assert_eq!(names(&agent, &rich), vec!["F/b.asset"]);

    let data = agent
        .load_all_kind(AssetKind::TextAsset, "F", SearchDepth::Recursive)
        .unwrap();
    assert_eq!(names(&agent, &data), vec!["F/c.ini", "F/d.json"]);

    assert_eq!(agent.backend().load_count(), 5);
}

#[test]
fn test_bulk_load_requests_kind_type_without_extension() {
    let mut agent = agent_from("Texture2D|Fonts/main.ttf", FakeBackend::new());

    agent
        .load_all_kind(AssetKind::Font, "Fonts", SearchDepth::TopLevel)
        .unwrap();

    assert_eq!(
        agent.backend().loads,
        vec![("Fonts/main".to_string(), AssetKind::Font.asset_type())]
    );
}

#[test]
fn test_unsupported_kind_is_fatal() {
    let mut agent = agent_from("Texture2D|Sprites/icon.png", FakeBackend::new());
    let shader = AssetType::new("Engine.Shader");

    let err = agent
        .load_all(&shader, "Sprites", SearchDepth::Recursive)
        .unwrap_err();

    assert_eq!(err, AssetError::UnsupportedKind { asset_type: shader });
    assert_eq!(agent.backend().load_count(), 0);
}

#[test]
fn test_top_level_miss_is_skipped() {
    let mut agent = agent_from(
        "Texture2D|Sprites/a.png\nTexture2D|Sprites/b.png\nTexture2D|Sprites/c.png",
        FakeBackend::with_missing(&["Sprites/b"]),
    );

    let handles = agent
        .load_all_kind(AssetKind::Texture2D, "Sprites", SearchDepth::TopLevel)
        .unwrap();

    assert_eq!(names(&agent, &handles), vec!["Sprites/a.png", "Sprites/c.png"]);
    assert_eq!(agent.backend().load_count(), 3);
    assert_eq!(agent.cached_count(), 2);
}

#[test]
fn test_recursive_miss_aborts() {
    let mut agent = agent_from(
        "Texture2D|Sprites/a.png\nTexture2D|Sprites/b/b.png\nTexture2D|Sprites/c.png",
        FakeBackend::with_missing(&["Sprites/b/b"]),
    );

    let err = agent
        .load_all_kind(AssetKind::Texture2D, "Sprites", SearchDepth::Recursive)
        .unwrap_err();

    assert_eq!(
        err,
        AssetError::LoadFailed {
            address: "Sprites/b/b.png".to_string(),
            asset_type: AssetKind::Texture2D.asset_type(),
        }
    );
    // a.png precedes the failure in manifest order and stays cached.
    assert_eq!(agent.cached_count(), 1);
    assert_eq!(agent.backend().load_count(), 2);
}

#[test]
fn test_bulk_and_single_loads_share_the_cache() {
    let mut agent = agent_from("Sprite|Ui/button.png", FakeBackend::new());
    let sprite = AssetKind::Sprite.asset_type();

    let single = agent.load("Ui/button.png", &sprite).unwrap();
    let bulk = agent
        .load_all(&sprite, "Ui", SearchDepth::TopLevel)
        .unwrap();

    assert_eq!(bulk, vec![single]);
    assert_eq!(agent.backend().load_count(), 1);

    assert_eq!(agent.unload("Ui/button.png"), 1);
    agent.load_all(&sprite, "Ui", SearchDepth::TopLevel).unwrap();
    assert_eq!(agent.backend().load_count(), 2);
}

#[test]
fn test_directory_queries() {
    let agent = agent_from(
        "Texture2D|Sprites/ui/back.png\nFont|Fonts/main.ttf",
        FakeBackend::new(),
    );

    assert!(agent.has_directory("Sprites"));
    assert!(agent.has_directory("Sprites/ui"));
    assert!(agent.has_directory("Fo"));
    assert!(!agent.has_directory("Audio"));
}

#[test]
fn test_literal_prefix_top_level() {
    let mut agent = agent_from(
        "Texture2D|Spr.png\nTexture2D|Sprites/icon.png",
        FakeBackend::new(),
    );

    let handles = agent
        .load_all_kind(AssetKind::Texture2D, "Spr", SearchDepth::TopLevel)
        .unwrap();
    assert_eq!(names(&agent, &handles), vec!["Spr.png"]);
}

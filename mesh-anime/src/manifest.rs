//! Plugin manifest advertised to the orchestrator

use mesh_common::api::{PluginManifest, SchemaField};
use serde_json::Map;
use std::collections::BTreeMap;
use std::time::Duration;

use crate::detection::verdict::{ANIME_KEY, JAPANESE_TITLE_KEY, ROMAJI_TITLE_KEY};

pub const PLUGIN_ID: &str = "anime-detector";
pub const PLUGIN_NAME: &str = "Anime Detector";

/// Manifest with the configured processing deadline
pub fn manifest(timeout: Duration) -> PluginManifest {
    let mut schema = BTreeMap::new();
    schema.insert(ANIME_KEY.to_string(), field("Is Anime", "boolean", true));
    schema.insert(JAPANESE_TITLE_KEY.to_string(), field("Japanese Title", "string", false));
    schema.insert(ROMAJI_TITLE_KEY.to_string(), field("Romaji Title", "string", false));

    PluginManifest {
        id: PLUGIN_ID.to_string(),
        name: PLUGIN_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Detects anime content based on keywords, Japanese text, and audio tracks"
            .to_string(),
        author: "MetaMesh".to_string(),
        dependencies: vec![
            "file-info".to_string(),
            "ffmpeg".to_string(),
            "filename-parser".to_string(),
        ],
        priority: 35,
        color: "#E91E63".to_string(),
        default_queue: "fast".to_string(),
        timeout: timeout.as_millis() as u64,
        schema,
        config: Map::new(),
    }
}

fn field(label: &str, field_type: &str, readonly: bool) -> SchemaField {
    SchemaField {
        label: label.to_string(),
        field_type: field_type.to_string(),
        readonly,
    }
}

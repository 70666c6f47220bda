//! Verdict combination and the resulting property writes

use serde::Serialize;
use std::collections::BTreeMap;

use super::script::TitleScript;
use super::signals::{ClassificationInput, Signals};

/// Boolean "is anime" property
pub const ANIME_KEY: &str = "anime";
/// Title in kana
pub const JAPANESE_TITLE_KEY: &str = "titles/jpn";
/// Title in any other Japanese script (`jpl` is the mesh's code for
/// romanized Japanese)
pub const ROMAJI_TITLE_KEY: &str = "titles/jpl";
/// Multi-value genre property
pub const GENRES_KEY: &str = "genres";
pub const ANIME_GENRE: &str = "Anime";

/// Original title together with the script it was detected in
///
/// One value instead of two optional fields: a verdict carries at most one
/// localized title and therefore writes at most one title key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedTitle {
    pub script: TitleScript,
    pub title: String,
}

impl LocalizedTitle {
    pub fn property_key(&self) -> &'static str {
        match self.script {
            TitleScript::Kana => JAPANESE_TITLE_KEY,
            TitleScript::OtherJapanese => ROMAJI_TITLE_KEY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationVerdict {
    pub is_anime: bool,
    pub is_japanese: bool,
    pub localized_title: Option<LocalizedTitle>,
}

impl ClassificationVerdict {
    /// Fold signals with OR semantics
    pub fn combine(input: &ClassificationInput, signals: &Signals) -> Self {
        let is_anime = signals.path_marker || signals.keyword_match();
        let is_japanese = is_anime
            || signals.title_script.is_some()
            || signals.audio_japanese
            || signals.video_japanese;

        let localized_title = match signals.title_script {
            Some(script) if is_japanese && !input.original_title.is_empty() => {
                Some(LocalizedTitle {
                    script,
                    title: input.original_title.clone(),
                })
            }
            _ => None,
        };

        Self {
            is_anime,
            is_japanese,
            localized_title,
        }
    }

    pub fn detected_title_script(&self) -> Option<TitleScript> {
        self.localized_title.as_ref().map(|t| t.script)
    }

    /// Anything Japanese is treated as anime
    pub fn should_write(&self) -> bool {
        self.is_anime || self.is_japanese
    }

    /// Store operations this verdict requires, in issue order
    pub fn write_batch(&self) -> PropertyWriteBatch {
        let mut ops = Vec::new();

        if self.should_write() {
            ops.push(PropertyOp::Set {
                key: ANIME_KEY,
                value: "true".to_string(),
            });
            if let Some(title) = &self.localized_title {
                ops.push(PropertyOp::Set {
                    key: title.property_key(),
                    value: title.title.clone(),
                });
            }
            ops.push(PropertyOp::AddToSet {
                key: GENRES_KEY,
                value: ANIME_GENRE.to_string(),
            });
        }

        PropertyWriteBatch { ops }
    }
}

/// Single store operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum PropertyOp {
    Set { key: &'static str, value: String },
    AddToSet { key: &'static str, value: String },
}

/// Ordered store operations for one verdict
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyWriteBatch {
    ops: Vec<PropertyOp>,
}

impl PropertyWriteBatch {
    pub fn ops(&self) -> &[PropertyOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// All `Set` operations as one map, for a merged write
    pub fn set_properties(&self) -> BTreeMap<String, String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                PropertyOp::Set { key, value } => Some((key.to_string(), value.clone())),
                PropertyOp::AddToSet { .. } => None,
            })
            .collect()
    }

    /// All `AddToSet` operations, in order
    pub fn set_additions(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.ops.iter().filter_map(|op| match op {
            PropertyOp::AddToSet { key, value } => Some((*key, value.as_str())),
            PropertyOp::Set { .. } => None,
        })
    }
}

//! Classification input and signal extraction
//!
//! Earlier plugins leave their findings in a flat metadata map. Stream
//! languages arrive index-keyed (`fileinfo/streamdetails/audio/0/language`,
//! `.../1/language`, ...); they are turned into ordered sequences here so the
//! rest of the detector never deals with key probing.

use serde::Serialize;
use serde_json::{Map, Value};

use super::keywords::KeywordSet;
use super::script::{classify_title, TitleScript};

/// Maximum number of streams inspected per stream kind
pub const STREAM_SCAN_CAP: usize = 20;

/// Stream language codes treated as Japanese (ISO 639-2 and ISO 639-1)
pub const JAPANESE_LANGUAGE_CODES: &[&str] = &["jpn", "ja"];

const FILE_TYPE_KEY: &str = "fileType";
const FILE_NAME_KEY: &str = "fileName";
const ORIGINAL_TITLE_KEY: &str = "originalTitle";

/// Coarse file type assigned by the file-info plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Video,
    Audio,
    Document,
    Image,
    Other,
}

impl FileType {
    /// Unknown names map to `Other`
    pub fn from_name(name: &str) -> Self {
        match name {
            "video" => FileType::Video,
            "audio" => FileType::Audio,
            "document" => FileType::Document,
            "image" => FileType::Image,
            _ => FileType::Other,
        }
    }
}

/// Everything the detector looks at for one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationInput {
    pub file_path: String,
    pub file_name: String,
    pub file_type: FileType,
    /// Empty when unknown
    pub original_title: String,
    pub audio_track_languages: Vec<String>,
    pub video_track_languages: Vec<String>,
}

impl ClassificationInput {
    /// Adapt the request's flat `existingMeta` map
    ///
    /// Missing `fileType` maps to `Other`; missing names and titles become
    /// empty strings. Non-string values are ignored.
    pub fn from_existing_meta(file_path: &str, meta: Option<&Map<String, Value>>) -> Self {
        let text = |key: &str| -> String {
            meta.and_then(|m| m.get(key))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        let file_type = meta
            .and_then(|m| m.get(FILE_TYPE_KEY))
            .and_then(Value::as_str)
            .map(FileType::from_name)
            .unwrap_or(FileType::Other);

        Self {
            file_path: file_path.to_string(),
            file_name: text(FILE_NAME_KEY),
            file_type,
            original_title: text(ORIGINAL_TITLE_KEY),
            audio_track_languages: meta
                .map(|m| stream_languages(m, "audio"))
                .unwrap_or_default(),
            video_track_languages: meta
                .map(|m| stream_languages(m, "video"))
                .unwrap_or_default(),
        }
    }

    pub fn is_video(&self) -> bool {
        self.file_type == FileType::Video
    }
}

/// Collect `fileinfo/streamdetails/{kind}/{i}/language` in index order
///
/// Stops at the first missing or empty entry, or after `STREAM_SCAN_CAP`.
fn stream_languages(meta: &Map<String, Value>, kind: &str) -> Vec<String> {
    (0..STREAM_SCAN_CAP)
        .map(|i| {
            meta.get(&format!("fileinfo/streamdetails/{}/{}/language", kind, i))
                .and_then(Value::as_str)
                .unwrap_or_default()
        })
        .take_while(|language| !language.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn is_japanese_language_code(code: &str) -> bool {
    JAPANESE_LANGUAGE_CODES.contains(&code)
}

/// Scan at most `STREAM_SCAN_CAP` languages, stopping at the first empty
/// entry, for a Japanese code
pub fn has_japanese_track(languages: &[String]) -> bool {
    languages
        .iter()
        .take(STREAM_SCAN_CAP)
        .take_while(|language| !language.is_empty())
        .any(|language| is_japanese_language_code(language))
}

/// Raw per-category findings, before combination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Signals {
    /// File path contains "anime" (any case)
    pub path_marker: bool,
    /// First filename keyword found
    pub keyword: Option<String>,
    /// Script of a non-empty original title
    pub title_script: Option<TitleScript>,
    pub audio_japanese: bool,
    pub video_japanese: bool,
}

impl Signals {
    /// Evaluate every signal category
    ///
    /// No category is skipped because an earlier one already fired.
    pub fn extract(input: &ClassificationInput, keywords: &KeywordSet) -> Self {
        Self {
            path_marker: input.file_path.to_lowercase().contains("anime"),
            keyword: keywords.first_match(&input.file_name).map(str::to_string),
            title_script: classify_title(&input.original_title),
            audio_japanese: has_japanese_track(&input.audio_track_languages),
            video_japanese: has_japanese_track(&input.video_track_languages),
        }
    }

    pub fn keyword_match(&self) -> bool {
        self.keyword.is_some()
    }

    pub fn any(&self) -> bool {
        self.path_marker
            || self.keyword_match()
            || self.title_script.is_some()
            || self.audio_japanese
            || self.video_japanese
    }
}

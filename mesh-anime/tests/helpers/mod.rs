//! Test Helper Utilities
//!
//! Shared utilities for testing mesh-anime

pub mod fake_store;

// Re-export commonly used items
pub use fake_store::{RecordingNotifier, RecordingStore, StoreCall};

use mesh_anime::detection::{ClassificationInput, FileType};
use mesh_anime::pipeline::Task;

/// Video task with no stream languages
pub fn video_task(file_path: &str, file_name: &str, original_title: &str) -> Task {
    task_of_type(FileType::Video, file_path, file_name, original_title)
}

pub fn task_of_type(
    file_type: FileType,
    file_path: &str,
    file_name: &str,
    original_title: &str,
) -> Task {
    Task {
        task_id: "task-1".to_string(),
        cid: "cid-1".to_string(),
        input: ClassificationInput {
            file_path: file_path.to_string(),
            file_name: file_name.to_string(),
            file_type,
            original_title: original_title.to_string(),
            audio_track_languages: Vec::new(),
            video_track_languages: Vec::new(),
        },
    }
}

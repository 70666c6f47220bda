//! Plugin protocol request/response types
//!
//! Wire shapes exchanged between the mesh orchestrator and a plugin service.
//! All JSON fields are camelCase.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::time::Duration;

// ========================================
// Task Lifecycle
// ========================================

/// Terminal or synchronous status of a processing task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Accepted,
    Completed,
    Failed,
    Skipped,
    Rejected,
}

/// POST /process request body
///
/// Required fields default to empty strings so that a missing field is
/// reported as a rejection instead of a deserialization failure.
///
/// # Examples
///
/// ```
/// use mesh_common::api::types::ProcessRequest;
///
/// let request: ProcessRequest = serde_json::from_str(
///     r#"{"taskId":"t1","cid":"c1","filePath":"/a.mkv",
///         "callbackUrl":"http://cb","metaCoreUrl":"http://core"}"#,
/// ).unwrap();
/// assert!(request.missing_required_fields().is_empty());
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessRequest {
    #[serde(default)]
    pub task_id: String,
    /// Content identifier of the item in meta-core
    #[serde(default)]
    pub cid: String,
    #[serde(default)]
    pub file_path: String,
    #[serde(default)]
    pub callback_url: String,
    #[serde(default)]
    pub meta_core_url: String,
    /// Flat metadata already known for the file (written by earlier plugins)
    #[serde(default)]
    pub existing_meta: Option<Map<String, Value>>,
}

impl ProcessRequest {
    /// Names of required fields that are absent or empty
    pub fn missing_required_fields(&self) -> Vec<&'static str> {
        [
            ("taskId", &self.task_id),
            ("cid", &self.cid),
            ("filePath", &self.file_path),
            ("callbackUrl", &self.callback_url),
            ("metaCoreUrl", &self.meta_core_url),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}

/// POST /process synchronous response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResponse {
    pub fn accepted() -> Self {
        Self {
            status: TaskStatus::Accepted,
            error: None,
        }
    }

    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            status: TaskStatus::Rejected,
            error: Some(error.into()),
        }
    }
}

/// Payload POSTed to the caller's callback URL once a task ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallbackPayload {
    pub task_id: String,
    pub status: TaskStatus,
    /// Processing time in milliseconds
    #[serde(rename = "duration")]
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl CallbackPayload {
    pub fn completed(task_id: impl Into<String>, elapsed: Duration) -> Self {
        Self::new(task_id, TaskStatus::Completed, elapsed)
    }

    pub fn skipped(
        task_id: impl Into<String>,
        elapsed: Duration,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::new(task_id, TaskStatus::Skipped, elapsed)
        }
    }

    pub fn failed(task_id: impl Into<String>, elapsed: Duration, error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::new(task_id, TaskStatus::Failed, elapsed)
        }
    }

    fn new(task_id: impl Into<String>, status: TaskStatus, elapsed: Duration) -> Self {
        Self {
            task_id: task_id.into(),
            status,
            duration_ms: elapsed.as_millis() as u64,
            error: None,
            reason: None,
        }
    }
}

// ========================================
// Service Endpoints
// ========================================

/// GET /health response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "healthy" while the process answers
    pub status: String,
    /// True once the listener is bound and until shutdown begins
    pub ready: bool,
    pub version: String,
}

/// POST /configure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigureResponse {
    pub status: String,
}

/// Schema entry describing one property a plugin writes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub readonly: bool,
}

/// GET /manifest response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginManifest {
    pub id: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    /// Plugins whose output must exist before this one runs
    pub dependencies: Vec<String>,
    pub priority: u32,
    pub color: String,
    pub default_queue: String,
    /// Processing deadline in milliseconds
    pub timeout: u64,
    pub schema: BTreeMap<String, SchemaField>,
    pub config: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_reported_in_order() {
        let request: ProcessRequest =
            serde_json::from_value(json!({ "taskId": "t1", "filePath": "  " })).unwrap();
        assert_eq!(
            request.missing_required_fields(),
            vec!["cid", "filePath", "callbackUrl", "metaCoreUrl"]
        );
    }

    #[test]
    fn test_callback_payload_wire_shape() {
        let payload = CallbackPayload::skipped("t1", Duration::from_millis(12), "Not a video file");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            json!({
                "taskId": "t1",
                "status": "skipped",
                "duration": 12,
                "reason": "Not a video file"
            })
        );
    }

    #[test]
    fn test_failed_payload_carries_error_only() {
        let payload = CallbackPayload::failed("t2", Duration::ZERO, "boom");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["status"], "failed");
        assert_eq!(value["error"], "boom");
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn test_rejected_response() {
        let value =
            serde_json::to_value(ProcessResponse::rejected("Missing required fields")).unwrap();
        assert_eq!(value, json!({ "status": "rejected", "error": "Missing required fields" }));
    }

    #[test]
    fn test_schema_field_omits_false_readonly() {
        let field = SchemaField {
            label: "Japanese Title".to_string(),
            field_type: "string".to_string(),
            readonly: false,
        };
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({ "label": "Japanese Title", "type": "string" })
        );
    }
}

//! Task records as stored and as received over HTTP.

use serde::{Deserialize, Serialize};

/// A stored task. The `id` is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Incoming task fields for create and replace requests. Any `id` a client
/// puts in the body is dropped here; the path parameter (or the store's
/// assignment) is authoritative. Missing fields fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_ignores_client_supplied_id() {
        let payload: TaskPayload = serde_json::from_str(
            r#"{"id":99,"title":"Buy milk","description":"","completed":false}"#,
        )
        .expect("payload should parse");

        assert_eq!(payload.title, "Buy milk");
        assert!(!payload.completed);
    }

    #[test]
    fn payload_fills_missing_fields_with_defaults() {
        let payload: TaskPayload =
            serde_json::from_str(r#"{"title":"Water plants"}"#).expect("payload should parse");

        assert_eq!(payload.title, "Water plants");
        assert_eq!(payload.description, "");
        assert!(!payload.completed);
    }

    #[test]
    fn stored_task_serializes_with_id() {
        let task = Task {
            id: 3,
            title: "Ship release".to_string(),
            description: "v0.1.0".to_string(),
            completed: true,
        };

        let json = serde_json::to_value(&task).expect("task should serialize");
        assert_eq!(json["id"], 3);
        assert_eq!(json["completed"], true);
    }
}

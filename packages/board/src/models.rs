//! # Domain models for the notice board
//!
//! Defines the read-model records exchanged with the backend and the form
//! payloads sent back to it. These types are `Serialize + Deserialize` so
//! they can cross the HTTP boundary as JSON.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Notice`] | A single notice as reported by the server: title, body, author, timestamps, the server-decided `is_owner` flag, and a monotonic `version` counter used for stale-write rejection. |
//! | [`NoticeId`] | The opaque notice identifier. Backends send either an integer or a string; both forms compare and display the same way. |
//! | [`NoticeDraft`] | Field values of the creation form, submitted as a multipart body. |
//! | [`NoticeEdit`] | The JSON `{title, content}` body of an edit request. |

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque notice identifier, stable for a notice's lifetime.
///
/// The wire format is either a JSON number or a JSON string; `Display`
/// renders both identically so `notice-{id}` element ids stay stable.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoticeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NoticeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoticeId::Int(n) => write!(f, "{n}"),
            NoticeId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A notice as reported by the server.
///
/// Mutation replies may omit `username` or `created_at`; merging in
/// [`crate::BoardState::apply_update`] keeps the known values so the card's
/// meta line preserves the original author.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub content: String,
    /// Display name of the creator, immutable after creation.
    #[serde(default)]
    pub username: String,
    /// ISO-8601 creation timestamp, kept as the wire string.
    #[serde(default)]
    pub created_at: String,
    /// ISO-8601 last-edit timestamp; absent until the first edit.
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Whether the current session may edit or delete this notice.
    #[serde(default)]
    pub is_owner: bool,
    /// Monotonic per-notice write counter; 0 when the backend sends none.
    #[serde(default)]
    pub version: u64,
}

/// Field values of the creation form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
}

/// JSON body of an edit request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NoticeEdit {
    pub title: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notice_id_accepts_integer_and_string() {
        let int: NoticeId = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(int, NoticeId::Int(7));
        assert_eq!(int.to_string(), "7");

        let text: NoticeId = serde_json::from_value(json!("a1b2")).unwrap();
        assert_eq!(text, NoticeId::Text("a1b2".to_string()));
        assert_eq!(text.to_string(), "a1b2");
    }

    #[test]
    fn notice_parses_with_optional_fields_missing() {
        let notice: Notice = serde_json::from_value(json!({
            "id": 7,
            "title": "Lunch",
            "content": "Pizza at noon"
        }))
        .unwrap();

        assert_eq!(notice.id, NoticeId::Int(7));
        assert_eq!(notice.username, "");
        assert_eq!(notice.created_at, "");
        assert!(notice.updated_at.is_none());
        assert!(!notice.is_owner);
        assert_eq!(notice.version, 0);
    }

    #[test]
    fn notice_parses_full_record() {
        let notice: Notice = serde_json::from_value(json!({
            "id": "n-9",
            "title": "Lunch",
            "content": "Pizza at noon",
            "username": "alice",
            "created_at": "2024-01-01T12:00:00Z",
            "updated_at": "2024-01-01T13:00:00Z",
            "is_owner": true,
            "version": 2
        }))
        .unwrap();

        assert_eq!(notice.id, NoticeId::Text("n-9".to_string()));
        assert_eq!(notice.updated_at.as_deref(), Some("2024-01-01T13:00:00Z"));
        assert!(notice.is_owner);
        assert_eq!(notice.version, 2);
    }

    #[test]
    fn notice_edit_serializes_title_and_content_only() {
        let edit = NoticeEdit {
            title: "Lunch (moved)".to_string(),
            content: "Pizza at one".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&edit).unwrap(),
            json!({"title": "Lunch (moved)", "content": "Pizza at one"})
        );
    }
}

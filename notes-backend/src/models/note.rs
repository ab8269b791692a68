use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Note - the sole persisted entity: a titled text body with an id
/// and last-modified timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Request body shared by create and update
#[derive(Debug, Clone, Deserialize)]
pub struct NotePayload {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
}

impl NotePayload {
    /// Both fields must be non-empty after trimming whitespace.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.title.trim().is_empty() {
            return Err("Title is required");
        }
        if self.text.trim().is_empty() {
            return Err("Body is required");
        }
        Ok(())
    }
}

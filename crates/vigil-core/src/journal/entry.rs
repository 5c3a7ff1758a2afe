//! Journal entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prompt::Variant;

/// A single answer to a prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Unique id.
    pub id: Uuid,
    /// Prompt the entry answers.
    pub prompt_number: u32,
    /// Variant of the prompt that was shown.
    pub variant: Variant,
    /// What the player wrote.
    pub content: String,
    /// When it was written.
    pub timestamp: DateTime<Utc>,
}

impl JournalEntry {
    /// A new entry stamped with the current time.
    pub fn new(prompt_number: u32, variant: Variant, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            prompt_number,
            variant,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    /// Prompt label such as `12b`.
    pub fn label(&self) -> String {
        format!("{}{}", self.prompt_number, self.variant)
    }
}

//! Journal storage and export.

use serde::{Deserialize, Serialize};

use super::entry::JournalEntry;

/// Journal entries in the order they were written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    /// Create an empty journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry to the journal.
    pub fn append(&mut self, entry: JournalEntry) {
        self.entries.push(entry);
    }

    /// Get all entries.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the journal is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Export the journal as markdown, headed by the character's name.
    pub fn export_markdown(&self, title: &str) -> String {
        let mut out = format!("# The Journal of {title}\n\n");
        for entry in &self.entries {
            out.push_str(&format!(
                "## Prompt {}\n\n*{}*\n\n",
                entry.label(),
                entry.timestamp.format("%Y-%m-%d %H:%M UTC")
            ));
            for line in entry.content.lines() {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }

    /// Export the journal as plain text.
    pub fn export_text(&self, title: &str) -> String {
        let heading = format!("The Journal of {title}");
        let mut out = format!("{heading}\n{}\n\n", "=".repeat(heading.chars().count()));
        for entry in &self.entries {
            out.push_str(&format!(
                "[Prompt {}] {}\n",
                entry.label(),
                entry.timestamp.format("%Y-%m-%d %H:%M UTC")
            ));
            out.push_str(&entry.content);
            out.push_str("\n\n");
        }
        out
    }
}

//! The prompt text table.
//!
//! Read-only data handed to the [`Navigator`](super::Navigator). The bundled
//! table covers the 70 prompts of the game; tests and alternate books supply
//! their own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::state::Variant;

const BUILTIN_PROMPTS: &str = include_str!("../../data/prompts.json");

/// The texts of one prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptEntry {
    /// First-visit text.
    pub a: String,
    /// Second-visit text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<String>,
    /// Third-visit text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c: Option<String>,
}

impl PromptEntry {
    /// A prompt with only its first variant written.
    pub fn new(a: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: None,
            c: None,
        }
    }

    /// A prompt with all three variants.
    pub fn full(a: impl Into<String>, b: impl Into<String>, c: impl Into<String>) -> Self {
        Self {
            a: a.into(),
            b: Some(b.into()),
            c: Some(c.into()),
        }
    }

    /// Text for a variant, falling back to `a` when it is missing or blank.
    pub fn text(&self, variant: Variant) -> &str {
        let chosen = match variant {
            Variant::A => None,
            Variant::B => self.b.as_deref(),
            Variant::C => self.c.as_deref(),
        };
        chosen.filter(|t| !t.trim().is_empty()).unwrap_or(&self.a)
    }
}

/// Prompt number to prompt texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTable {
    prompts: BTreeMap<u32, PromptEntry>,
}

impl PromptTable {
    /// An empty table. Every lookup degrades to sentinel text.
    pub fn new() -> Self {
        Self::default()
    }

    /// The table bundled with the crate.
    pub fn builtin() -> serde_json::Result<Self> {
        Self::from_json(BUILTIN_PROMPTS)
    }

    /// Parse a table from JSON of the form `{"1": {"a": "...", "b": "..."}}`.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Add or replace a prompt, builder style.
    pub fn with_prompt(mut self, number: u32, entry: PromptEntry) -> Self {
        self.insert(number, entry);
        self
    }

    /// Add or replace a prompt.
    pub fn insert(&mut self, number: u32, entry: PromptEntry) {
        self.prompts.insert(number, entry);
    }

    /// Look up a prompt.
    pub fn get(&self, number: u32) -> Option<&PromptEntry> {
        self.prompts.get(&number)
    }

    /// Text for a prompt variant, if the prompt exists.
    pub fn text(&self, number: u32, variant: Variant) -> Option<&str> {
        self.get(number).map(|entry| entry.text(variant))
    }

    /// Highest prompt number in the table.
    pub fn last_prompt(&self) -> Option<u32> {
        self.prompts.keys().next_back().copied()
    }

    /// Number of prompts.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the table has no prompts.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variant_falls_back_to_a() {
        let entry = PromptEntry::new("first");
        assert_eq!(entry.text(Variant::A), "first");
        assert_eq!(entry.text(Variant::B), "first");
        assert_eq!(entry.text(Variant::C), "first");
    }

    #[test]
    fn blank_variant_falls_back_to_a() {
        let entry = PromptEntry::full("first", "   ", "third");
        assert_eq!(entry.text(Variant::B), "first");
        assert_eq!(entry.text(Variant::C), "third");
    }

    #[test]
    fn lookup_unknown_prompt() {
        let table = PromptTable::new().with_prompt(1, PromptEntry::new("one"));
        assert_eq!(table.text(1, Variant::A), Some("one"));
        assert_eq!(table.text(2, Variant::A), None);
    }

    #[test]
    fn parse_json_table() {
        let table = PromptTable::from_json(r#"{"3": {"a": "x", "c": "z"}, "10": {"a": "y"}}"#)
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.text(3, Variant::C), Some("z"));
        assert_eq!(table.text(3, Variant::B), Some("x"));
        assert_eq!(table.last_prompt(), Some(10));
    }

    #[test]
    fn builtin_table_has_seventy_prompts() {
        let table = PromptTable::builtin().unwrap();
        assert_eq!(table.len(), 70);
        assert_eq!(table.last_prompt(), Some(70));
        for n in 1..=70 {
            let entry = table.get(n).unwrap();
            assert!(!entry.a.is_empty());
            assert!(entry.b.is_some());
            assert!(entry.c.is_some());
        }
    }
}

//! Prompt position, visit counts and history.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dice::PromptRoll;

/// Which of a prompt's texts is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// First visit.
    A,
    /// Second visit.
    B,
    /// Third and later visits.
    C,
}

impl Variant {
    /// The variant for a prompt that has now been visited `count` times.
    ///
    /// A count of zero (never visited) reads as the first variant.
    pub fn for_visit(count: u32) -> Self {
        match count {
            0 | 1 => Self::A,
            2 => Self::B,
            _ => Self::C,
        }
    }

    /// Parse a variant letter.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "c" => Some(Self::C),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "a"),
            Self::B => write!(f, "b"),
            Self::C => write!(f, "c"),
        }
    }
}

/// One transition in the prompt history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptVisit {
    /// Prompt before the move.
    pub from: u32,
    /// Prompt after the move.
    pub to: u32,
    /// Variant shown at `to`.
    pub variant: Variant,
    /// Raw dice, when the move was rolled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roll: Option<PromptRoll>,
    /// Movement applied, when the move was not manual.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delta: Option<i64>,
    /// Whether the move was a manual jump.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub manual: bool,
}

/// Where the story stands among the prompts.
///
/// `current` always equals the `to` of the last history record, or 1 when
/// the history is empty. History only grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptState {
    current: u32,
    #[serde(default)]
    visit_counts: BTreeMap<u32, u32>,
    #[serde(default)]
    history: Vec<PromptVisit>,
}

impl Default for PromptState {
    fn default() -> Self {
        Self {
            current: 1,
            visit_counts: BTreeMap::new(),
            history: Vec::new(),
        }
    }
}

impl PromptState {
    /// A fresh state at prompt 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// A state positioned at `current` with no visits recorded.
    pub fn at(current: u32) -> Self {
        Self {
            current,
            ..Self::default()
        }
    }

    /// A state positioned at `current` with pre-existing visit counts.
    pub fn with_visits(current: u32, visits: impl IntoIterator<Item = (u32, u32)>) -> Self {
        Self {
            current,
            visit_counts: visits.into_iter().collect(),
            history: Vec::new(),
        }
    }

    /// The active prompt number.
    pub fn current(&self) -> u32 {
        self.current
    }

    /// How many times a prompt has been visited.
    pub fn visits(&self, prompt: u32) -> u32 {
        self.visit_counts.get(&prompt).copied().unwrap_or(0)
    }

    /// All recorded visit counts.
    pub fn visit_counts(&self) -> &BTreeMap<u32, u32> {
        &self.visit_counts
    }

    /// Every transition so far, oldest first.
    pub fn history(&self) -> &[PromptVisit] {
        &self.history
    }

    /// The variant last shown for the current prompt.
    ///
    /// Falls back to the visit count when no move has been recorded yet.
    pub fn current_variant(&self) -> Variant {
        match self.history.last() {
            Some(visit) if visit.to == self.current => visit.variant,
            _ => Variant::for_visit(self.visits(self.current)),
        }
    }

    pub(super) fn commit(&mut self, visit: PromptVisit, visit_counts: BTreeMap<u32, u32>) {
        self.current = visit.to;
        self.visit_counts = visit_counts;
        self.history.push(visit);
    }
}

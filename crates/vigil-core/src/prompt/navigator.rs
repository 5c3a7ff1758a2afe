//! Moving between prompts.
//!
//! Each move increments the visit count of the landing prompt and picks the
//! variant from the new count (1 → a, 2 → b, 3+ → c). A fourth visit spills
//! over to the following prompt, once; the spilled-to prompt is not checked
//! again in the same move.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dice::PromptRoll;
use super::state::{PromptState, PromptVisit, Variant};
use super::table::PromptTable;

/// Shown when a roll lands past the last written prompt.
pub const END_OF_STORY: &str =
    "You have reached the end of the prompts. Your story concludes here.";

/// Shown when a manual jump targets a prompt the table does not have.
pub const UNKNOWN_PROMPT: &str = "Unknown prompt.";

/// Visits a prompt can absorb before spilling over.
pub const MAX_VISITS: u32 = 3;

/// Highest prompt a move can land on, leaving room for one spill.
pub const LAST_LANDING: u32 = u32::MAX - 1;

/// The outcome of a prompt move, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visit {
    /// Prompt before the move.
    pub from: u32,
    /// Prompt after the move.
    pub to: u32,
    /// Variant shown.
    pub variant: Variant,
    /// Raw dice, when rolled.
    pub roll: Option<PromptRoll>,
    /// Movement applied, when not manual.
    pub delta: Option<i64>,
    /// Whether this was a manual jump.
    pub manual: bool,
    /// Whether an exhausted prompt pushed the move one further.
    pub spilled: bool,
    /// Whether the table has no text for `to`.
    pub missing: bool,
    /// Resolved prompt text.
    pub text: String,
}

/// Computes prompt moves against an injected prompt table.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    table: PromptTable,
}

impl Navigator {
    /// Create a navigator over a prompt table.
    pub fn new(table: PromptTable) -> Self {
        Self { table }
    }

    /// Move by a rolled d10 - d6.
    pub fn advance(&self, state: &mut PromptState, roll: PromptRoll) -> Visit {
        self.step(state, roll.delta(), Some(roll))
    }

    /// Move by an arbitrary delta without dice.
    pub fn advance_by(&self, state: &mut PromptState, delta: i64) -> Visit {
        self.step(state, delta, None)
    }

    /// Jump straight to `number`.
    ///
    /// Without an explicit variant the visit is counted and the variant
    /// derived from it; there is no spill-over and no clamping. An explicit
    /// variant leaves the visit counts untouched.
    pub fn go_to(&self, state: &mut PromptState, number: u32, entry: Option<Variant>) -> Visit {
        let from = state.current();
        let mut visit_counts = state.visit_counts().clone();
        let variant = match entry {
            Some(variant) => variant,
            None => Variant::for_visit(bump(&mut visit_counts, number)),
        };

        let (text, missing) = match self.table.text(number, variant) {
            Some(text) => (text.to_string(), false),
            None => (UNKNOWN_PROMPT.to_string(), true),
        };

        state.commit(
            PromptVisit {
                from,
                to: number,
                variant,
                roll: None,
                delta: None,
                manual: true,
            },
            visit_counts,
        );
        tracing::info!(from, to = number, %variant, "jumped to prompt");

        Visit {
            from,
            to: number,
            variant,
            roll: None,
            delta: None,
            manual: true,
            spilled: false,
            missing,
            text,
        }
    }

    /// Text of a prompt variant, or the end-of-story sentinel.
    pub fn text(&self, number: u32, variant: Variant) -> &str {
        self.table.text(number, variant).unwrap_or(END_OF_STORY)
    }

    fn past_the_end(&self, number: u32) -> bool {
        self.table.last_prompt().is_none_or(|last| number > last)
    }

    fn step(&self, state: &mut PromptState, delta: i64, roll: Option<PromptRoll>) -> Visit {
        let from = state.current();
        let mut visit_counts = state.visit_counts().clone();

        let mut target = landing(from, delta);
        let mut count = bump(&mut visit_counts, target);
        let spilled = count > MAX_VISITS;
        if spilled {
            target += 1;
            count = bump(&mut visit_counts, target);
        }
        let variant = Variant::for_visit(count);

        let (text, missing) = match self.table.text(target, variant) {
            Some(text) => (text.to_string(), false),
            None if self.past_the_end(target) => (END_OF_STORY.to_string(), true),
            None => (UNKNOWN_PROMPT.to_string(), true),
        };

        state.commit(
            PromptVisit {
                from,
                to: target,
                variant,
                roll,
                delta: Some(delta),
                manual: false,
            },
            visit_counts,
        );
        tracing::info!(from, to = target, %variant, delta, spilled, "advanced prompt");

        Visit {
            from,
            to: target,
            variant,
            roll,
            delta: Some(delta),
            manual: false,
            spilled,
            missing,
            text,
        }
    }
}

/// `current + delta`, kept within `1..=LAST_LANDING`.
fn landing(current: u32, delta: i64) -> u32 {
    let raw = i64::from(current)
        .saturating_add(delta)
        .clamp(1, i64::from(LAST_LANDING));
    u32::try_from(raw).unwrap_or(LAST_LANDING)
}

/// Increment a prompt's visit count and return the new count.
fn bump(visit_counts: &mut BTreeMap<u32, u32>, prompt: u32) -> u32 {
    let count = visit_counts.entry(prompt).or_insert(0);
    *count = count.saturating_add(1);
    *count
}

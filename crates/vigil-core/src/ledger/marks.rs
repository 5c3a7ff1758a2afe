//! Marks: the visible signs of the curse.

use serde::{Deserialize, Serialize};

use super::{Ledger, TraitId, clean};
use crate::error::LedgerResult;
use crate::event::LedgerEvent;

/// Borne or removed. `Removed` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkState {
    /// Still visible.
    #[default]
    Borne,
    /// Gone.
    Removed,
}

/// A mark on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mark {
    /// Unique id.
    pub id: TraitId,
    /// What the mark looks like.
    pub description: String,
    /// Borne or removed.
    #[serde(default)]
    pub state: MarkState,
}

impl Mark {
    /// A new borne mark.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            id: TraitId::new(),
            description: description.into(),
            state: MarkState::Borne,
        }
    }

    /// Whether the mark is still borne.
    pub fn is_active(&self) -> bool {
        self.state == MarkState::Borne
    }
}

impl Ledger {
    /// Add a mark. Blank descriptions are ignored.
    pub fn add_mark(&mut self, description: &str) -> LedgerResult<Option<LedgerEvent>> {
        let Some(description) = clean(description) else {
            return Ok(None);
        };
        self.marks.push(Mark::new(description.clone()));
        Ok(Some(LedgerEvent::MarkReceived { description }))
    }

    /// Remove a borne mark.
    pub fn remove_mark(&mut self, id: TraitId) -> LedgerResult<Option<LedgerEvent>> {
        Ok(self
            .marks
            .iter_mut()
            .find(|m| m.id == id && m.is_active())
            .map(|mark| {
                mark.state = MarkState::Removed;
                LedgerEvent::MarkRemoved {
                    description: mark.description.clone(),
                }
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove() {
        let mut ledger = Ledger::new();
        ledger.add_mark("Eyes that catch the light").unwrap();
        let id = ledger.marks()[0].id;
        assert!(ledger.marks()[0].is_active());

        assert!(ledger.remove_mark(id).unwrap().is_some());
        assert_eq!(ledger.marks()[0].state, MarkState::Removed);
        assert_eq!(ledger.remove_mark(id).unwrap(), None);
    }

    #[test]
    fn blank_mark_is_a_no_op() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_mark(" ").unwrap(), None);
        assert!(ledger.marks().is_empty());
    }
}

//! Resources: possessions, places and hangers-on.

use serde::{Deserialize, Serialize};

use super::{Ledger, TraitId, TraitState, clean};
use crate::error::LedgerResult;
use crate::event::LedgerEvent;

/// A resource on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// Unique id.
    pub id: TraitId,
    /// What the resource is.
    pub name: String,
    /// Tied to a place and left behind when fleeing.
    #[serde(default)]
    pub stationary: bool,
    /// The entry created alongside the diary.
    #[serde(default)]
    pub is_diary: bool,
    /// Active or lost.
    #[serde(default)]
    pub state: TraitState,
}

impl Resource {
    /// A new active resource.
    pub fn new(name: impl Into<String>, stationary: bool) -> Self {
        Self {
            id: TraitId::new(),
            name: name.into(),
            stationary,
            is_diary: false,
            state: TraitState::Active,
        }
    }

    /// Whether the resource is still held.
    pub fn is_active(&self) -> bool {
        self.state == TraitState::Active
    }
}

impl Ledger {
    /// Add a resource. Blank names are ignored.
    pub fn add_resource(
        &mut self,
        name: &str,
        stationary: bool,
    ) -> LedgerResult<Option<LedgerEvent>> {
        let Some(name) = clean(name) else {
            return Ok(None);
        };
        self.resources.push(Resource::new(name.clone(), stationary));
        Ok(Some(LedgerEvent::ResourceGained { name, stationary }))
    }

    /// Lose a resource for good.
    pub fn lose_resource(&mut self, id: TraitId) -> LedgerResult<Option<LedgerEvent>> {
        Ok(self
            .resources
            .iter_mut()
            .find(|r| r.id == id && r.is_active())
            .map(|resource| {
                resource.state = TraitState::Lost;
                LedgerEvent::ResourceLost {
                    name: resource.name.clone(),
                }
            }))
    }
}

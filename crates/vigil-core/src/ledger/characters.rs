//! Characters: the mortals and immortals the vampire knows.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Ledger, TraitId, clean};
use crate::error::LedgerResult;
use crate::event::LedgerEvent;

/// Relationship label for the immortal who turned the character.
pub const CREATOR: &str = "creator";

/// Mortal or immortal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterKind {
    /// Ages and dies.
    Mortal,
    /// Endures.
    Immortal,
}

impl CharacterKind {
    /// Parse `mortal` or `immortal`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "mortal" => Some(Self::Mortal),
            "immortal" => Some(Self::Immortal),
            _ => None,
        }
    }
}

impl fmt::Display for CharacterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mortal => write!(f, "Mortal"),
            Self::Immortal => write!(f, "Immortal"),
        }
    }
}

/// Alive or dead. `Dead` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterState {
    /// Still around.
    #[default]
    Alive,
    /// Gone.
    Dead,
}

/// A character on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// Unique id.
    pub id: TraitId,
    /// Name.
    pub name: String,
    /// Mortal or immortal.
    pub kind: CharacterKind,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Relationship label, empty when none.
    #[serde(default)]
    pub relationship: String,
    /// Alive or dead.
    #[serde(default)]
    pub state: CharacterState,
}

impl Character {
    /// A new living character.
    pub fn new(name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            id: TraitId::new(),
            name: name.into(),
            kind,
            description: String::new(),
            relationship: String::new(),
            state: CharacterState::Alive,
        }
    }

    /// Whether the character still lives.
    pub fn is_alive(&self) -> bool {
        self.state == CharacterState::Alive
    }
}

impl Ledger {
    /// Introduce a character. Blank names are ignored.
    pub fn add_character(
        &mut self,
        kind: CharacterKind,
        name: &str,
        description: &str,
    ) -> LedgerResult<Option<LedgerEvent>> {
        let Some(name) = clean(name) else {
            return Ok(None);
        };
        let mut character = Character::new(name.clone(), kind);
        character.description = description.trim().to_string();
        self.characters.push(character);
        Ok(Some(LedgerEvent::CharacterMet { name, kind }))
    }

    /// Mark a living character as dead.
    pub fn kill_character(&mut self, id: TraitId) -> LedgerResult<Option<LedgerEvent>> {
        Ok(self.living_character_mut(id).map(|character| {
            character.state = CharacterState::Dead;
            LedgerEvent::CharacterDied {
                name: character.name.clone(),
            }
        }))
    }

    /// Set the relationship label of a living character.
    ///
    /// Blank labels and unchanged labels are ignored.
    pub fn set_relationship(
        &mut self,
        id: TraitId,
        relationship: &str,
    ) -> LedgerResult<Option<LedgerEvent>> {
        let Some(new) = clean(relationship) else {
            return Ok(None);
        };
        Ok(self.living_character_mut(id).and_then(|character| {
            (character.relationship != new).then(|| {
                let old = std::mem::replace(&mut character.relationship, new.clone());
                LedgerEvent::RelationshipChanged {
                    name: character.name.clone(),
                    old,
                    new,
                }
            })
        }))
    }

    fn living_character_mut(&mut self, id: TraitId) -> Option<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| c.id == id && c.is_alive())
    }
}

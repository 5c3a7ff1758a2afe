//! Sheet mutations as values, so they can be checked before committing.

use serde::{Deserialize, Serialize};

use crate::ledger::{CharacterKind, TraitId};
use crate::prompt::Variant;

/// One mutation of a [`Sheet`](super::Sheet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Take a new name.
    Rename {
        /// The name to use from now on.
        name: String,
    },
    /// Add a skill.
    AddSkill {
        /// Skill name.
        name: String,
    },
    /// Check a skill.
    CheckSkill {
        /// Skill id.
        id: TraitId,
    },
    /// Clear a skill's check mark.
    UncheckSkill {
        /// Skill id.
        id: TraitId,
    },
    /// Lose a skill.
    LoseSkill {
        /// Skill id.
        id: TraitId,
    },
    /// Add a resource.
    AddResource {
        /// Resource name.
        name: String,
        /// Tied to a place.
        stationary: bool,
    },
    /// Lose a resource.
    LoseResource {
        /// Resource id.
        id: TraitId,
    },
    /// Introduce a character.
    AddCharacter {
        /// Mortal or immortal.
        kind: CharacterKind,
        /// Name.
        name: String,
        /// Free-text description.
        description: String,
    },
    /// Kill a character.
    KillCharacter {
        /// Character id.
        id: TraitId,
    },
    /// Label a character's relationship to the vampire.
    SetRelationship {
        /// Character id.
        id: TraitId,
        /// New label.
        relationship: String,
    },
    /// Add a mark.
    AddMark {
        /// Mark description.
        description: String,
    },
    /// Remove a mark.
    RemoveMark {
        /// Mark id.
        id: TraitId,
    },
    /// Form a new memory from one experience.
    FormMemory {
        /// The first experience.
        text: String,
    },
    /// Add an experience to an existing memory.
    WriteExperience {
        /// Zero-based memory index.
        index: usize,
        /// The experience.
        text: String,
    },
    /// Strike out a memory.
    StrikeOutMemory {
        /// Zero-based memory index.
        index: usize,
    },
    /// Publish a memory.
    PublishMemory {
        /// Zero-based memory index.
        index: usize,
    },
    /// Record a memory in the diary.
    MoveMemoryToDiary {
        /// Zero-based memory index.
        index: usize,
    },
    /// Gain a memory slot and its fresh memory.
    AddMemorySlot {
        /// Optional dedication of the new memory.
        theme: Option<String>,
    },
    /// Permanently lose a memory slot.
    LoseMemorySlot,
    /// Create the diary.
    CreateDiary {
        /// Optional description.
        description: Option<String>,
    },
    /// Write a journal entry.
    WriteJournal {
        /// Prompt the entry answers.
        prompt: u32,
        /// Variant of that prompt.
        variant: Variant,
        /// What the player wrote.
        content: String,
    },
    /// End the game.
    EndGame {
        /// Why it ended.
        reason: Option<String>,
    },
}

impl Action {
    /// Whether the host should ask for confirmation before applying.
    pub fn is_destructive(&self) -> bool {
        matches!(
            self,
            Self::LoseSkill { .. }
                | Self::LoseResource { .. }
                | Self::KillCharacter { .. }
                | Self::RemoveMark { .. }
                | Self::StrikeOutMemory { .. }
                | Self::LoseMemorySlot
                | Self::EndGame { .. }
        )
    }

    /// Short human description, used when asking for confirmation.
    pub fn describe(&self) -> String {
        match self {
            Self::Rename { name } => format!("take the name '{name}'"),
            Self::AddSkill { name } => format!("add the skill '{name}'"),
            Self::CheckSkill { .. } => "check a skill".to_string(),
            Self::UncheckSkill { .. } => "uncheck a skill".to_string(),
            Self::LoseSkill { .. } => "lose a skill".to_string(),
            Self::AddResource { name, .. } => format!("add the resource '{name}'"),
            Self::LoseResource { .. } => "lose a resource".to_string(),
            Self::AddCharacter { kind, name, .. } => format!("add the {kind} '{name}'"),
            Self::KillCharacter { .. } => "kill a character".to_string(),
            Self::SetRelationship { relationship, .. } => {
                format!("set a relationship to '{relationship}'")
            }
            Self::AddMark { .. } => "add a mark".to_string(),
            Self::RemoveMark { .. } => "remove a mark".to_string(),
            Self::FormMemory { .. } => "form a new memory".to_string(),
            Self::WriteExperience { index, .. } => {
                format!("write an experience into memory {}", index + 1)
            }
            Self::StrikeOutMemory { index } => format!("strike out memory {}", index + 1),
            Self::PublishMemory { index } => format!("publish memory {}", index + 1),
            Self::MoveMemoryToDiary { index } => {
                format!("move memory {} to the diary", index + 1)
            }
            Self::AddMemorySlot { .. } => "gain a memory slot".to_string(),
            Self::LoseMemorySlot => "permanently lose a memory slot".to_string(),
            Self::CreateDiary { .. } => "create a diary".to_string(),
            Self::WriteJournal { prompt, variant, .. } => {
                format!("write a journal entry for prompt {prompt}{variant}")
            }
            Self::EndGame { .. } => "end the game".to_string(),
        }
    }
}

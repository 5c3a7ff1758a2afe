//! Structured notifications emitted by committed sheet operations.
//!
//! Hosts decide how to present these; the `Display` impl gives a plain
//! one-line summary.

use serde::{Deserialize, Serialize};

use crate::ledger::CharacterKind;
use crate::prompt::Variant;

/// What a committed operation changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    /// The character took a new name.
    Renamed {
        /// Name in use before.
        old: String,
        /// Name in use now.
        new: String,
    },
    /// A skill was added.
    SkillGained {
        /// Skill name.
        name: String,
    },
    /// A skill was checked.
    SkillChecked {
        /// Skill name.
        name: String,
    },
    /// A check mark was cleared from a skill.
    SkillUnchecked {
        /// Skill name.
        name: String,
    },
    /// A skill was lost.
    SkillLost {
        /// Skill name.
        name: String,
    },
    /// A resource was added.
    ResourceGained {
        /// Resource name.
        name: String,
        /// Whether it is tied to a place.
        stationary: bool,
    },
    /// A resource was lost.
    ResourceLost {
        /// Resource name.
        name: String,
    },
    /// A character entered the story.
    CharacterMet {
        /// Character name.
        name: String,
        /// Mortal or immortal.
        kind: CharacterKind,
    },
    /// A character died.
    CharacterDied {
        /// Character name.
        name: String,
    },
    /// A character's relationship label changed.
    RelationshipChanged {
        /// Character name.
        name: String,
        /// Previous label (empty when none).
        old: String,
        /// New label.
        new: String,
    },
    /// A mark was received.
    MarkReceived {
        /// Mark description.
        description: String,
    },
    /// A mark was removed.
    MarkRemoved {
        /// Mark description.
        description: String,
    },
    /// A new memory was formed in a free slot.
    MemoryFormed {
        /// Zero-based memory index.
        index: usize,
    },
    /// An experience was written into a memory.
    ExperienceRecorded {
        /// Zero-based memory index.
        index: usize,
        /// The experience text.
        text: String,
    },
    /// A memory was struck out.
    MemoryStruckOut {
        /// Zero-based memory index.
        index: usize,
    },
    /// A memory was published.
    MemoryPublished {
        /// Zero-based memory index.
        index: usize,
    },
    /// A memory was recorded in the diary.
    MemoryMovedToDiary {
        /// Zero-based memory index.
        index: usize,
    },
    /// A bonus memory slot arrived along with a fresh memory.
    MemorySlotGained {
        /// Theme of the new memory, if any.
        theme: Option<String>,
        /// Slot total before.
        old_total: u32,
        /// Slot total after.
        new_total: u32,
    },
    /// A memory slot was permanently lost.
    MemorySlotLost {
        /// Slot total before.
        old_total: u32,
        /// Slot total after.
        new_total: u32,
    },
    /// The diary was created.
    DiaryCreated {
        /// Diary description.
        description: String,
    },
    /// A journal entry was written.
    JournalWritten {
        /// Prompt the entry answers.
        prompt: u32,
        /// Variant of that prompt.
        variant: Variant,
    },
    /// The game ended.
    GameEnded {
        /// Why it ended.
        reason: String,
    },
}

impl std::fmt::Display for LedgerEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Renamed { old, new } => write!(f, "{old} is now known as {new}."),
            Self::SkillGained { name } => write!(f, "Gained the Skill: {name}"),
            Self::SkillChecked { name } => write!(f, "Checked the Skill: {name}"),
            Self::SkillUnchecked { name } => write!(f, "Unchecked the Skill: {name}"),
            Self::SkillLost { name } => write!(f, "Lost the Skill: {name}"),
            Self::ResourceGained { name, stationary } => {
                write!(f, "Gained the Resource: {name}")?;
                if *stationary {
                    write!(f, " (Stationary)")?;
                }
                Ok(())
            }
            Self::ResourceLost { name } => write!(f, "Lost the Resource: {name}"),
            Self::CharacterMet { name, kind } => write!(f, "Met a new {kind}: {name}"),
            Self::CharacterDied { name } => write!(f, "{name} has died."),
            Self::RelationshipChanged { name, old, new } if old.is_empty() => {
                write!(f, "{name} is now: {new}")
            }
            Self::RelationshipChanged { name, old, new } => {
                write!(f, "{name} changed from {old} to {new}")
            }
            Self::MarkReceived { description } => write!(f, "Received a Mark: {description}"),
            Self::MarkRemoved { description } => write!(f, "Removed the Mark: {description}"),
            Self::MemoryFormed { index } => write!(f, "Formed Memory {}", index + 1),
            Self::ExperienceRecorded { index, text } => {
                write!(f, "Memory {} gained an Experience: {text}", index + 1)
            }
            Self::MemoryStruckOut { index } => write!(f, "Forgot Memory {}.", index + 1),
            Self::MemoryPublished { index } => write!(
                f,
                "Published Memory {}. It can never be lost or changed, and no longer takes up a Memory slot.",
                index + 1
            ),
            Self::MemoryMovedToDiary { index } => {
                write!(f, "Recorded Memory {} in the Diary.", index + 1)
            }
            Self::MemorySlotGained {
                theme, new_total, ..
            } => {
                write!(f, "Gained an additional Memory slot")?;
                if let Some(theme) = theme {
                    write!(f, " (dedicated to {theme})")?;
                }
                write!(f, ". (Now {new_total} slots)")
            }
            Self::MemorySlotLost { new_total, .. } => {
                write!(f, "Permanently lost a Memory slot. (Now {new_total} slots)")
            }
            Self::DiaryCreated { description } => write!(f, "Created a Diary: {description}"),
            Self::JournalWritten { prompt, variant } => {
                write!(f, "Journal entry written for Prompt {prompt}{variant}.")
            }
            Self::GameEnded { reason } => write!(f, "The End. {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_summaries() {
        let e = LedgerEvent::ResourceGained {
            name: "A crumbling keep".to_string(),
            stationary: true,
        };
        assert_eq!(e.to_string(), "Gained the Resource: A crumbling keep (Stationary)");

        let e = LedgerEvent::MemorySlotLost {
            old_total: 5,
            new_total: 4,
        };
        assert_eq!(e.to_string(), "Permanently lost a Memory slot. (Now 4 slots)");

        let e = LedgerEvent::CharacterMet {
            name: "Ilse".to_string(),
            kind: CharacterKind::Immortal,
        };
        assert_eq!(e.to_string(), "Met a new Immortal: Ilse");
    }

    #[test]
    fn rename_mentions_both_names() {
        let e = LedgerEvent::Renamed {
            old: "Mircea".to_string(),
            new: "Brother Anselm".to_string(),
        };
        assert_eq!(e.to_string(), "Mircea is now known as Brother Anselm.");
    }

    #[test]
    fn memory_numbers_are_one_based() {
        let e = LedgerEvent::MemoryStruckOut { index: 0 };
        assert_eq!(e.to_string(), "Forgot Memory 1.");
    }

    #[test]
    fn slot_gain_mentions_theme() {
        let e = LedgerEvent::MemorySlotGained {
            theme: Some("beauty".to_string()),
            old_total: 5,
            new_total: 6,
        };
        assert_eq!(
            e.to_string(),
            "Gained an additional Memory slot (dedicated to beauty). (Now 6 slots)"
        );
    }
}

//! The trait ledger: memories, skills, resources, characters, marks and the
//! diary, with the slot arithmetic that ties them together.
//!
//! Every operation validates before it touches anything, so a returned
//! [`LedgerError`](crate::LedgerError) always means nothing changed. Blank
//! names and unknown ids are not errors: the operation returns `Ok(None)`.

pub mod characters;
pub mod diary;
pub mod marks;
pub mod memory;
pub mod resources;
pub mod skills;
pub mod summary;

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use characters::{Character, CharacterKind, CharacterState};
pub use diary::Diary;
pub use marks::{Mark, MarkState};
pub use memory::{Memory, MemorySlots, MemoryState};
pub use resources::Resource;
pub use skills::Skill;
pub use summary::LedgerSummary;

/// Memory slots a character starts with.
pub const BASE_MEMORY_SLOTS: u32 = 5;

/// Experiences one memory can hold.
pub const EXPERIENCES_PER_MEMORY: usize = 3;

/// Memories the diary can hold at once.
pub const MAX_DIARY_MEMORIES: usize = 4;

/// Unique identifier for a skill, resource, character or mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TraitId(pub Uuid);

impl TraitId {
    /// Generate a new random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TraitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TraitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// Lifecycle of a skill or resource. `Lost` is terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TraitState {
    /// Still held.
    #[default]
    Active,
    /// Gone for good.
    Lost,
}

/// Every trait collection a character owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    pub(crate) memory_slots: MemorySlots,
    pub(crate) memories: Vec<Memory>,
    pub(crate) skills: Vec<Skill>,
    pub(crate) resources: Vec<Resource>,
    pub(crate) characters: Vec<Character>,
    pub(crate) marks: Vec<Mark>,
    pub(crate) diary: Diary,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            memory_slots: MemorySlots::default(),
            memories: (0..BASE_MEMORY_SLOTS).map(|_| Memory::blank(None)).collect(),
            skills: Vec::new(),
            resources: Vec::new(),
            characters: Vec::new(),
            marks: Vec::new(),
            diary: Diary::default(),
        }
    }
}

impl Ledger {
    /// A fresh ledger: five blank memories filling five slots, nothing else.
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot counters.
    pub fn memory_slots(&self) -> &MemorySlots {
        &self.memory_slots
    }

    /// All memories in sheet order, including struck-out ones.
    pub fn memories(&self) -> &[Memory] {
        &self.memories
    }

    /// All skills, including lost ones.
    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// All resources, including lost ones.
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// All characters, including the dead.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// All marks, including removed ones.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// The diary.
    pub fn diary(&self) -> &Diary {
        &self.diary
    }
}

/// Trim a user-supplied name, rejecting blanks.
pub(crate) fn clean(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

//! Derived counts and display filters. Nothing here is persisted.

use serde::Serialize;

use super::{
    Character, CharacterKind, Ledger, Mark, Memory, MemoryState, Resource, Skill, TraitState,
};

/// A snapshot of every derived count on the sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    /// Usable memory slots.
    pub total_memory_slots: u32,
    /// Memories held in the mind.
    pub active_memories: usize,
    /// Memories recorded in the diary.
    pub diary_memories: usize,
    /// Published memories.
    pub published_memories: usize,
    /// Slots in use.
    pub used_memory_slots: usize,
    /// Free slots; negative when over capacity.
    pub available_memory_slots: i64,
    /// Non-blank experiences across memories that are not struck out.
    pub experiences: usize,
    /// Checked skills still held.
    pub checked_skills: usize,
    /// Unchecked skills still held.
    pub unchecked_skills: usize,
    /// Lost skills.
    pub lost_skills: usize,
    /// Resources still held.
    pub active_resources: usize,
    /// Living mortals.
    pub living_mortals: usize,
    /// Living immortals.
    pub living_immortals: usize,
    /// Marks still borne.
    pub active_marks: usize,
}

impl Ledger {
    /// Compute every derived count at once.
    pub fn summary(&self) -> LedgerSummary {
        let skills = |f: fn(&Skill) -> bool| self.skills.iter().filter(|s| f(s)).count();
        LedgerSummary {
            total_memory_slots: self.memory_slots.total(),
            active_memories: self.active_memory_count(),
            diary_memories: self.diary_memory_count(),
            published_memories: self.published_memory_count(),
            used_memory_slots: self.used_memory_slots(),
            available_memory_slots: self.available_memory_slots(),
            experiences: self.experience_count(),
            checked_skills: skills(|s| s.is_active() && s.checked),
            unchecked_skills: skills(|s| s.is_active() && !s.checked),
            lost_skills: skills(|s| s.state == TraitState::Lost),
            active_resources: self.active_resources().count(),
            living_mortals: self.living_mortals().count(),
            living_immortals: self.living_immortals().count(),
            active_marks: self.active_marks().count(),
        }
    }

    fn memories_in(&self, state: MemoryState) -> impl Iterator<Item = (usize, &Memory)> {
        self.memories
            .iter()
            .enumerate()
            .filter(move |(_, m)| m.state == state)
    }

    /// Memories held in the mind, with their sheet index.
    pub fn active_memories(&self) -> impl Iterator<Item = (usize, &Memory)> {
        self.memories_in(MemoryState::Active)
    }

    /// Memories in the diary, with their sheet index.
    pub fn diary_memories(&self) -> impl Iterator<Item = (usize, &Memory)> {
        self.memories_in(MemoryState::Diary)
    }

    /// Number of active memories.
    pub fn active_memory_count(&self) -> usize {
        self.active_memories().count()
    }

    /// Number of memories in the diary.
    pub fn diary_memory_count(&self) -> usize {
        self.diary_memories().count()
    }

    /// Number of published memories.
    pub fn published_memory_count(&self) -> usize {
        self.memories_in(MemoryState::Published).count()
    }

    /// Slots in use: one per memory that occupies a slot.
    pub fn used_memory_slots(&self) -> usize {
        self.memories
            .iter()
            .filter(|m| m.state.occupies_slot())
            .count()
    }

    /// Free slots. Negative when more memories are active than slots exist.
    pub fn available_memory_slots(&self) -> i64 {
        let used = i64::try_from(self.used_memory_slots()).unwrap_or(i64::MAX);
        i64::from(self.memory_slots.total()) - used
    }

    /// Non-blank experiences over memories that are not struck out.
    pub fn experience_count(&self) -> usize {
        self.memories
            .iter()
            .filter(|m| m.state != MemoryState::StruckOut)
            .map(Memory::experience_count)
            .sum()
    }

    /// Skills still held.
    pub fn active_skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.iter().filter(|s| s.is_active())
    }

    /// Resources still held.
    pub fn active_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.is_active())
    }

    /// Characters still alive.
    pub fn living_characters(&self) -> impl Iterator<Item = &Character> {
        self.characters.iter().filter(|c| c.is_alive())
    }

    /// Living mortals.
    pub fn living_mortals(&self) -> impl Iterator<Item = &Character> {
        self.living_characters()
            .filter(|c| c.kind == CharacterKind::Mortal)
    }

    /// Living immortals.
    pub fn living_immortals(&self) -> impl Iterator<Item = &Character> {
        self.living_characters()
            .filter(|c| c.kind == CharacterKind::Immortal)
    }

    /// Marks still borne.
    pub fn active_marks(&self) -> impl Iterator<Item = &Mark> {
        self.marks.iter().filter(|m| m.is_active())
    }
}

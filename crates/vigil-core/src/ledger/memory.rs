//! Memories, experiences and memory slots.
//!
//! A memory holds up to three experiences. Only memories in the
//! [`MemoryState::Active`] state occupy a slot; the diary, publication and
//! forgetting all free theirs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EXPERIENCES_PER_MEMORY, Ledger, MAX_DIARY_MEMORIES, clean};
use crate::error::{LedgerError, LedgerResult};
use crate::event::LedgerEvent;

/// Where a memory stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MemoryState {
    /// Held in the mind; occupies a slot.
    #[default]
    Active,
    /// Recorded in the diary.
    Diary,
    /// Published; permanent and slot-free.
    Published,
    /// Forgotten; permanently inert.
    StruckOut,
}

impl MemoryState {
    /// Whether this memory uses up a memory slot.
    pub fn occupies_slot(self) -> bool {
        self == Self::Active
    }
}

/// One memory on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memory {
    /// Unique id.
    pub id: Uuid,
    /// Dedication given when the memory came with a bonus slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Experience texts; blank entries are unfilled.
    pub experiences: Vec<String>,
    /// Lifecycle state.
    pub state: MemoryState,
}

impl Memory {
    /// An empty memory with every experience slot blank.
    pub fn blank(theme: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            theme,
            experiences: vec![String::new(); EXPERIENCES_PER_MEMORY],
            state: MemoryState::Active,
        }
    }

    /// Non-blank experiences.
    pub fn filled_experiences(&self) -> impl Iterator<Item = &str> {
        self.experiences
            .iter()
            .map(String::as_str)
            .filter(|e| !e.trim().is_empty())
    }

    /// Number of non-blank experiences.
    pub fn experience_count(&self) -> usize {
        self.filled_experiences().count()
    }
}

/// Memory slot counters. Usable slots are `base + bonus - lost`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySlots {
    /// Slots every character starts with.
    pub base: u32,
    /// Slots gained during play.
    pub bonus: u32,
    /// Slots permanently lost.
    pub lost: u32,
}

impl Default for MemorySlots {
    fn default() -> Self {
        Self {
            base: super::BASE_MEMORY_SLOTS,
            bonus: 0,
            lost: 0,
        }
    }
}

impl MemorySlots {
    /// Usable slots.
    pub fn total(&self) -> u32 {
        (self.base + self.bonus).saturating_sub(self.lost)
    }
}

impl Ledger {
    /// Strike out (forget) a memory.
    ///
    /// Unknown or already struck-out memories are left alone. Published
    /// memories refuse with [`LedgerError::MemoryPublished`].
    pub fn strike_out_memory(&mut self, index: usize) -> LedgerResult<Option<LedgerEvent>> {
        let Some(memory) = self.memories.get_mut(index) else {
            return Ok(None);
        };
        match memory.state {
            MemoryState::StruckOut => Ok(None),
            MemoryState::Published => Err(LedgerError::MemoryPublished { index }),
            MemoryState::Active | MemoryState::Diary => {
                memory.state = MemoryState::StruckOut;
                Ok(Some(LedgerEvent::MemoryStruckOut { index }))
            }
        }
    }

    /// Publish a memory, freeing its slot (or its diary page) for good.
    pub fn publish_memory(&mut self, index: usize) -> LedgerResult<Option<LedgerEvent>> {
        let Some(memory) = self.memories.get_mut(index) else {
            return Ok(None);
        };
        match memory.state {
            MemoryState::StruckOut | MemoryState::Published => Ok(None),
            MemoryState::Active | MemoryState::Diary => {
                memory.state = MemoryState::Published;
                Ok(Some(LedgerEvent::MemoryPublished { index }))
            }
        }
    }

    /// Gain a bonus slot, which always arrives with its own empty memory.
    pub fn add_memory_slot(&mut self, theme: Option<&str>) -> LedgerResult<Option<LedgerEvent>> {
        let old_total = self.memory_slots.total();
        let theme = theme.and_then(clean);
        self.memory_slots.bonus += 1;
        self.memories.push(Memory::blank(theme.clone()));
        Ok(Some(LedgerEvent::MemorySlotGained {
            theme,
            old_total,
            new_total: self.memory_slots.total(),
        }))
    }

    /// Permanently lose a memory slot. The last slot is never lost.
    pub fn lose_memory_slot(&mut self) -> LedgerResult<Option<LedgerEvent>> {
        let old_total = self.memory_slots.total();
        if old_total <= 1 {
            return Err(LedgerError::LastMemorySlot);
        }
        self.memory_slots.lost += 1;
        Ok(Some(LedgerEvent::MemorySlotLost {
            old_total,
            new_total: self.memory_slots.total(),
        }))
    }

    /// Record an active memory in the diary.
    ///
    /// Needs an existing diary with room; published memories never enter it.
    pub fn move_memory_to_diary(&mut self, index: usize) -> LedgerResult<Option<LedgerEvent>> {
        let Some(state) = self.memories.get(index).map(|m| m.state) else {
            return Ok(None);
        };
        match state {
            MemoryState::StruckOut | MemoryState::Diary => return Ok(None),
            MemoryState::Published => return Err(LedgerError::MemoryPublished { index }),
            MemoryState::Active => {}
        }
        if !self.diary.exists {
            return Err(LedgerError::NoDiary);
        }
        if self.diary_memory_count() >= MAX_DIARY_MEMORIES {
            return Err(LedgerError::DiaryFull {
                capacity: MAX_DIARY_MEMORIES,
            });
        }

        self.memories[index].state = MemoryState::Diary;
        self.diary.exists = true;
        Ok(Some(LedgerEvent::MemoryMovedToDiary { index }))
    }

    /// Write an experience into the first blank slot of a memory.
    pub fn write_experience(
        &mut self,
        index: usize,
        text: &str,
    ) -> LedgerResult<Option<LedgerEvent>> {
        let Some(text) = clean(text) else {
            return Ok(None);
        };
        let Some(memory) = self.memories.get_mut(index) else {
            return Ok(None);
        };
        match memory.state {
            MemoryState::StruckOut => return Err(LedgerError::MemoryStruckOut { index }),
            MemoryState::Published => return Err(LedgerError::MemoryPublished { index }),
            MemoryState::Active | MemoryState::Diary => {}
        }
        let Some(slot) = memory.experiences.iter_mut().find(|e| e.trim().is_empty()) else {
            return Err(LedgerError::MemoryFull {
                index,
                capacity: EXPERIENCES_PER_MEMORY,
            });
        };
        *slot = text.clone();
        Ok(Some(LedgerEvent::ExperienceRecorded { index, text }))
    }

    /// Form a brand-new memory from one experience. Needs a free slot.
    pub fn form_memory(&mut self, text: &str) -> LedgerResult<Option<LedgerEvent>> {
        let Some(text) = clean(text) else {
            return Ok(None);
        };
        if self.available_memory_slots() <= 0 {
            return Err(LedgerError::NoFreeMemorySlot);
        }
        let mut memory = Memory::blank(None);
        memory.experiences[0] = text;
        self.memories.push(memory);
        Ok(Some(LedgerEvent::MemoryFormed {
            index: self.memories.len() - 1,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_diary() -> Ledger {
        let mut ledger = Ledger::new();
        ledger.create_diary(None).unwrap();
        ledger
    }

    #[test]
    fn strike_out_frees_a_slot() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.available_memory_slots(), 0);
        let event = ledger.strike_out_memory(2).unwrap();
        assert_eq!(event, Some(LedgerEvent::MemoryStruckOut { index: 2 }));
        assert_eq!(ledger.available_memory_slots(), 1);
    }

    #[test]
    fn strike_out_twice_is_a_no_op() {
        let mut ledger = Ledger::new();
        ledger.strike_out_memory(0).unwrap();
        let before = ledger.clone();
        assert_eq!(ledger.strike_out_memory(0).unwrap(), None);
        assert_eq!(ledger, before);
    }

    #[test]
    fn strike_out_unknown_index_is_a_no_op() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.strike_out_memory(42).unwrap(), None);
    }

    #[test]
    fn published_memory_cannot_be_struck_out() {
        let mut ledger = Ledger::new();
        ledger.publish_memory(1).unwrap();
        let before = ledger.clone();
        assert_eq!(
            ledger.strike_out_memory(1),
            Err(LedgerError::MemoryPublished { index: 1 })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn strike_out_clears_diary_placement() {
        let mut ledger = with_diary();
        ledger.move_memory_to_diary(0).unwrap();
        ledger.strike_out_memory(0).unwrap();
        assert_eq!(ledger.memories()[0].state, MemoryState::StruckOut);
        assert_eq!(ledger.diary_memory_count(), 0);
    }

    #[test]
    fn publish_struck_out_memory_is_a_no_op() {
        let mut ledger = Ledger::new();
        ledger.strike_out_memory(3).unwrap();
        let before = ledger.clone();
        assert_eq!(ledger.publish_memory(3).unwrap(), None);
        assert_eq!(ledger, before);
    }

    #[test]
    fn publish_takes_memory_out_of_diary() {
        let mut ledger = with_diary();
        ledger.move_memory_to_diary(0).unwrap();
        ledger.publish_memory(0).unwrap();
        assert_eq!(ledger.memories()[0].state, MemoryState::Published);
        assert_eq!(ledger.diary_memory_count(), 0);
        assert_eq!(ledger.published_memory_count(), 1);
        assert_eq!(ledger.publish_memory(0).unwrap(), None);
    }

    #[test]
    fn add_slot_brings_a_blank_memory() {
        let mut ledger = Ledger::new();
        let event = ledger.add_memory_slot(Some(" beauty ")).unwrap();
        assert_eq!(ledger.memory_slots().bonus, 1);
        assert_eq!(ledger.memories().len(), 6);
        let memory = ledger.memories().last().unwrap();
        assert_eq!(memory.experiences, vec![String::new(); 3]);
        assert_eq!(memory.theme.as_deref(), Some("beauty"));
        assert_eq!(
            event,
            Some(LedgerEvent::MemorySlotGained {
                theme: Some("beauty".to_string()),
                old_total: 5,
                new_total: 6,
            })
        );
    }

    #[test]
    fn add_slot_with_blank_theme() {
        let mut ledger = Ledger::new();
        ledger.add_memory_slot(Some("  ")).unwrap();
        assert_eq!(ledger.memories().last().unwrap().theme, None);
    }

    #[test]
    fn lose_slot_down_to_one() {
        let mut ledger = Ledger::new();
        ledger.memory_slots.lost = 3;
        assert_eq!(ledger.memory_slots().total(), 2);
        let event = ledger.lose_memory_slot().unwrap();
        assert_eq!(
            event,
            Some(LedgerEvent::MemorySlotLost {
                old_total: 2,
                new_total: 1,
            })
        );

        let before = ledger.clone();
        assert_eq!(ledger.lose_memory_slot(), Err(LedgerError::LastMemorySlot));
        assert_eq!(ledger, before);
        assert_eq!(ledger.memory_slots().total(), 1);
    }

    #[test]
    fn diary_requires_a_diary() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.move_memory_to_diary(0), Err(LedgerError::NoDiary));
        assert_eq!(ledger.memories()[0].state, MemoryState::Active);
    }

    #[test]
    fn diary_holds_four_memories() {
        let mut ledger = with_diary();
        ledger.add_memory_slot(None).unwrap();
        for i in 0..4 {
            ledger.move_memory_to_diary(i).unwrap();
        }
        assert_eq!(ledger.diary_memory_count(), 4);

        let before = ledger.clone();
        assert_eq!(
            ledger.move_memory_to_diary(4),
            Err(LedgerError::DiaryFull { capacity: 4 })
        );
        assert_eq!(ledger, before);
    }

    #[test]
    fn diary_move_is_idempotent_per_memory() {
        let mut ledger = with_diary();
        ledger.move_memory_to_diary(0).unwrap();
        assert_eq!(ledger.move_memory_to_diary(0).unwrap(), None);
    }

    #[test]
    fn published_memory_never_enters_diary() {
        let mut ledger = with_diary();
        ledger.publish_memory(0).unwrap();
        assert_eq!(
            ledger.move_memory_to_diary(0),
            Err(LedgerError::MemoryPublished { index: 0 })
        );
    }

    #[test]
    fn diary_frees_a_slot() {
        let mut ledger = with_diary();
        ledger.move_memory_to_diary(4).unwrap();
        assert_eq!(ledger.active_memory_count(), 4);
        assert_eq!(ledger.available_memory_slots(), 1);
    }

    #[test]
    fn write_fills_first_blank_experience() {
        let mut ledger = Ledger::new();
        ledger.write_experience(0, "I was born").unwrap();
        ledger.write_experience(0, " I was turned ").unwrap();
        assert_eq!(
            ledger.memories()[0].experiences,
            vec!["I was born", "I was turned", ""]
        );
    }

    #[test]
    fn write_into_full_memory_fails() {
        let mut ledger = Ledger::new();
        for text in ["one", "two", "three"] {
            ledger.write_experience(1, text).unwrap();
        }
        assert_eq!(
            ledger.write_experience(1, "four"),
            Err(LedgerError::MemoryFull {
                index: 1,
                capacity: 3
            })
        );
    }

    #[test]
    fn write_refuses_inert_memories() {
        let mut ledger = Ledger::new();
        ledger.strike_out_memory(0).unwrap();
        ledger.publish_memory(1).unwrap();
        assert_eq!(
            ledger.write_experience(0, "x"),
            Err(LedgerError::MemoryStruckOut { index: 0 })
        );
        assert_eq!(
            ledger.write_experience(1, "x"),
            Err(LedgerError::MemoryPublished { index: 1 })
        );
        assert_eq!(ledger.write_experience(0, "  ").unwrap(), None);
    }

    #[test]
    fn form_memory_needs_a_free_slot() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.form_memory("new"), Err(LedgerError::NoFreeMemorySlot));

        ledger.strike_out_memory(0).unwrap();
        let event = ledger.form_memory("A night at the opera").unwrap();
        assert_eq!(event, Some(LedgerEvent::MemoryFormed { index: 5 }));
        assert_eq!(ledger.memories()[5].experiences[0], "A night at the opera");
        assert_eq!(ledger.available_memory_slots(), 0);
    }
}

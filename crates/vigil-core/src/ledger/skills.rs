//! Skills: things the character knows how to do.

use serde::{Deserialize, Serialize};

use super::{Ledger, TraitId, TraitState, clean};
use crate::error::LedgerResult;
use crate::event::LedgerEvent;

/// A skill on the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    /// Unique id.
    pub id: TraitId,
    /// What the skill is.
    pub name: String,
    /// Whether the skill has been used up for now.
    #[serde(default)]
    pub checked: bool,
    /// Active or lost.
    #[serde(default)]
    pub state: TraitState,
}

impl Skill {
    /// A new, unchecked, active skill.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TraitId::new(),
            name: name.into(),
            checked: false,
            state: TraitState::Active,
        }
    }

    /// Whether the skill is still held.
    pub fn is_active(&self) -> bool {
        self.state == TraitState::Active
    }
}

impl Ledger {
    /// Add a skill. Blank names are ignored.
    pub fn add_skill(&mut self, name: &str) -> LedgerResult<Option<LedgerEvent>> {
        let Some(name) = clean(name) else {
            return Ok(None);
        };
        self.skills.push(Skill::new(name.clone()));
        Ok(Some(LedgerEvent::SkillGained { name }))
    }

    /// Check an active, unchecked skill.
    pub fn check_skill(&mut self, id: TraitId) -> LedgerResult<Option<LedgerEvent>> {
        Ok(self.active_skill_mut(id).and_then(|skill| {
            (!skill.checked).then(|| {
                skill.checked = true;
                LedgerEvent::SkillChecked {
                    name: skill.name.clone(),
                }
            })
        }))
    }

    /// Clear the check mark on an active skill.
    pub fn uncheck_skill(&mut self, id: TraitId) -> LedgerResult<Option<LedgerEvent>> {
        Ok(self.active_skill_mut(id).and_then(|skill| {
            skill.checked.then(|| {
                skill.checked = false;
                LedgerEvent::SkillUnchecked {
                    name: skill.name.clone(),
                }
            })
        }))
    }

    /// Lose a skill for good.
    pub fn lose_skill(&mut self, id: TraitId) -> LedgerResult<Option<LedgerEvent>> {
        Ok(self.active_skill_mut(id).map(|skill| {
            skill.state = TraitState::Lost;
            LedgerEvent::SkillLost {
                name: skill.name.clone(),
            }
        }))
    }

    fn active_skill_mut(&mut self, id: TraitId) -> Option<&mut Skill> {
        self.skills
            .iter_mut()
            .find(|s| s.id == id && s.is_active())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_with_skill(name: &str) -> (Ledger, TraitId) {
        let mut ledger = Ledger::new();
        ledger.add_skill(name).unwrap();
        let id = ledger.skills()[0].id;
        (ledger, id)
    }

    #[test]
    fn add_trims_name() {
        let (ledger, _) = ledger_with_skill("  Swordplay ");
        let skill = &ledger.skills()[0];
        assert_eq!(skill.name, "Swordplay");
        assert!(!skill.checked);
        assert!(skill.is_active());
    }

    #[test]
    fn add_blank_is_a_no_op() {
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_skill("   ").unwrap(), None);
        assert!(ledger.skills().is_empty());
    }

    #[test]
    fn added_skills_get_distinct_ids() {
        let mut ledger = Ledger::new();
        ledger.add_skill("Riding").unwrap();
        ledger.add_skill("Riding").unwrap();
        assert_ne!(ledger.skills()[0].id, ledger.skills()[1].id);
    }

    #[test]
    fn check_and_uncheck() {
        let (mut ledger, id) = ledger_with_skill("Poetry");
        assert_eq!(
            ledger.check_skill(id).unwrap(),
            Some(LedgerEvent::SkillChecked {
                name: "Poetry".to_string()
            })
        );
        assert!(ledger.skills()[0].checked);
        assert_eq!(ledger.check_skill(id).unwrap(), None);

        assert!(ledger.uncheck_skill(id).unwrap().is_some());
        assert!(!ledger.skills()[0].checked);
        assert_eq!(ledger.uncheck_skill(id).unwrap(), None);
    }

    #[test]
    fn lost_skill_is_terminal() {
        let (mut ledger, id) = ledger_with_skill("Poetry");
        ledger.lose_skill(id).unwrap();
        assert_eq!(ledger.skills()[0].state, TraitState::Lost);

        let before = ledger.clone();
        assert_eq!(ledger.lose_skill(id).unwrap(), None);
        assert_eq!(ledger.check_skill(id).unwrap(), None);
        assert_eq!(ledger.uncheck_skill(id).unwrap(), None);
        assert_eq!(ledger, before);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let (mut ledger, _) = ledger_with_skill("Poetry");
        assert_eq!(ledger.check_skill(TraitId::new()).unwrap(), None);
        assert_eq!(ledger.lose_skill(TraitId::new()).unwrap(), None);
    }
}

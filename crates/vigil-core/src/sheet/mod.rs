//! The character document.
//!
//! A [`Sheet`] exclusively owns the biography, the trait ledger, the prompt
//! log, the journal and the game state. Mutations go through
//! [`Sheet::apply`], which runs the [`Action`] against a clone and replaces
//! the document only when something actually changed.

pub mod action;
pub mod creation;

use serde::{Deserialize, Serialize};

pub use action::Action;
pub use creation::{CharacterCreation, NewCharacter, NewResource};

use crate::error::LedgerResult;
use crate::event::LedgerEvent;
use crate::journal::{Journal, JournalEntry};
use crate::ledger::{Ledger, clean};
use crate::prompt::{Navigator, PromptRoll, PromptState, Variant, Visit};

/// Reason recorded when the game ends without one.
pub const DEFAULT_END_REASON: &str = "The vampire's story has concluded.";

/// Who the character is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Biography {
    /// Name at birth.
    pub name: String,
    /// Name currently in use.
    #[serde(default)]
    pub current_name: String,
    /// Where the character comes from.
    #[serde(default)]
    pub origin: String,
    /// When the character was born.
    #[serde(default)]
    pub era: String,
}

impl Biography {
    /// A biography where birth name and current name match.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            current_name: name.clone(),
            name,
            ..Self::default()
        }
    }

    /// The name to show: the current name, or the birth name when unset.
    pub fn display_name(&self) -> &str {
        if self.current_name.trim().is_empty() {
            &self.name
        } else {
            &self.current_name
        }
    }
}

/// Whether the story is over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Set once the game has ended.
    pub ended: bool,
    /// Why it ended.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<String>,
}

/// A full character sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    /// Who the character is.
    pub biography: Biography,
    #[serde(flatten)]
    ledger: Ledger,
    #[serde(default)]
    prompts: PromptState,
    #[serde(default)]
    journal: Journal,
    #[serde(default)]
    game_state: GameState,
}

impl Sheet {
    /// A blank template: five empty memories, prompt 1, nothing else.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            biography: Biography::named(name),
            ledger: Ledger::new(),
            prompts: PromptState::new(),
            journal: Journal::new(),
            game_state: GameState::default(),
        }
    }

    /// The trait ledger.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Prompt position and history.
    pub fn prompts(&self) -> &PromptState {
        &self.prompts
    }

    /// The journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Whether the game has ended, and why.
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Whether the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.game_state.ended
    }

    /// True when the sheet holds no trait and no written experience yet.
    pub fn needs_creation(&self) -> bool {
        let ledger = &self.ledger;
        ledger.skills().is_empty()
            && ledger.resources().is_empty()
            && ledger.characters().is_empty()
            && ledger.marks().is_empty()
            && ledger.memories().iter().all(|m| m.experience_count() == 0)
    }

    /// The variant a journal entry written now belongs to.
    pub fn current_variant(&self) -> Variant {
        self.prompts.current_variant()
    }

    /// Roll forward with the given dice.
    pub fn advance(&mut self, navigator: &Navigator, roll: PromptRoll) -> Visit {
        navigator.advance(&mut self.prompts, roll)
    }

    /// Move by an arbitrary delta.
    pub fn advance_by(&mut self, navigator: &Navigator, delta: i64) -> Visit {
        navigator.advance_by(&mut self.prompts, delta)
    }

    /// Jump to a prompt.
    pub fn go_to(&mut self, navigator: &Navigator, number: u32, entry: Option<Variant>) -> Visit {
        navigator.go_to(&mut self.prompts, number, entry)
    }

    /// Would `action` change the sheet?
    ///
    /// `Ok(true)` means applying it would commit, `Ok(false)` that it would
    /// be a silent no-op, and an error that a precondition blocks it. The
    /// sheet is never touched.
    pub fn check(&self, action: &Action) -> LedgerResult<bool> {
        let mut draft = self.clone();
        draft.execute(action.clone()).map(|event| event.is_some())
    }

    /// Apply `action`, replacing the sheet only when it changes something.
    pub fn apply(&mut self, action: Action) -> LedgerResult<Option<LedgerEvent>> {
        let mut draft = self.clone();
        let event = draft.execute(action)?;
        if let Some(event) = &event {
            tracing::debug!(%event, "sheet updated");
            *self = draft;
        }
        Ok(event)
    }

    fn execute(&mut self, action: Action) -> LedgerResult<Option<LedgerEvent>> {
        match action {
            Action::Rename { name } => Ok(self.rename(&name)),
            Action::AddSkill { name } => self.ledger.add_skill(&name),
            Action::CheckSkill { id } => self.ledger.check_skill(id),
            Action::UncheckSkill { id } => self.ledger.uncheck_skill(id),
            Action::LoseSkill { id } => self.ledger.lose_skill(id),
            Action::AddResource { name, stationary } => self.ledger.add_resource(&name, stationary),
            Action::LoseResource { id } => self.ledger.lose_resource(id),
            Action::AddCharacter {
                kind,
                name,
                description,
            } => self.ledger.add_character(kind, &name, &description),
            Action::KillCharacter { id } => self.ledger.kill_character(id),
            Action::SetRelationship { id, relationship } => {
                self.ledger.set_relationship(id, &relationship)
            }
            Action::AddMark { description } => self.ledger.add_mark(&description),
            Action::RemoveMark { id } => self.ledger.remove_mark(id),
            Action::FormMemory { text } => self.ledger.form_memory(&text),
            Action::WriteExperience { index, text } => self.ledger.write_experience(index, &text),
            Action::StrikeOutMemory { index } => self.ledger.strike_out_memory(index),
            Action::PublishMemory { index } => self.ledger.publish_memory(index),
            Action::MoveMemoryToDiary { index } => self.ledger.move_memory_to_diary(index),
            Action::AddMemorySlot { theme } => self.ledger.add_memory_slot(theme.as_deref()),
            Action::LoseMemorySlot => self.ledger.lose_memory_slot(),
            Action::CreateDiary { description } => self.ledger.create_diary(description.as_deref()),
            Action::WriteJournal {
                prompt,
                variant,
                content,
            } => Ok(self.write_journal(prompt, variant, &content)),
            Action::EndGame { reason } => Ok(self.end_game(reason.as_deref())),
        }
    }

    fn rename(&mut self, name: &str) -> Option<LedgerEvent> {
        let new = clean(name)?;
        let old = self.biography.display_name().to_string();
        if new == old {
            return None;
        }
        self.biography.current_name = new.clone();
        Some(LedgerEvent::Renamed { old, new })
    }

    fn write_journal(
        &mut self,
        prompt: u32,
        variant: Variant,
        content: &str,
    ) -> Option<LedgerEvent> {
        let content = clean(content)?;
        self.journal.append(JournalEntry::new(prompt, variant, content));
        Some(LedgerEvent::JournalWritten { prompt, variant })
    }

    fn end_game(&mut self, reason: Option<&str>) -> Option<LedgerEvent> {
        if self.game_state.ended {
            return None;
        }
        let reason = reason
            .and_then(clean)
            .unwrap_or_else(|| DEFAULT_END_REASON.to_string());
        tracing::info!(name = %self.biography.display_name(), %reason, "game ended");
        self.game_state = GameState {
            ended: true,
            end_reason: Some(reason.clone()),
        };
        Some(LedgerEvent::GameEnded { reason })
    }
}

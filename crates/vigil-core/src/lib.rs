//! Prompt navigation and trait bookkeeping for a thousand-year solo
//! journaling game.
//!
//! A character [`Sheet`] owns every tracked collection (memories, skills,
//! resources, characters, marks, the diary), the prompt log and the journal.
//! The [`Navigator`] turns a dice delta and per-prompt visit counts into the
//! next prompt and text variant. [`Session`] wraps both behind a line-based
//! command interface.

pub mod config;
pub mod error;
pub mod event;
pub mod journal;
pub mod ledger;
pub mod prompt;
pub mod session;
pub mod sheet;

pub use config::SessionConfig;
pub use error::{LedgerError, LedgerResult, SessionError, SessionResult};
pub use event::LedgerEvent;
pub use ledger::{Ledger, LedgerSummary, TraitId};
pub use prompt::{Navigator, PromptRoll, PromptState, PromptTable, Variant, Visit};
pub use session::Session;
pub use sheet::{Action, CharacterCreation, Sheet};

//! The player's written answers to prompts, with export.

pub mod entry;
pub mod log;

pub use entry::JournalEntry;
pub use log::Journal;

//! Error types for ledger operations and text sessions.

use thiserror::Error;

/// Result type for ledger and sheet operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Result type for session commands.
pub type SessionResult<T> = Result<T, SessionError>;

/// A precondition that blocked a ledger operation.
///
/// The sheet is left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Published memories can never be struck out, changed or moved.
    #[error("memory {} is published and can never change", .index + 1)]
    MemoryPublished {
        /// Zero-based memory index.
        index: usize,
    },

    /// The memory has been struck out and is permanently inert.
    #[error("memory {} has been struck out", .index + 1)]
    MemoryStruckOut {
        /// Zero-based memory index.
        index: usize,
    },

    /// Every experience slot of the memory is already filled.
    #[error("memory {} already holds {capacity} experiences", .index + 1)]
    MemoryFull {
        /// Zero-based memory index.
        index: usize,
        /// Experiences a memory can hold.
        capacity: usize,
    },

    /// No memory slot is free for a new memory.
    #[error("no free memory slot; strike out a memory first")]
    NoFreeMemorySlot,

    /// The last usable memory slot cannot be lost.
    #[error("cannot lose your last memory slot")]
    LastMemorySlot,

    /// Moving a memory to the diary requires a diary.
    #[error("you have no diary")]
    NoDiary,

    /// The diary already holds its maximum number of memories.
    #[error("your diary is full (maximum {capacity} memories)")]
    DiaryFull {
        /// Memories the diary can hold.
        capacity: usize,
    },

    /// A diary can only be created once.
    #[error("you already have a diary")]
    DiaryExists,

    /// Character creation data is incomplete.
    #[error("invalid character creation: {0}")]
    InvalidCreation(String),
}

/// Errors from processing a line of session input.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Invalid choice or malformed arguments.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The story has ended; no further prompts can be rolled.
    #[error("the game has ended")]
    GameOver,

    /// A confirmation answer arrived with nothing awaiting confirmation.
    #[error("nothing to confirm")]
    NothingPending,

    /// A ledger precondition failed.
    #[error("{0}")]
    Ledger(#[from] LedgerError),
}

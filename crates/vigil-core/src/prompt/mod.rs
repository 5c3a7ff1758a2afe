//! Prompt navigation.
//!
//! Prompts are numbered writing cues with up to three variants (a, b, c),
//! one for each visit. A roll of d10 minus d6 moves the story along; a
//! prompt that has been read three times spills over to the next one.

pub mod dice;
pub mod navigator;
pub mod state;
pub mod table;

pub use dice::{PromptRoll, roll_prompt_dice};
pub use navigator::{Navigator, Visit};
pub use state::{PromptState, PromptVisit, Variant};
pub use table::{PromptEntry, PromptTable};

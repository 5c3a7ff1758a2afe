//! The prompt dice: a d10 minus a d6.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// The two raw dice behind a prompt move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRoll {
    /// The ten-sided die (1-10).
    pub d10: u32,
    /// The six-sided die (1-6).
    pub d6: u32,
}

impl PromptRoll {
    /// Create a roll from raw die values.
    pub fn new(d10: u32, d6: u32) -> Self {
        Self { d10, d6 }
    }

    /// Signed movement: d10 minus d6.
    pub fn delta(self) -> i64 {
        i64::from(self.d10) - i64::from(self.d6)
    }
}

impl std::fmt::Display for PromptRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d10 {} - d6 {} = {:+}", self.d10, self.d6, self.delta())
    }
}

/// Roll the prompt dice.
pub fn roll_prompt_dice(rng: &mut StdRng) -> PromptRoll {
    PromptRoll {
        d10: rng.random_range(1..=10),
        d6: rng.random_range(1..=6),
    }
}

/// Describe a movement for display, e.g. "move forward 3 prompts".
pub fn describe_movement(delta: i64) -> String {
    let direction = match delta {
        1.. => "move forward",
        0 => "stay at the current prompt",
        _ => "move backward",
    };
    if delta == 0 {
        return direction.to_string();
    }
    let steps = delta.unsigned_abs();
    let plural = if steps == 1 { "" } else { "s" };
    format!("{direction} {steps} prompt{plural}")
}

//! Configuration for a play session.

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible prompt rolls.
    pub seed: u64,
    /// Whether destructive commands wait for a `yes` before committing.
    pub confirm_destructive: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            confirm_destructive: true,
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Enable or disable confirmation of destructive commands.
    pub fn with_confirmation(mut self, confirm: bool) -> Self {
        self.confirm_destructive = confirm;
        self
    }
}

//! Construction-time knobs for the game core.

use core::fmt;

use crate::{
    error::Error,
    logic::lfsr::{DEFAULT_SEED, LFSR_MASK},
};

/// Primary ticks per slow tick when nothing else is configured.
///
/// The board divides its fast clock down to a millisecond-ish rate for the
/// reaction countdown; 1000 keeps the same ratio order of magnitude.
pub const DEFAULT_DIVIDER: u32 = 1000;

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameConfig {
    /// Power-on and reload value of both shift registers.
    pub seed: u16,
    /// Primary ticks per slow tick.
    pub divider: u32,
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u16) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_divider(mut self, divider: u32) -> Self {
        self.divider = divider;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.seed == 0 || self.seed > LFSR_MASK {
            return Err(Error::InvalidSeed(self.seed));
        }
        if self.divider == 0 {
            return Err(Error::InvalidDivider);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            divider: DEFAULT_DIVIDER,
        }
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seed={:#05x} divider={}", self.seed, self.divider)
    }
}

//! 12-bit feedback shift register used as the stimulus delay source.
//!
//! Each tick shifts the register left by one and feeds `bit6 ^ bit7` into bit 0.
//! The shift discards bit 11, so the register can collapse to zero (`0x800`
//! with both taps clear shifts to `0x000`). The hardware recovers by reloading
//! the seed on the following tick, which keeps the all-zero pattern from
//! surviving two ticks in a row. This is **not** a maximal-length sequence and
//! it is not cryptographically random; it is deterministic so trials replay.

/// Width mask of the shift register.
pub const LFSR_MASK: u16 = 0x0FFF;

/// Power-on seed used when no seed is configured.
pub const DEFAULT_SEED: u16 = 0x0ACE;

const TAP_LOW: u16 = 6;
const TAP_HIGH: u16 = 7;

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PseudoRandomSequence {
    seed: u16,
    state: u16,
}

impl PseudoRandomSequence {
    /// Creates a register loaded with `seed` (truncated to 12 bits).
    ///
    /// A zero seed is accepted here but would make the reload path spin on
    /// zero; [`crate::config::GameConfig::validate`] rejects it up front.
    pub const fn new(seed: u16) -> Self {
        let seed = seed & LFSR_MASK;
        Self { seed, state: seed }
    }

    /// Current register contents.
    #[inline]
    pub fn value(&self) -> u16 {
        self.state
    }

    pub fn seed(&self) -> u16 {
        self.seed
    }

    /// Clocks the register once and returns the new contents.
    pub fn advance(&mut self) -> u16 {
        let prev = self.state;
        self.state = if prev == 0 {
            self.seed
        } else {
            let feedback = ((prev >> TAP_LOW) ^ (prev >> TAP_HIGH)) & 1;
            ((prev << 1) | feedback) & LFSR_MASK
        };
        debug_assert!(
            prev != 0 || self.state != 0,
            "lfsr held zero for two consecutive ticks"
        );
        self.state
    }
}

impl Default for PseudoRandomSequence {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

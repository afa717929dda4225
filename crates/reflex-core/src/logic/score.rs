//! Best-score register.
//!
//! Scores are elapsed master-counter ticks. Zero is reserved for "no score
//! yet", so the register keeps the lowest *nonzero* value presented to it.
//! Updates happen only on the falling edge of the latch signal, which is how
//! the modes report that a trial just finished.

/// Width mask of a score (24-bit counter).
pub const SCORE_MASK: u32 = 0x00FF_FFFF;

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScoreTracker {
    stored: u32,
    latch_prev: bool,
}

/// `true` when `candidate` would replace `stored` under the lowest-nonzero rule.
#[inline]
pub fn improves(candidate: u32, stored: u32) -> bool {
    candidate != 0 && (stored == 0 || candidate < stored)
}

impl ScoreTracker {
    /// Best score so far, `0` when nothing has been recorded.
    #[inline]
    pub fn best(&self) -> u32 {
        self.stored
    }

    /// Samples `trigger`; on its falling edge, keeps `candidate` if it beats
    /// the stored score. Returns `true` when the stored score changed.
    pub fn maybe_update(&mut self, candidate: u32, trigger: bool) -> bool {
        let falling = self.latch_prev && !trigger;
        self.latch_prev = trigger;
        if !falling {
            return false;
        }

        let candidate = candidate & SCORE_MASK;
        if !improves(candidate, self.stored) {
            return false;
        }
        self.stored = candidate;
        debug_assert!(self.stored != 0, "zero recorded as a best score");
        true
    }
}

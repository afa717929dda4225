//! Completion guard: set by a buffered trigger, cleared by a comparator match.
//!
//! Next state is `z' = (w & !z) | (!match & z)`. Once armed, the guard holds
//! until the comparator reports a match, so a trial can only complete while a
//! trigger has been seen and the pattern has not yet been answered.

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToggleFsm {
    z: bool,
}

impl ToggleFsm {
    #[inline]
    pub fn is_set(&self) -> bool {
        self.z
    }

    /// Clocks the guard with the buffered trigger `w` and match `matched`.
    pub fn step(&mut self, w: bool, matched: bool) -> bool {
        self.z = (w && !self.z) || (!matched && self.z);
        self.z
    }
}

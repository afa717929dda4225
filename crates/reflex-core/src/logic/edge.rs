//! Rising-edge detector over a sampled level.

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeDetector {
    prev: bool,
}

impl EdgeDetector {
    /// Samples `signal` and reports a one-tick pulse on a low-to-high change.
    #[inline]
    pub fn sample(&mut self, signal: bool) -> bool {
        let rising = signal && !self.prev;
        self.prev = signal;
        rising
    }
}

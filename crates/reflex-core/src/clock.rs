//! Slow tick domain derived from the primary tick.
//!
//! The countdown registers live on a divided clock. The divider is modelled
//! as a counter that flags one primary tick out of every `ratio`; components
//! on the slow domain only clock on flagged ticks, and everything on the
//! primary domain reads their outputs as they stood before the tick.

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClockDivider {
    ratio: u32,
    phase: u32,
}

impl ClockDivider {
    /// `ratio` of zero is treated as one; configs are validated before this.
    pub fn new(ratio: u32) -> Self {
        Self {
            ratio: ratio.max(1),
            phase: 0,
        }
    }

    pub fn ratio(&self) -> u32 {
        self.ratio
    }

    /// Whether the upcoming primary tick is also a slow tick.
    #[inline]
    pub fn fires(&self) -> bool {
        self.phase + 1 == self.ratio
    }

    /// Advances one primary tick.
    #[inline]
    pub fn tick(&mut self) {
        self.phase = if self.fires() { 0 } else { self.phase + 1 };
    }
}

impl Default for ClockDivider {
    fn default() -> Self {
        Self::new(1)
    }
}

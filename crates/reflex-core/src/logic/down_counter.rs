//! Loadable reaction-window countdown with a latched `done` flag.

use super::lfsr::LFSR_MASK;

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DownCounter {
    count: u16,
    done: bool,
}

impl DownCounter {
    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn done(&self) -> bool {
        self.done
    }

    /// Load cycle: latches a new window and clears `done`.
    ///
    /// `done` stays clear even for a zero load; it only rises on the next
    /// counting tick.
    pub fn configure(&mut self, load_value: u16) {
        self.count = load_value & LFSR_MASK;
        self.done = false;
    }

    /// Counting cycle. Returns the `done` flag after the edge.
    pub fn tick(&mut self) -> bool {
        let was_done = self.done;
        if self.count == 0 {
            self.done = true;
        } else {
            self.count -= 1;
            self.done = false;
        }
        debug_assert!(!was_done || self.done, "done fell without a reload");
        self.done
    }

    /// One clock edge with the `load` input sampled. Load wins over counting.
    pub fn clock(&mut self, load: bool, load_value: u16) -> bool {
        if load {
            self.configure(load_value);
            self.done
        } else {
            self.tick()
        }
    }
}

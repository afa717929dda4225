//! Single-player reaction mode.
//!
//! Flow, derived from the registers rather than an explicit state enum:
//! - idle: mode inactive, toggle forced low
//! - armed: active, toggle low
//! - counting: toggle high, the countdown runs while the trigger is held
//! - complete: toggle high and countdown done, every LED lights
//!
//! A rising trigger edge flips the toggle. When the toggle falls the master
//! counter is offered to the best-score register.

use tracing::debug;

use crate::{
    context::SharedContext,
    display::Leds,
    logic::{DownCounter, EdgeDetector, PseudoRandomSequence, ScoreTracker},
};

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinglePlayerMode {
    active: bool,
    toggle: bool,
    trigger_edge: EdgeDetector,
    rng: PseudoRandomSequence,
    window: DownCounter,
    best: ScoreTracker,
}

impl SinglePlayerMode {
    pub fn new(seed: u16) -> Self {
        Self {
            active: false,
            toggle: false,
            trigger_edge: EdgeDetector::default(),
            rng: PseudoRandomSequence::new(seed),
            window: DownCounter::default(),
            best: ScoreTracker::default(),
        }
    }

    /// Applies the mode-select level. Deactivation drops back to idle.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.toggle = false;
        }
    }

    /// Handles a detected rising trigger edge.
    pub fn on_trigger_edge(&mut self) {
        if self.active {
            self.toggle = !self.toggle;
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn toggle(&self) -> bool {
        self.toggle
    }

    pub fn window(&self) -> &DownCounter {
        &self.window
    }

    pub fn rng(&self) -> &PseudoRandomSequence {
        &self.rng
    }

    /// Trial concluded: toggle armed and the countdown ran out.
    pub fn done_flag(&self) -> bool {
        self.active && self.toggle && self.window.done()
    }

    pub fn leds(&self) -> Leds {
        if self.done_flag() {
            Leds::ALL
        } else {
            Leds::empty()
        }
    }

    pub fn best_score(&self) -> u32 {
        self.best.best()
    }

    /// Waiting for a first press with nothing in flight; holds the master
    /// counter in reset.
    pub fn idle_and_not_triggered(&self, trigger: bool) -> bool {
        self.active && !self.toggle && !trigger
    }

    /// One primary tick. `trigger` is the live button level.
    pub fn tick(&mut self, ctx: &SharedContext, trigger: bool) {
        let prev = *self;
        let active = !ctx.mode_switch;

        // Countdown runs only while the trigger is held; releasing reloads it.
        if ctx.slow_tick {
            self.window.clock(!trigger, prev.rng.value());
        }
        self.rng.advance();

        self.set_active(active);
        if self.trigger_edge.sample(trigger) {
            self.on_trigger_edge();
        }

        // Latch watches the toggle across this edge; a fall ends the trial.
        if self.best.maybe_update(ctx.master_counter, self.toggle) {
            debug!(score = self.best.best(), "single-player best improved");
        }

        if self.done_flag() && !prev.done_flag() {
            debug!(counter = ctx.master_counter, "single-player stimulus lit");
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.rng.seed());
    }
}

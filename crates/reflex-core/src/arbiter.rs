//! Top-level composition of both modes.
//!
//! The arbiter owns the free-running master counter, the slow-tick divider and
//! the registered reset that holds the counter at zero between trials. Per
//! tick it:
//! 1. snapshots the settled signals into a [`SharedContext`] and evaluates
//!    the reset terms from the mode state as it stood before the tick,
//! 2. clocks both modes against that snapshot,
//! 3. commits the master counter from the reset registered on the previous
//!    tick, and registers the reset evaluated in step 1,
//! 4. derives the display and LED outputs from the committed state.

use tracing::trace;

use crate::{
    clock::ClockDivider,
    context::SharedContext,
    display::{Digit, ImageSelect, Leds},
    logic::{EdgeDetector, score::SCORE_MASK},
    mode::{MultiplayerMode, SinglePlayerMode},
};

/// Switch and button levels sampled for one tick.
#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inputs {
    /// `[0]` single-player trigger, `[1]` multiplayer trigger.
    pub buttons: [bool; 2],
    /// `false` selects single-player, `true` multiplayer.
    pub mode_switch: bool,
    pub show_single_best: bool,
    pub show_multiplayer_best: bool,
    /// Multiplayer answer switch bank.
    pub player_pattern: u8,
}

impl Inputs {
    pub fn single() -> Self {
        Self::default()
    }

    pub fn multi() -> Self {
        Self {
            mode_switch: true,
            ..Self::default()
        }
    }

    pub fn with_trigger(mut self, pressed: bool) -> Self {
        let index = usize::from(self.mode_switch);
        self.buttons[index] = pressed;
        self
    }

    pub fn with_pattern(mut self, pattern: u8) -> Self {
        self.player_pattern = pattern;
        self
    }
}

/// Everything the core drives after one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Outputs {
    pub led_bus: Leds,
    /// Left to right.
    pub digits: [Digit; 4],
    pub display_value: u32,
    pub image: ImageSelect,
    pub master_counter: u32,
    pub best_single_score: u32,
    pub best_multiplayer_score: u32,
}

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TopLevelArbiter {
    master_counter: u32,
    combined_reset: bool,
    mode_rise: EdgeDetector,
    mode_fall: EdgeDetector,
    divider: ClockDivider,
    single: SinglePlayerMode,
    multi: MultiplayerMode,
}

impl TopLevelArbiter {
    pub fn new(seed: u16, divider: u32) -> Self {
        Self {
            master_counter: 0,
            // Power-on holds the counter until a mode qualifies it.
            combined_reset: true,
            mode_rise: EdgeDetector::default(),
            mode_fall: EdgeDetector::default(),
            divider: ClockDivider::new(divider),
            single: SinglePlayerMode::new(seed),
            multi: MultiplayerMode::new(seed),
        }
    }

    pub fn master_counter(&self) -> u32 {
        self.master_counter
    }

    /// Reset registered for the next counter update.
    pub fn combined_reset(&self) -> bool {
        self.combined_reset
    }

    pub fn single(&self) -> &SinglePlayerMode {
        &self.single
    }

    pub fn multi(&self) -> &MultiplayerMode {
        &self.multi
    }

    pub fn divider(&self) -> &ClockDivider {
        &self.divider
    }

    pub fn tick(&mut self, inputs: &Inputs) -> Outputs {
        let ctx = SharedContext {
            master_counter: self.master_counter,
            slow_tick: self.divider.fires(),
            mode_switch: inputs.mode_switch,
        };

        let idle = self.single.idle_and_not_triggered(inputs.buttons[0])
            || self.multi.idle_and_not_triggered(inputs.buttons[1]);

        self.single.tick(&ctx, inputs.buttons[0]);
        self.multi.tick(&ctx, inputs.buttons[1], inputs.player_pattern);
        self.divider.tick();

        self.master_counter = if self.combined_reset {
            0
        } else {
            (ctx.master_counter + 1) & SCORE_MASK
        };

        let mode_changed =
            self.mode_rise.sample(inputs.mode_switch) | self.mode_fall.sample(!inputs.mode_switch);
        let reset = idle || mode_changed;
        if reset != self.combined_reset {
            trace!(reset, counter = self.master_counter, "master counter hold");
        }
        self.combined_reset = reset;

        self.outputs(inputs)
    }

    /// Combinational outputs of the current state under `inputs`' display
    /// switches.
    pub fn outputs(&self, inputs: &Inputs) -> Outputs {
        let best_single_score = self.single.best_score();
        let best_overall = self.multi.best_overall();

        let (image, display_value) = if inputs.show_multiplayer_best {
            (ImageSelect::MultiplayerBest, best_overall.score)
        } else if inputs.show_single_best {
            (ImageSelect::SingleBest, best_single_score)
        } else {
            (ImageSelect::Live, self.master_counter)
        };

        let [left, left_mid] = match image {
            ImageSelect::MultiplayerBest => [Digit::LetterP, Digit::player(best_overall.player)],
            ImageSelect::SingleBest => [Digit::Blank, Digit::Blank],
            ImageSelect::Live if self.multi.is_active() => self.multi.digits(),
            ImageSelect::Live => [Digit::hex(display_value >> 12), Digit::hex(display_value >> 8)],
        };

        Outputs {
            led_bus: self.single.leds() | self.multi.leds(),
            digits: [
                left,
                left_mid,
                Digit::hex(display_value >> 4),
                Digit::hex(display_value),
            ],
            display_value,
            image,
            master_counter: self.master_counter,
            best_single_score,
            best_multiplayer_score: best_overall.score,
        }
    }

    /// Power-on state. Seeds and the divider ratio are kept.
    pub fn reset(&mut self) {
        self.master_counter = 0;
        self.combined_reset = true;
        self.mode_rise = EdgeDetector::default();
        self.mode_fall = EdgeDetector::default();
        self.divider = ClockDivider::new(self.divider.ratio());
        self.single.reset();
        self.multi.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arbiter() -> TopLevelArbiter {
        TopLevelArbiter::new(0xACE, 1)
    }

    #[test]
    fn single_mode_holds_counter_until_press() {
        let mut arb = arbiter();
        for _ in 0..500 {
            let out = arb.tick(&Inputs::single());
            assert_eq!(out.master_counter, 0);
        }

        arb.tick(&Inputs::single().with_trigger(true));
        let counts: Vec<u32> = (0..5)
            .map(|_| arb.tick(&Inputs::single().with_trigger(true)).master_counter)
            .collect();
        assert_eq!(counts, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn multi_mode_holds_counter_until_press() {
        let mut arb = arbiter();
        for _ in 0..100 {
            assert_eq!(arb.tick(&Inputs::multi()).master_counter, 0);
        }
        let held = Inputs::multi().with_trigger(true);
        arb.tick(&held);
        let counts: Vec<u32> = (0..4).map(|_| arb.tick(&held).master_counter).collect();
        assert_eq!(counts, [1, 2, 3, 4]);
    }

    #[test]
    fn tap_rezeroes_once_before_guard_arms() {
        let mut arb = arbiter();
        arb.tick(&Inputs::multi());
        arb.tick(&Inputs::multi().with_trigger(true));
        assert!(!arb.combined_reset());

        // The guard arms on this tick, but it was still clear going in, and
        // the trigger is already released.
        let out = arb.tick(&Inputs::multi());
        assert!(arb.multi().guard());
        assert!(arb.combined_reset());
        assert_eq!(out.master_counter, 1);

        let counts: Vec<u32> = (0..3)
            .map(|_| arb.tick(&Inputs::multi()).master_counter)
            .collect();
        assert_eq!(counts, [0, 1, 2]);
    }

    #[test]
    fn answer_registers_reset_one_tick_after_guard_clears() {
        let mut arb = arbiter();
        arb.tick(&Inputs::multi());
        arb.tick(&Inputs::multi().with_trigger(true));
        let mut waited = 0;
        while !arb.multi().done_flag() {
            arb.tick(&Inputs::multi());
            waited += 1;
            assert!(waited < 5000, "target never lit");
        }
        let answer = Inputs::multi().with_pattern(arb.multi().selected_target());

        // Comparator output is buffered; the guard still holds.
        arb.tick(&answer);
        assert!(arb.multi().guard());
        assert!(!arb.combined_reset());

        // Guard clears here. It was set going into the tick, so no reset yet.
        let cleared = arb.tick(&answer);
        assert!(!arb.multi().guard());
        assert!(!arb.combined_reset());

        let next = arb.tick(&answer);
        assert!(arb.combined_reset());
        assert_eq!(next.master_counter, cleared.master_counter + 1);
        assert_eq!(arb.tick(&answer).master_counter, 0);
    }

    #[test]
    fn reset_restores_power_on_state() {
        let mut arb = TopLevelArbiter::new(0x123, 3);
        arb.tick(&Inputs::single());
        for _ in 0..50 {
            arb.tick(&Inputs::single().with_trigger(true));
        }
        arb.tick(&Inputs::multi().with_trigger(true));
        assert_ne!(arb, TopLevelArbiter::new(0x123, 3));

        arb.reset();
        assert_eq!(arb, TopLevelArbiter::new(0x123, 3));
    }

    #[test]
    fn mode_switch_edges_reset_counter() {
        let mut arb = arbiter();
        arb.tick(&Inputs::single());
        for _ in 0..10 {
            arb.tick(&Inputs::single().with_trigger(true));
        }
        assert!(arb.master_counter() > 0);

        // Leaving single mode mid-trial still clears the count.
        arb.tick(&Inputs::multi());
        assert!(arb.combined_reset());
        arb.tick(&Inputs::multi());
        assert_eq!(arb.master_counter(), 0);
    }

    #[test]
    fn modes_are_mutually_exclusive() {
        let mut arb = arbiter();
        arb.tick(&Inputs::single());
        assert!(arb.single().is_active() && !arb.multi().is_active());
        arb.tick(&Inputs::multi());
        assert!(!arb.single().is_active() && arb.multi().is_active());
    }

    #[test]
    fn display_priority() {
        let mut arb = arbiter();
        let mut inputs = Inputs::single();
        inputs.show_single_best = true;
        inputs.show_multiplayer_best = true;
        let out = arb.tick(&inputs);
        assert_eq!(out.image, ImageSelect::MultiplayerBest);
        assert_eq!(out.digits[0], Digit::LetterP);

        inputs.show_multiplayer_best = false;
        let out = arb.tick(&inputs);
        assert_eq!(out.image, ImageSelect::SingleBest);
        assert_eq!(out.digits[..2], [Digit::Blank, Digit::Blank]);

        inputs.show_single_best = false;
        let out = arb.tick(&inputs);
        assert_eq!(out.image, ImageSelect::Live);
        assert_eq!(out.display_value, out.master_counter);
    }

    #[test]
    fn live_digits_follow_counter_in_single_mode() {
        let mut arb = arbiter();
        arb.tick(&Inputs::single());
        let mut out = arb.tick(&Inputs::single().with_trigger(true));
        for _ in 0..0x1234 {
            out = arb.tick(&Inputs::single().with_trigger(true));
        }
        assert_eq!(out.master_counter, 0x1234);
        assert_eq!(
            out.digits,
            [Digit::Hex(1), Digit::Hex(2), Digit::Hex(3), Digit::Hex(4)]
        );
    }

    #[test]
    fn live_digits_show_player_banner_in_multi_mode() {
        let mut arb = arbiter();
        let out = arb.tick(&Inputs::multi());
        assert_eq!(out.digits[..2], [Digit::LetterP, Digit::Hex(1)]);
        let out = arb.tick(&Inputs::multi().with_trigger(true));
        assert_eq!(out.digits[..2], [Digit::LetterP, Digit::Hex(2)]);
    }
}

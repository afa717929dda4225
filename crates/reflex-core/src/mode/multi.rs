//! Two-player pattern-matching reaction mode.
//!
//! Players share one trigger and alternate turns: each press hands the turn
//! over and arms the completion guard. After a random delay the target lane
//! lights a one-hot pattern; the trial ends when the switch bank matches it.
//! Elapsed master-counter time is then recorded for the player on turn.
//!
//! The trigger edge and the comparator output are both registered before they
//! reach the guard, so the guard always lags the live inputs by one tick.

use tracing::{debug, trace};

use crate::{
    context::SharedContext,
    display::{Digit, Leds, Player},
    logic::{
        DownCounter, EdgeDetector, PseudoRandomSequence, ToggleFsm, compare,
        score::{SCORE_MASK, improves},
    },
};

/// Fallback pattern for an out-of-range lane index.
const FALLBACK_TARGET: u8 = 0b0000_0001;

/// Maps the low three random bits onto one of the seven target lanes.
///
/// `% 7` folds 7 onto lane 0, so lane 0 is twice as likely as the others.
/// That skew is part of the game and is kept.
pub fn target_from_random(value: u16) -> u8 {
    let lane = (value & 0b111) % 7;
    match lane {
        0..=6 => 1 << lane,
        _ => FALLBACK_TARGET,
    }
}

/// Best score paired with the player who set it.
#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayerBest {
    pub score: u32,
    pub player: Player,
}

impl PlayerBest {
    fn offer(&mut self, candidate: u32, player: Player) -> bool {
        if !improves(candidate, self.score) {
            return false;
        }
        self.score = candidate;
        self.player = player;
        true
    }
}

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiplayerMode {
    active: bool,
    player_turn: Player,
    trigger_edge: EdgeDetector,
    rng: PseudoRandomSequence,
    window: DownCounter,
    guard: ToggleFsm,
    trigger_buffer: bool,
    match_buffer: bool,
    selected_target: u8,
    last_score: [u32; 2],
    shared_best: PlayerBest,
    best_overall: PlayerBest,
}

impl MultiplayerMode {
    pub fn new(seed: u16) -> Self {
        Self {
            active: false,
            player_turn: Player::One,
            trigger_edge: EdgeDetector::default(),
            rng: PseudoRandomSequence::new(seed),
            window: DownCounter::default(),
            guard: ToggleFsm::default(),
            trigger_buffer: false,
            match_buffer: true,
            selected_target: FALLBACK_TARGET,
            last_score: [0; 2],
            shared_best: PlayerBest::default(),
            best_overall: PlayerBest::default(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn player_turn(&self) -> Player {
        self.player_turn
    }

    pub fn selected_target(&self) -> u8 {
        self.selected_target
    }

    pub fn guard(&self) -> bool {
        self.guard.is_set()
    }

    pub fn window(&self) -> &DownCounter {
        &self.window
    }

    pub fn last_score(&self, player: Player) -> u32 {
        self.last_score[player.index()]
    }

    /// Shared best score and the player who set it.
    pub fn shared_best(&self) -> PlayerBest {
        self.shared_best
    }

    pub fn best_overall(&self) -> PlayerBest {
        self.best_overall
    }

    pub fn done_flag(&self) -> bool {
        self.active && self.guard.is_set() && self.window.done()
    }

    pub fn leds(&self) -> Leds {
        if self.done_flag() {
            Leds::target(self.selected_target)
        } else {
            Leds::empty()
        }
    }

    /// Left and right digit of the player banner.
    pub fn digits(&self) -> [Digit; 2] {
        if self.active {
            [Digit::LetterP, Digit::player(self.player_turn)]
        } else {
            [Digit::Blank, Digit::Blank]
        }
    }

    pub fn idle_and_not_triggered(&self, trigger: bool) -> bool {
        self.active && !self.guard.is_set() && !trigger
    }

    /// One primary tick with the live trigger level and switch bank.
    pub fn tick(&mut self, ctx: &SharedContext, trigger: bool, pattern: u8) {
        let prev = *self;
        let active = ctx.mode_switch;
        let done = prev.done_flag();

        self.active = active;

        let rising = self.trigger_edge.sample(trigger) && active;
        if rising {
            self.player_turn = prev.player_turn.other();
            trace!(player = self.player_turn.number(), "turn passed");
        }

        self.guard.step(prev.trigger_buffer, prev.match_buffer);
        self.trigger_buffer = rising;
        self.match_buffer = if active {
            compare(pattern, prev.selected_target)
        } else {
            true
        };

        if ctx.slow_tick {
            self.window.clock(!prev.guard.is_set(), prev.rng.value());
        }
        if !done {
            self.selected_target = target_from_random(prev.rng.value());
        }
        self.rng.advance();

        // Falling done_flag: the trial just ended on this edge.
        if done && !self.done_flag() {
            self.record(ctx.master_counter, prev.player_turn);
        }
    }

    fn record(&mut self, counter: u32, player: Player) {
        let candidate = counter & SCORE_MASK;
        if candidate == 0 {
            return;
        }
        self.last_score[player.index()] = candidate;
        let shared_best = self.shared_best.offer(candidate, player);
        let overall_best = self.best_overall.offer(candidate, player);
        debug!(
            score = candidate,
            player = player.number(),
            shared_best,
            overall_best,
            "multiplayer trial complete"
        );
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.rng.seed());
    }
}

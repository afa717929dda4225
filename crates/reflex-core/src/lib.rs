use tracing::info;

use crate::{arbiter::TopLevelArbiter, config::GameConfig, error::Error};

pub mod arbiter;
pub mod clock;
pub mod config;
pub mod context;
pub mod display;
pub mod error;
pub mod logic;
pub mod mode;
pub mod state;

pub use arbiter::{Inputs, Outputs};
pub use display::{Digit, ImageSelect, Leds, Player};
pub use state::GameState;

/// Powered-on game core driven one primary tick at a time.
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    arbiter: TopLevelArbiter,
    /// Primary ticks since power-on.
    ticks: u64,
}

impl Game {
    /// Validates `config` and powers the core on.
    pub fn new(config: GameConfig) -> Result<Self, Error> {
        config.validate()?;
        info!(%config, "reflex core powered on");
        Ok(Self {
            config,
            arbiter: TopLevelArbiter::new(config.seed, config.divider),
            ticks: 0,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn arbiter(&self) -> &TopLevelArbiter {
        &self.arbiter
    }

    /// Advances one primary tick with `inputs` held for its duration.
    pub fn tick(&mut self, inputs: Inputs) -> Outputs {
        self.ticks += 1;
        self.arbiter.tick(&inputs)
    }

    /// Feeds a whole input trace and collects one output per tick.
    pub fn run<I>(&mut self, inputs: I) -> Vec<Outputs>
    where
        I: IntoIterator<Item = Inputs>,
    {
        inputs.into_iter().map(|i| self.tick(i)).collect()
    }

    /// Holds `inputs` for `n` ticks and returns the last outputs.
    pub fn hold(&mut self, inputs: Inputs, n: usize) -> Outputs {
        let mut out = self.arbiter.outputs(&inputs);
        for _ in 0..n {
            out = self.tick(inputs);
        }
        out
    }

    /// Outputs of the current state, without clocking.
    pub fn outputs(&self, inputs: &Inputs) -> Outputs {
        self.arbiter.outputs(inputs)
    }

    /// Back to the power-on state, scores included.
    pub fn power_on_reset(&mut self) {
        self.arbiter.reset();
        self.ticks = 0;
    }

    pub fn save_state(&self) -> GameState {
        GameState {
            config: self.config,
            ticks: self.ticks,
            arbiter: self.arbiter,
        }
    }

    pub fn load_state(&mut self, state: &GameState) -> Result<(), Error> {
        state.config.validate()?;
        self.config = state.config;
        self.ticks = state.ticks;
        self.arbiter = state.arbiter;
        Ok(())
    }
}

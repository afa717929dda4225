#![allow(dead_code)]

use anyhow::{Result, bail};
use reflex_core::{Game, Inputs, Leds, Outputs, Player, config::GameConfig};

/// Upper bound on ticks for one stimulus delay (12-bit countdown plus slack).
pub const MAX_WAIT_TICKS: usize = 0x1000 + 64;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// Core with the slow domain running at the primary rate.
pub fn fast_game() -> Game {
    Game::new(GameConfig::default().with_divider(1)).expect("default config is valid")
}

/// Plays one single-player trial and returns the score it should record.
///
/// Press and hold until every LED lights, release, then press again.
pub fn play_single_trial(game: &mut Game) -> Result<u32> {
    game.tick(Inputs::single());
    let held = Inputs::single().with_trigger(true);
    let mut out = game.tick(held);
    let mut waited = 0;
    while out.led_bus != Leds::ALL {
        out = game.tick(held);
        waited += 1;
        if waited > MAX_WAIT_TICKS {
            bail!("single-player stimulus never lit");
        }
    }
    let released = game.tick(Inputs::single());
    if !released.led_bus.is_empty() {
        bail!("releasing the trigger left the stimulus lit");
    }
    // The falling toggle offers the count settled before the press.
    let expected = released.master_counter;
    game.tick(held);
    game.tick(Inputs::single());
    Ok(expected)
}

/// Plays one multiplayer trial and returns who was on turn and the score
/// that should be recorded for them.
pub fn play_multi_trial(game: &mut Game) -> Result<(Player, u32)> {
    game.tick(Inputs::multi());
    game.tick(Inputs::multi().with_trigger(true));
    let player = game.arbiter().multi().player_turn();

    let mut out = game.tick(Inputs::multi());
    let mut waited = 0;
    while out.led_bus.is_empty() {
        out = game.tick(Inputs::multi());
        waited += 1;
        if waited > MAX_WAIT_TICKS {
            bail!("multiplayer target never lit");
        }
    }
    let target = out.led_bus.bits() as u8;
    if target.count_ones() != 1 {
        bail!("target {target:#010b} is not one-hot");
    }

    let answer = Inputs::multi().with_pattern(target);
    let expected = loop {
        let before: Outputs = out;
        out = game.tick(answer);
        if out.led_bus.is_empty() {
            break before.master_counter;
        }
        waited += 1;
        if waited > MAX_WAIT_TICKS {
            bail!("answer never accepted");
        }
    };
    game.tick(Inputs::multi());
    Ok((player, expected))
}

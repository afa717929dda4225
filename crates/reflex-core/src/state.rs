//! Save-state snapshot of a running core.
//!
//! The snapshot is the whole register file plus the config it was built with.
//! Restoring it and replaying the same inputs reproduces the same outputs.
//! Enable `savestate-serde` for serde derives and `savestate-postcard` for a
//! compact byte encoding.

use crate::{arbiter::TopLevelArbiter, config::GameConfig};

#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    pub config: GameConfig,
    pub ticks: u64,
    pub arbiter: TopLevelArbiter,
}

#[cfg(feature = "savestate-postcard")]
impl GameState {
    pub fn to_postcard_bytes(&self) -> Result<Vec<u8>, crate::error::Error> {
        Ok(postcard::to_stdvec(self)?)
    }

    pub fn from_postcard_bytes(bytes: &[u8]) -> Result<Self, crate::error::Error> {
        Ok(postcard::from_bytes(bytes)?)
    }
}

//! The two game modes. Exactly one is active at a time, chosen by the
//! mode-select switch; the inactive one drives its outputs low.

pub mod multi;
pub mod single;

pub use multi::{MultiplayerMode, PlayerBest};
pub use single::SinglePlayerMode;

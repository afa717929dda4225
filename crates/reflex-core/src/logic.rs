//! Small clocked building blocks shared by both game modes.
//!
//! Each block is a plain `Copy` struct whose fields are its registers; the
//! modes own as many instances as they need.

pub mod comparator;
pub mod down_counter;
pub mod edge;
pub mod lfsr;
pub mod score;
pub mod toggle;

pub use comparator::compare;
pub use down_counter::DownCounter;
pub use edge::EdgeDetector;
pub use lfsr::PseudoRandomSequence;
pub use score::ScoreTracker;
pub use toggle::ToggleFsm;

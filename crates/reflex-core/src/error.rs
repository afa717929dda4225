use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Seed would park the shift register on zero or does not fit 12 bits.
    #[error("invalid seed {0:#06x}: must be nonzero and fit in 12 bits")]
    InvalidSeed(u16),

    /// Slow tick divider must be at least one primary tick.
    #[error("clock divider ratio must be nonzero")]
    InvalidDivider,

    #[cfg(feature = "savestate-postcard")]
    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] postcard::Error),
}

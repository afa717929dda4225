//! Output-side types handed to the display pipeline.
//!
//! The raster pipeline and pixel ROM live outside the core. They consume the
//! value to show, an [`ImageSelect`], four [`Digit`]s for the seven-segment
//! bank and the [`Leds`] bus.

use bitflags::bitflags;

bitflags! {
    /// Ten-LED output bus.
    ///
    /// ```text
    /// 9 8 7 6 5 4 3 2 1 0
    /// H H T T T T T T T T
    /// ```
    /// - `T`: target lane, shows the multiplayer one-hot pattern
    /// - `H`: upper pair, only lit by the single-player "all on" stimulus
    #[cfg_attr(
        feature = "savestate-serde",
        derive(serde::Serialize, serde::Deserialize)
    )]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Leds: u16 {
        const TARGET = 0b00_1111_1111;
        const HIGH = 0b11_0000_0000;
        const ALL = Self::TARGET.bits() | Self::HIGH.bits();
    }
}

impl Default for Leds {
    fn default() -> Self {
        Self::empty()
    }
}

impl Leds {
    /// Places an 8-bit pattern on the target lane.
    pub fn target(pattern: u8) -> Self {
        Self::from_bits_truncate(u16::from(pattern))
    }
}

/// One seven-segment digit, either a hex nibble or a fixed glyph.
#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Digit {
    #[default]
    Blank,
    /// Low nibble of the value is shown as 0-F.
    Hex(u8),
    /// Letter `P` (player prefix).
    LetterP,
}

/// Segment patterns for 0-F, bit order `gfedcba`, active high.
const HEX_SEGMENTS: [u8; 16] = [
    0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, //
    0x7F, 0x6F, 0x77, 0x7C, 0x39, 0x5E, 0x79, 0x71,
];
const LETTER_P_SEGMENTS: u8 = 0x73;

impl Digit {
    pub fn hex(value: u32) -> Self {
        Self::Hex((value & 0xF) as u8)
    }

    /// Player number as shown on the board (`1` or `2`).
    pub fn player(player: Player) -> Self {
        Self::Hex(player.number())
    }

    pub fn segments(self) -> u8 {
        match self {
            Self::Blank => 0,
            Self::Hex(n) => HEX_SEGMENTS[(n & 0xF) as usize],
            Self::LetterP => LETTER_P_SEGMENTS,
        }
    }
}

/// Multiplayer turn bit.
#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    One = 0,
    Two = 1,
}

impl Player {
    pub fn other(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    /// Index into per-player tables (the raw turn bit).
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn number(self) -> u8 {
        self as u8 + 1
    }
}

/// Which source the display pipeline is rendering.
#[cfg_attr(
    feature = "savestate-serde",
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSelect {
    /// Live master counter.
    #[default]
    Live,
    SingleBest,
    MultiplayerBest,
}

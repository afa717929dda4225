//! Switch-bank pattern comparator.

/// Returns `true` when `live` equals a non-empty `target`.
///
/// An all-zero target means no pattern is armed and never matches, even
/// against an all-zero switch bank.
#[inline]
pub fn compare(live: u8, target: u8) -> bool {
    target != 0 && live == target
}

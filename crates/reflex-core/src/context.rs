/// Signals both modes observe during one primary tick.
///
/// Everything here is a settled value from before the tick; modes never see
/// each other's in-flight updates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SharedContext {
    /// Master counter value at the start of the tick (elapsed reaction time).
    pub master_counter: u32,
    /// The tick is also a slow-domain tick.
    pub slow_tick: bool,
    /// Mode-select switch; `true` selects multiplayer.
    pub mode_switch: bool,
}

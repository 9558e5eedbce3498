/// Time in microseconds.
///
/// Used both as a timestamp from a free-running clock and as an interval.
/// Timestamps wrap around after roughly 71 minutes, so elapsed time must
/// always be computed with [MicroSeconds::elapsed_since].
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Copy, Clone)]
pub struct MicroSeconds(u32);
impl MicroSeconds {
    /// Creates a new `MicroSeconds`.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Creates a new `MicroSeconds` from a number of milliseconds.
    pub const fn from_millis(value: u32) -> Self {
        Self(value * 1000)
    }

    /// Returns the value as a `u32`.
    pub const fn get_value(&self) -> u32 {
        self.0
    }

    /// Returns the interval from `earlier` to `self`, tolerating one wrap of
    /// the underlying clock.
    pub fn elapsed_since(&self, earlier: MicroSeconds) -> MicroSeconds {
        MicroSeconds(self.0.wrapping_sub(earlier.0))
    }
}

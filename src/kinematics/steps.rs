/// Underlying type representing the number of steps.
type StepRepr = i32;

/// Actuator position or displacement, in steps.
///
/// Arithmetic on `Steps` saturates, so a runaway target can never wrap
/// around to the opposite end of the axis.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
pub struct Steps(StepRepr);
impl Steps {
    pub const fn new(steps: StepRepr) -> Self {
        Self(steps)
    }

    pub const fn zero() -> Self {
        Steps(0)
    }

    pub const fn get_value(&self) -> StepRepr {
        self.0
    }

    /// Offsets the value, clamping at the representable range.
    pub fn saturating_add(&self, delta: Steps) -> Self {
        Steps(self.0.saturating_add(delta.0))
    }
}

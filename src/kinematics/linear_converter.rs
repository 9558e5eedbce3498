use crate::Mils;
use crate::Steps;

/// Conversions for linear motion.
///
/// This converts a distance in [Mils] into a number of [Steps] for one
/// axis, using that axis's calibration.
#[derive(Debug, Clone, Copy)]
pub struct LinearConverter {
    steps_per_inch: i32,
}

impl LinearConverter {
    /// Creates a new linear converter.
    pub const fn new(steps_per_inch: i32) -> Self {
        Self { steps_per_inch }
    }

    /// Converts a value in [Mils] to a value in [Steps].
    ///
    /// Partial steps are truncated toward zero, so equal and opposite
    /// distances always produce equal and opposite step counts.
    pub fn to_steps(&self, mils: Mils) -> Steps {
        let steps = mils.get_value() as i64 * self.steps_per_inch as i64 / 1000;
        Steps::new(steps.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
    }
}

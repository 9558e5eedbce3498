use crate::MilliDegrees;
use crate::Steps;

/// Conversions for rotary motion.
///
/// This converts an angle in [MilliDegrees] into a number of [Steps] for a
/// rotary axis with a fixed number of steps per revolution.
#[derive(Debug, Clone, Copy)]
pub struct RotaryConverter {
    steps_per_revolution: i32,
}

impl RotaryConverter {
    pub const fn new(steps_per_revolution: i32) -> Self {
        Self {
            steps_per_revolution,
        }
    }

    /// Converts a value in [MilliDegrees] to a value in [Steps].
    ///
    /// Partial steps are truncated toward zero. Returns `None` if the result
    /// does not fit in [Steps].
    pub fn to_steps(&self, millidegrees: MilliDegrees) -> Option<Steps> {
        (millidegrees.get_value() as i64)
            .checked_mul(self.steps_per_revolution as i64)
            .and_then(|q| q.checked_div(360000))
            .and_then(|q| q.try_into().ok())
            .map(Steps::new)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::millidegrees::test::millidegrees;
    use proptest::prelude::*;

    #[test]
    fn test_tray_rotations() {
        let rc = RotaryConverter::new(5000);
        assert_eq!(
            Some(Steps::new(2500)),
            rc.to_steps(MilliDegrees::from_degrees(180))
        );
        assert_eq!(
            Some(Steps::new(1250)),
            rc.to_steps(MilliDegrees::from_degrees(90))
        );
        assert_eq!(
            Some(Steps::new(-1250)),
            rc.to_steps(MilliDegrees::from_degrees(-90))
        );
    }

    #[test]
    fn test_overflow() {
        let rc = RotaryConverter::new(i32::MAX);
        assert_eq!(None, rc.to_steps(MilliDegrees::new(i32::MAX)));
    }

    proptest! {
        #[test]
        fn test_full_turn_is_one_revolution(spr in 1i32..100_000) {
            let rc = RotaryConverter::new(spr);
            assert_eq!(
                Some(Steps::new(spr)),
                rc.to_steps(MilliDegrees::from_degrees(360))
            );
        }
    }

    proptest! {
        #[test]
        fn test_antisymmetric(angle in millidegrees()) {
            let rc = RotaryConverter::new(5000);
            let forward = rc.to_steps(angle).unwrap().get_value();
            let backward = rc
                .to_steps(MilliDegrees::new(-angle.get_value()))
                .unwrap()
                .get_value();
            assert_eq!(-forward, backward);
        }
    }
}

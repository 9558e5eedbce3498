use crate::Direction;

/// Pulse output of a stepper driver.
///
/// Each call emits exactly one step. Position, speed and timing are the
/// business of [crate::AccelStepper].
pub trait Stepper {
    fn step(&mut self, direction: Direction);
}

#[cfg(test)]
pub use self::test::TestStepper;

#[cfg(test)]
pub mod test {
    use super::*;
    use crate::kinematics::direction::test::direction;
    use proptest::collection;
    use proptest::prelude::*;

    /// Stepper for tests, which counts pulses instead of emitting them.
    #[derive(Debug, Clone, Default)]
    pub struct TestStepper {
        position: i64,
        pulses: u64,
        reversals: u32,
        last_direction: Option<Direction>,
    }
    impl TestStepper {
        pub fn new(position: i64) -> Self {
            Self {
                position,
                ..Default::default()
            }
        }

        /// Net position after every pulse so far.
        pub fn get_position(&self) -> i64 {
            self.position
        }

        /// Pulses emitted in either direction.
        pub fn get_pulses(&self) -> u64 {
            self.pulses
        }

        /// Number of times consecutive pulses changed direction.
        pub fn reversals(&self) -> u32 {
            self.reversals
        }
    }
    impl Stepper for TestStepper {
        fn step(&mut self, direction: Direction) {
            match direction {
                Direction::Positive => self.position += 1,
                Direction::Negative => self.position -= 1,
            }
            if self.last_direction.is_some_and(|last| last != direction) {
                self.reversals += 1;
            }
            self.last_direction = Some(direction);
            self.pulses += 1;
        }
    }

    proptest! {
        #[test]
        fn test_counts_pulses(
            start in -1_000_000i64..1_000_000,
            dirs in collection::vec(direction(), 0..50)
        ) {
            let mut stepper = TestStepper::new(start);
            for dir in &dirs {
                stepper.step(*dir);
            }
            let net: i64 = dirs
                .iter()
                .map(|d| if *d == Direction::Positive { 1 } else { -1 })
                .sum();
            let reversals =
                dirs.windows(2).filter(|w| w[0] != w[1]).count() as u32;

            assert_eq!(start + net, stepper.get_position());
            assert_eq!(dirs.len() as u64, stepper.get_pulses());
            assert_eq!(reversals, stepper.reversals());
        }
    }
}

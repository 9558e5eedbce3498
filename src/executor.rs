use crate::Actuator;
use crate::Board;
use crate::LinearConverter;
use crate::MachineConfig;
use crate::PrimitiveCommand;
use crate::Rig;
use crate::RotaryConverter;
use crate::SprayRelay;

/// Turns primitive commands into actuator and relay actions.
///
/// Execution never waits for motion: it only updates actuator targets and
/// the relay level.
#[derive(Debug, Clone, Copy)]
pub struct Executor {
    x: LinearConverter,
    y: LinearConverter,
    rotation: RotaryConverter,
}
impl Executor {
    pub fn new(config: &MachineConfig) -> Self {
        Self {
            x: LinearConverter::new(config.x_steps_per_inch),
            y: LinearConverter::new(config.y_steps_per_inch),
            rotation: RotaryConverter::new(
                config.rotation_steps_per_revolution,
            ),
        }
    }

    /// Executes one primitive command against the rig.
    ///
    /// A spraying move engages the relay as soon as the move is issued, not
    /// when the axis starts moving.
    pub fn execute<B: Board>(
        &self,
        command: &PrimitiveCommand,
        rig: &mut Rig<B>,
    ) {
        match *command {
            PrimitiveCommand::MoveX { distance, spray } => {
                if spray {
                    rig.relay.engage();
                }
                rig.x.move_by(self.x.to_steps(distance));
            }
            PrimitiveCommand::MoveY { distance, spray } => {
                if spray {
                    rig.relay.engage();
                }
                rig.y.move_by(self.y.to_steps(distance));
            }
            PrimitiveCommand::Rotate(angle) => {
                // Out-of-range angles are not representable in steps.
                if let Some(steps) = self.rotation.to_steps(angle) {
                    rig.rotation.move_by(steps);
                }
            }
            PrimitiveCommand::Spray(true) => rig.relay.engage(),
            PrimitiveCommand::Spray(false) => rig.relay.release(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::board::test::test_rig;
    use crate::MilliDegrees;
    use crate::Mils;
    use crate::Steps;

    fn executor() -> Executor {
        Executor::new(&MachineConfig::DEFAULT)
    }

    #[test]
    fn test_spraying_move_engages_relay_first() {
        let mut rig = test_rig();
        let cmd = PrimitiveCommand::move_x(Mils::new(26_000), true);
        executor().execute(&cmd, &mut rig);

        assert_eq!(vec![true], rig.relay.history);
        assert_eq!(vec![Steps::new(3302)], rig.x.relative_moves);
        // Nothing has moved yet, but the spray is already on.
        assert_eq!(Steps::zero(), rig.x.current_position());
        assert!(rig.relay.is_engaged());
    }

    #[test]
    fn test_dry_move_leaves_relay() {
        let mut rig = test_rig();
        let cmd = PrimitiveCommand::move_y(Mils::new(-4415), false);
        executor().execute(&cmd, &mut rig);

        assert!(rig.relay.history.is_empty());
        assert_eq!(vec![Steps::new(-746)], rig.y.relative_moves);
        assert!(rig.x.relative_moves.is_empty());
    }

    #[test]
    fn test_offsets_truncate() {
        let mut rig = test_rig();
        let exec = executor();
        for cmd in [
            PrimitiveCommand::move_x(Mils::new(4500), false),
            PrimitiveCommand::move_x(Mils::new(-4500), false),
            PrimitiveCommand::move_y(Mils::new(4160), false),
        ] {
            exec.execute(&cmd, &mut rig);
        }
        assert_eq!(
            vec![Steps::new(571), Steps::new(-571)],
            rig.x.relative_moves
        );
        assert_eq!(vec![Steps::new(703)], rig.y.relative_moves);
    }

    #[test]
    fn test_rotate() {
        let mut rig = test_rig();
        let exec = executor();
        exec.execute(
            &PrimitiveCommand::rotate(MilliDegrees::from_degrees(180)),
            &mut rig,
        );
        exec.execute(
            &PrimitiveCommand::rotate(MilliDegrees::from_degrees(90)),
            &mut rig,
        );
        assert_eq!(
            vec![Steps::new(2500), Steps::new(1250)],
            rig.rotation.relative_moves
        );
        assert!(rig.relay.history.is_empty());
    }

    #[test]
    fn test_spray_toggle() {
        let mut rig = test_rig();
        let exec = executor();
        exec.execute(&PrimitiveCommand::spray_on(), &mut rig);
        exec.execute(&PrimitiveCommand::spray_off(), &mut rig);
        assert_eq!(vec![true, false], rig.relay.history);
        assert!(!rig.motors_running());
    }
}

use crate::MicroSeconds;
use crate::Steps;

/// Non-blocking, position-controlled axis drive.
///
/// An actuator is given a target and speed limits, and then advanced by
/// calling [Actuator::run] from the control loop. No method blocks waiting
/// for motion to complete.
pub trait Actuator {
    /// Sets a new target relative to the current target.
    fn move_by(&mut self, delta: Steps);

    /// Sets a new absolute target.
    fn move_to(&mut self, target: Steps);

    /// Decelerates to rest as quickly as the acceleration limit allows.
    ///
    /// The actuator keeps reporting [Actuator::is_running] until it has
    /// actually come to rest.
    fn stop(&mut self);

    /// Re-gauges the current position, without moving.
    ///
    /// This also cancels any motion in progress: the target becomes the new
    /// position and the speed becomes zero.
    fn set_current_position(&mut self, position: Steps);

    /// Returns the current position, as counted in emitted steps.
    fn current_position(&self) -> Steps;

    /// Returns the most recently set target.
    fn target_position(&self) -> Steps;

    /// Returns `true` while the actuator is moving or has distance to go.
    fn is_running(&self) -> bool;

    /// Sets the maximum speed, in steps per second.
    fn set_max_speed(&mut self, steps_per_second: f32);

    /// Sets the acceleration and deceleration rate, in steps per second per
    /// second.
    fn set_acceleration(&mut self, steps_per_second_sq: f32);

    /// Advances the actuator, emitting at most one step if one is due.
    ///
    /// # Returns
    ///
    /// `true` if the actuator is still running after this call.
    fn run(&mut self, now: MicroSeconds) -> bool;
}

/// Actuator for tests.
///
/// A move completes after `ticks_per_move` further calls to `run` have
/// elapsed (zero means the next `run` completes it). While `held`, `run`
/// makes no progress at all. Every relative move and stop is recorded.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct TestActuator {
    pub position: Steps,
    pub target: Steps,
    pub ticks_per_move: u32,
    pub held: bool,
    pub relative_moves: Vec<Steps>,
    pub absolute_moves: Vec<Steps>,
    pub stops: usize,
    pub max_speed: f32,
    pub acceleration: f32,
    remaining: u32,
}
#[cfg(test)]
impl Actuator for TestActuator {
    fn move_by(&mut self, delta: Steps) {
        self.relative_moves.push(delta);
        self.target = self.target.saturating_add(delta);
        self.remaining = self.ticks_per_move;
    }

    fn move_to(&mut self, target: Steps) {
        self.absolute_moves.push(target);
        self.target = target;
        self.remaining = self.ticks_per_move;
    }

    fn stop(&mut self) {
        self.stops += 1;
        self.target = self.position;
    }

    fn set_current_position(&mut self, position: Steps) {
        self.position = position;
        self.target = position;
    }

    fn current_position(&self) -> Steps {
        self.position
    }

    fn target_position(&self) -> Steps {
        self.target
    }

    fn is_running(&self) -> bool {
        self.position != self.target
    }

    fn set_max_speed(&mut self, steps_per_second: f32) {
        self.max_speed = steps_per_second;
    }

    fn set_acceleration(&mut self, steps_per_second_sq: f32) {
        self.acceleration = steps_per_second_sq;
    }

    fn run(&mut self, _now: MicroSeconds) -> bool {
        if !self.held && self.is_running() {
            if self.remaining == 0 {
                self.position = self.target;
            } else {
                self.remaining -= 1;
            }
        }
        self.is_running()
    }
}

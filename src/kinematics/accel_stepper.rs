use core::convert::Infallible;
use core::time::Duration;

use accel_stepper::{Device, Driver, StepContext, SystemClock};

use crate::Actuator;
use crate::Direction;
use crate::MicroSeconds;
use crate::Stepper;
use crate::Steps;

/// [Actuator] built on the `accel-stepper` [Driver].
///
/// The driver plans the speed ramp and decides when each step is due; this
/// type feeds it the control-loop clock and forwards its steps to a
/// [Stepper].
///
/// # Type Parameters
///
/// - `S`: type of the underlying [Stepper].
pub struct AccelStepper<S> {
    driver: Driver,
    pulses: Pulses<S>,
    uptime: Uptime,
}

impl<S: Stepper> AccelStepper<S> {
    /// Creates a new `AccelStepper` at position zero.
    ///
    /// The driver starts with limits of one step per second, and one step
    /// per second per second. Real limits are set before moving.
    pub fn new(stepper: S) -> Self {
        Self {
            driver: Driver::new(),
            pulses: Pulses {
                stepper,
                position: 0,
            },
            uptime: Uptime::new(),
        }
    }

    /// Returns the underlying stepper.
    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.pulses.stepper
    }
}

impl<S: Stepper> Actuator for AccelStepper<S> {
    fn move_by(&mut self, delta: Steps) {
        let target = self.target_position().saturating_add(delta);
        self.move_to(target);
    }

    fn move_to(&mut self, target: Steps) {
        self.driver.move_to(target.get_value() as i64);
    }

    fn stop(&mut self) {
        self.driver.stop();
    }

    fn set_current_position(&mut self, position: Steps) {
        self.driver.set_current_position(position.get_value() as i64);
        self.pulses.position = position.get_value() as i64;
    }

    fn current_position(&self) -> Steps {
        to_steps(self.driver.current_position())
    }

    fn target_position(&self) -> Steps {
        to_steps(self.driver.target_position())
    }

    fn is_running(&self) -> bool {
        self.driver.is_running()
    }

    fn set_max_speed(&mut self, steps_per_second: f32) {
        self.driver.set_max_speed(steps_per_second);
    }

    fn set_acceleration(&mut self, steps_per_second_sq: f32) {
        self.driver.set_acceleration(steps_per_second_sq);
    }

    fn run(&mut self, now: MicroSeconds) -> bool {
        self.uptime.advance(now);
        let _ = self.driver.poll(&mut self.pulses, &self.uptime);
        self.driver.is_running()
    }
}

fn to_steps(position: i64) -> Steps {
    Steps::new(position.clamp(i32::MIN as i64, i32::MAX as i64) as i32)
}

/// Turns the driver's step notifications into pulses.
///
/// The driver reports each step as the new absolute position, so the
/// direction comes from comparing it with the previous one. The position
/// must be re-gauged together with the driver's.
struct Pulses<S> {
    stepper: S,
    position: i64,
}
impl<S: Stepper> Device for Pulses<S> {
    type Error = Infallible;

    fn step(&mut self, ctx: &StepContext) -> Result<(), Self::Error> {
        self.stepper
            .step(Direction::toward(ctx.position - self.position));
        self.position = ctx.position;
        Ok(())
    }
}

/// Time since the first call to `run`, extended past wraps of the
/// control-loop clock. The driver requires a clock that never goes back.
struct Uptime {
    last: MicroSeconds,
    micros: u64,
}
impl Uptime {
    const fn new() -> Self {
        Self {
            last: MicroSeconds::new(0),
            micros: 0,
        }
    }

    fn advance(&mut self, now: MicroSeconds) {
        self.micros += now.elapsed_since(self.last).get_value() as u64;
        self.last = now;
    }
}
impl SystemClock for Uptime {
    fn elapsed(&self) -> Duration {
        Duration::from_micros(self.micros)
    }
}

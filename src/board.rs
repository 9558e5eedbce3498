use crate::Actuator;
use crate::HomeSensor;
use crate::MicroSeconds;
use crate::SprayRelay;

/// Names the concrete device types of one machine.
pub trait Board {
    type XAxis: Actuator;
    type YAxis: Actuator;
    type Rotation: Actuator;
    type Relay: SprayRelay;
    type XHome: HomeSensor;
    type YHome: HomeSensor;
}

/// The devices of a machine, owned together.
pub struct Rig<B: Board> {
    pub x: B::XAxis,
    pub y: B::YAxis,
    pub rotation: B::Rotation,
    pub relay: B::Relay,
    pub x_home: B::XHome,
    pub y_home: B::YHome,
}
impl<B: Board> Rig<B> {
    pub fn new(
        x: B::XAxis,
        y: B::YAxis,
        rotation: B::Rotation,
        relay: B::Relay,
        x_home: B::XHome,
        y_home: B::YHome,
    ) -> Self {
        Self {
            x,
            y,
            rotation,
            relay,
            x_home,
            y_home,
        }
    }

    /// Samples both home sensors.
    pub fn update_sensors(&mut self, now: MicroSeconds) {
        self.x_home.update(now);
        self.y_home.update(now);
    }

    /// Gives every actuator the chance to take a step.
    pub fn run(&mut self, now: MicroSeconds) {
        self.x.run(now);
        self.y.run(now);
        self.rotation.run(now);
    }

    /// Returns `true` if any actuator has motion left.
    pub fn motors_running(&self) -> bool {
        self.x.is_running() || self.y.is_running() || self.rotation.is_running()
    }

    /// Asks every actuator to decelerate to rest.
    pub fn stop_all(&mut self) {
        self.x.stop();
        self.y.stop();
        self.rotation.stop();
    }
}

#[cfg(test)]
pub use self::test::{BenchBoard, TestBoard};

use crate::Actuator;
use crate::MicroSeconds;

/// Speed and acceleration limits for one actuator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionProfile {
    /// Maximum speed, in steps per second.
    pub max_speed: f32,
    /// Acceleration, in steps per second per second.
    pub acceleration: f32,
}
impl MotionProfile {
    pub const fn new(max_speed: f32, acceleration: f32) -> Self {
        Self {
            max_speed,
            acceleration,
        }
    }

    /// Applies both limits to an actuator.
    pub fn apply<A: Actuator>(&self, actuator: &mut A) {
        actuator.set_max_speed(self.max_speed);
        actuator.set_acceleration(self.acceleration);
    }
}

/// How much diagnostic output to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only protocol notices and errors.
    Quiet,
    /// Notices, errors and `INFO: ` lines.
    Info,
}
impl Verbosity {
    pub fn shows_info(&self) -> bool {
        *self == Verbosity::Info
    }
}

/// Machine calibration and tuning.
///
/// There is no configuration storage on the target: the firmware builds its
/// controller from [MachineConfig::DEFAULT], and tests adjust individual
/// fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MachineConfig {
    pub x_steps_per_inch: i32,
    pub y_steps_per_inch: i32,
    /// Pulses per full revolution of the tray, as used by rotate commands.
    pub rotation_steps_per_revolution: i32,
    pub x_profile: MotionProfile,
    pub y_profile: MotionProfile,
    pub rotation_profile: MotionProfile,
    /// Maximum speed of the X and Y axes while seeking their home sensors.
    pub homing_speed: f32,
    /// Absolute target used to drive an axis towards its home sensor.
    pub homing_seek_target: i32,
    pub debounce_interval: MicroSeconds,
    /// Abandons homing after this long. `None` homes indefinitely.
    pub homing_timeout: Option<MicroSeconds>,
    pub verbosity: Verbosity,
}
impl MachineConfig {
    pub const DEFAULT: MachineConfig = MachineConfig {
        x_steps_per_inch: 127,
        y_steps_per_inch: 169,
        rotation_steps_per_revolution: 5000,
        x_profile: MotionProfile::new(5000.0, 20000.0),
        y_profile: MotionProfile::new(5000.0, 5000.0),
        rotation_profile: MotionProfile::new(1000.0, 200.0),
        homing_speed: 500.0,
        homing_seek_target: -1_000_000,
        debounce_interval: MicroSeconds::from_millis(10),
        homing_timeout: None,
        verbosity: Verbosity::Info,
    };

    /// Profile for the X axis while homing.
    pub fn x_homing_profile(&self) -> MotionProfile {
        MotionProfile::new(self.homing_speed, self.x_profile.acceleration)
    }

    /// Profile for the Y axis while homing.
    pub fn y_homing_profile(&self) -> MotionProfile {
        MotionProfile::new(self.homing_speed, self.y_profile.acceleration)
    }
}
impl Default for MachineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

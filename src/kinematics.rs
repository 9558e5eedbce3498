mod accel_stepper;
mod actuator;
mod direction;
mod home_sensor;
mod limit_switch;
mod linear_converter;
mod rotary_converter;
mod stepper;
mod steps;

pub use accel_stepper::AccelStepper;
pub use actuator::Actuator;
pub use direction::Direction;
pub use home_sensor::DebouncedSwitch;
pub use home_sensor::HomeSensor;
pub use limit_switch::LimitSwitch;
pub use limit_switch::LimitSwitchState;
pub use linear_converter::LinearConverter;
pub use rotary_converter::RotaryConverter;
pub use stepper::Stepper;
pub use steps::Steps;

#[cfg(test)]
pub use actuator::TestActuator;
#[cfg(test)]
pub use home_sensor::TestHomeSensor;
#[cfg(test)]
pub use limit_switch::TestLimitSwitch;
#[cfg(test)]
pub use stepper::TestStepper;

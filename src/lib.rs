#![cfg_attr(not(test), no_std)]

#[macro_use]
mod log;

mod board;
mod command;
mod config;
mod controller;
mod executor;
mod kinematics;
mod microseconds;
mod millidegrees;
mod mils;
mod pattern;
mod relay;
mod sequencer;
mod serial;
mod state;

pub use board::Board;
pub use board::Rig;
pub use command::Command;
pub use config::MachineConfig;
pub use config::MotionProfile;
pub use config::Verbosity;
pub use controller::Controller;
pub use executor::Executor;
pub use kinematics::AccelStepper;
pub use kinematics::Actuator;
pub use kinematics::DebouncedSwitch;
pub use kinematics::Direction;
pub use kinematics::HomeSensor;
pub use kinematics::LimitSwitch;
pub use kinematics::LimitSwitchState;
pub use kinematics::LinearConverter;
pub use kinematics::RotaryConverter;
pub use kinematics::Stepper;
pub use kinematics::Steps;
pub use microseconds::MicroSeconds;
pub use millidegrees::MilliDegrees;
pub use mils::Mils;
pub use pattern::PrimitiveCommand;
pub use pattern::Side;
pub use pattern::SideSelection;
pub use relay::SprayRelay;
pub use sequencer::Cursor;
pub use sequencer::Sequencer;
pub use sequencer::SequencerStep;
pub use serial::LineReader;
pub use serial::SerialPort;
pub use state::SystemState;

#[cfg(test)]
pub use kinematics::TestActuator;
#[cfg(test)]
pub use kinematics::TestHomeSensor;
#[cfg(test)]
pub use kinematics::TestLimitSwitch;
#[cfg(test)]
pub use kinematics::TestStepper;

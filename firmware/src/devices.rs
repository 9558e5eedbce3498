mod clock;
mod home_switch;
mod relay;
mod stepper;
mod uart;

pub use clock::Clock;
pub use home_switch::HomeSwitch;
pub use relay::ActiveLowRelay;
pub use stepper::{Polarity, PulseTiming, Stepper};
pub use uart::Uart;

use arduino_hal::port::{
    mode::{Input, PullUp},
    Pin, PinOps,
};
use paintstepper::{LimitSwitch, LimitSwitchState};

/// Home switch, wired to ground on a pulled-up input.
///
/// # Type Parameters
///
/// - `P`: pin
pub struct HomeSwitch<P> {
    pin: Pin<Input<PullUp>, P>,
}
impl<P: PinOps> HomeSwitch<P> {
    pub fn new(pin: Pin<Input<PullUp>, P>) -> Self {
        Self { pin }
    }
}

/// A low input means the switch is closed.
impl<P: PinOps> LimitSwitch for HomeSwitch<P> {
    fn read_limitswitch_state(&self) -> LimitSwitchState {
        if self.pin.is_low() {
            LimitSwitchState::AtLimit
        } else {
            LimitSwitchState::NotAtLimit
        }
    }
}

use arduino_hal::port::{mode::Output, Pin, PinOps};
use paintstepper::SprayRelay;

/// Relay module that switches on when its input is driven low.
///
/// # Type Parameters
///
/// - `P`: pin
pub struct ActiveLowRelay<P> {
    pin: Pin<Output, P>,
}
impl<P: PinOps> ActiveLowRelay<P> {
    /// Creates a new relay, released.
    pub fn new(mut pin: Pin<Output, P>) -> Self {
        pin.set_high();
        Self { pin }
    }
}

impl<P: PinOps> SprayRelay for ActiveLowRelay<P> {
    fn engage(&mut self) {
        self.pin.set_low();
    }

    fn release(&mut self) {
        self.pin.set_high();
    }

    fn is_engaged(&self) -> bool {
        self.pin.is_set_low()
    }
}

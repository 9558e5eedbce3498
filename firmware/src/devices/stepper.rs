use arduino_hal::{
    delay_us,
    port::{mode::Output, Pin, PinOps},
};
use paintstepper::{Direction, MicroSeconds};

/// Signal timing required by a step/direction driver.
#[derive(Clone, Copy)]
pub struct PulseTiming {
    /// Width of the step pulse, also held low after it.
    pub pulse: MicroSeconds,
    /// Hold time before and after the direction line changes.
    pub settle: MicroSeconds,
}

/// Which level of the direction line moves the axis positively.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    PositiveHigh,
    PositiveLow,
}

/// Step/direction driver on two output pins.
///
/// # Type Parameters
///
/// - `P`: step pin
/// - `D`: direction pin
pub struct Stepper<P, D> {
    step_pin: Pin<Output, P>,
    direction_pin: Pin<Output, D>,
    polarity: Polarity,
    timing: PulseTiming,
    /// Direction currently latched on the direction pin.
    latched: Direction,
}

impl<P: PinOps, D: PinOps> Stepper<P, D> {
    /// Creates a driver, latching the negative direction onto the pin.
    pub fn new(
        step_pin: Pin<Output, P>,
        direction_pin: Pin<Output, D>,
        polarity: Polarity,
        timing: PulseTiming,
    ) -> Self {
        let mut stepper = Self {
            step_pin,
            direction_pin,
            polarity,
            timing,
            latched: Direction::Negative,
        };
        stepper.latch(Direction::Negative);
        stepper
    }

    fn latch(&mut self, direction: Direction) {
        let settle = self.timing.settle.get_value();
        delay_us(settle);
        let positive = direction == Direction::Positive;
        if positive == (self.polarity == Polarity::PositiveHigh) {
            self.direction_pin.set_high();
        } else {
            self.direction_pin.set_low();
        }
        self.latched = direction;
        delay_us(settle);
    }
}

impl<P: PinOps, D: PinOps> paintstepper::Stepper for Stepper<P, D> {
    fn step(&mut self, direction: Direction) {
        if direction != self.latched {
            self.latch(direction);
        }
        let pulse = self.timing.pulse.get_value();
        self.step_pin.set_high();
        delay_us(pulse);
        self.step_pin.set_low();
        delay_us(pulse);
    }
}

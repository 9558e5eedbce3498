use arduino_hal::{
    default_serial,
    hal::port::{PB0, PB2, PB3, PB4, PC0, PC1, PD4, PD5, PD6},
    pins, Peripherals,
};
use paintstepper::{
    AccelStepper, Board, DebouncedSwitch, MachineConfig, MicroSeconds, Rig,
};

use crate::devices::{
    ActiveLowRelay, Clock, HomeSwitch, Polarity, PulseTiming, Stepper, Uart,
};

/// Arduino Uno wiring of the paint sprayer.
///
/// | Device           | Pins                    |
/// |------------------|-------------------------|
/// | X stepper        | step D5, direction D6   |
/// | Y stepper        | step D11, direction D10 |
/// | Rotation stepper | step A1, direction A0   |
/// | Spray relay      | D4 (active low)         |
/// | X home switch    | D12                     |
/// | Y home switch    | D8                      |
pub struct Uno;
impl Board for Uno {
    type XAxis = AccelStepper<Stepper<PD5, PD6>>;
    type YAxis = AccelStepper<Stepper<PB3, PB2>>;
    type Rotation = AccelStepper<Stepper<PC1, PC0>>;
    type Relay = ActiveLowRelay<PD4>;
    type XHome = DebouncedSwitch<HomeSwitch<PB4>>;
    type YHome = DebouncedSwitch<HomeSwitch<PB0>>;
}

impl Uno {
    const BAUD_RATE: u32 = 115200;

    /// Takes over the peripherals, returning the machine's devices, the
    /// serial port and the clock.
    pub fn setup(
        peripherals: Peripherals,
        config: &MachineConfig,
    ) -> (Rig<Uno>, Uart, Clock) {
        let pins = pins!(peripherals);
        let serial = default_serial!(peripherals, pins, Self::BAUD_RATE);
        let clock = Clock::new(peripherals.TC1);

        // The relay goes first so the spray is off as early as possible.
        let relay = ActiveLowRelay::new(pins.d4.into_output());

        let timing = PulseTiming {
            pulse: MicroSeconds::new(5),
            settle: MicroSeconds::new(10),
        };
        let x = AccelStepper::new(Stepper::new(
            pins.d5.into_output(),
            pins.d6.into_output(),
            Polarity::PositiveLow,
            timing,
        ));
        let y = AccelStepper::new(Stepper::new(
            pins.d11.into_output(),
            pins.d10.into_output(),
            Polarity::PositiveHigh,
            timing,
        ));
        let rotation = AccelStepper::new(Stepper::new(
            pins.a1.into_output(),
            pins.a0.into_output(),
            Polarity::PositiveHigh,
            timing,
        ));

        // Home switches
        let x_home = DebouncedSwitch::new(
            HomeSwitch::new(pins.d12.into_pull_up_input()),
            config.debounce_interval,
        );
        let y_home = DebouncedSwitch::new(
            HomeSwitch::new(pins.d8.into_pull_up_input()),
            config.debounce_interval,
        );

        let rig = Rig::new(x, y, rotation, relay, x_home, y_home);
        (rig, Uart::new(serial), clock)
    }
}

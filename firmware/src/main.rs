#![no_std]
#![no_main]

mod board;
mod devices;

use board::Uno;
use paintstepper::{Controller, MachineConfig};
use panic_halt as _;

#[arduino_hal::entry]
fn main() -> ! {
    let dp = arduino_hal::Peripherals::take().unwrap();
    let config = MachineConfig::DEFAULT;
    let (rig, mut uart, mut clock) = Uno::setup(dp, &config);

    let mut controller = Controller::new(rig, config);
    controller.begin(&mut uart);
    loop {
        controller.tick(clock.now(), &mut uart);
    }
}
